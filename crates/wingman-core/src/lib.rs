pub mod config;
pub mod dates;
pub mod error;
pub mod generate;
pub mod io;
pub mod paths;
pub mod reminder;
pub mod report;
pub mod tip;

pub use error::{Result, WingmanError};
