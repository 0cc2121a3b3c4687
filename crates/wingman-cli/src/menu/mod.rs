//! Text-mode menus: word wrapping, bordered panels and the selection loop.

pub mod nav;
pub mod render;
pub mod wrap;

pub use nav::{run_menu, Action, MenuHost, Outcome};
pub use render::{render, MenuOption, Middle, MiddlePosition, Panel};
