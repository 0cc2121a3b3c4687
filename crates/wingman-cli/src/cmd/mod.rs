pub mod placeholder;
pub mod reminders;
pub mod reports;
pub mod tips;
