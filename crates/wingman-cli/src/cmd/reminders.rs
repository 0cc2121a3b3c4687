use crate::app::App;
use crate::menu::Outcome;
use chrono::NaiveDate;
use wingman_core::reminder::{upcoming, DEFAULT_WINDOW_DAYS};

const WIDER_PROMPT: &str =
    "\nView further out? Enter days (e.g. 60, 90, 180) or press Enter to return: ";

/// Upcoming milestones for the default window, then wider windows on
/// request until the operator presses Enter.
pub fn milestones(app: &mut App) -> anyhow::Result<Outcome> {
    let today = app.today();
    show(app, today, DEFAULT_WINDOW_DAYS);

    loop {
        let raw = app.console.read_line(WIDER_PROMPT)?;
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Outcome::HandledNoPause);
        }
        match raw.parse::<i64>() {
            Ok(days) if days > DEFAULT_WINDOW_DAYS => show(app, today, days),
            Ok(_) => app.say(&format!(
                "Please enter a number greater than {DEFAULT_WINDOW_DAYS}."
            )),
            Err(_) => app.say("Invalid input. Enter a number of days or press Enter to return."),
        }
    }
}

/// Redraws on a cleared screen so each window replaces the last.
fn show(app: &mut App, today: NaiveDate, days: i64) {
    let reminders = upcoming(app.reports.reports(), today, days);
    app.console.clear();
    app.say("\n--- Milestone Reminders ---\n");
    app.say(&format!("Showing the next {days} days.\n"));
    if reminders.is_empty() {
        app.say(&format!(
            "No upcoming birthdays or anniversaries in the next {days} days."
        ));
    }
    for reminder in &reminders {
        app.say(&format!("  {reminder}"));
    }
}
