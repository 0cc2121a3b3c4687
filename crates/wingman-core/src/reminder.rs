//! Upcoming birthdays and work anniversaries.

use crate::report::DirectReport;
use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Window shown before the operator is offered a wider range.
pub const DEFAULT_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Milestone {
    Birthday,
    Anniversary { years: i32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub milestone: Milestone,
    pub name: String,
    pub date: NaiveDate,
    pub days_until: i64,
}

impl fmt::Display for Reminder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let when = match self.days_until {
            0 => "today".to_string(),
            1 => "in 1 day".to_string(),
            n => format!("in {n} days"),
        };
        match self.milestone {
            Milestone::Birthday => write!(f, "Birthday: {} on {} ({when})", self.name, self.date),
            Milestone::Anniversary { years } => {
                let unit = if years == 1 { "year" } else { "years" };
                write!(
                    f,
                    "Work anniversary: {} ({years} {unit}) on {} ({when})",
                    self.name, self.date
                )
            }
        }
    }
}

/// The first occurrence of `date`'s month and day on or after `today`.
/// February 29 falls on February 28 in non-leap years.
pub fn next_occurrence(date: NaiveDate, today: NaiveDate) -> NaiveDate {
    let this_year = anniversary_in(date, today.year());
    if this_year >= today {
        this_year
    } else {
        anniversary_in(date, today.year() + 1)
    }
}

fn anniversary_in(date: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, date.month(), date.day() - 1))
        .unwrap_or(date)
}

/// Birthdays and anniversaries of at least one year falling within
/// `days` days of `today` (inclusive), soonest first.
pub fn upcoming(reports: &[DirectReport], today: NaiveDate, days: i64) -> Vec<Reminder> {
    let mut reminders = Vec::new();
    for report in reports {
        let name = report.full_name();
        if let Some(birthday) = report.birthday {
            let date = next_occurrence(birthday, today);
            reminders.push(Reminder {
                milestone: Milestone::Birthday,
                name: name.clone(),
                date,
                days_until: (date - today).num_days(),
            });
        }
        if let Some(hired) = report.hire_date {
            let date = next_occurrence(hired, today);
            let years = date.year() - hired.year();
            if years >= 1 {
                reminders.push(Reminder {
                    milestone: Milestone::Anniversary { years },
                    name,
                    date,
                    days_until: (date - today).num_days(),
                });
            }
        }
    }
    reminders.retain(|r| r.days_until <= days);
    reminders.sort_by_cached_key(|r| (r.days_until, r.to_string()));
    reminders
}
