//! Lenient calendar-date parsing shared by manual entry and record
//! normalization.

use chrono::NaiveDate;

/// Parse an operator- or model-supplied date.
///
/// Accepts `YYYY-MM-DD`, `YYYYMMDD`, and the same digits separated by
/// hyphens or spaces. A longer timestamp (`1990-05-15T08:00:00Z`) is reduced
/// to its leading date. Returns `None` for blank or invalid input.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let digits: String = raw.chars().filter(|c| *c != '-' && *c != ' ').collect();
    if digits.len() == 8 && digits.chars().all(|c| c.is_ascii_digit()) {
        let year = digits[0..4].parse().ok()?;
        let month = digits[4..6].parse().ok()?;
        let day = digits[6..8].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }

    raw.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}
