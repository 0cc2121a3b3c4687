//! Dated management tips, one expected per calendar day.

use crate::dates::parse_date;
use crate::error::Result;
use crate::io;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Shown in the daily tip slot before any tip exists.
pub const NO_TIP_YET: &str =
    "No tip yet. A new one is generated each day when Mistral AI is available.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagementTip {
    pub date: NaiveDate,
    pub text: String,
}

/// Lowercase and collapse whitespace runs. Two tips with the same
/// normalized text are considered the same tip.
pub fn normalize_tip_text(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[derive(Debug)]
pub struct TipStore {
    path: PathBuf,
    tips: Vec<ManagementTip>,
}

impl TipStore {
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            tips: Vec::new(),
        }
    }

    /// Load tips from `path`.
    ///
    /// Accepts both `{date, text}` objects and bare strings from older files;
    /// bare strings and unparsable dates are stamped with `today`. Objects
    /// missing either field and blank texts are dropped. A missing file is
    /// created empty; malformed content yields an empty store and the file is
    /// left alone until the next save.
    pub fn open(path: impl Into<PathBuf>, today: NaiveDate) -> Self {
        let mut store = Self::empty(path);

        if !store.path.exists() {
            if let Err(e) = store.save() {
                tracing::error!(path = %store.path.display(), "could not create tips file: {e}");
            }
            return store;
        }

        let items = match std::fs::read_to_string(&store.path)
            .map_err(crate::WingmanError::from)
            .and_then(|s| serde_json::from_str::<Value>(&s).map_err(crate::WingmanError::from))
        {
            Ok(Value::Array(items)) => items,
            Ok(_) => {
                tracing::warn!(path = %store.path.display(), "tips file is not a JSON array, starting empty");
                return store;
            }
            Err(e) => {
                tracing::warn!(path = %store.path.display(), "unreadable tips file, starting empty: {e}");
                return store;
            }
        };

        store.tips = items
            .iter()
            .filter_map(|item| tip_from_value(item, today))
            .collect();
        store
    }

    pub fn save(&self) -> Result<()> {
        io::write_json_pretty(&self.path, &self.tips)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn tips(&self) -> &[ManagementTip] {
        &self.tips
    }

    pub fn is_empty(&self) -> bool {
        self.tips.is_empty()
    }

    /// Text of the most recently stored tip, or [`NO_TIP_YET`].
    pub fn latest(&self) -> &str {
        self.tips.last().map_or(NO_TIP_YET, |t| t.text.as_str())
    }

    /// True when the store is empty or the latest tip is not dated `today`.
    pub fn needs_refresh(&self, today: NaiveDate) -> bool {
        self.tips.last().map_or(true, |t| t.date != today)
    }

    /// Blank text never counts as a duplicate; it is rejected separately.
    pub fn is_duplicate(&self, text: &str) -> bool {
        let needle = normalize_tip_text(text);
        !needle.is_empty()
            && self
                .tips
                .iter()
                .any(|t| normalize_tip_text(&t.text) == needle)
    }

    /// Texts of the last `n` tips, oldest first.
    pub fn recent_texts(&self, n: usize) -> Vec<&str> {
        let start = self.tips.len().saturating_sub(n);
        self.tips[start..].iter().map(|t| t.text.as_str()).collect()
    }

    /// Append a tip and save. On a failed save the tip stays in memory.
    pub fn append(&mut self, date: NaiveDate, text: impl Into<String>) -> Result<ManagementTip> {
        let tip = ManagementTip {
            date,
            text: text.into(),
        };
        self.tips.push(tip.clone());
        self.save()?;
        Ok(tip)
    }
}

fn tip_from_value(item: &Value, today: NaiveDate) -> Option<ManagementTip> {
    let (date, text) = match item {
        Value::String(text) => (today, text.trim()),
        Value::Object(obj) => {
            let raw_date = obj.get("date").and_then(Value::as_str)?.trim();
            let text = obj.get("text").and_then(Value::as_str)?.trim();
            if raw_date.is_empty() {
                return None;
            }
            let date = parse_date(raw_date).unwrap_or_else(|| {
                tracing::debug!(date = raw_date, "unparsable tip date, using today");
                today
            });
            (date, text)
        }
        _ => return None,
    };
    (!text.is_empty()).then(|| ManagementTip {
        date,
        text: text.to_string(),
    })
}
