//! AI-assisted generation of direct reports and daily tips.
//!
//! Core code only sees the [`Completion`] trait; the concrete model client
//! lives outside this crate and is adapted to it by the caller.

use crate::config::{GenerationConfig, MAX_BATCH};
use crate::error::{Result, WingmanError};
use crate::report::{normalize, DirectReport, ReportStore};
use crate::tip::{ManagementTip, TipStore};
use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::OnceLock;
use thiserror::Error;

// ─── Completion seam ─────────────────────────────────────────────────────────

/// Failure categories a completion backend reports. Each maps to one
/// operator-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompletionError {
    #[error("AI generation is not available")]
    Unavailable,

    #[error("API credential not found")]
    MissingCredential,

    #[error("API credential rejected: {0}")]
    Unauthorized(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("{0}")]
    Other(String),
}

impl CompletionError {
    /// True for failures the operator fixes by setting a credential.
    pub fn is_credential(&self) -> bool {
        matches!(self, Self::MissingCredential | Self::Unauthorized(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub prompt: String,
    /// Ask the backend for a JSON object reply when it supports that mode.
    pub json_object: bool,
}

impl CompletionRequest {
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            json_object: false,
        }
    }

    pub fn json(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            json_object: true,
        }
    }
}

/// One prompt in, one text reply out.
pub trait Completion {
    fn complete(&self, request: &CompletionRequest) -> std::result::Result<String, CompletionError>;
}

// ─── Bulk direct reports ─────────────────────────────────────────────────────

#[derive(Debug)]
pub struct BulkOutcome {
    pub added: Vec<DirectReport>,
    /// Display names of candidates rejected as duplicates.
    pub skipped: Vec<String>,
    /// Raw reply text, kept for debug output when nothing parsed.
    pub raw_response: String,
    /// Number of record objects found in the reply.
    pub parsed: usize,
    /// Set when records were added in memory but the file write failed.
    pub save_error: Option<WingmanError>,
}

/// Ask the backend for `count` fictional records and append those whose
/// names collide neither with the store nor with each other. The store is
/// saved once, and only when something was added.
pub fn bulk_reports(
    store: &mut ReportStore,
    count: usize,
    completion: &dyn Completion,
    cfg: &GenerationConfig,
) -> Result<BulkOutcome> {
    if !(1..=MAX_BATCH).contains(&count) {
        return Err(WingmanError::InvalidCount {
            requested: count,
            max: MAX_BATCH,
        });
    }

    let sample: Vec<String> = store
        .reports()
        .iter()
        .take(cfg.name_sample_size)
        .map(DirectReport::full_name)
        .collect();
    let prompt = bulk_prompt(count, &sample);
    tracing::debug!(count, sample = sample.len(), "requesting direct reports");

    let raw_response = completion.complete(&CompletionRequest::json(prompt))?;
    let objects = extract_record_objects(&raw_response);
    tracing::debug!(parsed = objects.len(), "parsed candidate records");

    let parsed = objects.len();
    let candidates = objects.into_iter().map(|obj| {
        let mut report = normalize(&Value::Object(obj));
        report.id = 0;
        report
    });
    let merge = store.merge_unique(candidates);

    let save_error = if merge.added.is_empty() {
        None
    } else {
        store.save().err()
    };

    Ok(BulkOutcome {
        added: merge.added,
        skipped: merge.skipped,
        raw_response,
        parsed,
        save_error,
    })
}

fn bulk_prompt(count: usize, existing_names: &[String]) -> String {
    let avoid = if existing_names.is_empty() {
        String::new()
    } else {
        format!(
            "\nDo NOT create any person with the same first and last name as any of these existing people: {}. \
             All new reports must have unique first and last names.",
            serde_json::to_string(existing_names).unwrap_or_default()
        )
    };
    format!(
        "Generate exactly {count} realistic direct reports for a manager. \
Each report should have a diverse, realistic background.{avoid}

Return a single JSON object with a key \"reports\" whose value is an array of {count} objects. \
Each object must have exactly these keys (use null for optional fields if needed): \
first_name, last_name, street_address_1, street_address_2, city, state, zipcode, country, \
birthday, hire_date, current_role, role_start_date, partner_name. Dates must be YYYY-MM-DD. \
Each person must have a unique first_name and last_name combination. Example structure:
{{\"reports\": [{{\"first_name\": \"Jane\", \"last_name\": \"Doe\", \"street_address_1\": \"123 Main St\", \
\"street_address_2\": null, \"city\": \"Boston\", \"state\": \"MA\", \"zipcode\": \"02101\", \"country\": \"USA\", \
\"birthday\": \"1990-05-15\", \"hire_date\": \"2021-03-01\", \"current_role\": \"Senior Engineer\", \
\"role_start_date\": \"2023-01-01\", \"partner_name\": null}}, ...]}}

Output only this JSON object, no other text."
    )
}

static FENCE_RE: OnceLock<Regex> = OnceLock::new();

fn fence_re() -> &'static Regex {
    FENCE_RE.get_or_init(|| Regex::new(r"(?s)\A```[^\n]*\n(.*?)\s*(?:```)?\z").unwrap())
}

/// Drop a surrounding markdown code fence, if any.
pub fn strip_code_fence(text: &str) -> &str {
    let text = text.trim();
    match fence_re().captures(text).and_then(|c| c.get(1)) {
        Some(body) => body.as_str().trim(),
        None => text,
    }
}

/// Pull record objects out of a model reply.
///
/// Accepted shapes: an object with a `reports` or `direct_reports` array, an
/// object with any other array whose first element is an object, or a bare
/// top-level array. Non-object array elements are dropped. Anything else
/// yields nothing.
pub fn extract_record_objects(raw: &str) -> Vec<Map<String, Value>> {
    let Ok(parsed) = serde_json::from_str::<Value>(strip_code_fence(raw)) else {
        return Vec::new();
    };

    let objects_of = |items: &[Value]| -> Vec<Map<String, Value>> {
        items
            .iter()
            .filter_map(|v| v.as_object().cloned())
            .collect()
    };

    match parsed {
        Value::Array(items) => objects_of(&items),
        Value::Object(obj) => {
            let named = ["reports", "direct_reports"]
                .iter()
                .filter_map(|k| obj.get(*k).and_then(Value::as_array))
                .map(|items| objects_of(items))
                .find(|objs| !objs.is_empty());
            named
                .or_else(|| {
                    obj.values()
                        .filter_map(Value::as_array)
                        .find(|items| items.first().is_some_and(Value::is_object))
                        .map(|items| objects_of(items))
                })
                .unwrap_or_default()
        }
        _ => Vec::new(),
    }
}

// ─── Daily tip ───────────────────────────────────────────────────────────────

/// Topics used to vary the first tip when there is no history to exclude.
pub const TIP_THEMES: [&str; 15] = [
    "delegation",
    "conflict resolution",
    "motivation",
    "career growth",
    "running meetings",
    "prioritization",
    "remote work",
    "recognition",
    "1:1 conversations",
    "accountability",
    "giving feedback",
    "hiring",
    "burnout prevention",
    "goal setting",
    "difficult conversations",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TipOutcome {
    /// A tip already exists for today; nothing was requested.
    Fresh,
    Added(ManagementTip),
    /// Every attempt came back blank or repeated a stored tip.
    Exhausted { attempts: u32, empty_replies: u32 },
}

/// Make sure a tip dated `today` exists, asking the backend when it does not.
///
/// Blank or duplicate replies are retried up to `tip_max_attempts` times with
/// the same exclusion list. Backend errors end the attempt loop immediately.
/// The store is only touched when a new tip is accepted.
pub fn daily_tip<R: Rng + ?Sized>(
    store: &mut TipStore,
    completion: &dyn Completion,
    today: NaiveDate,
    rng: &mut R,
    cfg: &GenerationConfig,
) -> Result<TipOutcome> {
    if !store.needs_refresh(today) {
        return Ok(TipOutcome::Fresh);
    }

    let history: Vec<String> = store
        .recent_texts(cfg.tip_history_window)
        .into_iter()
        .map(str::to_string)
        .collect();
    let attempts = cfg.tip_max_attempts.max(1);
    let mut empty_replies = 0;

    for attempt in 1..=attempts {
        let prompt = tip_prompt(&history, today, rng);
        let reply = completion.complete(&CompletionRequest::text(prompt))?;
        let text = reply.trim();
        if text.is_empty() {
            tracing::debug!(attempt, "empty tip reply");
            empty_replies += 1;
            continue;
        }
        if store.is_duplicate(text) {
            tracing::debug!(attempt, "duplicate tip reply");
            continue;
        }
        let tip = store.append(today, text)?;
        tracing::debug!(attempt, "stored daily tip");
        return Ok(TipOutcome::Added(tip));
    }

    Ok(TipOutcome::Exhausted {
        attempts,
        empty_replies,
    })
}

const TIP_BASE_PROMPT: &str = "Generate exactly one short, actionable daily management tip for an engineering manager.
Keep it to one or two sentences. No bullet points or numbering. Output only the tip text, nothing else.";

fn tip_prompt<R: Rng + ?Sized>(history: &[String], today: NaiveDate, rng: &mut R) -> String {
    if history.is_empty() {
        let theme = TIP_THEMES.choose(rng).copied().unwrap_or(TIP_THEMES[0]);
        return format!(
            "Today is {today}. Generate exactly one short, actionable daily management tip for an engineering manager.
Focus specifically on: {theme}. Give one concrete tip (not generic advice like \"listen to your team\"). \
One or two sentences only. Output only the tip text, nothing else."
        );
    }
    let avoid = history
        .iter()
        .map(|t| format!("{t:?}"))
        .collect::<Vec<_>>()
        .join("; ");
    format!(
        "{TIP_BASE_PROMPT}

Do NOT suggest any of these tips (already in your history). Suggest something different:
{avoid}"
    )
}

// ─── Tests ───────────────────────────────────────────────────────────────────
