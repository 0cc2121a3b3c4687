//! Direct-report records and their file-backed store.
//!
//! Layout:
//!   direct_reports.json   pretty-printed JSON array of [`DirectReport`]
//!
//! IDs are positive integers: max existing id + 1, so deletes never cause an
//! id to be handed out twice while its record still exists.

use crate::dates::parse_date;
use crate::error::{Result, WingmanError};
use crate::io;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// Name used when a required name is left blank at entry time.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Every field a record carries after normalization, in file order.
pub const FIELDS: [&str; 14] = [
    "id",
    "first_name",
    "last_name",
    "street_address_1",
    "street_address_2",
    "city",
    "state",
    "zipcode",
    "country",
    "birthday",
    "hire_date",
    "current_role",
    "role_start_date",
    "partner_name",
];

/// Older files and some model responses use camelCase names for these.
const LEGACY_KEYS: [(&str, &str); 5] = [
    ("firstName", "first_name"),
    ("lastName", "last_name"),
    ("birthdate", "birthday"),
    ("hireDate", "hire_date"),
    ("partnerName", "partner_name"),
];

// ---------------------------------------------------------------------------
// DirectReport
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectReport {
    /// Zero until the store assigns one.
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub street_address_1: Option<String>,
    pub street_address_2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zipcode: Option<String>,
    pub country: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub hire_date: Option<NaiveDate>,
    pub current_role: Option<String>,
    pub role_start_date: Option<NaiveDate>,
    pub partner_name: Option<String>,
}

impl DirectReport {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: 0,
            first_name: first_name.into(),
            last_name: last_name.into(),
            street_address_1: None,
            street_address_2: None,
            city: None,
            state: None,
            zipcode: None,
            country: None,
            birthday: None,
            hire_date: None,
            current_role: None,
            role_start_date: None,
            partner_name: None,
        }
    }

    /// `first last`, trimmed, for operator-facing messages.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    pub fn name_key(&self) -> Option<NameKey> {
        NameKey::new(&self.first_name, &self.last_name)
    }
}

// ---------------------------------------------------------------------------
// NameKey
// ---------------------------------------------------------------------------

/// Case- and surrounding-whitespace-insensitive identity of a person.
///
/// Only the outer whitespace of each part is trimmed; inner spacing and
/// middle names are compared as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NameKey(String);

impl NameKey {
    /// `None` when both parts are blank: a nameless record collides with
    /// nothing.
    pub fn new(first_name: &str, last_name: &str) -> Option<Self> {
        let first = first_name.trim().to_lowercase();
        let last = last_name.trim().to_lowercase();
        if first.is_empty() && last.is_empty() {
            return None;
        }
        Some(Self(format!("{first}|{last}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Map a loosely-shaped JSON object onto the fixed record schema.
///
/// Legacy camelCase names are accepted when the current name is absent.
/// Missing or null names become empty strings, missing optional fields
/// become `None`, blank text becomes `None`, dates that do not parse become
/// `None` (logged at warn), and keys outside the schema are ignored. A missing, non-numeric
/// or non-positive id becomes 0 (unassigned). Never fails.
pub fn normalize(raw: &Value) -> DirectReport {
    let Some(obj) = raw.as_object() else {
        tracing::debug!("normalizing a non-object record as empty");
        return DirectReport::new("", "");
    };

    let ignored: Vec<&str> = obj
        .keys()
        .map(String::as_str)
        .filter(|k| !FIELDS.contains(k) && !LEGACY_KEYS.iter().any(|(old, _)| old == k))
        .collect();
    if !ignored.is_empty() {
        tracing::debug!(keys = ?ignored, "ignoring unrecognized record keys");
    }

    let text = |field: &str| lookup(obj, field).and_then(coerce_text);
    let date = |field: &str| {
        let raw = text(field)?;
        let parsed = parse_date(&raw);
        if parsed.is_none() {
            tracing::warn!(field, value = %raw, "dropping unparsable date");
        }
        parsed
    };

    DirectReport {
        id: lookup(obj, "id").map(coerce_id).unwrap_or(0),
        first_name: text("first_name").unwrap_or_default(),
        last_name: text("last_name").unwrap_or_default(),
        street_address_1: text("street_address_1"),
        street_address_2: text("street_address_2"),
        city: text("city"),
        state: text("state"),
        zipcode: text("zipcode"),
        country: text("country"),
        birthday: date("birthday"),
        hire_date: date("hire_date"),
        current_role: text("current_role"),
        role_start_date: date("role_start_date"),
        partner_name: text("partner_name"),
    }
}

fn lookup<'a>(obj: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    obj.get(field).filter(|v| !v.is_null()).or_else(|| {
        LEGACY_KEYS
            .iter()
            .find(|(_, current)| *current == field)
            .and_then(|(old, _)| obj.get(*old))
            .filter(|v| !v.is_null())
    })
}

fn coerce_text(value: &Value) -> Option<String> {
    let s = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    (!s.is_empty()).then_some(s)
}

/// Ids above this are treated as unassigned so `next_id` always has room.
pub const MAX_ID: u64 = i64::MAX as u64;

fn coerce_id(value: &Value) -> u64 {
    let id = match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 1.0 && *f <= MAX_ID as f64)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    id.filter(|id| *id <= MAX_ID).unwrap_or(0)
}

// ---------------------------------------------------------------------------
// ReportStore
// ---------------------------------------------------------------------------

/// Result of appending a batch of candidate records.
#[derive(Debug, Default)]
pub struct MergeOutcome {
    pub added: Vec<DirectReport>,
    /// Display names of candidates rejected as duplicates.
    pub skipped: Vec<String>,
}

#[derive(Debug)]
pub struct ReportStore {
    path: PathBuf,
    reports: Vec<DirectReport>,
}

impl ReportStore {
    /// An empty store bound to `path`, without touching the file system.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            reports: Vec::new(),
        }
    }

    /// Load the store from `path`.
    ///
    /// A missing file yields an empty store and is created immediately.
    /// Unreadable or malformed content (bad JSON, non-array top level) yields
    /// an empty store and leaves the file untouched until the next save.
    /// Records without a usable id, or repeating an earlier id, get fresh ids
    /// in file order, counting up from the largest valid id.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let mut store = Self::empty(path);

        if !store.path.exists() {
            if let Err(e) = store.save() {
                tracing::error!(path = %store.path.display(), "could not create direct reports file: {e}");
            }
            return store;
        }

        let raw: Value = match std::fs::read_to_string(&store.path)
            .map_err(WingmanError::from)
            .and_then(|s| serde_json::from_str(&s).map_err(WingmanError::from))
        {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(path = %store.path.display(), "unreadable direct reports file, starting empty: {e}");
                return store;
            }
        };

        let Some(items) = raw.as_array() else {
            tracing::warn!(path = %store.path.display(), "direct reports file is not a JSON array, starting empty");
            return store;
        };

        store.reports = items
            .iter()
            .filter(|item| item.is_object())
            .map(normalize)
            .collect();
        store.repair_ids();
        store
    }

    fn repair_ids(&mut self) {
        let mut next = self.next_id();
        let mut seen = HashSet::new();
        for report in &mut self.reports {
            if report.id == 0 || !seen.insert(report.id) {
                tracing::debug!(
                    old = report.id,
                    new = next,
                    name = %report.full_name(),
                    "assigning fresh id"
                );
                report.id = next;
                seen.insert(next);
                next += 1;
            }
        }
    }

    /// Overwrite the backing file with the full in-memory collection.
    pub fn save(&self) -> Result<()> {
        io::write_json_pretty(&self.path, &self.reports)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn reports(&self) -> &[DirectReport] {
        &self.reports
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// One more than the largest id in the store (1 for an empty store).
    pub fn next_id(&self) -> u64 {
        self.reports
            .iter()
            .map(|r| r.id)
            .max()
            .unwrap_or(0)
            .saturating_add(1)
    }

    pub fn name_keys(&self) -> HashSet<NameKey> {
        self.reports.iter().filter_map(DirectReport::name_key).collect()
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Append `report` under a fresh id and save. Manual entry does not
    /// enforce name uniqueness. On a failed save the record stays in memory.
    pub fn add(&mut self, mut report: DirectReport) -> Result<DirectReport> {
        report.id = self.next_id();
        self.reports.push(report.clone());
        self.save()?;
        Ok(report)
    }

    /// Remove the record with `id` and save. An unknown id changes nothing.
    pub fn delete(&mut self, id: u64) -> Result<DirectReport> {
        let index = self
            .reports
            .iter()
            .position(|r| r.id == id)
            .ok_or(WingmanError::ReportNotFound(id))?;
        let removed = self.reports.remove(index);
        self.save()?;
        Ok(removed)
    }

    /// Remove every record and save. Returns how many were removed.
    pub fn purge(&mut self) -> Result<usize> {
        let count = self.reports.len();
        self.reports.clear();
        self.save()?;
        Ok(count)
    }

    /// Append candidates whose names collide neither with the store nor
    /// with an earlier candidate of the same batch. A candidate with no name
    /// at all collides with nothing; it is added with blank parts set to
    /// [`UNKNOWN_NAME`]. Does not save.
    pub fn merge_unique(&mut self, candidates: impl IntoIterator<Item = DirectReport>) -> MergeOutcome {
        let mut keys = self.name_keys();
        let mut outcome = MergeOutcome::default();
        for mut candidate in candidates {
            match candidate.name_key() {
                Some(key) => {
                    if !keys.insert(key) {
                        outcome.skipped.push(candidate.full_name());
                        continue;
                    }
                }
                None => {
                    tracing::debug!("adding unnamed candidate as {UNKNOWN_NAME}");
                    candidate.first_name = UNKNOWN_NAME.to_string();
                    candidate.last_name = UNKNOWN_NAME.to_string();
                }
            }
            candidate.id = self.next_id();
            self.reports.push(candidate.clone());
            outcome.added.push(candidate);
        }
        outcome
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn store_path(dir: &TempDir) -> PathBuf {
        dir.path().join("direct_reports.json")
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn normalize_renames_legacy_keys() {
        let r = normalize(&json!({
            "firstName": "Ana",
            "lastName": "Lopez",
            "birthdate": "1990-05-15",
            "hireDate": "20210301",
            "partnerName": "Sam"
        }));
        assert_eq!(r.first_name, "Ana");
        assert_eq!(r.last_name, "Lopez");
        assert_eq!(r.birthday, Some(ymd(1990, 5, 15)));
        assert_eq!(r.hire_date, Some(ymd(2021, 3, 1)));
        assert_eq!(r.partner_name.as_deref(), Some("Sam"));
    }

    #[test]
    fn normalize_prefers_current_key_over_legacy() {
        let r = normalize(&json!({"firstName": "Old", "first_name": "New"}));
        assert_eq!(r.first_name, "New");
    }

    #[test]
    fn normalize_fills_defaults() {
        let r = normalize(&json!({"first_name": null}));
        assert_eq!(r.id, 0);
        assert_eq!(r.first_name, "");
        assert_eq!(r.last_name, "");
        assert_eq!(r.city, None);
        assert_eq!(r.birthday, None);
        assert_eq!(r.partner_name, None);
    }

    #[test]
    fn normalize_coerces_scalars_and_ignores_unknown_keys() {
        let r = normalize(&json!({
            "id": "7",
            "first_name": "  Beto ",
            "last_name": "Cruz",
            "zipcode": 2101,
            "city": "   ",
            "favorite_color": "teal",
            "birthday": "sometime in May"
        }));
        assert_eq!(r.id, 7);
        assert_eq!(r.first_name, "Beto");
        assert_eq!(r.zipcode.as_deref(), Some("2101"));
        assert_eq!(r.city, None);
        assert_eq!(r.birthday, None);
        let serialized = serde_json::to_value(&r).unwrap();
        assert!(serialized.get("favorite_color").is_none());
    }

    #[test]
    fn normalize_rejects_non_positive_ids() {
        for id in [json!(0), json!(-3), json!("abc"), json!(2.5), json!(true)] {
            assert_eq!(normalize(&json!({"id": id})).id, 0, "id {id}");
        }
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize(&json!({
            "id": 3,
            "firstName": "Ana",
            "last_name": "Lopez",
            "hire_date": "2021-03-01T00:00:00Z",
            "country": "USA"
        }));
        let twice = normalize(&serde_json::to_value(&once).unwrap());
        assert_eq!(once, twice);
    }

    #[test]
    fn normalized_record_serializes_every_field() {
        let value = serde_json::to_value(normalize(&json!({"first_name": "Ana"}))).unwrap();
        let obj = value.as_object().unwrap();
        for field in FIELDS {
            assert!(obj.contains_key(field), "missing {field}");
        }
        assert!(obj["birthday"].is_null());
    }

    #[test]
    fn name_key_ignores_case_and_outer_whitespace() {
        let a = DirectReport::new("Ana", "Lopez");
        let b = DirectReport::new("  ana ", "LOPEZ  ");
        assert_eq!(a.name_key(), b.name_key());
        assert_eq!(a.name_key().unwrap().as_str(), "ana|lopez");
    }

    #[test]
    fn name_key_keeps_inner_spacing_and_middle_names() {
        let key = |first: &str, last: &str| DirectReport::new(first, last).name_key();
        assert_ne!(key("Ana Maria", "Lopez"), key("Ana", "Lopez"));
        assert_ne!(key("Ana Maria", "Lopez"), key("Ana  Maria", "Lopez"));
        assert_ne!(key("Ana", "Lopez"), key("Ana", "Lopez Cruz"));
    }

    #[test]
    fn nameless_records_never_collide() {
        let a = DirectReport::new("", " ");
        assert!(a.name_key().is_none());
        assert!(DirectReport::new("", "").name_key().is_none());
    }

    #[test]
    fn open_missing_file_creates_empty_array() {
        let dir = TempDir::new().unwrap();
        let store = ReportStore::open(store_path(&dir));
        assert!(store.is_empty());
        let content = std::fs::read_to_string(store_path(&dir)).unwrap();
        assert_eq!(content.trim(), "[]");
    }

    #[test]
    fn open_malformed_file_is_empty_and_untouched() {
        let dir = TempDir::new().unwrap();
        for content in ["{not json", r#"{"reports": []}"#, "42"] {
            std::fs::write(store_path(&dir), content).unwrap();
            let store = ReportStore::open(store_path(&dir));
            assert!(store.is_empty(), "content {content}");
            assert_eq!(std::fs::read_to_string(store_path(&dir)).unwrap(), content);
        }
    }

    #[test]
    fn open_assigns_missing_ids_in_file_order() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            store_path(&dir),
            json!([
                {"first_name": "A", "last_name": "One"},
                {"id": 5, "first_name": "B", "last_name": "Two"},
                {"id": -1, "first_name": "C", "last_name": "Three"},
                "not a record",
                {"id": "x", "first_name": "D", "last_name": "Four"}
            ])
            .to_string(),
        )
        .unwrap();
        let store = ReportStore::open(store_path(&dir));
        let ids: Vec<u64> = store.reports().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![6, 5, 7, 8]);
    }

    #[test]
    fn open_reassigns_repeated_ids() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            store_path(&dir),
            json!([
                {"id": 2, "first_name": "A", "last_name": "One"},
                {"id": 2, "first_name": "B", "last_name": "Two"}
            ])
            .to_string(),
        )
        .unwrap();
        let store = ReportStore::open(store_path(&dir));
        let ids: Vec<u64> = store.reports().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn out_of_range_ids_are_reassigned_on_open() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            store_path(&dir),
            r#"[
                {"id": 18446744073709551615, "first_name": "A", "last_name": "B"},
                {"id": 1.8446744073709552e19, "first_name": "E", "last_name": "F"},
                {"first_name": "C", "last_name": "D"}
            ]"#,
        )
        .unwrap();
        let store = ReportStore::open(store_path(&dir));
        let ids: Vec<u64> = store.reports().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(store.next_id(), 4);
    }

    #[test]
    fn largest_accepted_id_still_leaves_room() {
        let record = normalize(&json!({"id": MAX_ID, "first_name": "A", "last_name": "B"}));
        assert_eq!(record.id, MAX_ID);
        assert_eq!(normalize(&json!({"id": MAX_ID + 1})).id, 0);

        let dir = TempDir::new().unwrap();
        std::fs::write(store_path(&dir), json!([record]).to_string()).unwrap();
        let store = ReportStore::open(store_path(&dir));
        assert!(store.next_id() > MAX_ID);
    }

    #[test]
    fn save_then_open_roundtrip() {
        let dir = TempDir::new().unwrap();
        let mut store = ReportStore::open(store_path(&dir));
        let mut ana = DirectReport::new("Ana", "Lopez");
        ana.city = Some("Boston".into());
        ana.birthday = Some(ymd(1990, 5, 15));
        store.add(ana).unwrap();
        store.add(DirectReport::new("Beto", "Cruz")).unwrap();

        let reloaded = ReportStore::open(store_path(&dir));
        assert_eq!(reloaded.reports(), store.reports());
    }

    #[test]
    fn add_then_list_shows_blank_optionals() {
        let dir = TempDir::new().unwrap();
        let mut store = ReportStore::open(store_path(&dir));
        let added = store.add(DirectReport::new("Ana", "Lopez")).unwrap();
        assert_eq!(added.id, 1);
        assert_eq!(store.len(), 1);
        let r = &store.reports()[0];
        assert_eq!((r.first_name.as_str(), r.last_name.as_str()), ("Ana", "Lopez"));
        assert_eq!(*r, DirectReport { id: 1, ..DirectReport::new("Ana", "Lopez") });
    }

    #[test]
    fn add_does_not_enforce_unique_names() {
        let dir = TempDir::new().unwrap();
        let mut store = ReportStore::open(store_path(&dir));
        store.add(DirectReport::new("Ana", "Lopez")).unwrap();
        store.add(DirectReport::new("ana", "lopez")).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn ids_stay_unique_across_adds_and_deletes() {
        let dir = TempDir::new().unwrap();
        let mut store = ReportStore::open(store_path(&dir));
        for round in 0..5 {
            store.add(DirectReport::new(format!("P{round}"), "A")).unwrap();
            store.add(DirectReport::new(format!("P{round}"), "B")).unwrap();
            let first = store.reports()[0].id;
            store.delete(first).unwrap();

            let ids: HashSet<u64> = store.reports().iter().map(|r| r.id).collect();
            assert_eq!(ids.len(), store.len());
            assert!(ids.iter().all(|id| *id > 0 && *id < store.next_id()));
        }
    }

    #[test]
    fn deleting_the_highest_id_allows_reuse_only_after_removal() {
        let dir = TempDir::new().unwrap();
        let mut store = ReportStore::open(store_path(&dir));
        store.add(DirectReport::new("A", "One")).unwrap();
        let b = store.add(DirectReport::new("B", "Two")).unwrap();
        store.delete(b.id).unwrap();
        assert_eq!(store.next_id(), 2);
        assert!(store.reports().iter().all(|r| r.id != 2));
    }

    #[test]
    fn delete_unknown_id_reports_and_leaves_store_unchanged() {
        let dir = TempDir::new().unwrap();
        let mut store = ReportStore::open(store_path(&dir));
        store.add(DirectReport::new("Ana", "Lopez")).unwrap();
        let err = store.delete(999).unwrap_err();
        assert!(matches!(err, WingmanError::ReportNotFound(999)));
        assert_eq!(err.to_string(), "no record with ID 999");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn delete_persists_removal() {
        let dir = TempDir::new().unwrap();
        let mut store = ReportStore::open(store_path(&dir));
        store.add(DirectReport::new("Ana", "Lopez")).unwrap();
        let removed = store.delete(1).unwrap();
        assert_eq!(removed.full_name(), "Ana Lopez");
        assert!(ReportStore::open(store_path(&dir)).is_empty());
    }

    #[test]
    fn purge_clears_store_and_file() {
        let dir = TempDir::new().unwrap();
        let mut store = ReportStore::open(store_path(&dir));
        store.add(DirectReport::new("A", "One")).unwrap();
        store.add(DirectReport::new("B", "Two")).unwrap();
        assert_eq!(store.purge().unwrap(), 2);
        assert!(ReportStore::open(store_path(&dir)).is_empty());
    }

    #[test]
    fn failed_save_keeps_in_memory_change() {
        let dir = TempDir::new().unwrap();
        // A directory where the file should be makes every write fail.
        let path = dir.path().join("blocked");
        std::fs::create_dir_all(&path).unwrap();
        let mut store = ReportStore::empty(&path);
        assert!(store.add(DirectReport::new("Ana", "Lopez")).is_err());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn merge_unique_skips_existing_and_batch_duplicates() {
        let dir = TempDir::new().unwrap();
        let mut store = ReportStore::open(store_path(&dir));
        store.add(DirectReport::new("Ana", "Lopez")).unwrap();

        let outcome = store.merge_unique(vec![
            DirectReport::new("ANA", " lopez"),
            DirectReport::new("Beto", "Cruz"),
            DirectReport::new("beto", "cruz"),
        ]);
        assert_eq!(outcome.skipped, vec!["ANA lopez", "beto cruz"]);
        assert_eq!(outcome.added.len(), 1);
        assert_eq!(outcome.added[0].id, 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn merge_unique_adds_nameless_candidates_as_unknown() {
        let dir = TempDir::new().unwrap();
        let mut store = ReportStore::open(store_path(&dir));
        let mut nameless = DirectReport::new("", " ");
        nameless.city = Some("Austin".into());

        let outcome = store.merge_unique(vec![
            nameless.clone(),
            DirectReport::new("Beto", "Cruz"),
            nameless,
        ]);
        assert!(outcome.skipped.is_empty());
        let added: Vec<(u64, String)> = outcome
            .added
            .iter()
            .map(|r| (r.id, r.full_name()))
            .collect();
        assert_eq!(
            added,
            vec![
                (1, "Unknown Unknown".to_string()),
                (2, "Beto Cruz".to_string()),
                (3, "Unknown Unknown".to_string()),
            ]
        );
        assert_eq!(store.reports()[0].city.as_deref(), Some("Austin"));
    }
}
