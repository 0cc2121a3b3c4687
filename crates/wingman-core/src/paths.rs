use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// File constants
// ---------------------------------------------------------------------------

pub const WINGMAN_DIR: &str = ".wingman";
pub const CONFIG_FILE: &str = ".wingman/config.yaml";

pub const DIRECT_REPORTS_FILE: &str = "direct_reports.json";
pub const MANAGEMENT_TIPS_FILE: &str = "management_tips.json";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Resolve a data file name against the data root. Absolute names are kept
/// as-is so the config can point a store anywhere on disk.
pub fn data_file(root: &Path, name: &str) -> PathBuf {
    let candidate = Path::new(name);
    if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        root.join(candidate)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
