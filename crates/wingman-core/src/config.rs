use crate::error::{Result, WingmanError};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const ENV_ROOT: &str = "WINGMANEM_ROOT";
pub const ENV_PASSWORD: &str = "WINGMANEM_PASSWORD";
pub const ENV_DEBUG: &str = "WINGMANEM_DEBUG";
pub const ENV_API_KEY: &str = "MISTRAL_API_KEY";

pub const DEFAULT_PASSWORD: &str = "wingman";
pub const MIN_MENU_WIDTH: usize = 20;
pub const MAX_BATCH: usize = 10;

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// AiConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_true() -> bool {
    true
}

fn default_model() -> String {
    "mistral-large-latest".to_string()
}

fn default_base_url() -> String {
    "https://api.mistral.ai/v1".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

// ---------------------------------------------------------------------------
// GenerationConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// How many existing names are listed in the bulk-generation prompt.
    /// Duplicate checks after the response always cover the whole store.
    #[serde(default = "default_name_sample_size")]
    pub name_sample_size: usize,
    /// How many of the most recent tips are sent as the exclusion list.
    #[serde(default = "default_tip_history_window")]
    pub tip_history_window: usize,
    #[serde(default = "default_tip_max_attempts")]
    pub tip_max_attempts: u32,
    #[serde(default = "default_batch")]
    pub default_batch: usize,
}

fn default_name_sample_size() -> usize {
    30
}

fn default_tip_history_window() -> usize {
    20
}

fn default_tip_max_attempts() -> u32 {
    5
}

fn default_batch() -> usize {
    3
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            name_sample_size: default_name_sample_size(),
            tip_history_window: default_tip_history_window(),
            tip_max_attempts: default_tip_max_attempts(),
            default_batch: default_batch(),
        }
    }
}

// ---------------------------------------------------------------------------
// FilesConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilesConfig {
    #[serde(default = "default_reports_file")]
    pub direct_reports: String,
    #[serde(default = "default_tips_file")]
    pub management_tips: String,
}

fn default_reports_file() -> String {
    paths::DIRECT_REPORTS_FILE.to_string()
}

fn default_tips_file() -> String {
    paths::MANAGEMENT_TIPS_FILE.to_string()
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            direct_reports: default_reports_file(),
            management_tips: default_tips_file(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_menu_width")]
    pub menu_width: usize,
    #[serde(default)]
    pub require_password: bool,
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub files: FilesConfig,
}

fn default_menu_width() -> usize {
    58
}

impl Default for Config {
    fn default() -> Self {
        Self {
            menu_width: default_menu_width(),
            require_password: false,
            ai: AiConfig::default(),
            generation: GenerationConfig::default(),
            files: FilesConfig::default(),
        }
    }
}

impl Config {
    /// Load `.wingman/config.yaml` under `root`. A missing file yields the
    /// defaults; an unparsable one is an error.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        if data.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&data)
            .map_err(|e| WingmanError::Config(format!("{}: {e}", path.display())))
    }

    pub fn reports_path(&self, root: &Path) -> std::path::PathBuf {
        paths::data_file(root, &self.files.direct_reports)
    }

    pub fn tips_path(&self, root: &Path) -> std::path::PathBuf {
        paths::data_file(root, &self.files.management_tips)
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.menu_width < MIN_MENU_WIDTH {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!(
                    "menu_width={} is below the minimum of {MIN_MENU_WIDTH}; using {MIN_MENU_WIDTH}",
                    self.menu_width
                ),
            });
        }

        if self.generation.tip_max_attempts == 0 {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "generation.tip_max_attempts=0 would never request a tip; using 1"
                    .to_string(),
            });
        }

        if !(1..=MAX_BATCH).contains(&self.generation.default_batch) {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!(
                    "generation.default_batch={} is outside 1..={MAX_BATCH}; clamping",
                    self.generation.default_batch
                ),
            });
        }

        if self.files.direct_reports.trim().is_empty()
            || self.files.management_tips.trim().is_empty()
        {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "files.* must not be empty; falling back to the default file names"
                    .to_string(),
            });
        }

        warnings
    }

    /// Return a copy with every out-of-range value pulled back into range.
    /// Each adjustment corresponds to a warning from [`Config::validate`].
    pub fn sanitized(mut self) -> Self {
        self.menu_width = self.menu_width.max(MIN_MENU_WIDTH);
        self.generation.tip_max_attempts = self.generation.tip_max_attempts.max(1);
        self.generation.default_batch = self.generation.default_batch.clamp(1, MAX_BATCH);
        if self.files.direct_reports.trim().is_empty() {
            self.files.direct_reports = default_reports_file();
        }
        if self.files.management_tips.trim().is_empty() {
            self.files.management_tips = default_tips_file();
        }
        self
    }
}

// ---------------------------------------------------------------------------
// Environment
// ---------------------------------------------------------------------------

/// Settings read from the process environment. Kept apart from [`Config`]
/// because secrets never live in the YAML file.
#[derive(Debug, Clone, Default)]
pub struct Env {
    pub password: Option<String>,
    pub debug: bool,
    pub api_key: Option<String>,
}

impl Env {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            password: non_empty(ENV_PASSWORD),
            debug: non_empty(ENV_DEBUG).is_some(),
            api_key: non_empty(ENV_API_KEY).map(|v| v.trim().to_string()),
        }
    }

    pub fn expected_password(&self) -> &str {
        self.password.as_deref().unwrap_or(DEFAULT_PASSWORD)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::load(dir.path()).unwrap();
        assert_eq!(cfg.menu_width, 58);
        assert!(!cfg.require_password);
        assert!(cfg.ai.enabled);
        assert_eq!(cfg.ai.model, "mistral-large-latest");
        assert_eq!(cfg.generation.name_sample_size, 30);
        assert_eq!(cfg.generation.tip_history_window, 20);
        assert_eq!(cfg.generation.tip_max_attempts, 5);
        assert_eq!(cfg.files.direct_reports, "direct_reports.json");
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".wingman")).unwrap();
        std::fs::write(
            dir.path().join(".wingman/config.yaml"),
            "menu_width: 70\nai:\n  enabled: false\n",
        )
        .unwrap();
        let cfg = Config::load(dir.path()).unwrap();
        assert_eq!(cfg.menu_width, 70);
        assert!(!cfg.ai.enabled);
        assert_eq!(cfg.ai.timeout_secs, 60);
        assert_eq!(cfg.generation.default_batch, 3);
    }

    #[test]
    fn malformed_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".wingman")).unwrap();
        std::fs::write(dir.path().join(".wingman/config.yaml"), "menu_width: [oops").unwrap();
        let err = Config::load(dir.path()).unwrap_err();
        assert!(matches!(err, WingmanError::Config(_)));
    }

    #[test]
    fn validate_default_has_no_warnings() {
        assert!(Config::default().validate().is_empty());
    }

    #[test]
    fn validate_and_sanitize_narrow_menu() {
        let cfg = Config {
            menu_width: 5,
            ..Config::default()
        };
        let warnings = cfg.validate();
        assert!(warnings.iter().any(|w| w.message.contains("menu_width=5")));
        assert_eq!(cfg.sanitized().menu_width, MIN_MENU_WIDTH);
    }

    #[test]
    fn sanitize_clamps_generation_settings() {
        let mut cfg = Config::default();
        cfg.generation.tip_max_attempts = 0;
        cfg.generation.default_batch = 40;
        cfg.files.management_tips = "  ".to_string();
        assert_eq!(cfg.validate().len(), 3);
        let cfg = cfg.sanitized();
        assert_eq!(cfg.generation.tip_max_attempts, 1);
        assert_eq!(cfg.generation.default_batch, MAX_BATCH);
        assert_eq!(cfg.files.management_tips, "management_tips.json");
    }

    #[test]
    fn env_lookup_ignores_blank_values() {
        let vars: HashMap<&str, &str> = [
            (ENV_PASSWORD, ""),
            (ENV_DEBUG, "1"),
            (ENV_API_KEY, "  key-123 "),
        ]
        .into_iter()
        .collect();
        let env = Env::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(env.expected_password(), DEFAULT_PASSWORD);
        assert!(env.debug);
        assert_eq!(env.api_key.as_deref(), Some("key-123"));
    }
}
