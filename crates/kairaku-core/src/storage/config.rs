//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - How many suggestions to show at once
//! - Defaults for newly added meaningful activities
//! - How often the watch loop re-checks the time of day
//!
//! Configuration is stored at `<data dir>/config.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::error::{ConfigError, Result};
use crate::model::{DEFAULT_CATEGORY, DEFAULT_DURATION_MIN};
use crate::suggest::DEFAULT_SUGGESTION_COUNT;

/// Suggestion engine settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionsConfig {
    #[serde(default = "default_count")]
    pub count: usize,
}

/// Defaults applied when a meaningful activity is added without them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivitiesConfig {
    #[serde(default = "default_category")]
    pub default_category: String,
    #[serde(default = "default_duration")]
    pub default_duration: u32,
}

/// Watch loop settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchConfig {
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

/// Application configuration.
///
/// Serialized to/from TOML at `<data dir>/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub suggestions: SuggestionsConfig,
    #[serde(default)]
    pub activities: ActivitiesConfig,
    #[serde(default)]
    pub watch: WatchConfig,
}

fn default_count() -> usize {
    DEFAULT_SUGGESTION_COUNT
}
fn default_category() -> String {
    DEFAULT_CATEGORY.into()
}
fn default_duration() -> u32 {
    DEFAULT_DURATION_MIN
}
fn default_interval_secs() -> u64 {
    60
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
        }
    }
}

impl Default for ActivitiesConfig {
    fn default() -> Self {
        Self {
            default_category: default_category(),
            default_duration: default_duration(),
        }
    }
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

/// Settings are addressed as `section.field`, e.g. `watch.interval_secs`.
fn slot<'a>(root: &'a serde_json::Value, key: &str) -> Option<&'a serde_json::Value> {
    let (section, field) = key.split_once('.')?;
    root.get(section)?.get(field)
}

fn slot_mut<'a>(root: &'a mut serde_json::Value, key: &str) -> Option<&'a mut serde_json::Value> {
    let (section, field) = key.split_once('.')?;
    root.get_mut(section)?.get_mut(field)
}

fn display(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl Config {
    /// Default location of the config file.
    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults if the file is
    /// missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config =
                    toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                        path: path.to_path_buf(),
                        message: e.to_string(),
                    })?;
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
            .into()),
        }
    }

    /// Persist to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Current value of a `section.field` setting, rendered as text.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        slot(&json, key).map(display)
    }

    /// Every setting as `(section.field, value)`, sorted by key.
    pub fn entries(&self) -> Vec<(String, String)> {
        let Ok(serde_json::Value::Object(sections)) = serde_json::to_value(self) else {
            return Vec::new();
        };
        let mut out = Vec::new();
        for (section, fields) in &sections {
            if let serde_json::Value::Object(fields) = fields {
                for (field, value) in fields {
                    out.push((format!("{section}.{field}"), display(value)));
                }
            }
        }
        out
    }

    /// Change one setting in memory. Call [`save`](Self::save) to persist.
    ///
    /// # Errors
    ///
    /// The key must name an existing setting, and numeric settings only
    /// accept non-negative integers.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut json = serde_json::to_value(&*self)?;
        let target =
            slot_mut(&mut json, key).ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        let parsed = match &*target {
            serde_json::Value::Number(_) => value
                .parse::<u64>()
                .map(serde_json::Value::from)
                .map_err(|_| invalid(format!("'{value}' is not a whole number")))?,
            serde_json::Value::String(_) => serde_json::Value::String(value.to_string()),
            _ => return Err(ConfigError::UnknownKey(key.to_string()).into()),
        };
        *target = parsed;
        *self = serde_json::from_value(json).map_err(|e| invalid(e.to_string()))?;
        Ok(())
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to default configuration");
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_default_values() {
        let cfg = Config::default();
        assert_eq!(cfg.suggestions.count, 3);
        assert_eq!(cfg.activities.default_category, "Other");
        assert_eq!(cfg.activities.default_duration, 30);
        assert_eq!(cfg.watch.interval_secs, 60);
    }

    #[test]
    fn partial_file_takes_defaults() {
        let parsed: Config = toml::from_str("[suggestions]\ncount = 5\n").unwrap();
        assert_eq!(parsed.suggestions.count, 5);
        assert_eq!(parsed.activities, ActivitiesConfig::default());
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("suggestions.count").as_deref(), Some("3"));
        assert_eq!(cfg.get("activities.default_category").as_deref(), Some("Other"));
        assert!(cfg.get("suggestions.missing").is_none());
        assert!(cfg.get("").is_none());
        assert!(cfg.get("suggestions").is_none());
    }

    #[test]
    fn entries_list_every_setting() {
        let entries = Config::default().entries();
        assert_eq!(entries.len(), 4);
        assert!(entries.contains(&("suggestions.count".to_string(), "3".to_string())));
        assert!(entries.contains(&("watch.interval_secs".to_string(), "60".to_string())));
    }

    #[test]
    fn set_updates_number_and_string() {
        let mut cfg = Config::default();
        cfg.set("suggestions.count", "5").unwrap();
        cfg.set("activities.default_category", "Reading").unwrap();
        assert_eq!(cfg.suggestions.count, 5);
        assert_eq!(cfg.activities.default_category, "Reading");
    }

    #[test]
    fn set_rejects_unknown_key() {
        let mut cfg = Config::default();
        let err = cfg.set("suggestions.nonexistent", "1").unwrap_err();
        assert!(matches!(
            err,
            crate::error::CoreError::Config(ConfigError::UnknownKey(_))
        ));
    }

    #[test]
    fn set_rejects_invalid_type() {
        let mut cfg = Config::default();
        assert!(cfg.set("watch.interval_secs", "soon").is_err());
        assert!(cfg.set("suggestions", "3").is_err());
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn load_from_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(path.exists());

        let mut changed = cfg.clone();
        changed.set("suggestions.count", "1").unwrap();
        changed.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().suggestions.count, 1);
    }

    #[test]
    fn load_from_garbage_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "suggestions = [").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
