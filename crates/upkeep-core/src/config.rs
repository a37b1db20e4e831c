//! Runtime settings and their loader.
//!
//! Settings come from, in order of precedence:
//!
//! 1. overrides set on the [`SettingsBuilder`]
//! 2. an explicit config file path (which must exist)
//! 3. `$XDG_CONFIG_HOME/upkeep/config.json`, if present
//! 4. built-in defaults
//!
//! ```json
//! { "timezone": "Asia/Kolkata", "enabled": true, "display_timezone": "UTC" }
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use jiff::tz::TimeZone;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, ResultExt, UpkeepError},
    models::DEFAULT_TIMEZONE,
};

/// File name looked up under the XDG config directory.
pub const CONFIG_FILE: &str = "config.json";

/// Settings applied when building payloads and rendering times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// IANA zone stamped on cron rules
    pub timezone: String,
    /// Whether new cron rules are created enabled
    pub enabled: bool,
    /// Zone used for printing times; the system zone when unset
    pub display_timezone: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE.to_string(),
            enabled: true,
            display_timezone: None,
        }
    }
}

impl Settings {
    /// Zone for rendering timestamps.
    pub fn display_zone(&self) -> TimeZone {
        self.display_timezone
            .as_deref()
            .and_then(|name| TimeZone::get(name).ok())
            .unwrap_or_else(TimeZone::system)
    }

    fn validate(&self) -> Result<()> {
        check_zone("timezone", &self.timezone)?;
        if let Some(name) = &self.display_timezone {
            check_zone("display_timezone", name)?;
        }
        Ok(())
    }
}

fn check_zone(field: &str, name: &str) -> Result<()> {
    TimeZone::get(name)
        .map(|_| ())
        .map_err(|e| UpkeepError::invalid_input(field).with_reason(e.to_string()))
}

/// Builder for loading [`Settings`].
#[derive(Debug, Clone, Default)]
pub struct SettingsBuilder {
    config_path: Option<PathBuf>,
    timezone: Option<String>,
    display_timezone: Option<String>,
}

impl SettingsBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a config file to read instead of the XDG location.
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.config_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Overrides the cron rule timezone.
    pub fn with_timezone(mut self, timezone: Option<String>) -> Self {
        if timezone.is_some() {
            self.timezone = timezone;
        }
        self
    }

    /// Overrides the zone used for printing times.
    pub fn with_display_timezone(mut self, timezone: Option<String>) -> Self {
        if timezone.is_some() {
            self.display_timezone = timezone;
        }
        self
    }

    /// Loads and validates the settings.
    ///
    /// # Errors
    ///
    /// Returns `UpkeepError::FileSystem` if an explicit config file cannot be
    /// read, `UpkeepError::Configuration` if a config file is not valid JSON,
    /// and `UpkeepError::InvalidInput` for unknown time zones.
    pub fn build(self) -> Result<Settings> {
        let path = match self.config_path {
            Some(path) => Some(path),
            None => Self::default_config_path(),
        };

        let mut settings = match path {
            Some(path) => Self::load(&path)?,
            None => {
                debug!("No config file found, using defaults");
                Settings::default()
            }
        };

        if let Some(timezone) = self.timezone {
            settings.timezone = timezone;
        }
        if let Some(timezone) = self.display_timezone {
            settings.display_timezone = Some(timezone);
        }

        settings.validate()?;
        Ok(settings)
    }

    fn load(path: &Path) -> Result<Settings> {
        debug!("Loading settings from {}", path.display());
        let text = fs::read_to_string(path).map_err(|e| UpkeepError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&text)
            .with_context_lazy(|| format!("Invalid config file {}", path.display()))
    }

    /// Returns the XDG config file path when the file exists.
    fn default_config_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("upkeep").find_config_file(CONFIG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn write_config(contents: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, contents).expect("Failed to write config");
        (dir, path)
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.timezone, "Asia/Kolkata");
        assert!(settings.enabled);
        assert_eq!(settings.display_timezone, None);
    }

    #[test]
    fn test_load_partial_file() {
        let (_dir, path) = write_config(r#"{ "enabled": false }"#);
        let settings = SettingsBuilder::new()
            .with_config_path(Some(&path))
            .build()
            .unwrap();

        assert!(!settings.enabled);
        assert_eq!(settings.timezone, "Asia/Kolkata");
    }

    #[test]
    fn test_overrides_win_over_file() {
        let (_dir, path) = write_config(r#"{ "timezone": "Europe/Berlin" }"#);
        let settings = SettingsBuilder::new()
            .with_config_path(Some(&path))
            .with_timezone(Some("UTC".to_string()))
            .with_display_timezone(Some("UTC".to_string()))
            .build()
            .unwrap();

        assert_eq!(settings.timezone, "UTC");
        assert_eq!(settings.display_timezone.as_deref(), Some("UTC"));
        assert_eq!(settings.display_zone().iana_name(), Some("UTC"));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = SettingsBuilder::new()
            .with_config_path(Some(dir.path().join("absent.json")))
            .build()
            .unwrap_err();
        assert!(matches!(err, UpkeepError::FileSystem { .. }));
    }

    #[test]
    fn test_malformed_file_is_a_configuration_error() {
        let (_dir, path) = write_config("{ not json");
        let err = SettingsBuilder::new()
            .with_config_path(Some(&path))
            .build()
            .unwrap_err();
        assert!(matches!(err, UpkeepError::Configuration { .. }));
    }

    #[test]
    fn test_unknown_timezone_is_rejected() {
        let (_dir, path) = write_config(r#"{ "timezone": "Mars/Olympus_Mons" }"#);
        let err = SettingsBuilder::new()
            .with_config_path(Some(&path))
            .build()
            .unwrap_err();
        assert!(matches!(err, UpkeepError::InvalidInput { ref field, .. } if field == "timezone"));
    }
}
