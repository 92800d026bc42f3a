// TOML config adapter - Probe settings loaded from a `[mediaprobe]` table

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::options::ProbeOptions;
use crate::error::{ProbeError, ProbeOutcome};

/// Probe settings as they appear in a config file or on the command line.
///
/// Every field is optional so layers can be merged; numeric limits are left
/// raw here and normalised when converted into [`ProbeOptions`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProbeSettings {
    pub ffprobe_path: Option<String>,
    pub analyze_duration: Option<i64>,
    pub probe_size: Option<i64>,
    pub unit: Option<bool>,
    pub sexagesimal: Option<bool>,
    pub bit_exact: Option<bool>,
    pub timeout_secs: Option<u64>,
    pub log_level: Option<String>,
}

impl ProbeSettings {
    /// Layer `overrides` on top of `self`; set fields in `overrides` win
    pub fn overlay(self, overrides: ProbeSettings) -> ProbeSettings {
        ProbeSettings {
            ffprobe_path: overrides.ffprobe_path.or(self.ffprobe_path),
            analyze_duration: overrides.analyze_duration.or(self.analyze_duration),
            probe_size: overrides.probe_size.or(self.probe_size),
            unit: overrides.unit.or(self.unit),
            sexagesimal: overrides.sexagesimal.or(self.sexagesimal),
            bit_exact: overrides.bit_exact.or(self.bit_exact),
            timeout_secs: overrides.timeout_secs.or(self.timeout_secs),
            log_level: overrides.log_level.or(self.log_level),
        }
    }

    pub fn to_options(&self) -> ProbeOptions {
        let mut options = ProbeOptions::new()
            .with_analyze_duration(self.analyze_duration)
            .with_probe_size(self.probe_size)
            .with_unit(self.unit.unwrap_or(false))
            .with_sexagesimal(self.sexagesimal.unwrap_or(false))
            .with_bit_exact(self.bit_exact.unwrap_or(false))
            .with_timeout(self.timeout_secs.filter(|s| *s > 0).map(Duration::from_secs));
        if let Some(path) = self.ffprobe_path.as_deref().filter(|p| !p.trim().is_empty()) {
            options = options.with_ffprobe_path(path);
        }
        options
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigDocument {
    #[serde(default)]
    mediaprobe: ProbeSettings,
}

/// TOML configuration adapter
#[derive(Debug, Default, Clone, Copy)]
pub struct TomlConfigAdapter;

impl TomlConfigAdapter {
    /// Create new TOML config adapter
    pub fn new() -> Self {
        Self
    }

    /// Parse settings from TOML text
    pub fn parse(&self, toml_content: &str) -> ProbeOutcome<ProbeSettings> {
        let document: ConfigDocument = toml::from_str(toml_content).map_err(|e| ProbeError::Config {
            message: format!("Failed to parse TOML config: {}", e),
        })?;
        Ok(document.mediaprobe)
    }

    /// Load settings from a config file
    pub fn load(&self, file_path: &Path) -> ProbeOutcome<ProbeSettings> {
        let content = std::fs::read_to_string(file_path).map_err(|e| ProbeError::Config {
            message: format!("Failed to read config file {}: {}", file_path.display(), e),
        })?;
        self.parse(&content)
    }

    /// Load the default config file if one exists
    pub fn load_default(&self) -> ProbeOutcome<Option<ProbeSettings>> {
        let path = Self::default_config_path();
        if path.is_file() {
            self.load(&path).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Get default config file path
    pub fn default_config_path() -> PathBuf {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            PathBuf::from(appdata).join("MediaProbe").join("config.toml")
        } else if let Some(config_home) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(config_home).join("mediaprobe").join("config.toml")
        } else {
            PathBuf::from("mediaprobe.toml")
        }
    }
}
