// File: src/config.rs
// Purpose: Configuration parsing from animal_forms.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "animal_forms.toml";

/// Form configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormsConfig {
    #[serde(default)]
    pub validation: ValidationConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Acceptance rules applied on top of the required name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Trim bound field values before validating (default: true).
    ///
    /// Applies after binding. `FormData::from_fields` already trims at
    /// construction; use `from_fields_untrimmed` or `from_json` to keep
    /// whitespace when this is off.
    #[serde(default = "default_true")]
    pub trim_whitespace: bool,

    #[serde(default)]
    pub max_name_length: Option<usize>,

    #[serde(default)]
    pub max_description_length: Option<usize>,

    /// Regular expression the name must match
    #[serde(default)]
    pub name_pattern: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// One of trace, debug, info, warn, error
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_true() -> bool {
    true
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            trim_whitespace: true,
            max_name_length: None,
            max_description_length: None,
            name_pattern: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl FormsConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: FormsConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./animal_forms.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_FILE)
    }
}
