//! TOML-based configuration for querydef.
//!
//! Example configuration:
//! ```toml
//! [compiler]
//! sort_field_suffix = "_SortField"
//! text_substitutions = "omit_when_empty"  # or "always"
//! positional = "lenient"                  # or "strict"
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::layout::DEFAULT_SORT_FIELD_SUFFIX;
use crate::markup::SubstitutionsPolicy;
use crate::normalize::PositionalPolicy;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "QUERYDEF_CONFIG";

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub compiler: CompilerSettings,
}

/// Compiler configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CompilerSettings {
    /// Key aliases ending in this suffix are left out of the layout.
    pub sort_field_suffix: String,

    /// `omit_when_empty` or `always`.
    pub text_substitutions: SubstitutionsPolicy,

    /// `lenient` or `strict`.
    pub positional: PositionalPolicy,
}

impl Default for CompilerSettings {
    fn default() -> Self {
        Self {
            sort_field_suffix: DEFAULT_SORT_FIELD_SUFFIX.to_string(),
            text_substitutions: SubstitutionsPolicy::default(),
            positional: PositionalPolicy::default(),
        }
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Load settings from the default config file locations.
    ///
    /// Searches in order:
    /// 1. Environment variable `QUERYDEF_CONFIG`
    /// 2. `./querydef.toml`
    /// 3. `~/.config/querydef/config.toml`
    pub fn load() -> Result<Self, SettingsError> {
        if let Ok(path) = env::var(CONFIG_ENV_VAR) {
            return Self::from_file(&path);
        }

        let local_config = PathBuf::from("querydef.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("querydef").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        Ok(Settings::default())
    }
}
