//! Configuration module for querydef.
//!
//! Handles compiler settings loaded from TOML.

mod settings;

pub use settings::{CompilerSettings, Settings, SettingsError, CONFIG_ENV_VAR};
