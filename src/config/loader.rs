//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Runtime override for the frontend base path.
pub const BASE_URL_ENV: &str = "QUIZ_BASE_URL";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    parse_config(&content)
}

/// Parse and validate configuration from TOML text, applying env overrides.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = toml::from_str(content).map_err(ConfigError::Parse)?;
    finalize(config, env_base_url())
}

/// Built-in defaults with env overrides, validated like a loaded file.
pub fn load_defaults() -> Result<AppConfig, ConfigError> {
    finalize(AppConfig::default(), env_base_url())
}

fn env_base_url() -> Option<String> {
    std::env::var(BASE_URL_ENV).ok()
}

fn finalize(mut config: AppConfig, base_url: Option<String>) -> Result<AppConfig, ConfigError> {
    apply_base_url_override(&mut config, base_url);
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Replace the frontend base path; an empty override is ignored.
pub fn apply_base_url_override(config: &mut AppConfig, base_url: Option<String>) {
    if let Some(base) = base_url.filter(|b| !b.is_empty()) {
        tracing::debug!(base_url = %base, "Base URL overridden from environment");
        config.frontend.base_url = base;
    }
}
