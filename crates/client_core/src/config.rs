use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use url::Url;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3000";
pub const SETTINGS_FILE_STEM: &str = "comment_wall";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub api_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
        }
    }
}

impl Settings {
    pub fn with_api_url(api_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            api_url: normalize_api_url(api_url)?,
        })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings: {0}")]
    Source(#[from] ::config::ConfigError),
    #[error("invalid API url '{url}': {reason}")]
    InvalidApiUrl { url: String, reason: String },
}

/// Loads settings from `comment_wall.toml` in the working directory and the
/// environment. `APP__API_URL` overrides the file and `API_URL` overrides both.
pub fn load_settings() -> Result<Settings, ConfigError> {
    load_settings_from(
        Path::new(SETTINGS_FILE_STEM),
        std::env::var("API_URL").ok(),
    )
}

pub fn load_settings_from(
    settings_file: &Path,
    api_url_override: Option<String>,
) -> Result<Settings, ConfigError> {
    let raw = ::config::Config::builder()
        .set_default("api_url", DEFAULT_API_URL)?
        .add_source(::config::File::from(settings_file).required(false))
        .add_source(::config::Environment::with_prefix("APP").separator("__"))
        .build()?;
    let mut settings: Settings = raw.try_deserialize()?;

    if let Some(api_url) = api_url_override.filter(|v| !v.trim().is_empty()) {
        settings.api_url = api_url;
    }

    Settings::with_api_url(&settings.api_url)
}

/// Trims whitespace and trailing slashes so request paths can be appended
/// directly.
pub fn normalize_api_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let invalid = |reason: &str| ConfigError::InvalidApiUrl {
        url: raw.to_string(),
        reason: reason.to_string(),
    };

    if trimmed.is_empty() {
        return Err(invalid("empty"));
    }

    let parsed = Url::parse(trimmed).map_err(|err| invalid(&err.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    if parsed.host_str().is_none() {
        return Err(invalid("missing host"));
    }

    Ok(trimmed.to_string())
}
