use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;
use url::Url;

pub const DEFAULT_SIGNUP_ENDPOINT: &str = "https://taskhub-s37f.onrender.com/auth/signup";
pub const SETTINGS_FILE: &str = "signup.toml";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid signup endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
    #[error("unsupported scheme '{scheme}' in signup endpoint '{endpoint}'")]
    UnsupportedScheme { endpoint: String, scheme: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub signup_endpoint: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            signup_endpoint: DEFAULT_SIGNUP_ENDPOINT.into(),
        }
    }
}

impl Settings {
    /// Blank overrides are ignored.
    pub fn override_endpoint(&mut self, value: impl AsRef<str>) {
        let value = value.as_ref().trim();
        if !value.is_empty() {
            self.signup_endpoint = value.to_string();
        }
    }

    pub fn endpoint_url(&self) -> Result<Url, ConfigError> {
        parse_endpoint(&self.signup_endpoint)
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    signup_endpoint: Option<String>,
}

pub fn load_settings() -> Settings {
    load_settings_from(Path::new(SETTINGS_FILE), |name| std::env::var(name).ok())
}

/// Defaults, then the TOML file at `path`, then `SIGNUP_ENDPOINT` and
/// `APP__SIGNUP_ENDPOINT`. A missing or unreadable file is skipped.
pub fn load_settings_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        match toml::from_str::<FileSettings>(&raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.signup_endpoint {
                    settings.override_endpoint(v);
                }
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), "ignoring malformed settings file: {err}");
            }
        }
    }

    if let Some(v) = env("SIGNUP_ENDPOINT") {
        settings.override_endpoint(v);
    }
    if let Some(v) = env("APP__SIGNUP_ENDPOINT") {
        settings.override_endpoint(v);
    }

    settings
}

pub fn parse_endpoint(raw: &str) -> Result<Url, ConfigError> {
    let raw = raw.trim();
    let url = Url::parse(raw).map_err(|err| ConfigError::InvalidEndpoint {
        endpoint: raw.to_string(),
        reason: err.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme {
            endpoint: raw.to_string(),
            scheme: other.to_string(),
        }),
    }
}
