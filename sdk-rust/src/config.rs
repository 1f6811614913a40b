use crate::google::{GoogleModel, GoogleModelOptions};
use std::{env, net::SocketAddr};
use thiserror::Error;

pub const API_KEY_VAR: &str = "API_KEY";
pub const FALLBACK_API_KEY_VAR: &str = "GOOGLE_API_KEY";
pub const MODEL_VAR: &str = "SYMBIO_MODEL";
pub const BASE_URL_VAR: &str = "SYMBIO_BASE_URL";
pub const ADDR_VAR: &str = "SYMBIO_ADDR";

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable is not set")]
    MissingVariable(&'static str),
    #[error("Invalid value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

/// Settings loaded once at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub model_id: String,
    pub base_url: Option<String>,
    pub addr: SocketAddr,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("model_id", &self.model_id)
            .field("base_url", &self.base_url)
            .field("addr", &self.addr)
            .finish()
    }
}

impl Config {
    /// Reads the process environment. Fails if no API key is configured.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let api_key = non_blank(API_KEY_VAR)
            .or_else(|| non_blank(FALLBACK_API_KEY_VAR))
            .ok_or(ConfigError::MissingVariable(API_KEY_VAR))?;

        let model_id = non_blank(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = non_blank(BASE_URL_VAR);

        let addr = non_blank(ADDR_VAR)
            .as_deref()
            .unwrap_or(DEFAULT_ADDR)
            .trim()
            .parse::<SocketAddr>()
            .map_err(|error| ConfigError::InvalidValue {
                name: ADDR_VAR,
                reason: error.to_string(),
            })?;

        Ok(Self {
            api_key,
            model_id,
            base_url,
            addr,
        })
    }

    #[must_use]
    pub fn google_model(&self) -> GoogleModel {
        GoogleModel::new(
            self.model_id.clone(),
            GoogleModelOptions {
                api_key: self.api_key.clone(),
                base_url: self.base_url.clone(),
                ..Default::default()
            },
        )
    }
}
