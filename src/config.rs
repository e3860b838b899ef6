use crate::constants::{
    API_BASE_ENV, API_KEY_ENV, DEFAULT_API_BASE, DEFAULT_API_KEY, DEFAULT_MODEL, MODEL_ENV,
};
use log::debug;

/// Resolved once at startup and threaded explicitly into the client and
/// reporter. Values are passed through unvalidated; a malformed base URL or
/// key only surfaces when a request is attempted.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: String,
    pub api_key: String,
    pub model: String,
}

impl Config {
    pub fn from_env() -> Self {
        let config = Config {
            api_base: env_or(API_BASE_ENV, DEFAULT_API_BASE),
            api_key: env_or(API_KEY_ENV, DEFAULT_API_KEY),
            model: env_or(MODEL_ENV, DEFAULT_MODEL),
        };
        debug!("Resolved config: model={} base={}", config.model, config.api_base);
        config
    }
}

// An empty value counts as unset.
fn env_or(name: &str, default: &str) -> String {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}
