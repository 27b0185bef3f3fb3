//! Client configuration baked in at build time.
//!
//! A WASM bundle has no process environment, so values come from
//! `option_env!` when the bundle is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api/v1";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

pub const API_URL_VAR: &str = "SLEEPR_API_URL";
pub const REQUEST_TIMEOUT_VAR: &str = "SLEEPR_REQUEST_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root without a trailing slash, e.g. `https://host/api/v1`.
    pub api_base_url: String,
    /// Upper bound on every gateway request.
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Build config from the values captured at compile time.
    ///
    /// Optional:
    /// - `SLEEPR_API_URL`: default `http://localhost:8080/api/v1`
    /// - `SLEEPR_REQUEST_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a value is present but malformed.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("SLEEPR_API_URL"), option_env!("SLEEPR_REQUEST_TIMEOUT_SECS"))
    }

    /// # Errors
    ///
    /// Returns [`ConfigError`] if a value is present but malformed.
    pub fn from_values(api_url: Option<&str>, timeout_secs: Option<&str>) -> Result<Self, ConfigError> {
        Ok(Self {
            api_base_url: parse_base_url(api_url)?,
            request_timeout: Duration::from_secs(parse_timeout_secs(timeout_secs)?),
        })
    }
}

fn parse_base_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(DEFAULT_API_BASE_URL.to_owned());
    };
    let absolute = raw.starts_with("http://") || raw.starts_with("https://");
    if !absolute && !raw.starts_with('/') {
        return Err(ConfigError::Invalid { var: API_URL_VAR, value: raw.to_owned() });
    }
    Ok(raw.trim_end_matches('/').to_owned())
}

fn parse_timeout_secs(raw: Option<&str>) -> Result<u64, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(DEFAULT_REQUEST_TIMEOUT_SECS);
    };
    match raw.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ConfigError::Invalid { var: REQUEST_TIMEOUT_VAR, value: raw.to_owned() }),
    }
}
