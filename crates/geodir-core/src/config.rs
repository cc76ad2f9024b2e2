// crates/geodir-core/src/config.rs
//! Directory client configuration.
//!
//! Defaults point at the public REST Countries service. Every value can be
//! overridden from the environment (`GEODIR_BASE_URL`,
//! `GEODIR_TIMEOUT_SECS`) or programmatically via the builder-style setters.

use crate::error::{GeoDirError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const BASE_URL_ENV: &str = "GEODIR_BASE_URL";
pub const TIMEOUT_ENV: &str = "GEODIR_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Root of the directory service; `v3.1/...` and `v2/...` are appended.
    /// Parsed and checked by [`DirectoryConfig::validate`].
    pub base_url: String,
    /// Per-request timeout. A timed out request counts as a transport failure.
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("geodir/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

fn parse_base_url(base: &str) -> Result<Url> {
    let url = Url::parse(base)?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(GeoDirError::InvalidBaseUrl(base.to_string()));
    }
    Ok(url)
}

impl DirectoryConfig {
    /// Defaults overlaid with `GEODIR_BASE_URL` / `GEODIR_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`DirectoryConfig::from_env`] but reads variables through `get`.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = get(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            config = config.with_base_url(raw.trim())?;
        }

        if let Some(raw) = get(TIMEOUT_ENV).filter(|v| !v.trim().is_empty()) {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                GeoDirError::InvalidConfig(format!("{TIMEOUT_ENV} must be whole seconds, got {raw:?}"))
            })?;
            config = config.with_timeout_secs(secs)?;
        }

        Ok(config)
    }

    /// Stores the normalized form, e.g. `http://host:8080` becomes `http://host:8080/`.
    pub fn with_base_url(mut self, base: &str) -> Result<Self> {
        self.base_url = parse_base_url(base)?.to_string();
        Ok(self)
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Result<Self> {
        if secs == 0 {
            return Err(GeoDirError::InvalidConfig(
                "timeout must be at least one second".into(),
            ));
        }
        self.timeout_secs = secs;
        Ok(self)
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check a config that may not have gone through the setters (e.g. one
    /// deserialized from a file) and return the parsed base URL.
    pub fn validate(&self) -> Result<Url> {
        if self.timeout_secs == 0 {
            return Err(GeoDirError::InvalidConfig(
                "timeout must be at least one second".into(),
            ));
        }
        parse_base_url(&self.base_url)
    }
}
