// crates/geodir-core/src/client.rs

//! # REST Countries client
//!
//! Talks to a REST Countries compatible service:
//!
//! | operation              | endpoint                                |
//! |------------------------|-----------------------------------------|
//! | name search            | `GET v3.1/name/{text}`                  |
//! | exact name             | `GET v3.1/name/{name}?fullText=true`    |
//! | calling code           | `GET v2/callingcode/{code}`             |
//! | currency               | `GET v2/currency/{code}`                |
//!
//! Failures are classified as [`LookupError`] internally, logged, and then
//! collapsed into the sentinels required by [`DirectoryClient`].

use crate::config::DirectoryConfig;
use crate::error::{LookupError, Result};
use crate::model::{CountryRecord, CountrySummary};
use crate::raw::{CountryRecordRaw, SummaryRaw};
use crate::traits::DirectoryClient;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

const NAME_PATH: [&str; 2] = ["v3.1", "name"];
const CALLING_CODE_PATH: [&str; 2] = ["v2", "callingcode"];
const CURRENCY_PATH: [&str; 2] = ["v2", "currency"];

#[derive(Debug, Clone)]
pub struct RestCountriesClient {
    http: reqwest::Client,
    base: Url,
    config: DirectoryConfig,
}

impl RestCountriesClient {
    /// Fails on an invalid config (bad base URL, zero timeout) or when the
    /// HTTP client cannot be built.
    pub fn new(config: DirectoryConfig) -> Result<Self> {
        let base = config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { http, base, config })
    }

    /// Client configured from `GEODIR_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(DirectoryConfig::from_env()?)
    }

    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    /// `{base}/{prefix..}/{key}`, with `key` percent-encoded as one segment.
    pub fn endpoint(&self, prefix: &[&str], key: &str) -> std::result::Result<Url, LookupError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| LookupError::Endpoint(self.base.to_string()))?
            .pop_if_empty()
            .extend(prefix)
            .push(key);
        Ok(url)
    }

    // -----------------------------------------------------------------------
    // FALLIBLE LAYER
    // -----------------------------------------------------------------------

    async fn fetch_json<T: DeserializeOwned>(&self, url: Url) -> std::result::Result<T, LookupError> {
        debug!(%url, "directory request");
        let resp = self.http.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LookupError::Status(status));
        }

        let body = resp.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn try_summaries(
        &self,
        prefix: &[&str],
        key: &str,
    ) -> std::result::Result<Vec<CountrySummary>, LookupError> {
        let url = self.endpoint(prefix, key)?;
        let raw: Vec<SummaryRaw> = self.fetch_json(url).await?;
        Ok(raw.into_iter().map(CountrySummary::from).collect())
    }

    async fn try_exact(&self, name: &str) -> std::result::Result<CountryRecord, LookupError> {
        let mut url = self.endpoint(&NAME_PATH, name)?;
        url.query_pairs_mut().append_pair("fullText", "true");

        let raw: Vec<CountryRecordRaw> = self.fetch_json(url).await?;
        raw.into_iter()
            .next()
            .map(CountryRecord::from)
            .ok_or(LookupError::Empty)
    }
}

/// Log a failed lookup and hand back the sentinel.
fn log_failure(op: &'static str, key: &str, err: &LookupError) {
    match err {
        LookupError::Transport(_) | LookupError::Endpoint(_) => {
            warn!(op, key, kind = err.kind(), error = %err, "directory lookup failed")
        }
        _ if err.is_not_found() => debug!(op, key, kind = err.kind(), "no directory match"),
        _ => debug!(op, key, kind = err.kind(), error = %err, "directory lookup returned no data"),
    }
}

fn or_empty<T>(op: &'static str, key: &str, res: std::result::Result<Vec<T>, LookupError>) -> Vec<T> {
    res.unwrap_or_else(|err| {
        log_failure(op, key, &err);
        Vec::new()
    })
}

#[async_trait]
impl DirectoryClient for RestCountriesClient {
    async fn lookup_by_name(&self, text: &str) -> Vec<CountrySummary> {
        or_empty("by_name", text, self.try_summaries(&NAME_PATH, text).await)
    }

    async fn lookup_exact_by_name(&self, name: &str) -> Option<CountryRecord> {
        match self.try_exact(name).await {
            Ok(record) => Some(record),
            Err(err) => {
                log_failure("exact_name", name, &err);
                None
            }
        }
    }

    async fn lookup_by_calling_code(&self, code: &str) -> Vec<CountrySummary> {
        or_empty(
            "by_calling_code",
            code,
            self.try_summaries(&CALLING_CODE_PATH, code).await,
        )
    }

    async fn lookup_by_currency_code(&self, code: &str) -> Vec<CountrySummary> {
        or_empty(
            "by_currency",
            code,
            self.try_summaries(&CURRENCY_PATH, code).await,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeoDirError;

    fn client(base: &str) -> RestCountriesClient {
        let config = DirectoryConfig::default().with_base_url(base).unwrap();
        RestCountriesClient::new(config).unwrap()
    }

    #[test]
    fn rejects_invalid_config() {
        let zero_timeout = DirectoryConfig {
            timeout_secs: 0,
            ..DirectoryConfig::default()
        };
        assert!(matches!(
            RestCountriesClient::new(zero_timeout),
            Err(GeoDirError::InvalidConfig(_))
        ));

        let not_http = DirectoryConfig {
            base_url: "file:///tmp/countries".into(),
            ..DirectoryConfig::default()
        };
        assert!(matches!(
            RestCountriesClient::new(not_http),
            Err(GeoDirError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn endpoint_appends_segments() {
        let c = client("https://restcountries.com");
        let url = c.endpoint(&CURRENCY_PATH, "EUR").unwrap();
        assert_eq!(url.as_str(), "https://restcountries.com/v2/currency/EUR");
    }

    #[test]
    fn endpoint_keeps_base_path() {
        let c = client("http://localhost:8080/mirror/");
        let url = c.endpoint(&CALLING_CODE_PATH, "44").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/mirror/v2/callingcode/44");
    }

    #[test]
    fn endpoint_encodes_the_key_as_one_segment() {
        let c = client("https://restcountries.com");
        let url = c.endpoint(&NAME_PATH, "united states").unwrap();
        assert_eq!(url.path(), "/v3.1/name/united%20states");

        let url = c.endpoint(&NAME_PATH, "a/b?c#d").unwrap();
        assert_eq!(url.path(), "/v3.1/name/a%2Fb%3Fc%23d");
        assert_eq!(url.query(), None);
    }
}
