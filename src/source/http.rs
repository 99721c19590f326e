//! Payloads from the corpus HTTP service
//!
//! `GET <base>/api/<dataset path>`, with a request timeout and retry on
//! recoverable failures.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::{CorpusSource, Dataset};
use crate::config::SourceConfig;
use crate::utils::error::FetchError;
use crate::utils::retry::{with_retry, RetryConfig};
use crate::utils::{join_payload_url, parse_base_url};

/// Fetches payloads from the corpus service
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base_url: Url,
    retry: RetryConfig,
}

impl HttpSource {
    /// Create a source for `base_url` with the given timeout and retry budget
    pub fn new(base_url: &str, timeout: Duration, max_retries: u32) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .user_agent(format!("samhita/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: parse_base_url(base_url)?,
            retry: RetryConfig::new(max_retries),
        })
    }

    /// Create a source from the `[source]` config section
    pub fn from_config(config: &SourceConfig) -> Result<Self, FetchError> {
        let base_url = config
            .api_url
            .as_deref()
            .ok_or_else(|| FetchError::InvalidUrl("no api_url configured".to_string()))?;
        Self::new(base_url, config.request_timeout(), config.max_retries)
    }

    /// Override the retry policy (mainly for tests)
    pub fn with_retry_config(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// URL that serves a dataset
    pub fn url_for(&self, dataset: &Dataset) -> Result<Url, FetchError> {
        join_payload_url(&self.base_url, &format!("api/{}", dataset.path()))
    }

    async fn fetch_once(&self, url: &Url) -> Result<Value, FetchError> {
        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::Http(e)
            }
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            return Err(FetchError::ServerError(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl CorpusSource for HttpSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch(&self, dataset: &Dataset) -> Result<Value, FetchError> {
        let url = self.url_for(dataset)?;
        debug!(dataset = dataset.name(), url = %url, "Fetching payload");
        with_retry(&self.retry, || self.fetch_once(&url)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for() {
        let source = HttpSource::new("http://localhost:8000", Duration::from_secs(5), 0).unwrap();
        assert_eq!(
            source.url_for(&Dataset::Hymns { group: 7 }).unwrap().as_str(),
            "http://localhost:8000/api/mandala/7"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let result = HttpSource::new("localhost", Duration::from_secs(5), 0);
        assert!(matches!(result, Err(FetchError::InvalidUrl(_))));
    }

    #[test]
    fn test_from_config_requires_api_url() {
        let config = SourceConfig::default();
        assert!(config.api_url.is_none());
        assert!(HttpSource::from_config(&config).is_err());
    }
}
