//! HTTP token mapping source.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{debug, warn};

use crate::domain::token::TokenMappingDocument;
use crate::domain::TokenMap;
use crate::error::{Error, Result};
use crate::port::TokenMappingSource;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Fetches token mappings over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTokenMappingSource {
    http: HttpClient,
}

impl HttpTokenMappingSource {
    #[must_use]
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });
        Self { http }
    }
}

impl Default for HttpTokenMappingSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenMappingSource for HttpTokenMappingSource {
    async fn load(&self, url: &str) -> Result<TokenMap> {
        let mapping_error = |reason: String| Error::TokenMapping {
            url: url.to_string(),
            reason,
        };

        debug!(url, "Fetching token mapping");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| mapping_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(mapping_error(format!("HTTP {status}")));
        }

        let document: TokenMappingDocument = response
            .json()
            .await
            .map_err(|e| mapping_error(format!("malformed token mapping: {e}")))?;

        let tokens = TokenMap::from(document);
        debug!(url, tokens = tokens.len(), "Loaded token mapping");
        Ok(tokens)
    }
}
