use std::time::Duration;

use async_trait::async_trait;
use lexi_config::provider::ProviderConfig;
use lexi_core::model::RawLookup;
use lexi_core::provider::{LexicalProvider, LookupError};
use reqwest::{StatusCode, Url};

/// Oxford Dictionaries API v2 `entries` client
#[derive(Clone)]
pub struct OxfordProvider {
    client: reqwest::Client,
    app_id: String,
    app_key: String,
    api_url: String,
    language: String,
}

impl OxfordProvider {
    pub fn new(app_id: String, app_key: String, api_url: String, language: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            app_id,
            app_key,
            api_url,
            language,
        }
    }

    pub fn from_config(config: &ProviderConfig) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| LookupError::Transport(Box::new(e)))?;

        Ok(Self {
            client,
            app_id: config.app_id.clone(),
            app_key: config.app_key.clone(),
            api_url: config.api_url.clone(),
            language: config.language.clone(),
        })
    }

    /// `{api_url}/entries/{language}/{word}` with the word percent-encoded
    pub fn entry_url(&self, word: &str) -> Result<Url, LookupError> {
        let mut url = Url::parse(&self.api_url)
            .map_err(|e| LookupError::Api(format!("Invalid API URL {}: {}", self.api_url, e)))?;

        url.path_segments_mut()
            .map_err(|_| LookupError::Api(format!("API URL cannot have a path: {}", self.api_url)))?
            .pop_if_empty()
            .extend(["entries", self.language.as_str(), word]);

        Ok(url)
    }
}

/// Decode an `entries` response body
pub fn parse_entries(body: &str) -> Result<RawLookup, LookupError> {
    serde_json::from_str(body)
        .map_err(|e| LookupError::Malformed(format!("Failed to parse response: {}", e)))
}

#[async_trait]
impl LexicalProvider for OxfordProvider {
    async fn lookup(&self, word: &str) -> Result<RawLookup, LookupError> {
        if self.app_id.is_empty() || self.app_key.is_empty() {
            return Err(LookupError::Authentication);
        }

        let url = self.entry_url(word)?;
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header("app_id", &self.app_id)
            .header("app_key", &self.app_key)
            .send()
            .await
            .map_err(|e| LookupError::Transport(Box::new(e)))?;

        match response.status() {
            StatusCode::NOT_FOUND => return Err(LookupError::NotFound(word.to_string())),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(LookupError::Authentication);
            }
            StatusCode::TOO_MANY_REQUESTS => return Err(LookupError::RateLimited),
            status if !status.is_success() => {
                return Err(LookupError::Api(format!("HTTP {}", status)));
            }
            _ => {}
        }

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Transport(Box::new(e)))?;

        parse_entries(&body)
    }

    fn language(&self) -> &str {
        &self.language
    }
}
