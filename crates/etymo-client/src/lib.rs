use async_trait::async_trait;
use etymo_core::ProviderError;
use etymo_core::preprocess::normalize;
use etymo_core::provider::DatasetProvider;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

use etymo_types::{
    AffixBreakdown, AffixExamplesResponse, HealthResponse, SearchResponse, SuggestionsResponse,
    WordRecord,
};

/// Dataset provider backed by the remote HTTP API. Every call is an
/// idempotent GET; transport trouble and malformed payloads both map
/// to `ProviderError::Transport`.
#[derive(Clone)]
pub struct RemoteProvider {
    base_url: String,
    client: reqwest::Client,
}

impl RemoteProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    fn encode(segment: &str) -> String {
        utf8_percent_encode(segment, NON_ALPHANUMERIC).to_string()
    }

    async fn get_json<T>(&self, path: &str, query: &[(&str, &str)]) -> Result<T, ProviderError>
    where
        T: for<'de> serde::Deserialize<'de>,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(format!("GET {}: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Transport(format!("GET {}: {}", url, status)));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ProviderError::Transport(format!("GET {}: malformed payload: {}", url, e)))
    }
}

/// The backend reports misses inside the payload, not via HTTP status.
fn unwrap_search(response: SearchResponse) -> Result<WordRecord, ProviderError> {
    if !response.success {
        return Err(ProviderError::NotFound(
            response.message.unwrap_or(response.word),
        ));
    }
    response
        .data
        .ok_or_else(|| ProviderError::Transport("success response without data".to_string()))
}

#[async_trait]
impl DatasetProvider for RemoteProvider {
    async fn word(&self, word: &str) -> Result<WordRecord, ProviderError> {
        let word = normalize(word);
        let path = format!("/api/word/{}", Self::encode(&word));
        unwrap_search(self.get_json(&path, &[]).await?)
    }

    async fn suggest(&self, prefix: &str, limit: usize) -> Result<Vec<String>, ProviderError> {
        let prefix = normalize(prefix);
        if prefix.is_empty() {
            return Ok(Vec::new());
        }
        let response: SuggestionsResponse = self
            .get_json("/api/suggestions", &[("prefix", prefix.as_str())])
            .await?;
        let mut suggestions = response.suggestions;
        suggestions.truncate(limit);
        Ok(suggestions)
    }

    async fn affix_examples(&self, part: &str, limit: usize) -> Result<Vec<String>, ProviderError> {
        let part = normalize(part);
        if part.is_empty() {
            return Ok(Vec::new());
        }
        let path = format!("/api/affix/{}/examples", Self::encode(&part));
        let response: AffixExamplesResponse = self.get_json(&path, &[]).await?;
        let mut examples = response.examples;
        examples.truncate(limit);
        Ok(examples)
    }

    async fn word_count(&self) -> Result<usize, ProviderError> {
        let response: HealthResponse = self.get_json("/api/health", &[]).await?;
        Ok(response.word_count)
    }

    async fn analyze(&self, word: &str) -> Result<AffixBreakdown, ProviderError> {
        let word = normalize(word);
        self.get_json("/api/analyze", &[("word", word.as_str())])
            .await
    }
}
