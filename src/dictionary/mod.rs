use async_trait::async_trait;

/// Default word-definition lookup service
pub const DEFAULT_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Seam for the external word-definition lookup.
///
/// Implementations must fail closed: a transport failure is indistinguishable
/// from "not a real word", and nothing ever propagates past this boundary.
#[async_trait]
pub trait WordLookup: Send + Sync {
    async fn lookup(&self, word: &str) -> bool;
}

/// Word validator backed by an HTTP dictionary API, keyed by lowercased word
pub struct DictionaryClient {
    http: reqwest::Client,
    base_url: String,
}

impl DictionaryClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl WordLookup for DictionaryClient {
    async fn lookup(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        let url = format!("{}/{}", self.base_url, word.to_lowercase());
        match self.http.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::debug!("Dictionary lookup for {:?} failed: {}", word, e);
                false
            }
        }
    }
}
