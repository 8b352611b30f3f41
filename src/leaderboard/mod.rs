use reqwest::StatusCode;
use serde_json::json;
use thiserror::Error;

use crate::models::LeaderboardEntry;

#[derive(Debug, Error)]
pub enum LeaderboardError {
    #[error("leaderboard request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("leaderboard returned unexpected status: {0}")]
    UnexpectedStatus(StatusCode),
}

/// Client for the leaderboard HTTP API. Submissions and fetches are
/// fire-and-forget from the game's point of view: a failure is logged by the
/// caller and never retried.
pub struct LeaderboardClient {
    http: reqwest::Client,
    base_url: String,
}

impl LeaderboardClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Persist a finished round's score as a new entry
    pub async fn submit(&self, username: &str, score: i64) -> Result<(), LeaderboardError> {
        let response = self
            .http
            .post(format!("{}/leaderboard", self.base_url))
            .json(&json!({ "username": username, "score": score }))
            .send()
            .await?;

        if response.status() != StatusCode::CREATED {
            return Err(LeaderboardError::UnexpectedStatus(response.status()));
        }
        Ok(())
    }

    /// Fetch the current top-10, ordered by score descending (the server
    /// does the ordering and truncation)
    pub async fn fetch_top(&self) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        let response = self
            .http
            .get(format!("{}/leaderboard", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LeaderboardError::UnexpectedStatus(response.status()));
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_store_surfaces_an_error() {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(500))
            .build()
            .expect("client should build");
        let client = LeaderboardClient::new(http, "http://127.0.0.1:1");

        assert!(client.submit("player", 42).await.is_err());
        assert!(client.fetch_top().await.is_err());
    }

    #[test]
    fn test_entries_deserialize_from_api_shape() {
        let body = r#"[{"username":"ada","score":31},{"username":"alan","score":27}]"#;
        let entries: Vec<LeaderboardEntry> =
            serde_json::from_str(body).expect("API array should deserialize");

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].username, "ada");
        assert_eq!(entries[0].score, 31);
    }
}
