//! GitHub API
//!
//! One unauthenticated (or token-authenticated) listing call.

use reqwest::header::ACCEPT;
use serde::Deserialize;

use crate::config::{FeedConfig, GITHUB_ACCEPT};
use crate::error::FeedError;
use crate::models::Repository;

/// Error body returned by the GitHub API on non-2xx responses
#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Fetch the public repositories of the configured account
pub async fn fetch_repositories(config: &FeedConfig) -> Result<Vec<Repository>, FeedError> {
    let url = config.repos_url();
    log::debug!("[FEED] GET {}", url);

    let mut request = reqwest::Client::new().get(&url).header(ACCEPT, GITHUB_ACCEPT);
    if let Some(token) = &config.token {
        request = request.bearer_auth(token);
    }

    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let reason = status.canonical_reason().unwrap_or("request failed");
        return Err(FeedError::Status {
            status: status.as_u16(),
            message: error_message(&body, reason),
        });
    }
    decode_repositories(&body)
}

/// Decode a `/repos` listing body
pub fn decode_repositories(body: &str) -> Result<Vec<Repository>, FeedError> {
    serde_json::from_str(body).map_err(|e| FeedError::Decode(e.to_string()))
}

/// Prefer the API's own `message`, fall back to the HTTP reason phrase
fn error_message(body: &str, reason: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.message)
        .ok()
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| reason.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_listing() {
        let body = r#"[
            {"name": "a", "description": "first", "language": "Rust", "stargazers_count": 3,
             "fork": false, "updated_at": "2024-05-01T10:00:00Z", "html_url": "https://github.com/u/a"},
            {"name": "b", "description": null, "language": null, "stargazers_count": 0,
             "fork": true, "updated_at": "2023-01-01T00:00:00Z", "html_url": "https://github.com/u/b"}
        ]"#;
        let repos = decode_repositories(body).unwrap();
        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0].name, "a");
        assert!(repos[1].fork);
        assert_eq!(repos[1].language, None);
    }

    #[test]
    fn test_decode_rejects_non_array() {
        let err = decode_repositories(r#"{"message": "Not Found"}"#).unwrap_err();
        assert!(matches!(err, FeedError::Decode(_)));
    }

    #[test]
    fn test_error_message_prefers_api_message() {
        let body = r#"{"message": "API rate limit exceeded", "documentation_url": "https://docs.github.com"}"#;
        assert_eq!(error_message(body, "Forbidden"), "API rate limit exceeded");
        assert_eq!(error_message("<html>", "Not Found"), "Not Found");
        assert_eq!(error_message(r#"{"message": ""}"#, "Not Found"), "Not Found");
    }

    #[test]
    fn test_status_error_display() {
        let err = FeedError::Status { status: 404, message: "Not Found".to_string() };
        assert_eq!(err.to_string(), "GitHub API error (404): Not Found");
    }
}
