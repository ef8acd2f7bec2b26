//! Error Types

use thiserror::Error;

/// Failure while loading the repository feed
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeedError {
    #[error("GitHub API error ({status}): {message}")]
    Status { status: u16, message: String },
    #[error("Network error: {0}")]
    Transport(String),
    #[error("Unexpected response from GitHub: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FeedError::Decode(err.to_string())
        } else {
            FeedError::Transport(err.to_string())
        }
    }
}

/// Local storage could not be used
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("local storage access failed: {0}")]
    Access(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("unknown theme '{0}', expected 'light' or 'dark'")]
pub struct ThemeParseError(pub String);
