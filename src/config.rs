//! Build-time Configuration
//!
//! The account handle and optional API token are fixed at compile time
//! (`PORTFOLIO_GITHUB_USER`, `PORTFOLIO_GITHUB_TOKEN`); everything else
//! is a constant.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

pub const GITHUB_API_HOST: &str = "api.github.com";

pub const GITHUB_USERNAME: &str = match option_env!("PORTFOLIO_GITHUB_USER") {
    Some(user) => user,
    None => "octocat",
};

pub const GITHUB_TOKEN: Option<&str> = option_env!("PORTFOLIO_GITHUB_TOKEN");

/// Media type requested from the GitHub REST API
pub const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

pub const MAX_REPOSITORIES: usize = 12;

/// Forks are kept only with more stars than this
pub const FORK_STAR_MINIMUM: u32 = 5;

/// Shared by the "starred" filter and the star badge
pub const STARRED_THRESHOLD: u32 = 50;

pub const SEARCH_DEBOUNCE_MS: u32 = 300;

pub const ERROR_BANNER_MS: u32 = 5_000;

pub const THEME_STORAGE_KEY: &str = "theme";

const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Request parameters for the repository feed
#[derive(Debug, Clone, PartialEq)]
pub struct FeedConfig {
    pub api_host: String,
    pub username: String,
    pub token: Option<String>,
    pub max_repositories: usize,
    pub fork_star_minimum: u32,
    pub starred_threshold: u32,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            api_host: GITHUB_API_HOST.to_string(),
            username: GITHUB_USERNAME.to_string(),
            token: GITHUB_TOKEN.map(str::to_string),
            max_repositories: MAX_REPOSITORIES,
            fork_star_minimum: FORK_STAR_MINIMUM,
            starred_threshold: STARRED_THRESHOLD,
        }
    }
}

impl FeedConfig {
    pub fn repos_url(&self) -> String {
        format!(
            "https://{}/users/{}/repos",
            self.api_host,
            utf8_percent_encode(&self.username, PATH_SEGMENT)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repos_url() {
        let config = FeedConfig {
            username: "jane-doe".to_string(),
            ..FeedConfig::default()
        };
        assert_eq!(config.repos_url(), "https://api.github.com/users/jane-doe/repos");
    }

    #[test]
    fn test_repos_url_encodes_handle() {
        let config = FeedConfig {
            username: "a b/c".to_string(),
            ..FeedConfig::default()
        };
        assert_eq!(config.repos_url(), "https://api.github.com/users/a%20b%2Fc/repos");
    }
}
