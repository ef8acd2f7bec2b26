//! Frontend Models
//!
//! Repository records decoded from the GitHub API, the bundled project
//! catalog records, and the small enums shared across components.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ThemeParseError;

/// Public repository (matches the GitHub `/users/{user}/repos` payload).
/// The whole record is the render key, so any changed field re-renders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    #[serde(rename = "stargazers_count")]
    pub stars: u32,
    pub fork: bool,
    pub updated_at: DateTime<Utc>,
    pub html_url: String,
}

/// Curated project bundled with the site
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub url: &'static str,
    pub featured: bool,
    pub details: ProjectDetails,
}

/// Long-form content shown in the project detail dialog
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDetails {
    pub overview: &'static str,
    pub features: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub challenges: &'static str,
    pub impact: &'static str,
    /// Label -> value pairs, rendered as a grid when present
    pub metrics: Option<&'static [(&'static str, &'static str)]>,
}

/// Color theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

/// Repository category filter (`data-filter` value on the filter buttons)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RepoCategory {
    #[default]
    All,
    Starred,
}

impl RepoCategory {
    pub const ALL: [RepoCategory; 2] = [RepoCategory::All, RepoCategory::Starred];

    pub fn as_str(self) -> &'static str {
        match self {
            RepoCategory::All => "all",
            RepoCategory::Starred => "starred",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RepoCategory::All => "All",
            RepoCategory::Starred => "Starred",
        }
    }
}

/// Loading state of the repository feed
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FeedStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}
