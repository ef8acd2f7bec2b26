//! Repository Feed Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::config::FeedConfig;
use crate::error::FeedError;
use crate::feed;
use crate::models::{FeedStatus, RepoCategory, Repository};

/// Feed state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct FeedState {
    /// Curated listing from the last successful fetch
    pub repositories: Vec<Repository>,
    /// Derived view currently rendered
    pub filtered: Vec<Repository>,
    pub search: String,
    pub category: RepoCategory,
    pub status: FeedStatus,
    /// Bumped by every load; responses for older generations are dropped
    pub generation: u32,
}

/// Type alias for the store
pub type FeedStore = Store<FeedState>;

// ========================
// Store Helper Functions
// ========================

/// Recompute the derived view from the canonical list; returns its length
pub fn store_apply_filter(store: &FeedStore, starred_threshold: u32) -> usize {
    let search = store.search().get_untracked();
    let category = store.category().get_untracked();
    let filtered = store
        .repositories()
        .with_untracked(|repos| feed::filter_repositories(repos, &search, category, starred_threshold));
    let count = filtered.len();
    store.filtered().set(filtered);
    count
}

/// Replace the canonical list wholesale and refresh the derived view
pub fn store_replace_repositories(store: &FeedStore, repos: Vec<Repository>, starred_threshold: u32) {
    store.repositories().set(repos);
    store_apply_filter(store, starred_threshold);
}

/// Apply the outcome of a feed request.
///
/// Results for anything but the newest generation are dropped; returns
/// whether the result was applied.
pub fn store_apply_response(
    store: &FeedStore,
    generation: u32,
    result: Result<Vec<Repository>, FeedError>,
    config: &FeedConfig,
) -> bool {
    if store.generation().get_untracked() != generation {
        log::debug!("[FEED] Discarding stale response for generation {}", generation);
        return false;
    }
    match result {
        Ok(repos) => {
            let fetched = repos.len();
            let curated = feed::curate(repos, config);
            log::info!("[FEED] Fetched {} repositories, showing {}", fetched, curated.len());
            store_replace_repositories(store, curated, config.starred_threshold);
            store.status().set(FeedStatus::Ready);
        }
        Err(e) => {
            log::error!("[FEED] Failed to load repositories: {}", e);
            store.status().set(FeedStatus::Failed(e.to_string()));
        }
    }
    true
}

/// Start a new load generation and show the loading state
pub fn store_begin_load(store: &FeedStore) -> u32 {
    let generation = store.generation().get_untracked().wrapping_add(1);
    store.generation().set(generation);
    store.status().set(FeedStatus::Loading);
    generation
}

/// Fetch, curate and publish the repository listing.
///
/// Safe to call again while a request is in flight (retry); only the
/// newest request's result is applied.
pub fn load_repositories(store: FeedStore, config: FeedConfig) {
    let generation = store_begin_load(&store);
    log::info!("[FEED] Loading repositories for {} (generation {})", config.username, generation);

    spawn_local(async move {
        let result = api::fetch_repositories(&config).await;
        store_apply_response(&store, generation, result, &config);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn make_repo(name: &str, stars: u32, days_old: i64) -> Repository {
        let base = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        Repository {
            name: name.to_string(),
            description: None,
            language: Some("Rust".to_string()),
            stars,
            fork: false,
            updated_at: base - Duration::days(days_old),
            html_url: format!("https://github.com/u/{}", name),
        }
    }

    fn names(repos: &[Repository]) -> Vec<&str> {
        repos.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_stale_generation_is_dropped() {
        Owner::new().with(|| {
            let store = Store::new(FeedState::default());
            let config = FeedConfig::default();
            let first = store_begin_load(&store);
            let second = store_begin_load(&store);
            assert_ne!(first, second);

            assert!(!store_apply_response(&store, first, Ok(vec![make_repo("old", 1, 0)]), &config));
            assert_eq!(store.status().get_untracked(), FeedStatus::Loading);
            assert!(store.repositories().get_untracked().is_empty());

            assert!(store_apply_response(&store, second, Ok(vec![make_repo("new", 1, 0)]), &config));
            assert_eq!(store.status().get_untracked(), FeedStatus::Ready);
            assert_eq!(names(&store.repositories().get_untracked()), vec!["new"]);
        });
    }

    #[test]
    fn test_failure_then_retry() {
        Owner::new().with(|| {
            let store = Store::new(FeedState::default());
            let config = FeedConfig::default();

            let generation = store_begin_load(&store);
            let err = FeedError::Status { status: 403, message: "API rate limit exceeded".to_string() };
            store_apply_response(&store, generation, Err(err), &config);
            assert_eq!(
                store.status().get_untracked(),
                FeedStatus::Failed("GitHub API error (403): API rate limit exceeded".to_string())
            );

            let retry = store_begin_load(&store);
            assert_eq!(store.status().get_untracked(), FeedStatus::Loading);
            store_apply_response(&store, retry, Ok(vec![make_repo("a", 1, 0)]), &config);
            assert_eq!(store.status().get_untracked(), FeedStatus::Ready);
            assert_eq!(store.filtered().get_untracked().len(), 1);
        });
    }

    #[test]
    fn test_success_replaces_lists_and_keeps_search() {
        Owner::new().with(|| {
            let store = Store::new(FeedState::default());
            let config = FeedConfig::default();

            let generation = store_begin_load(&store);
            store_apply_response(
                &store,
                generation,
                Ok(vec![make_repo("alpha", 1, 2), make_repo("beta", 1, 1)]),
                &config,
            );
            store.search().set("alp".to_string());
            store_apply_filter(&store, config.starred_threshold);
            assert_eq!(names(&store.filtered().get_untracked()), vec!["alpha"]);

            let generation = store_begin_load(&store);
            store_apply_response(
                &store,
                generation,
                Ok(vec![make_repo("alpine", 1, 0), make_repo("gamma", 1, 1), make_repo("alpha", 900, 3)]),
                &config,
            );
            assert_eq!(names(&store.repositories().get_untracked()), vec!["alpine", "gamma", "alpha"]);
            assert_eq!(names(&store.filtered().get_untracked()), vec!["alpine", "alpha"]);
            assert_eq!(store.search().get_untracked(), "alp");
            assert_eq!(store.filtered().get_untracked()[1].stars, 900);
        });
    }
}
