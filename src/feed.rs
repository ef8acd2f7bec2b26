//! Repository Feed Pipeline
//!
//! Pure functions behind the repository section: curation of the fetched
//! listing, search/category filtering and the card text formatting.

use chrono::{DateTime, Utc};

use crate::config::FeedConfig;
use crate::models::{RepoCategory, Repository};

/// Drop low-signal forks, newest first, capped at `max_repositories`
pub fn curate(mut repos: Vec<Repository>, config: &FeedConfig) -> Vec<Repository> {
    repos.retain(|repo| !repo.fork || repo.stars > config.fork_star_minimum);
    repos.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    repos.truncate(config.max_repositories);
    repos
}

/// Case-insensitive substring match on name, description or language.
/// `needle` must already be lowercase; empty matches everything.
fn matches_search(repo: &Repository, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let hit = |field: &str| field.to_lowercase().contains(needle);
    hit(repo.name.as_str())
        || repo.description.as_deref().map_or(false, hit)
        || repo.language.as_deref().map_or(false, hit)
}

fn matches_category(repo: &Repository, category: RepoCategory, starred_threshold: u32) -> bool {
    match category {
        RepoCategory::All => true,
        RepoCategory::Starred => repo.stars > starred_threshold,
    }
}

/// Derived view: repositories matching both the search text and category
pub fn filter_repositories(
    repos: &[Repository],
    search: &str,
    category: RepoCategory,
    starred_threshold: u32,
) -> Vec<Repository> {
    let needle = search.trim().to_lowercase();
    repos
        .iter()
        .filter(|repo| matches_search(repo, &needle) && matches_category(repo, category, starred_threshold))
        .cloned()
        .collect()
}

pub fn shows_star_badge(stars: u32, starred_threshold: u32) -> bool {
    stars > starred_threshold
}

/// Abbreviated star count: `1.5k`, `2M`, or the plain integer below 1000
pub fn format_star_count(stars: u32) -> String {
    fn one_decimal(value: f64, suffix: &str) -> String {
        let text = format!("{:.1}", value);
        let text = text.strip_suffix(".0").unwrap_or(&text);
        format!("{}{}", text, suffix)
    }
    if stars >= 1_000_000 {
        one_decimal(stars as f64 / 1_000_000.0, "M")
    } else if stars >= 1_000 {
        one_decimal(stars as f64 / 1_000.0, "k")
    } else {
        stars.to_string()
    }
}

/// "today", "3 days ago", "1 week ago", ... for a whole-day difference
pub fn relative_days(days: u64) -> String {
    fn plural(n: u64, unit: &str) -> String {
        if n == 1 {
            format!("1 {} ago", unit)
        } else {
            format!("{} {}s ago", n, unit)
        }
    }
    match days {
        0 => "today".to_string(),
        1 => "yesterday".to_string(),
        2..=6 => format!("{} days ago", days),
        7..=29 => plural(days / 7, "week"),
        30..=364 => plural(days / 30, "month"),
        _ => plural(days / 365, "year"),
    }
}

/// Relative phrase for `then`, using the absolute day difference to `now`
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    relative_days((now - then).num_days().unsigned_abs())
}

/// Screen-reader summary after a filter pass
pub fn found_message(count: usize) -> String {
    if count == 1 {
        "1 repository found".to_string()
    } else {
        format!("{} repositories found", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn make_repo(name: &str, stars: u32, fork: bool, days_old: i64) -> Repository {
        let base = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        Repository {
            name: name.to_string(),
            description: Some(format!("{} description", name)),
            language: Some("Rust".to_string()),
            stars,
            fork,
            updated_at: base - Duration::days(days_old),
            html_url: format!("https://github.com/u/{}", name),
        }
    }

    #[test]
    fn test_curate_drops_unpopular_forks() {
        let repos = vec![
            make_repo("own", 0, false, 1),
            make_repo("fork-5", 5, true, 2),
            make_repo("fork-6", 6, true, 3),
        ];
        let curated = curate(repos, &FeedConfig::default());
        let names: Vec<_> = curated.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["own", "fork-6"]);
    }

    #[test]
    fn test_curate_sorts_and_caps() {
        let repos: Vec<_> = (0..20).map(|i| make_repo(&format!("r{}", i), 0, false, (i * 7) % 20)).collect();
        let curated = curate(repos, &FeedConfig::default());
        assert_eq!(curated.len(), 12);
        assert!(curated.windows(2).all(|w| w[0].updated_at >= w[1].updated_at));
        assert!(curated.iter().all(|r| !r.fork || r.stars > 5));
    }

    #[test]
    fn test_filter_matches_each_field_case_insensitively() {
        let mut repo = make_repo("Tokenizer", 0, false, 0);
        repo.description = Some("Fast LEXER".to_string());
        repo.language = Some("Haskell".to_string());
        let repos = vec![repo, make_repo("other", 0, false, 0)];

        for needle in ["token", "lexer", "HASK"] {
            let hits = filter_repositories(&repos, needle, RepoCategory::All, 50);
            assert_eq!(hits.len(), 1, "needle {}", needle);
            assert_eq!(hits[0].name, "Tokenizer");
        }
    }

    #[test]
    fn test_filter_handles_missing_fields() {
        let mut repo = make_repo("bare", 0, false, 0);
        repo.description = None;
        repo.language = None;
        assert!(filter_repositories(&[repo.clone()], "rust", RepoCategory::All, 50).is_empty());
        assert_eq!(filter_repositories(&[repo], "BAR", RepoCategory::All, 50).len(), 1);
    }

    #[test]
    fn test_empty_search_returns_category_subset() {
        let repos = vec![
            make_repo("a", 51, false, 0),
            make_repo("b", 50, false, 1),
            make_repo("c", 900, false, 2),
        ];
        assert_eq!(filter_repositories(&repos, "", RepoCategory::All, 50), repos);
        let starred = filter_repositories(&repos, "  ", RepoCategory::Starred, 50);
        let names: Vec<_> = starred.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn test_filtered_view_is_subset_satisfying_both_predicates() {
        let repos: Vec<_> = (0..10).map(|i| make_repo(&format!("repo-{}", i), i * 20, false, i as i64)).collect();
        for search in ["", "repo", "1", "description", "zzz"] {
            for category in RepoCategory::ALL {
                let view = filter_repositories(&repos, search, category, 50);
                for repo in &view {
                    assert!(repos.contains(repo));
                    assert!(matches_search(repo, &search.to_lowercase()));
                    assert!(matches_category(repo, category, 50));
                }
            }
        }
    }

    #[test]
    fn test_star_count_format() {
        assert_eq!(format_star_count(0), "0");
        assert_eq!(format_star_count(999), "999");
        assert_eq!(format_star_count(1000), "1k");
        assert_eq!(format_star_count(1500), "1.5k");
        assert_eq!(format_star_count(12_340), "12.3k");
        assert_eq!(format_star_count(1_000_000), "1M");
        assert_eq!(format_star_count(2_460_000), "2.5M");
    }

    #[test]
    fn test_star_badge_threshold() {
        assert!(!shows_star_badge(50, 50));
        assert!(shows_star_badge(51, 50));
    }

    #[test]
    fn test_relative_days_boundaries() {
        assert_eq!(relative_days(0), "today");
        assert_eq!(relative_days(1), "yesterday");
        assert_eq!(relative_days(2), "2 days ago");
        assert_eq!(relative_days(6), "6 days ago");
        assert_eq!(relative_days(7), "1 week ago");
        assert_eq!(relative_days(14), "2 weeks ago");
        assert_eq!(relative_days(29), "4 weeks ago");
        assert_eq!(relative_days(30), "1 month ago");
        assert_eq!(relative_days(364), "12 months ago");
        assert_eq!(relative_days(365), "1 year ago");
        assert_eq!(relative_days(800), "2 years ago");
    }

    #[test]
    fn test_relative_time_uses_absolute_difference() {
        let now = Utc.with_ymd_and_hms(2024, 6, 10, 0, 0, 0).unwrap();
        assert_eq!(relative_time(now - Duration::hours(5), now), "today");
        assert_eq!(relative_time(now - Duration::days(3), now), "3 days ago");
        assert_eq!(relative_time(now + Duration::days(3), now), "3 days ago");
    }

    #[test]
    fn test_found_message() {
        assert_eq!(found_message(0), "0 repositories found");
        assert_eq!(found_message(1), "1 repository found");
        assert_eq!(found_message(7), "7 repositories found");
    }
}
