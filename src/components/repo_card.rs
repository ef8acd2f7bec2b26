//! Repository Card Component

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use web_sys::KeyboardEvent;

use crate::analytics;
use crate::api;
use crate::components::is_activation_key;
use crate::config::STARRED_THRESHOLD;
use crate::feed;
use crate::models::Repository;

fn open_repository(url: &str) {
    analytics::track("repo_opened", url);
    api::open_external(url);
}

/// Card for one repository; activating it opens the repository page
#[component]
pub fn RepoCard(repo: Repository, now: DateTime<Utc>) -> impl IntoView {
    let Repository {
        name,
        description,
        language,
        stars,
        updated_at,
        html_url,
        ..
    } = repo;

    let label = format!("Open {} on GitHub", name);
    let click_url = html_url.clone();
    let star_badge = feed::shows_star_badge(stars, STARRED_THRESHOLD).then(|| {
        view! {
            <span class="repo-stars" aria-label=format!("{} stars", stars)>
                "★ " {feed::format_star_count(stars)}
            </span>
        }
    });

    view! {
        <article
            class="repo-card"
            tabindex="0"
            role="link"
            aria-label=label
            on:click=move |_| open_repository(&click_url)
            on:keydown=move |ev: KeyboardEvent| {
                if is_activation_key(&ev) {
                    ev.prevent_default();
                    open_repository(&html_url);
                }
            }
        >
            <div class="repo-header">
                <h3 class="repo-name">{name}</h3>
                {star_badge}
            </div>
            {description.map(|text| view! { <p class="repo-description">{text}</p> })}
            <div class="repo-meta">
                {language.map(|lang| view! { <span class="repo-language">{lang}</span> })}
                <span class="repo-updated">{format!("Updated {}", feed::relative_time(updated_at, now))}</span>
            </div>
        </article>
    }
}
