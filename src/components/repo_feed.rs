//! Repository Feed Component
//!
//! Search box, category filter and the repository grid with its
//! loading, error and empty states.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use reactive_stores::Store;
use web_sys::KeyboardEvent;

use crate::analytics;
use crate::api;
use crate::components::RepoCard;
use crate::config::{FeedConfig, SEARCH_DEBOUNCE_MS};
use crate::feed;
use crate::models::{FeedStatus, RepoCategory};
use crate::store::{load_repositories, store_apply_filter, FeedState, FeedStateStoreFields};

#[component]
pub fn RepoFeed() -> impl IntoView {
    let store = Store::new(FeedState::default());

    let config = StoredValue::new(FeedConfig::default());
    let threshold = config.with_value(|c| c.starred_threshold);
    let load = move || load_repositories(store, config.get_value());

    // Load on mount
    Effect::new(move |_| load());

    // Recompute the derived view and announce the result
    let refresh = move || {
        let count = store_apply_filter(&store, threshold);
        dom_a11y::announce(&feed::found_message(count));
    };

    // Only the last keystroke inside the quiet period is applied
    let pending_search = StoredValue::new_local(None::<Timeout>);
    let on_search_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        let timer = Timeout::new(SEARCH_DEBOUNCE_MS, move || {
            store.search().set(value);
            refresh();
        });
        pending_search.set_value(Some(timer));
    };

    let search_ref = NodeRef::<leptos::html::Input>::new();
    let on_search_keydown = move |ev: KeyboardEvent| {
        if ev.key() != "Escape" {
            return;
        }
        ev.prevent_default();
        pending_search.set_value(None);
        if let Some(input) = search_ref.get() {
            input.set_value("");
            let _ = input.blur();
        }
        store.search().set(String::new());
        refresh();
    };

    let select_category = move |category: RepoCategory| {
        analytics::track("filter_changed", category.as_str());
        store.category().set(category);
        refresh();
    };

    view! {
        <div class="repos-toolbar">
            <input
                id="repo-search"
                class="repo-search"
                type="search"
                placeholder="Search repositories..."
                aria-label="Search repositories"
                autocomplete="off"
                node_ref=search_ref
                on:input=on_search_input
                on:keydown=on_search_keydown
            />
            <div class="repo-filters" role="group" aria-label="Filter repositories">
                {RepoCategory::ALL.into_iter().map(|category| {
                    let is_active = move || store.category().get() == category;
                    view! {
                        <button
                            type="button"
                            class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                            data-filter=category.as_str()
                            aria-pressed=move || is_active().to_string()
                            on:click=move |_| select_category(category)
                        >
                            {category.label()}
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>

        {move || match store.status().get() {
            FeedStatus::Loading => view! {
                <div id="repos-loading" class="repos-loading" role="status">
                    <span class="spinner" aria-hidden="true"></span>
                    "Loading repositories..."
                </div>
            }.into_any(),
            FeedStatus::Failed(message) => view! {
                <div id="repos-error" class="repos-error" role="alert">
                    <p>"Could not load repositories."</p>
                    <p class="error-detail">{message}</p>
                    <button type="button" class="retry-btn" on:click=move |_| load()>
                        "Try again"
                    </button>
                </div>
            }.into_any(),
            FeedStatus::Ready => {
                let now = api::now();
                view! {
                    <Show
                        when=move || store.filtered().with(|repos| !repos.is_empty())
                        fallback=|| view! {
                            <div id="repos-empty" class="repos-empty">
                                <p>"No repositories match your search."</p>
                            </div>
                        }
                    >
                        <div id="repos-grid" class="repos-grid">
                            <For
                                each=move || store.filtered().get()
                                key=|repo| repo.clone()
                                children=move |repo| view! { <RepoCard repo=repo now=now /> }
                            />
                        </div>
                    </Show>
                }.into_any()
            }
        }}
    }
}
