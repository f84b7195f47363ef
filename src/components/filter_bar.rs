//! Filter Bar Component
//!
//! Status and language chips, minimum rating, sort order and a text
//! filter over the visible catalog.

use std::collections::BTreeSet;

use leptos::prelude::*;
use novilist_core::{ListFilter, NovelStatus, SortKey};

/// Language options (tag, label)
pub const LANGUAGES: &[(&str, &str)] = &[
    ("kr", "Korean"),
    ("cn", "Chinese"),
    ("jp", "Japanese"),
    ("en", "English"),
];

/// Minimum rating options; "" means any
const RATING_OPTIONS: &[(&str, &str)] = &[
    ("", "Any rating"),
    ("3", "3★ and up"),
    ("3.5", "3.5★ and up"),
    ("4", "4★ and up"),
    ("4.5", "4.5★ and up"),
];

/// Build a filter from UI selections. Nothing selected in a group means the
/// group is unconstrained.
pub fn build_filter(
    statuses: &BTreeSet<String>,
    languages: &BTreeSet<String>,
    min_rating: Option<f32>,
    text: &str,
) -> ListFilter {
    let mut filter = ListFilter::new();
    if !statuses.is_empty() {
        filter = filter.with_statuses(statuses.iter().cloned());
    }
    if !languages.is_empty() {
        filter = filter.with_languages(languages.iter().cloned());
    }
    if let Some(threshold) = min_rating {
        filter = filter.with_min_rating(threshold);
    }
    if !text.trim().is_empty() {
        filter = filter.with_query(text);
    }
    filter
}

fn toggle(set: RwSignal<BTreeSet<String>>, value: &str) {
    let value = value.to_string();
    set.update(|s| {
        if !s.remove(&value) {
            s.insert(value);
        }
    });
}

#[component]
pub fn FilterBar(
    statuses: RwSignal<BTreeSet<String>>,
    languages: RwSignal<BTreeSet<String>>,
    min_rating: RwSignal<Option<f32>>,
    sort: RwSignal<Option<SortKey>>,
    text: RwSignal<String>,
) -> impl IntoView {
    let reset = move |_| {
        statuses.set(BTreeSet::new());
        languages.set(BTreeSet::new());
        min_rating.set(None);
        sort.set(None);
        text.set(String::new());
    };

    view! {
        <div class="filter-bar">
            <input
                type="search"
                class="filter-text"
                placeholder="Filter these results..."
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
            />

            <div class="chip-row">
                {NovelStatus::ALL.iter().map(|status| {
                    let tag = status.as_str();
                    view! {
                        <button
                            type="button"
                            class="chip"
                            class:active=move || statuses.with(|s| s.contains(tag))
                            on:click=move |_| toggle(statuses, tag)
                        >
                            {status.label()}
                        </button>
                    }
                }).collect_view()}
            </div>

            <div class="chip-row">
                {LANGUAGES.iter().map(|(tag, label)| {
                    let tag = *tag;
                    view! {
                        <button
                            type="button"
                            class="chip"
                            class:active=move || languages.with(|s| s.contains(tag))
                            on:click=move |_| toggle(languages, tag)
                        >
                            {*label}
                        </button>
                    }
                }).collect_view()}
            </div>

            <select
                on:change=move |ev| min_rating.set(event_target_value(&ev).parse::<f32>().ok())
                prop:value=move || min_rating.get().map(|r| r.to_string()).unwrap_or_default()
            >
                {RATING_OPTIONS.iter().map(|(value, label)| view! {
                    <option value=*value>{*label}</option>
                }).collect_view()}
            </select>

            <select
                on:change=move |ev| sort.set(event_target_value(&ev).parse::<SortKey>().ok())
                prop:value=move || sort.get().map(|k| k.as_str().to_string()).unwrap_or_default()
            >
                <option value="">"Featured"</option>
                {SortKey::ALL.iter().map(|key| view! {
                    <option value=key.as_str()>{key.label()}</option>
                }).collect_view()}
            </select>

            <button type="button" class="link-btn" on:click=reset>"Reset"</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selection_is_unconstrained() {
        let filter = build_filter(&BTreeSet::new(), &BTreeSet::new(), None, "  ");
        assert!(filter.is_empty());
        assert_eq!(filter.statuses, None);
        assert_eq!(filter.languages, None);
    }

    #[test]
    fn test_selection_becomes_predicates() {
        let statuses: BTreeSet<String> = ["completed".to_string()].into();
        let languages: BTreeSet<String> = ["kr".to_string(), "jp".to_string()].into();
        let filter = build_filter(&statuses, &languages, Some(4.0), "tower");
        assert_eq!(filter.statuses, Some(statuses));
        assert_eq!(filter.languages, Some(languages));
        assert_eq!(filter.min_rating, Some(4.0));
        assert_eq!(filter.query.as_deref(), Some("tower"));
    }
}
