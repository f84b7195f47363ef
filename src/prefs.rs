//! Preference Bridge
//!
//! Owns the page's `PreferenceStore` and mirrors it into Leptos signals
//! through a subscription, so components read signals and write through
//! the store's setters only.

use std::cell::OnceCell;

use leptos::prelude::*;
use novilist_core::{AppConfig, PreferenceChange, PreferenceStore, ThemeMode};

use crate::storage::LocalStorage;

thread_local! {
    static STORE: OnceCell<PreferenceStore<LocalStorage>> = const { OnceCell::new() };
}

/// Run `f` against the store; `None` before `init`
fn with_store<R>(f: impl FnOnce(&PreferenceStore<LocalStorage>) -> R) -> Option<R> {
    STORE.with(|cell| cell.get().map(f))
}

/// Reactive view of the preference store, provided via context
#[derive(Clone, Copy)]
pub struct PrefsContext {
    pub theme: ReadSignal<ThemeMode>,
    pub color_scheme: ReadSignal<String>,
    pub recent_searches: ReadSignal<Vec<String>>,
}

impl PrefsContext {
    /// Load preferences from local storage and wire up the signal mirror
    pub fn init(config: &AppConfig) -> Self {
        STORE.with(|cell| {
            if cell.get().is_none() {
                let _ = cell.set(PreferenceStore::load(LocalStorage, config));
            }
        });

        let snapshot = with_store(|store| store.snapshot());
        let (theme, set_theme) = signal(snapshot.as_ref().map(|s| s.theme).unwrap_or_default());
        let (color_scheme, set_color_scheme) = signal(
            snapshot
                .as_ref()
                .map(|s| s.color_scheme.clone())
                .unwrap_or_else(|| config.default_color_scheme.clone()),
        );
        let (recent_searches, set_recent_searches) =
            signal(snapshot.map(|s| s.recent_searches).unwrap_or_default());

        with_store(|store| {
            store.subscribe(move |change| match change {
                PreferenceChange::Theme(mode) => set_theme.set(*mode),
                PreferenceChange::ColorScheme(scheme) => set_color_scheme.set(scheme.clone()),
                PreferenceChange::RecentSearches(list) => set_recent_searches.set(list.clone()),
            })
        });

        Self {
            theme,
            color_scheme,
            recent_searches,
        }
    }

    pub fn toggle_theme(&self) {
        with_store(|store| store.toggle_theme());
    }

    pub fn set_color_scheme(&self, scheme: &str) {
        with_store(|store| store.set_color_scheme(scheme));
    }

    pub fn record_search(&self, term: &str) {
        with_store(|store| store.record_search(term));
    }

    pub fn forget_search(&self, term: &str) {
        with_store(|store| store.forget_search(term));
    }

    pub fn clear_searches(&self) {
        with_store(|store| store.clear_searches());
    }
}

/// Reflect theme and color scheme onto `<html data-theme=.. data-scheme=..>`
pub fn apply_to_document(theme: ThemeMode, scheme: &str) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let _ = root.set_attribute("data-theme", theme.as_str());
    let _ = root.set_attribute("data-scheme", scheme);
}
