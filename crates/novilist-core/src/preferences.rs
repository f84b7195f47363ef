//! Preference Store
//!
//! Single owner of the reader's persisted preferences. State is read from
//! storage once on construction; every effective change is written back
//! and broadcast to subscribers.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::recent::RecentList;
use crate::storage::KeyValueStorage;

pub const THEME_KEY: &str = "novilist.theme";
pub const COLOR_SCHEME_KEY: &str = "novilist.color-scheme";
pub const RECENT_SEARCHES_KEY: &str = "novilist.recent-searches";

/// Light or dark page theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("unknown theme: {}", other)),
        }
    }
}

/// Color schemes offered in the profile panel
pub const COLOR_SCHEMES: &[(&str, &str)] = &[
    ("violet", "Violet"),
    ("ocean", "Ocean"),
    ("forest", "Forest"),
    ("sunset", "Sunset"),
];

/// True for a value listed in `COLOR_SCHEMES`
pub fn is_known_scheme(scheme: &str) -> bool {
    COLOR_SCHEMES.iter().any(|(value, _)| *value == scheme)
}

/// Point-in-time copy of all preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: ThemeMode,
    pub color_scheme: String,
    pub recent_searches: Vec<String>,
}

/// Broadcast to subscribers after an effective change
#[derive(Debug, Clone, PartialEq)]
pub enum PreferenceChange {
    Theme(ThemeMode),
    ColorScheme(String),
    RecentSearches(Vec<String>),
}

/// Handle returned by `subscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&PreferenceChange)>;

pub struct PreferenceStore<S: KeyValueStorage> {
    storage: S,
    theme: Cell<ThemeMode>,
    color_scheme: RefCell<String>,
    recent: RefCell<RecentList>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_id: Cell<u64>,
}

impl<S: KeyValueStorage> PreferenceStore<S> {
    /// Read all preferences from storage, substituting defaults for absent
    /// or unparseable values.
    pub fn load(storage: S, config: &AppConfig) -> Self {
        let theme = match storage.get(THEME_KEY) {
            Some(raw) => raw.parse::<ThemeMode>().unwrap_or_else(|e| {
                tracing::warn!(target: "novilist::prefs", error = %e, "stored theme ignored");
                ThemeMode::default()
            }),
            None => ThemeMode::default(),
        };

        let color_scheme = match storage.get(COLOR_SCHEME_KEY) {
            Some(raw) if is_known_scheme(raw.trim()) => raw.trim().to_string(),
            Some(raw) => {
                tracing::warn!(target: "novilist::prefs", value = %raw, "stored color scheme ignored");
                config.default_color_scheme.clone()
            }
            None => config.default_color_scheme.clone(),
        };

        let recent_entries = match storage.get(RECENT_SEARCHES_KEY) {
            Some(raw) => serde_json::from_str::<Vec<String>>(&raw).unwrap_or_else(|e| {
                tracing::warn!(target: "novilist::prefs", error = %e, "stored recent searches ignored");
                Vec::new()
            }),
            None => Vec::new(),
        };
        let recent = RecentList::from_entries(config.recent_search_cap, recent_entries);

        tracing::debug!(
            target: "novilist::prefs",
            theme = %theme,
            color_scheme = %color_scheme,
            recent = recent.len(),
            "preferences loaded"
        );

        Self {
            storage,
            theme: Cell::new(theme),
            color_scheme: RefCell::new(color_scheme),
            recent: RefCell::new(recent),
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
        }
    }

    pub fn snapshot(&self) -> Preferences {
        Preferences {
            theme: self.theme.get(),
            color_scheme: self.color_scheme.borrow().clone(),
            recent_searches: self.recent.borrow().to_vec(),
        }
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme.get()
    }

    pub fn color_scheme(&self) -> String {
        self.color_scheme.borrow().clone()
    }

    pub fn recent_searches(&self) -> Vec<String> {
        self.recent.borrow().to_vec()
    }

    // ========================
    // Setters
    // ========================

    pub fn set_theme(&self, theme: ThemeMode) {
        if self.theme.get() == theme {
            return;
        }
        self.theme.set(theme);
        self.persist(THEME_KEY, theme.as_str());
        self.notify(PreferenceChange::Theme(theme));
    }

    pub fn toggle_theme(&self) -> ThemeMode {
        let next = self.theme.get().toggled();
        self.set_theme(next);
        next
    }

    pub fn set_color_scheme(&self, scheme: &str) {
        let scheme = scheme.trim();
        if !is_known_scheme(scheme) {
            tracing::warn!(target: "novilist::prefs", scheme, "unknown color scheme ignored");
            return;
        }
        if *self.color_scheme.borrow() == scheme {
            return;
        }
        *self.color_scheme.borrow_mut() = scheme.to_string();
        self.persist(COLOR_SCHEME_KEY, scheme);
        self.notify(PreferenceChange::ColorScheme(scheme.to_string()));
    }

    /// Remember a search term (most recent first)
    pub fn record_search(&self, term: &str) {
        let changed = self.recent.borrow_mut().push(term);
        if changed {
            self.recent_changed();
        }
    }

    pub fn forget_search(&self, term: &str) {
        let changed = self.recent.borrow_mut().remove(term);
        if changed {
            self.recent_changed();
        }
    }

    pub fn clear_searches(&self) {
        let changed = self.recent.borrow_mut().clear();
        if changed {
            self.recent_changed();
        }
    }

    fn recent_changed(&self) {
        let entries = self.recent.borrow().to_vec();
        match serde_json::to_string(&entries) {
            Ok(json) => self.persist(RECENT_SEARCHES_KEY, &json),
            Err(e) => tracing::error!(target: "novilist::prefs", error = %e, "failed to encode recent searches"),
        }
        self.notify(PreferenceChange::RecentSearches(entries));
    }

    /// Write-through; a failed write keeps the in-memory value.
    fn persist(&self, key: &str, value: &str) {
        if let Err(e) = self.storage.set(key, value) {
            tracing::warn!(target: "novilist::prefs", key, error = %e, "preference not persisted");
        }
    }

    // ========================
    // Subscriptions
    // ========================

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&PreferenceChange) + 'static,
    {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        id
    }

    /// Returns false when the id was not subscribed
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(sub, _)| *sub != id);
        listeners.len() != before
    }

    fn notify(&self, change: PreferenceChange) {
        // Snapshot so listeners may subscribe/unsubscribe re-entrantly
        let listeners: Vec<_> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in listeners {
            listener(&change);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn store(storage: MemoryStorage) -> PreferenceStore<MemoryStorage> {
        PreferenceStore::load(storage, &AppConfig::default())
    }

    #[test]
    fn test_defaults_when_absent() {
        let prefs = store(MemoryStorage::new()).snapshot();
        assert_eq!(prefs.theme, ThemeMode::Light);
        assert_eq!(prefs.color_scheme, "violet");
        assert!(prefs.recent_searches.is_empty());
    }

    #[test]
    fn test_defaults_when_corrupted() {
        let storage = MemoryStorage::new()
            .with_value(THEME_KEY, "purple")
            .with_value(COLOR_SCHEME_KEY, "   ")
            .with_value(RECENT_SEARCHES_KEY, "[\"unterminated");
        let prefs = store(storage).snapshot();
        assert_eq!(prefs.theme, ThemeMode::Light);
        assert_eq!(prefs.color_scheme, "violet");
        assert!(prefs.recent_searches.is_empty());

        let storage = MemoryStorage::new().with_value(COLOR_SCHEME_KEY, "{\"x\":1}");
        assert_eq!(store(storage).color_scheme(), "violet");
    }

    #[test]
    fn test_unknown_scheme_is_rejected() {
        let storage = Rc::new(MemoryStorage::new());
        let prefs = PreferenceStore::load(storage.clone(), &AppConfig::default());
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        prefs.subscribe(move |_| counter.set(counter.get() + 1));

        prefs.set_color_scheme("neon");
        assert_eq!(prefs.color_scheme(), "violet");
        assert_eq!(storage.get(COLOR_SCHEME_KEY), None);
        assert_eq!(calls.get(), 0);

        prefs.set_color_scheme(" ocean ");
        assert_eq!(prefs.color_scheme(), "ocean");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_rehydrates_stored_values() {
        let storage = MemoryStorage::new()
            .with_value(THEME_KEY, "dark")
            .with_value(COLOR_SCHEME_KEY, "ocean")
            .with_value(RECENT_SEARCHES_KEY, r#"["b","a"]"#);
        let prefs = store(storage).snapshot();
        assert_eq!(prefs.theme, ThemeMode::Dark);
        assert_eq!(prefs.color_scheme, "ocean");
        assert_eq!(prefs.recent_searches, vec!["b", "a"]);
    }

    #[test]
    fn test_setters_write_through() {
        let storage = Rc::new(MemoryStorage::new());
        let prefs = PreferenceStore::load(storage.clone(), &AppConfig::default());
        prefs.toggle_theme();
        prefs.set_color_scheme("forest");
        prefs.record_search("tower");
        prefs.record_search("dungeon");

        assert_eq!(storage.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(storage.get(COLOR_SCHEME_KEY).as_deref(), Some("forest"));
        assert_eq!(
            storage.get(RECENT_SEARCHES_KEY).as_deref(),
            Some(r#"["dungeon","tower"]"#)
        );
    }

    #[test]
    fn test_subscribers_see_effective_changes_only() {
        let prefs = store(MemoryStorage::new());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let id = prefs.subscribe(move |change| sink.borrow_mut().push(change.clone()));

        prefs.set_theme(ThemeMode::Light); // unchanged
        prefs.set_theme(ThemeMode::Dark);
        prefs.record_search("orv");
        prefs.record_search("orv"); // already at front
        prefs.forget_search("missing");
        assert!(prefs.unsubscribe(id));
        prefs.set_color_scheme("sunset");

        assert_eq!(
            *seen.borrow(),
            vec![
                PreferenceChange::Theme(ThemeMode::Dark),
                PreferenceChange::RecentSearches(vec!["orv".to_string()]),
            ]
        );
        assert!(!prefs.unsubscribe(id));
    }

    #[test]
    fn test_failed_write_keeps_memory_value() {
        let prefs = store(MemoryStorage::read_only());
        prefs.set_theme(ThemeMode::Dark);
        assert_eq!(prefs.theme(), ThemeMode::Dark);
    }
}
