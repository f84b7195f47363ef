//! Preference store against shared in-memory storage: write, reload, observe.

use std::cell::RefCell;
use std::rc::Rc;

use novilist_core::preferences::{COLOR_SCHEME_KEY, RECENT_SEARCHES_KEY, THEME_KEY};
use novilist_core::{
    AppConfig, KeyValueStorage, MemoryStorage, PreferenceChange, PreferenceStore, ThemeMode,
};

#[test]
fn preferences_survive_a_reload() {
    let storage = Rc::new(MemoryStorage::new());
    let config = AppConfig::default();

    {
        let prefs = PreferenceStore::load(storage.clone(), &config);
        prefs.set_theme(ThemeMode::Dark);
        prefs.set_color_scheme("ocean");
        for term in ["A", "B", "C", "D", "E", "F"] {
            prefs.record_search(term);
        }
    }

    let reloaded = PreferenceStore::load(storage.clone(), &config).snapshot();
    assert_eq!(reloaded.theme, ThemeMode::Dark);
    assert_eq!(reloaded.color_scheme, "ocean");
    assert_eq!(reloaded.recent_searches, vec!["F", "E", "D", "C", "B"]);
}

#[test]
fn smaller_cap_truncates_stored_history() {
    let storage = MemoryStorage::new().with_value(RECENT_SEARCHES_KEY, r#"["e","d","c","b","a"]"#);
    let config = AppConfig { recent_search_cap: 3, ..AppConfig::default() };
    let prefs = PreferenceStore::load(storage, &config);
    assert_eq!(prefs.recent_searches(), vec!["e", "d", "c"]);
}

#[test]
fn corrupted_values_fall_back_to_defaults() {
    let storage = MemoryStorage::new()
        .with_value(THEME_KEY, "{\"mode\":\"dark\"}")
        .with_value(RECENT_SEARCHES_KEY, "42");
    let prefs = PreferenceStore::load(storage, &AppConfig::default()).snapshot();
    assert_eq!(prefs.theme, ThemeMode::Light);
    assert!(prefs.recent_searches.is_empty());
}

#[test]
fn listeners_observe_every_setter() {
    let storage = Rc::new(MemoryStorage::new());
    let prefs = PreferenceStore::load(storage.clone(), &AppConfig::default());
    let log = Rc::new(RefCell::new(Vec::new()));

    let sink = log.clone();
    prefs.subscribe(move |change| sink.borrow_mut().push(change.clone()));

    prefs.toggle_theme();
    prefs.set_color_scheme("forest");
    prefs.record_search("dungeon");
    prefs.clear_searches();
    prefs.clear_searches();

    assert_eq!(
        *log.borrow(),
        vec![
            PreferenceChange::Theme(ThemeMode::Dark),
            PreferenceChange::ColorScheme("forest".to_string()),
            PreferenceChange::RecentSearches(vec!["dungeon".to_string()]),
            PreferenceChange::RecentSearches(Vec::new()),
        ]
    );
    assert_eq!(storage.get(COLOR_SCHEME_KEY).as_deref(), Some("forest"));
    assert_eq!(storage.get(RECENT_SEARCHES_KEY).as_deref(), Some("[]"));
}
