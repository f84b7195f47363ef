//! Header Bar Component
//!
//! Brand, search, theme toggle and the notification/profile panel toggles.

use leptos::prelude::*;
use novilist_core::ThemeMode;

use crate::components::{NotificationPanel, ProfilePanel, SearchBox};
use crate::context::{AppContext, OpenPanel};
use crate::prefs::PrefsContext;
use crate::route::Page;
use crate::store::{unread_count, use_app_store, AppStateStoreFields};

#[component]
pub fn HeaderBar() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let prefs = expect_context::<PrefsContext>();
    let store = use_app_store();

    let unread = Memo::new(move |_| store.notifications().with(|n| unread_count(n)));
    let initial = move || {
        store
            .session()
            .with(|s| s.as_ref().and_then(|s| s.display_name.chars().next()))
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_string())
    };

    view! {
        <header class="header-bar">
            <a class="brand" href="#/" on:click=move |ev| {
                ev.prevent_default();
                ctx.navigate(Page::default());
            }>
                "NoviList"
            </a>

            <SearchBox />

            <div class="header-actions">
                <button
                    class="icon-btn"
                    title=move || match prefs.theme.get() {
                        ThemeMode::Light => "Switch to dark mode",
                        ThemeMode::Dark => "Switch to light mode",
                    }
                    on:click=move |_| prefs.toggle_theme()
                >
                    {move || match prefs.theme.get() {
                        ThemeMode::Light => "🌙",
                        ThemeMode::Dark => "☀️",
                    }}
                </button>

                <button
                    class="icon-btn"
                    class:active=move || ctx.open_panel.get() == OpenPanel::Notifications
                    title="Notifications"
                    on:click=move |_| ctx.toggle_panel(OpenPanel::Notifications)
                >
                    "🔔"
                    <Show when=move || { unread.get() > 0 }>
                        <span class="badge">{move || unread.get()}</span>
                    </Show>
                </button>

                <button
                    class="avatar-btn"
                    class:active=move || ctx.open_panel.get() == OpenPanel::Profile
                    title="Profile"
                    on:click=move |_| ctx.toggle_panel(OpenPanel::Profile)
                >
                    {initial}
                </button>
            </div>

            {move || match ctx.open_panel.get() {
                OpenPanel::None => ().into_any(),
                OpenPanel::Notifications => view! { <NotificationPanel /> }.into_any(),
                OpenPanel::Profile => view! { <ProfilePanel /> }.into_any(),
            }}
        </header>
    }
}
