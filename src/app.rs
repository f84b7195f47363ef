//! NoviList Frontend App
//!
//! Root component: provides the store and contexts, does the initial loads
//! and renders the current page.

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use novilist_core::AppConfig;
use reactive_stores::Store;
use rolling_logger::LogBuffer;

use crate::commands;
use crate::components::{AuthPage, BrowsePage, HeaderBar, NovelDetail, ToastStack};
use crate::context::AppContext;
use crate::prefs::{self, PrefsContext};
use crate::route::{self, Page};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App(config: AppConfig, logs: LogBuffer) -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let ctx = AppContext::new(route::current_page(), config.toast_ms, logs);
    provide_context(ctx);

    let prefs_ctx = PrefsContext::init(&config);
    provide_context(prefs_ctx);

    Effect::new(move |_| {
        let theme = prefs_ctx.theme.get();
        prefs_ctx.color_scheme.with(|scheme| prefs::apply_to_document(theme, scheme));
    });

    // back/forward and hand-edited URLs
    let hash_listener = window_event_listener(ev::hashchange, move |_| ctx.sync_from_location());
    on_cleanup(move || hash_listener.remove());

    spawn_local(async move {
        match commands::list_novels().await {
            Ok(novels) => {
                tracing::info!(target: "novilist::app", count = novels.len(), "catalog loaded");
                *store.novels().write() = novels;
            }
            Err(e) => ctx.report(&e),
        }
        *store.novels_loaded().write() = true;
    });

    spawn_local(async move {
        match commands::list_notifications().await {
            Ok(feed) => *store.notifications().write() = feed,
            Err(e) => ctx.report(&e),
        }
    });

    spawn_local(async move {
        match commands::current_session().await {
            Ok(session) => *store.session().write() = session,
            Err(e) => ctx.report(&e),
        }
    });

    view! {
        <div class="app-layout">
            <HeaderBar />
            <main class="main-content">
                {move || match ctx.page.get() {
                    Page::Browse { query } => view! { <BrowsePage query=query /> }.into_any(),
                    Page::Novel(id) => view! { <NovelDetail novel_id=id /> }.into_any(),
                    Page::SignIn => view! { <AuthPage /> }.into_any(),
                }}
            </main>
            <ToastStack />
        </div>
    }
}
