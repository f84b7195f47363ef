//! Profile Panel Component
//!
//! Account summary, followed novels, appearance settings, recent searches
//! and a diagnostics view of recent log records.

use leptos::prelude::*;
use leptos::task::spawn_local;
use novilist_core::preferences::COLOR_SCHEMES;
use novilist_core::ThemeMode;

use crate::commands;
use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::prefs::PrefsContext;
use crate::route::Page;
use crate::store::{use_app_store, AppStateStoreFields};

const DIAGNOSTIC_LINES: usize = 20;

#[component]
pub fn ProfilePanel() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let prefs = expect_context::<PrefsContext>();
    let store = use_app_store();

    let followed = Memo::new(move |_| {
        let following = store
            .session()
            .with(|s| s.as_ref().map(|s| s.following.clone()).unwrap_or_default());
        store.novels().with(|all| {
            following
                .iter()
                .filter_map(|id| all.iter().find(|n| n.id == *id))
                .map(|n| (n.id, n.title.clone()))
                .collect::<Vec<_>>()
        })
    });

    let sign_out = move |_| {
        spawn_local(async move {
            match commands::logout().await {
                Ok(()) => {
                    *store.session().write() = None;
                    ctx.close_panels();
                    ctx.info("Signed out");
                }
                Err(e) => ctx.report(&e),
            }
        });
    };

    let (log_tick, set_log_tick) = signal(0u32);
    let log_lines = move || {
        log_tick.track();
        ctx.logs.with_value(|buffer| buffer.latest(DIAGNOSTIC_LINES))
    };

    view! {
        <div class="dropdown-panel profile-panel">
            {move || match store.session().get() {
                Some(session) => view! {
                    <section class="profile-head">
                        <strong>{session.display_name.clone()}</strong>
                        <span class="muted">{format!("@{}", session.username)}</span>
                        <span class="muted">{format!("Joined {}", session.joined_at.get(..10).unwrap_or(&session.joined_at))}</span>
                    </section>
                }
                .into_any(),
                None => view! {
                    <section class="profile-head">
                        <p>"You're browsing as a guest."</p>
                        <button class="primary-btn" on:click=move |_| ctx.navigate(Page::SignIn)>
                            "Sign in"
                        </button>
                    </section>
                }
                .into_any(),
            }}

            <Show when=move || store.session().with(|s| s.is_some())>
                <section>
                    <h4>"Following"</h4>
                    <Show
                        when=move || !followed.with(|f| f.is_empty())
                        fallback=|| view! { <p class="muted">"Not following anything yet."</p> }
                    >
                        <ul class="followed-list">
                            <For
                                each=move || followed.get()
                                key=|(id, _)| *id
                                children=move |(id, title)| view! {
                                    <li>
                                        <a href="#" on:click=move |ev| {
                                            ev.prevent_default();
                                            ctx.navigate(Page::Novel(id));
                                        }>{title}</a>
                                    </li>
                                }
                            />
                        </ul>
                    </Show>
                </section>
            </Show>

            <section>
                <h4>"Appearance"</h4>
                <label class="setting">
                    "Dark mode"
                    <input
                        type="checkbox"
                        prop:checked=move || prefs.theme.get() == ThemeMode::Dark
                        on:change=move |_| prefs.toggle_theme()
                    />
                </label>
                <label class="setting">
                    "Color scheme"
                    <select
                        on:change=move |ev| prefs.set_color_scheme(&event_target_value(&ev))
                        prop:value=move || prefs.color_scheme.get()
                    >
                        {COLOR_SCHEMES.iter().map(|(value, label)| view! {
                            <option value=*value>{*label}</option>
                        }).collect_view()}
                    </select>
                </label>
            </section>

            <section>
                <h4>"Recent searches"</h4>
                <Show
                    when=move || !prefs.recent_searches.with(|r| r.is_empty())
                    fallback=|| view! { <p class="muted">"No searches yet."</p> }
                >
                    <ul class="recent-list">
                        <For
                            each=move || prefs.recent_searches.get()
                            key=|term| term.clone()
                            children=move |term| {
                                let forget = term.clone();
                                view! {
                                    <li>
                                        <span>{term}</span>
                                        <button class="recent-remove" title="Remove" on:click=move |_| prefs.forget_search(&forget)>
                                            "×"
                                        </button>
                                    </li>
                                }
                            }
                        />
                    </ul>
                    <DeleteConfirmButton label="Clear history" on_confirm=move |_| prefs.clear_searches() />
                </Show>
            </section>

            <details class="diagnostics">
                <summary>"Diagnostics"</summary>
                <button class="link-btn" on:click=move |_| set_log_tick.update(|t| *t += 1)>"Refresh"</button>
                <pre class="log-lines">
                    {move || log_lines()
                        .iter()
                        .map(|record| record.to_string())
                        .collect::<Vec<_>>()
                        .join("\n")}
                </pre>
            </details>

            <Show when=move || store.session().with(|s| s.is_some())>
                <button class="link-btn danger" on:click=sign_out>"Sign out"</button>
            </Show>
        </div>
    }
}
