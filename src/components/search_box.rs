//! Search Box Component
//!
//! Header search input with a dropdown of recent searches.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::prefs::PrefsContext;
use crate::route::Page;

#[component]
pub fn SearchBox() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let prefs = expect_context::<PrefsContext>();

    let (text, set_text) = signal(String::new());
    let (focused, set_focused) = signal(false);

    let run_search = move |term: String| {
        let term = term.trim().to_string();
        if term.is_empty() {
            return;
        }
        prefs.record_search(&term);
        set_text.set(String::new());
        set_focused.set(false);
        ctx.navigate(Page::search(&term));
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        run_search(text.get());
    };

    let show_recent = move || {
        focused.get() && text.with(|t| t.is_empty()) && !prefs.recent_searches.with(|r| r.is_empty())
    };

    view! {
        <form class="search-box" role="search" on:submit=on_submit>
            <input
                type="search"
                placeholder="Search novels, authors, genres..."
                prop:value=move || text.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
                on:focus=move |_| set_focused.set(true)
                on:blur=move |_| set_focused.set(false)
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        set_focused.set(false);
                    }
                }
            />
            <Show when=show_recent>
                <ul class="recent-searches">
                    <li class="recent-title">"Recent searches"</li>
                    <For
                        each=move || prefs.recent_searches.get()
                        key=|term| term.clone()
                        children=move |term| {
                            let pick = term.clone();
                            let forget = term.clone();
                            view! {
                                <li class="recent-item">
                                    // mousedown fires before blur, keeping the click
                                    <span
                                        class="recent-term"
                                        on:mousedown=move |ev| {
                                            ev.prevent_default();
                                            run_search(pick.clone());
                                        }
                                    >
                                        {term}
                                    </span>
                                    <button
                                        type="button"
                                        class="recent-remove"
                                        title="Remove"
                                        on:mousedown=move |ev| {
                                            ev.prevent_default();
                                            prefs.forget_search(&forget);
                                        }
                                    >
                                        "×"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </form>
    }
}
