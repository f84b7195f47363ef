//! Browse Page Component
//!
//! The catalog, or search results when a query is present, narrowed by the
//! filter bar.

use std::collections::BTreeSet;

use leptos::prelude::*;
use leptos::task::spawn_local;
use novilist_core::{ListQuery, Novel, SortKey};

use crate::commands;
use crate::components::{build_filter, FilterBar, NovelCard};
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn BrowsePage(query: Option<String>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();

    let statuses = RwSignal::new(BTreeSet::<String>::new());
    let languages = RwSignal::new(BTreeSet::<String>::new());
    let min_rating = RwSignal::new(None::<f32>);
    let sort = RwSignal::new(None::<SortKey>);
    let text = RwSignal::new(String::new());

    // Search results; None while the request is in flight
    let (results, set_results) = signal(None::<Vec<Novel>>);
    let searching = query.is_some();

    if let Some(q) = query.clone() {
        spawn_local(async move {
            match commands::search_novels(&q).await {
                Ok(found) => set_results.set(Some(found)),
                Err(e) => {
                    set_results.set(Some(Vec::new()));
                    ctx.report(&e);
                }
            }
        });
    }

    let loading = move || {
        if searching {
            results.with(|r| r.is_none())
        } else {
            !store.novels_loaded().get()
        }
    };

    let visible = Memo::new(move |_| {
        let list_query = ListQuery::new(
            build_filter(
                &statuses.get(),
                &languages.get(),
                min_rating.get(),
                &text.get(),
            ),
            sort.get(),
        );
        if searching {
            results.with(|r| r.as_deref().map(|found| list_query.apply(found)).unwrap_or_default())
        } else {
            store.novels().with(|all| list_query.apply(all))
        }
    });

    let heading = match &query {
        Some(q) => format!("Results for \"{}\"", q),
        None => "Browse novels".to_string(),
    };

    view! {
        <section class="browse-page">
            <h1>{heading}</h1>
            <FilterBar
                statuses=statuses
                languages=languages
                min_rating=min_rating
                sort=sort
                text=text
            />
            <Show
                when=move || !loading()
                fallback=|| view! { <p class="loading">"Loading..."</p> }
            >
                <Show
                    when=move || !visible.with(|v| v.is_empty())
                    fallback=|| view! { <p class="empty">"No novels match these filters."</p> }
                >
                    <div class="novel-grid">
                        <For
                            each=move || visible.get()
                            key=|novel| (novel.id, novel.followers, novel.rating.map(f32::to_bits))
                            children=|novel| view! { <NovelCard novel=novel /> }
                        />
                    </div>
                </Show>
            </Show>
        </section>
    }
}
