//! Novel Card Component
//!
//! Catalog tile; clicking anywhere opens the novel's page.

use leptos::prelude::*;
use novilist_core::Novel;

use crate::components::StarRating;
use crate::context::AppContext;
use crate::markdown;
use crate::route::Page;

const SYNOPSIS_CHARS: usize = 140;

#[component]
pub fn NovelCard(novel: Novel) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let id = novel.id;

    view! {
        <article class="novel-card" on:click=move |_| ctx.navigate(Page::Novel(id))>
            <header class="novel-card-head">
                <h3 class="novel-title">{novel.title.clone()}</h3>
                <span class="novel-author">{novel.author.clone()}</span>
            </header>
            <div class="novel-meta">
                <span class="lang-badge">{novel.language.to_uppercase()}</span>
                <span class=format!("status-badge {}", novel.status.as_str())>{novel.status.label()}</span>
                <StarRating rating=novel.rating />
            </div>
            <p class="novel-synopsis">{markdown::excerpt(&novel.synopsis, SYNOPSIS_CHARS)}</p>
            <ul class="genre-list">
                {novel.genres.iter().map(|g| view! { <li class="genre">{g.clone()}</li> }).collect_view()}
            </ul>
            <footer class="novel-card-foot">
                <span>{format!("{} chapters", novel.chapters)}</span>
                <span>{format!("{} followers", novel.followers)}</span>
            </footer>
        </article>
    }
}
