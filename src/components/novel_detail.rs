//! Novel Detail Component
//!
//! One novel's page: metadata, follow toggle and the review, comment and
//! discussion tabs.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{CommentSection, ReviewSection, StarRating, ThreadList};
use crate::context::AppContext;
use crate::markdown;
use crate::route::Page;
use crate::store::{
    store_bump_followers, store_set_following, use_app_store, AppStateStoreFields,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DetailTab {
    Reviews,
    Comments,
    Discussion,
}

impl DetailTab {
    const ALL: [DetailTab; 3] = [DetailTab::Reviews, DetailTab::Comments, DetailTab::Discussion];

    fn label(&self) -> &'static str {
        match self {
            DetailTab::Reviews => "Reviews",
            DetailTab::Comments => "Comments",
            DetailTab::Discussion => "Discussion",
        }
    }
}

#[component]
pub fn NovelDetail(novel_id: u32) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();
    let (tab, set_tab) = signal(DetailTab::Reviews);
    let (pending, set_pending) = signal(false);

    let novel = Memo::new(move |_| {
        store
            .novels()
            .with(|all| all.iter().find(|n| n.id == novel_id).cloned())
    });
    let following = Memo::new(move |_| {
        store
            .session()
            .with(|s| s.as_ref().is_some_and(|s| s.is_following(novel_id)))
    });

    let toggle_follow = move |_| {
        if store.session().with_untracked(|s| s.is_none()) {
            ctx.info("Sign in to follow novels");
            ctx.navigate(Page::SignIn);
            return;
        }
        if pending.get_untracked() {
            return;
        }
        let follow = !following.get_untracked();
        store_set_following(&store, novel_id, follow);
        store_bump_followers(&store, novel_id, follow);
        set_pending.set(true);

        spawn_local(async move {
            match commands::set_following(novel_id, follow).await {
                Ok(session) => {
                    *store.session().write() = Some(session);
                }
                Err(e) => {
                    store_set_following(&store, novel_id, !follow);
                    store_bump_followers(&store, novel_id, !follow);
                    ctx.report(&e);
                }
            }
            set_pending.set(false);
        });
    };

    view! {
        <section class="novel-detail">
            <button class="link-btn back" on:click=move |_| ctx.navigate(Page::default())>
                "← Back to browse"
            </button>

            {move || match novel.get() {
                None if !store.novels_loaded().get() => {
                    view! { <p class="loading">"Loading..."</p> }.into_any()
                }
                None => view! {
                    <div class="not-found">
                        <h1>"Novel not found"</h1>
                        <p>"It may have been removed, or the link is wrong."</p>
                    </div>
                }
                .into_any(),
                Some(n) => view! {
                    <header class="detail-head">
                        <div>
                            <h1>{n.title.clone()}</h1>
                            <p class="novel-author">{format!("by {}", n.author)}</p>
                            <div class="novel-meta">
                                <span class="lang-badge">{n.language.to_uppercase()}</span>
                                <span class=format!("status-badge {}", n.status.as_str())>{n.status.label()}</span>
                                <StarRating rating=n.rating />
                                <span>{format!("{} chapters", n.chapters)}</span>
                                <span>{format!("{} followers", n.followers)}</span>
                            </div>
                            <ul class="genre-list">
                                {n.genres.iter().map(|g| view! { <li class="genre">{g.clone()}</li> }).collect_view()}
                            </ul>
                        </div>
                        <button
                            class="follow-btn"
                            class:following=move || following.get()
                            disabled=move || pending.get()
                            on:click=toggle_follow
                        >
                            {move || if following.get() { "Following ✓" } else { "+ Follow" }}
                        </button>
                    </header>
                    <div class="synopsis markdown-content" inner_html=markdown::parse_markdown(&n.synopsis)></div>
                }
                .into_any(),
            }}

            <Show when=move || novel.with(|n| n.is_some())>
                <nav class="tab-bar">
                    {DetailTab::ALL.iter().map(|t| {
                        let t = *t;
                        view! {
                            <button
                                class="tab"
                                class:active=move || tab.get() == t
                                on:click=move |_| set_tab.set(t)
                            >
                                {t.label()}
                            </button>
                        }
                    }).collect_view()}
                </nav>
                {move || match tab.get() {
                    DetailTab::Reviews => view! { <ReviewSection novel_id=novel_id /> }.into_any(),
                    DetailTab::Comments => view! { <CommentSection novel_id=novel_id /> }.into_any(),
                    DetailTab::Discussion => view! { <ThreadList novel_id=Some(novel_id) /> }.into_any(),
                }}
            </Show>
        </section>
    }
}
