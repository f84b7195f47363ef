//! Comment Section Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use novilist_core::{Comment, SortKey};

use crate::commands;
use crate::context::AppContext;
use crate::markdown;
use crate::route::Page;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CommentSection(novel_id: u32) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();

    let (comments, set_comments) = signal(None::<Vec<Comment>>);
    let (draft, set_draft) = signal(String::new());
    let (posting, set_posting) = signal(false);

    spawn_local(async move {
        match commands::list_comments(novel_id).await {
            Ok(loaded) => set_comments.set(Some(loaded)),
            Err(e) => {
                set_comments.set(Some(Vec::new()));
                ctx.report(&e);
            }
        }
    });

    let sorted = Memo::new(move |_| {
        comments.with(|c| {
            c.as_deref()
                .map(|list| novilist_core::sort::sort_items(list, SortKey::Newest))
                .unwrap_or_default()
        })
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let body = draft.get_untracked();
        if body.trim().is_empty() || posting.get_untracked() {
            return;
        }
        set_posting.set(true);
        spawn_local(async move {
            match commands::post_comment(novel_id, &body).await {
                Ok(comment) => {
                    set_comments.update(|c| c.get_or_insert_with(Vec::new).push(comment));
                    set_draft.set(String::new());
                }
                Err(e) => ctx.report(&e),
            }
            set_posting.set(false);
        });
    };

    view! {
        <div class="comment-section">
            <Show
                when=move || store.session().with(|s| s.is_some())
                fallback=move || view! {
                    <p class="signin-hint">
                        <button class="link-btn" on:click=move |_| ctx.navigate(Page::SignIn)>"Sign in"</button>
                        " to join the conversation."
                    </p>
                }
            >
                <form class="comment-form" on:submit=on_submit>
                    <textarea
                        placeholder="Add a comment..."
                        prop:value=move || draft.get()
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                    ></textarea>
                    <button
                        type="submit"
                        class="primary-btn"
                        disabled=move || posting.get() || draft.with(|d| d.trim().is_empty())
                    >
                        "Comment"
                    </button>
                </form>
            </Show>

            {move || {
                if comments.with(|c| c.is_none()) {
                    return view! { <p class="loading">"Loading comments..."</p> }.into_any();
                }
                if sorted.with(|c| c.is_empty()) {
                    return view! { <p class="empty">"No comments yet. Start the discussion!"</p> }.into_any();
                }
                view! {
                    <ul class="comment-list">
                        <For
                            each=move || sorted.get()
                            key=|c| c.id
                            children=|c| view! {
                                <li class="comment">
                                    <header>
                                        <span class="comment-author">{c.author.clone()}</span>
                                        <time>{c.created_at.get(..10).unwrap_or(&c.created_at).to_string()}</time>
                                        <span class="comment-likes">{format!("♥ {}", c.likes)}</span>
                                    </header>
                                    <div class="markdown-content" inner_html=markdown::parse_markdown(&c.body)></div>
                                </li>
                            }
                        />
                    </ul>
                }
                .into_any()
            }}
        </div>
    }
}
