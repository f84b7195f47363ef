//! Thread List Component
//!
//! Discussion threads, optionally limited to one novel. Pinned threads stay
//! on top whatever the sort.

use leptos::prelude::*;
use leptos::task::spawn_local;
use novilist_core::{sort::sort_items, SortKey, Thread};

use crate::commands;
use crate::context::AppContext;

/// Threads for `novel_id` (all when `None`), sorted with pinned first
fn arrange(threads: &[Thread], novel_id: Option<u32>, sort: SortKey) -> Vec<Thread> {
    let scoped: Vec<Thread> = threads
        .iter()
        .filter(|t| match novel_id {
            Some(id) => t.novel.as_ref().is_some_and(|n| n.id == id),
            None => true,
        })
        .cloned()
        .collect();
    let (mut pinned, rest): (Vec<Thread>, Vec<Thread>) =
        sort_items(&scoped, sort).into_iter().partition(|t| t.pinned);
    pinned.extend(rest);
    pinned
}

#[component]
pub fn ThreadList(novel_id: Option<u32>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let (threads, set_threads) = signal(None::<Vec<Thread>>);
    let sort = RwSignal::new(SortKey::Newest);

    spawn_local(async move {
        match commands::list_threads().await {
            Ok(loaded) => set_threads.set(Some(loaded)),
            Err(e) => {
                set_threads.set(Some(Vec::new()));
                ctx.report(&e);
            }
        }
    });

    let visible = Memo::new(move |_| {
        let key = sort.get();
        threads.with(|t| t.as_deref().map(|list| arrange(list, novel_id, key)).unwrap_or_default())
    });

    view! {
        <div class="thread-list">
            <div class="list-controls">
                <select
                    on:change=move |ev| {
                        if let Ok(key) = event_target_value(&ev).parse::<SortKey>() {
                            sort.set(key);
                        }
                    }
                    prop:value=move || sort.get().as_str()
                >
                    <option value=SortKey::Newest.as_str()>"Newest"</option>
                    <option value=SortKey::Oldest.as_str()>"Oldest"</option>
                    <option value=SortKey::MostHelpful.as_str()>"Most votes"</option>
                </select>
            </div>
            {move || {
                if threads.with(|t| t.is_none()) {
                    return view! { <p class="loading">"Loading threads..."</p> }.into_any();
                }
                if visible.with(|t| t.is_empty()) {
                    return view! { <p class="empty">"No discussion threads yet."</p> }.into_any();
                }
                view! {
                    <ul class="threads">
                        <For
                            each=move || visible.get()
                            key=|t| t.id
                            children=|t| view! {
                                <li class="thread" class:pinned=t.pinned>
                                    {t.pinned.then(|| view! { <span class="pin" title="Pinned">"📌"</span> })}
                                    <span class="thread-title">{t.title.clone()}</span>
                                    <span class="thread-meta">
                                        {format!("{} · {} replies · {} votes", t.author, t.replies, t.votes)}
                                    </span>
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

#[cfg(test)]
mod tests {
    use super::*;
    use novilist_core::NovelRef;

    fn thread(id: u32, novel: Option<u32>, pinned: bool, created_at: &str) -> Thread {
        Thread {
            id,
            novel: novel.map(|id| NovelRef { id, title: format!("Novel {}", id) }),
            title: format!("Thread {}", id),
            author: "reader".to_string(),
            language: "en".to_string(),
            created_at: created_at.to_string(),
            replies: 0,
            votes: id,
            pinned,
        }
    }

    #[test]
    fn test_pinned_first_then_sorted() {
        let threads = vec![
            thread(1, Some(1), false, "2024-01-01T00:00:00Z"),
            thread(2, Some(1), true, "2023-01-01T00:00:00Z"),
            thread(3, Some(1), false, "2024-03-01T00:00:00Z"),
            thread(4, Some(2), false, "2024-04-01T00:00:00Z"),
        ];
        let ids: Vec<u32> = arrange(&threads, Some(1), SortKey::Newest).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        let ids: Vec<u32> = arrange(&threads, None, SortKey::Oldest).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1, 3, 4]);
    }
}
