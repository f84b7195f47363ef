//! Notification Panel Component
//!
//! Dropdown feed with All/Unread tabs. Reading a notification is reflected
//! immediately and rolled back if the backend refuses.

use leptos::prelude::*;
use leptos::task::spawn_local;
use novilist_core::{ListFilter, ListQuery, Notification, SortKey};

use crate::commands;
use crate::context::AppContext;
use crate::route::Page;
use crate::store::{store_mark_all_read, store_set_read, use_app_store, AppStateStoreFields};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FeedTab {
    All,
    Unread,
}

/// Feed order and tab filter
fn feed_query(tab: FeedTab) -> ListQuery {
    let filter = match tab {
        FeedTab::All => ListFilter::new(),
        FeedTab::Unread => ListFilter::new().with_statuses(["unread"]),
    };
    ListQuery::new(filter, Some(SortKey::Newest))
}

/// "2024-06-09T03:20:00Z" -> "2024-06-09"
fn short_date(timestamp: &str) -> &str {
    timestamp.get(..10).unwrap_or(timestamp)
}

#[component]
pub fn NotificationPanel() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();
    let (tab, set_tab) = signal(FeedTab::All);

    let visible = Memo::new(move |_| {
        let query = feed_query(tab.get());
        store.notifications().with(|feed| query.apply(feed))
    });

    let open_notification = move |n: Notification| {
        if !n.read {
            store_set_read(&store, n.id, true);
            spawn_local(async move {
                if let Err(e) = commands::mark_notification_read(n.id).await {
                    store_set_read(&store, n.id, false);
                    ctx.report(&e);
                }
            });
        }
        if let Some(novel) = n.novel {
            ctx.navigate(Page::Novel(novel.id));
        }
    };

    let mark_all = move |_| {
        let previous = store.notifications().get_untracked();
        store_mark_all_read(&store);
        spawn_local(async move {
            if let Err(e) = commands::mark_all_read().await {
                *store.notifications().write() = previous;
                ctx.report(&e);
            }
        });
    };

    view! {
        <div class="dropdown-panel notification-panel">
            <div class="panel-head">
                <button class="tab" class:active=move || tab.get() == FeedTab::All on:click=move |_| set_tab.set(FeedTab::All)>
                    "All"
                </button>
                <button class="tab" class:active=move || tab.get() == FeedTab::Unread on:click=move |_| set_tab.set(FeedTab::Unread)>
                    "Unread"
                </button>
                <button class="link-btn" on:click=mark_all>"Mark all read"</button>
            </div>

            <Show
                when=move || !visible.with(|v| v.is_empty())
                fallback=|| view! { <p class="empty">"You're all caught up."</p> }
            >
                <ul class="notification-list">
                    <For
                        each=move || visible.get()
                        key=|n| (n.id, n.read)
                        children=move |n| {
                            let clicked = n.clone();
                            view! {
                                <li
                                    class="notification"
                                    class:unread=!n.read
                                    on:click=move |_| open_notification(clicked.clone())
                                >
                                    <span class="notification-icon">{n.kind.icon()}</span>
                                    <div class="notification-body">
                                        <p>{n.message.clone()}</p>
                                        {n.novel.as_ref().map(|novel| view! {
                                            <span class="notification-novel">{novel.title.clone()}</span>
                                        })}
                                        <time>{short_date(&n.created_at).to_string()}</time>
                                    </div>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use novilist_core::NotificationKind;

    fn notification(id: u32, read: bool, created_at: &str) -> Notification {
        Notification {
            id,
            kind: NotificationKind::NewChapter,
            message: format!("Chapter {}", id),
            novel: None,
            created_at: created_at.to_string(),
            read,
        }
    }

    #[test]
    fn test_unread_tab_newest_first() {
        let feed = vec![
            notification(1, false, "2024-06-01T00:00:00Z"),
            notification(2, true, "2024-06-03T00:00:00Z"),
            notification(3, false, "2024-06-02T00:00:00Z"),
        ];
        let ids: Vec<u32> = feed_query(FeedTab::Unread).apply(&feed).iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![3, 1]);
        let ids: Vec<u32> = feed_query(FeedTab::All).apply(&feed).iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_short_date() {
        assert_eq!(short_date("2024-06-09T03:20:00Z"), "2024-06-09");
        assert_eq!(short_date("soon"), "soon");
    }
}
