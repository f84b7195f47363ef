//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Writes made
//! here are optimistic; callers roll back with the same helpers when the
//! backend rejects a change.

use leptos::prelude::*;
use reactive_stores::Store;
use novilist_core::{Notification, Novel, Session};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Full catalog
    pub novels: Vec<Novel>,
    /// True once the first catalog load finished
    pub novels_loaded: bool,
    /// Notification feed
    pub notifications: Vec<Notification>,
    /// Signed-in reader, if any
    pub session: Option<Session>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace a novel in the store by ID
pub fn store_update_novel(store: &AppStore, updated: Novel) {
    if let Some(novel) = store.novels().write().iter_mut().find(|n| n.id == updated.id) {
        *novel = updated;
    }
}

/// Adjust a novel's follower count locally
pub fn store_bump_followers(store: &AppStore, novel_id: u32, follow: bool) {
    if let Some(novel) = store.novels().write().iter_mut().find(|n| n.id == novel_id) {
        novel.followers = if follow {
            novel.followers + 1
        } else {
            novel.followers.saturating_sub(1)
        };
    }
}

/// Set or clear a follow in the session's list
pub fn store_set_following(store: &AppStore, novel_id: u32, follow: bool) {
    if let Some(session) = store.session().write().as_mut() {
        session.following.retain(|id| *id != novel_id);
        if follow {
            session.following.push(novel_id);
        }
    }
}

/// Set a notification's read flag
pub fn store_set_read(store: &AppStore, notification_id: u32, read: bool) {
    if let Some(n) = store
        .notifications()
        .write()
        .iter_mut()
        .find(|n| n.id == notification_id)
    {
        n.read = read;
    }
}

/// Mark every notification read
pub fn store_mark_all_read(store: &AppStore) {
    for n in store.notifications().write().iter_mut() {
        n.read = true;
    }
}

/// Number of unread notifications
pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use novilist_core::NotificationKind;

    fn notification(id: u32, read: bool) -> Notification {
        Notification {
            id,
            kind: NotificationKind::System,
            message: format!("Notice {}", id),
            novel: None,
            created_at: "2024-01-01T00:00:00Z".to_string(),
            read,
        }
    }

    #[test]
    fn test_unread_count() {
        let feed = vec![notification(1, false), notification(2, true), notification(3, false)];
        assert_eq!(unread_count(&feed), 2);
        assert_eq!(unread_count(&[]), 0);
    }
}
