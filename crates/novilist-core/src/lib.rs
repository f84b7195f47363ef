//! NoviList Core
//!
//! Everything the UI needs that is not markup:
//! - model: listable records (novels, reviews, comments, threads, notifications)
//! - filter / sort: pure list queries over those records
//! - recent / storage / preferences: the observable preference store
//! - client / mock: backend abstraction and the in-memory stand-in
//! - config: tunables shared by the UI

pub mod client;
pub mod config;
pub mod filter;
pub mod mock;
pub mod model;
pub mod preferences;
pub mod recent;
pub mod sort;
pub mod storage;

pub use client::{ClientError, ClientResult, Credentials, NovelClient, RegisterRequest, ReviewDraft};
pub use config::AppConfig;
pub use filter::{ListFilter, ListQuery};
pub use mock::MockClient;
pub use model::{
    Comment, Entity, Listable, Notification, NotificationKind, Novel, NovelRef, NovelStatus,
    Review, Session, Thread,
};
pub use preferences::{
    PreferenceChange, PreferenceStore, Preferences, SubscriptionId, ThemeMode,
};
pub use recent::RecentList;
pub use sort::SortKey;
pub use storage::{KeyValueStorage, MemoryStorage, StorageError};
