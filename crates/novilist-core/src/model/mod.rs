//! Domain Records
//!
//! Listable records rendered as cards and rows. Cross references between
//! records are denormalized copies (`NovelRef`), never foreign keys.

mod entity;
mod novel;
mod review;
mod comment;
mod thread;
mod notification;
mod session;

pub use entity::{Entity, Listable};
pub use novel::{Novel, NovelRef, NovelStatus};
pub use review::Review;
pub use comment::Comment;
pub use thread::Thread;
pub use notification::{Notification, NotificationKind};
pub use session::Session;
