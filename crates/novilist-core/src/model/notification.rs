//! Notification Record

use serde::{Deserialize, Serialize};
use super::entity::{Entity, Listable};
use super::novel::NovelRef;

/// What triggered a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    NewChapter,
    ReviewReply,
    Follow,
    System,
}

impl NotificationKind {
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::NewChapter => "📖",
            NotificationKind::ReviewReply => "💬",
            NotificationKind::Follow => "⭐",
            NotificationKind::System => "🔔",
        }
    }
}

/// An entry in the notification feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub kind: NotificationKind,
    pub message: String,
    pub novel: Option<NovelRef>,
    pub created_at: String,
    pub read: bool,
}

impl Entity for Notification {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Listable for Notification {
    fn status(&self) -> Option<&str> {
        Some(if self.read { "read" } else { "unread" })
    }

    fn timestamp(&self) -> Option<&str> {
        Some(&self.created_at)
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.message.as_str()];
        if let Some(novel) = &self.novel {
            fields.push(&novel.title);
        }
        fields
    }
}
