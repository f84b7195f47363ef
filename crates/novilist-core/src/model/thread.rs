//! Discussion Thread Record

use serde::{Deserialize, Serialize};
use super::entity::{Entity, Listable};
use super::novel::NovelRef;

/// A forum thread, optionally about a specific novel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thread {
    pub id: u32,
    pub novel: Option<NovelRef>,
    pub title: String,
    pub author: String,
    pub language: String,
    pub created_at: String,
    pub replies: u32,
    pub votes: u32,
    #[serde(default)]
    pub pinned: bool,
}

impl Entity for Thread {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Listable for Thread {
    fn status(&self) -> Option<&str> {
        Some(if self.pinned { "pinned" } else { "open" })
    }

    fn language(&self) -> Option<&str> {
        Some(&self.language)
    }

    fn timestamp(&self) -> Option<&str> {
        Some(&self.created_at)
    }

    fn helpful_count(&self) -> Option<u32> {
        Some(self.votes)
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.author.as_str()]
    }
}
