//! Comment Record

use serde::{Deserialize, Serialize};
use super::entity::{Entity, Listable};

/// A short comment on a novel's page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u32,
    pub novel_id: u32,
    pub author: String,
    /// Markdown body
    pub body: String,
    pub created_at: String,
    pub likes: u32,
}

impl Entity for Comment {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Listable for Comment {
    fn timestamp(&self) -> Option<&str> {
        Some(&self.created_at)
    }

    fn helpful_count(&self) -> Option<u32> {
        Some(self.likes)
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.author.as_str(), self.body.as_str()]
    }
}
