//! Review Record

use serde::{Deserialize, Serialize};
use super::entity::{Entity, Listable};

/// A reader's review of a novel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: u32,
    pub novel_id: u32,
    pub author: String,
    /// Star rating, 1-5
    pub rating: f32,
    /// Markdown body
    pub body: String,
    pub created_at: String,
    /// "Helpful" votes
    pub helpful: u32,
    /// Collapsed until the reader chooses to reveal it
    #[serde(default)]
    pub spoiler: bool,
}

impl Entity for Review {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Listable for Review {
    fn rating(&self) -> Option<f32> {
        Some(self.rating)
    }

    fn timestamp(&self) -> Option<&str> {
        Some(&self.created_at)
    }

    fn helpful_count(&self) -> Option<u32> {
        Some(self.helpful)
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.author.as_str(), self.body.as_str()]
    }
}
