//! Signed-in User Session

use serde::{Deserialize, Serialize};

/// The signed-in reader
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    pub display_name: String,
    pub joined_at: String,
    /// Ids of followed novels
    #[serde(default)]
    pub following: Vec<u32>,
}

impl Session {
    pub fn is_following(&self, novel_id: u32) -> bool {
        self.following.contains(&novel_id)
    }
}
