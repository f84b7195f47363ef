//! Novel Record

use serde::{Deserialize, Serialize};
use super::entity::{Entity, Listable};

/// Publication status of a novel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NovelStatus {
    Ongoing,
    Completed,
    Hiatus,
}

impl NovelStatus {
    pub const ALL: [NovelStatus; 3] = [NovelStatus::Ongoing, NovelStatus::Completed, NovelStatus::Hiatus];

    pub fn as_str(&self) -> &'static str {
        match self {
            NovelStatus::Ongoing => "ongoing",
            NovelStatus::Completed => "completed",
            NovelStatus::Hiatus => "hiatus",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NovelStatus::Ongoing => "Ongoing",
            NovelStatus::Completed => "Completed",
            NovelStatus::Hiatus => "On hiatus",
        }
    }
}

/// A web novel in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Novel {
    pub id: u32,
    pub title: String,
    pub author: String,
    /// Original language tag ("kr", "cn", "jp", "en")
    pub language: String,
    pub status: NovelStatus,
    /// Average rating, absent until the novel has reviews
    pub rating: Option<f32>,
    #[serde(default)]
    pub genres: Vec<String>,
    pub synopsis: String,
    pub chapters: u32,
    pub followers: u32,
    pub updated_at: String,
}

impl Novel {
    /// Denormalized reference for embedding in other records
    pub fn to_ref(&self) -> NovelRef {
        NovelRef {
            id: self.id,
            title: self.title.clone(),
        }
    }
}

impl Entity for Novel {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Listable for Novel {
    fn status(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn rating(&self) -> Option<f32> {
        self.rating
    }

    fn language(&self) -> Option<&str> {
        Some(&self.language)
    }

    fn timestamp(&self) -> Option<&str> {
        Some(&self.updated_at)
    }

    fn helpful_count(&self) -> Option<u32> {
        Some(self.followers)
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.author.as_str()];
        fields.extend(self.genres.iter().map(String::as_str));
        fields
    }
}

/// Copy of a novel's identity embedded in notifications and threads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NovelRef {
    pub id: u32,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_through_serde() {
        let json = serde_json::to_string(&NovelStatus::Hiatus).unwrap();
        assert_eq!(json, "\"hiatus\"");
        let back: NovelStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, NovelStatus::Hiatus);
    }

    #[test]
    fn test_search_fields_include_genres() {
        let novel = Novel {
            id: 1,
            title: "Omniscient Reader".to_string(),
            author: "Sing Shong".to_string(),
            language: "kr".to_string(),
            status: NovelStatus::Completed,
            rating: Some(4.8),
            genres: vec!["Fantasy".to_string(), "Apocalypse".to_string()],
            synopsis: String::new(),
            chapters: 551,
            followers: 10,
            updated_at: "2024-01-01T00:00:00Z".to_string(),
        };
        assert_eq!(novel.search_fields(), vec!["Omniscient Reader", "Sing Shong", "Fantasy", "Apocalypse"]);
        assert_eq!(novel.to_ref(), NovelRef { id: 1, title: "Omniscient Reader".to_string() });
    }
}
