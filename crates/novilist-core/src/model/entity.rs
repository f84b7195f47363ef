//! Core Record Traits
//!
//! `Entity` gives every record a typed identifier. `Listable` exposes the
//! optional fields that list predicates and comparators look at.

/// Core trait for all domain records
pub trait Entity: Sized + Clone {
    /// The type of the record's unique identifier
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Debug;

    /// Returns the record's unique identifier
    fn id(&self) -> Self::Id;
}

/// Fields a record can offer to filtering and sorting.
///
/// Every accessor defaults to `None`, meaning "this record has no such
/// field". Predicates treat a missing field as a non-match.
pub trait Listable: Entity {
    /// Status tag (e.g. `"ongoing"`, `"unread"`)
    fn status(&self) -> Option<&str> {
        None
    }

    /// Rating on a 0-5 scale
    fn rating(&self) -> Option<f32> {
        None
    }

    /// Language tag (e.g. `"kr"`)
    fn language(&self) -> Option<&str> {
        None
    }

    /// RFC 3339 timestamp used for newest/oldest ordering
    fn timestamp(&self) -> Option<&str> {
        None
    }

    /// Helpfulness score used for "most helpful" ordering
    fn helpful_count(&self) -> Option<u32> {
        None
    }

    /// Text fields searched by free-text queries
    fn search_fields(&self) -> Vec<&str>;
}
