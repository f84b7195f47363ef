//! List Filtering
//!
//! Predicates over `Listable` records. A predicate that looks at a field the
//! record does not have is a non-match, never an error.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::Listable;
use crate::sort::{sort_items, SortKey};

/// Conjunction of optional inclusion predicates.
///
/// `None` leaves a dimension unconstrained. `Some` of an empty set matches
/// nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListFilter {
    pub statuses: Option<BTreeSet<String>>,
    pub min_rating: Option<f32>,
    /// Lowercased language tags
    pub languages: Option<BTreeSet<String>>,
    pub query: Option<String>,
}

impl ListFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_statuses<I, S>(mut self, statuses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.statuses = Some(statuses.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_min_rating(mut self, threshold: f32) -> Self {
        self.min_rating = Some(threshold);
        self
    }

    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = Some(
            languages
                .into_iter()
                .map(|l| l.into().to_lowercase())
                .collect(),
        );
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// True when no predicate is set
    pub fn is_empty(&self) -> bool {
        self.statuses.is_none()
            && self.min_rating.is_none()
            && self.languages.is_none()
            && self.normalized_query().is_none()
    }

    fn normalized_query(&self) -> Option<String> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }

    /// Test a single record against every predicate
    pub fn matches<T: Listable>(&self, item: &T) -> bool {
        self.matches_with_query(item, self.normalized_query().as_deref())
    }

    fn matches_with_query<T: Listable>(&self, item: &T, query: Option<&str>) -> bool {
        if let Some(statuses) = &self.statuses {
            match item.status() {
                Some(status) if statuses.contains(status) => {}
                _ => return false,
            }
        }

        if let Some(threshold) = self.min_rating {
            match item.rating() {
                Some(rating) if rating.is_finite() && rating >= threshold => {}
                _ => return false,
            }
        }

        if let Some(languages) = &self.languages {
            match item.language() {
                Some(lang) if languages.contains(&lang.to_lowercase()) => {}
                _ => return false,
            }
        }

        if let Some(query) = query {
            let hit = item
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(query));
            if !hit {
                return false;
            }
        }

        true
    }

    /// Return the matching records in input order
    pub fn apply<T: Listable>(&self, items: &[T]) -> Vec<T> {
        let query = self.normalized_query();
        items
            .iter()
            .filter(|item| self.matches_with_query(*item, query.as_deref()))
            .cloned()
            .collect()
    }
}

/// A filter plus an optional ordering
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListQuery {
    pub filter: ListFilter,
    pub sort: Option<SortKey>,
}

impl ListQuery {
    pub fn new(filter: ListFilter, sort: Option<SortKey>) -> Self {
        Self { filter, sort }
    }

    /// Filter, then stably sort
    pub fn apply<T: Listable>(&self, items: &[T]) -> Vec<T> {
        let filtered = self.filter.apply(items);
        match self.sort {
            Some(key) => sort_items(&filtered, key),
            None => filtered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Entity, Notification, NotificationKind, Novel, NovelRef, NovelStatus};
    use proptest::prelude::*;

    fn novel(id: u32, language: &str, status: NovelStatus, rating: Option<f32>) -> Novel {
        Novel {
            id,
            title: format!("Novel {}", id),
            author: "Author".to_string(),
            language: language.to_string(),
            status,
            rating,
            genres: vec!["Fantasy".to_string()],
            synopsis: String::new(),
            chapters: 100,
            followers: id * 10,
            updated_at: format!("2024-03-{:02}T12:00:00Z", id % 28 + 1),
        }
    }

    #[test]
    fn test_language_filter_keeps_input_order() {
        let novels = vec![
            novel(1, "kr", NovelStatus::Ongoing, Some(4.0)),
            novel(2, "cn", NovelStatus::Ongoing, Some(4.0)),
            novel(3, "kr", NovelStatus::Ongoing, Some(4.0)),
        ];
        let result = ListFilter::new().with_languages(["kr"]).apply(&novels);
        let ids: Vec<u32> = result.iter().map(|n| n.id()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_language_filter_is_case_insensitive() {
        let novels = vec![novel(1, "KR", NovelStatus::Ongoing, None)];
        assert_eq!(ListFilter::new().with_languages(["kr"]).apply(&novels).len(), 1);
    }

    #[test]
    fn test_missing_rating_does_not_match() {
        let novels = vec![
            novel(1, "kr", NovelStatus::Ongoing, None),
            novel(2, "kr", NovelStatus::Ongoing, Some(f32::NAN)),
            novel(3, "kr", NovelStatus::Ongoing, Some(3.5)),
            novel(4, "kr", NovelStatus::Ongoing, Some(4.5)),
        ];
        let result = ListFilter::new().with_min_rating(3.5).apply(&novels);
        let ids: Vec<u32> = result.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[test]
    fn test_status_filter() {
        let novels = vec![
            novel(1, "kr", NovelStatus::Ongoing, None),
            novel(2, "kr", NovelStatus::Completed, None),
            novel(3, "kr", NovelStatus::Hiatus, None),
        ];
        let result = ListFilter::new()
            .with_statuses(["completed", "hiatus"])
            .apply(&novels);
        let ids: Vec<u32> = result.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_empty_status_set_matches_nothing() {
        let novels = vec![novel(1, "kr", NovelStatus::Ongoing, None)];
        let empty: [&str; 0] = [];
        assert!(ListFilter::new().with_statuses(empty).apply(&novels).is_empty());
    }

    #[test]
    fn test_query_searches_any_field() {
        let mut a = novel(1, "kr", NovelStatus::Ongoing, None);
        a.title = "Solo Leveling".to_string();
        let mut b = novel(2, "kr", NovelStatus::Ongoing, None);
        b.author = "Chugong's Friend".to_string();
        let c = novel(3, "kr", NovelStatus::Ongoing, None);

        let result = ListFilter::new().with_query("  CHUGONG ").apply(&[a.clone(), b, c]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 2);

        let result = ListFilter::new().with_query("leveling").apply(&[a]);
        assert_eq!(result[0].id, 1);
    }

    #[test]
    fn test_blank_query_is_unconstrained() {
        let novels = vec![novel(1, "kr", NovelStatus::Ongoing, None)];
        let filter = ListFilter::new().with_query("   ");
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&novels).len(), 1);
    }

    #[test]
    fn test_field_absent_on_record_type() {
        let notifications = vec![Notification {
            id: 1,
            kind: NotificationKind::System,
            message: "Welcome".to_string(),
            novel: Some(NovelRef { id: 9, title: "Trash of the Count's Family".to_string() }),
            created_at: "2024-01-01T00:00:00Z".to_string(),
            read: false,
        }];
        // Notifications carry no language, so a language predicate excludes them
        assert!(ListFilter::new().with_languages(["kr"]).apply(&notifications).is_empty());
        assert_eq!(ListFilter::new().with_statuses(["unread"]).apply(&notifications).len(), 1);
        assert_eq!(ListFilter::new().with_query("count's").apply(&notifications).len(), 1);
    }

    #[test]
    fn test_query_applies_sort_after_filter() {
        let novels = vec![
            novel(1, "kr", NovelStatus::Ongoing, Some(3.0)),
            novel(2, "cn", NovelStatus::Ongoing, Some(5.0)),
            novel(3, "kr", NovelStatus::Ongoing, Some(4.0)),
        ];
        let query = ListQuery::new(
            ListFilter::new().with_languages(["kr"]),
            Some(SortKey::HighestRated),
        );
        let ids: Vec<u32> = query.apply(&novels).iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![3, 1]);
        // input untouched
        assert_eq!(novels[0].id, 1);
    }

    fn arb_novel() -> impl Strategy<Value = Novel> {
        (
            0u32..1000,
            prop::sample::select(vec!["kr", "cn", "jp", "en"]),
            prop::sample::select(NovelStatus::ALL.to_vec()),
            prop::option::of(0.0f32..5.0),
            "[a-z ]{0,12}",
        )
            .prop_map(|(id, lang, status, rating, title)| {
                let mut n = novel(id, lang, status, rating);
                n.title = title;
                n
            })
    }

    fn arb_filter() -> impl Strategy<Value = ListFilter> {
        (
            prop::option::of(prop::collection::btree_set(
                prop::sample::select(vec!["ongoing", "completed", "hiatus"]),
                0..3,
            )),
            prop::option::of(0.0f32..5.0),
            prop::option::of(prop::collection::btree_set(
                prop::sample::select(vec!["kr", "cn", "jp", "en"]),
                0..4,
            )),
            prop::option::of("[a-z]{0,3}"),
        )
            .prop_map(|(statuses, min_rating, languages, query)| ListFilter {
                statuses: statuses.map(|s| s.into_iter().map(String::from).collect()),
                min_rating,
                languages: languages.map(|s| s.into_iter().map(String::from).collect()),
                query,
            })
    }

    proptest! {
        /// Property: filtering is idempotent
        #[test]
        fn prop_filter_idempotent(
            novels in prop::collection::vec(arb_novel(), 0..30),
            filter in arb_filter()
        ) {
            let once = filter.apply(&novels);
            let twice = filter.apply(&once);
            prop_assert_eq!(once, twice);
        }

        /// Property: every kept record matches, and order is a subsequence of the input
        #[test]
        fn prop_filter_preserves_order(
            novels in prop::collection::vec(arb_novel(), 0..30),
            filter in arb_filter()
        ) {
            let kept = filter.apply(&novels);
            let mut cursor = novels.iter();
            for item in &kept {
                prop_assert!(filter.matches(item));
                prop_assert!(cursor.any(|n| n == item));
            }
        }
    }
}
