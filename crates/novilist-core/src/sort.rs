//! List Ordering
//!
//! Stable comparators over `Listable` records. Records without the sort
//! field (or with an unparseable timestamp) go last in either direction.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::model::Listable;

/// Available orderings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Newest,
    Oldest,
    MostHelpful,
    HighestRated,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Newest,
        SortKey::Oldest,
        SortKey::MostHelpful,
        SortKey::HighestRated,
    ];

    /// Value used in `<select>` options
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::MostHelpful => "helpful",
            SortKey::HighestRated => "rating",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Newest => "Newest",
            SortKey::Oldest => "Oldest",
            SortKey::MostHelpful => "Most helpful",
            SortKey::HighestRated => "Highest rated",
        }
    }

    /// Compare two records under this key
    pub fn compare<T: Listable>(&self, a: &T, b: &T) -> Ordering {
        match self {
            SortKey::Newest => compare_present_first(parse_timestamp(a), parse_timestamp(b), true),
            SortKey::Oldest => compare_present_first(parse_timestamp(a), parse_timestamp(b), false),
            SortKey::MostHelpful => compare_present_first(a.helpful_count(), b.helpful_count(), true),
            SortKey::HighestRated => compare_present_first(finite_rating(a), finite_rating(b), true),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("unknown sort key: {}", s))
    }
}

fn parse_timestamp<T: Listable>(item: &T) -> Option<DateTime<FixedOffset>> {
    item.timestamp()
        .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
}

fn finite_rating<T: Listable>(item: &T) -> Option<f32> {
    item.rating().filter(|r| r.is_finite())
}

/// Present keys before absent ones; present keys ascending or descending.
fn compare_present_first<K: PartialOrd>(a: Option<K>, b: Option<K>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => {
            let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
            if descending { ord.reverse() } else { ord }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Return a stably sorted copy of `items`
pub fn sort_items<T: Listable>(items: &[T], key: SortKey) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| key.compare(a, b));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Review;
    use proptest::prelude::*;

    fn review(id: u32, rating: f32, helpful: u32, created_at: &str) -> Review {
        Review {
            id,
            novel_id: 1,
            author: format!("reader{}", id),
            rating,
            body: "A review body".to_string(),
            created_at: created_at.to_string(),
            helpful,
            spoiler: false,
        }
    }

    fn ids(reviews: &[Review]) -> Vec<u32> {
        reviews.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_newest_and_oldest() {
        let reviews = vec![
            review(1, 3.0, 0, "2024-02-01T00:00:00Z"),
            review(2, 3.0, 0, "2024-03-01T00:00:00Z"),
            review(3, 3.0, 0, "2024-01-01T00:00:00+09:00"),
        ];
        assert_eq!(ids(&sort_items(&reviews, SortKey::Newest)), vec![2, 1, 3]);
        assert_eq!(ids(&sort_items(&reviews, SortKey::Oldest)), vec![3, 1, 2]);
    }

    #[test]
    fn test_unparseable_timestamp_goes_last() {
        let reviews = vec![
            review(1, 3.0, 0, "yesterday"),
            review(2, 3.0, 0, "2024-03-01T00:00:00Z"),
            review(3, 3.0, 0, "2024-01-01T00:00:00Z"),
        ];
        assert_eq!(ids(&sort_items(&reviews, SortKey::Newest)), vec![2, 3, 1]);
        assert_eq!(ids(&sort_items(&reviews, SortKey::Oldest)), vec![3, 2, 1]);
    }

    #[test]
    fn test_most_helpful_is_stable() {
        let reviews = vec![
            review(1, 3.0, 5, "2024-01-01T00:00:00Z"),
            review(2, 3.0, 9, "2024-01-01T00:00:00Z"),
            review(3, 3.0, 5, "2024-01-01T00:00:00Z"),
            review(4, 3.0, 9, "2024-01-01T00:00:00Z"),
        ];
        assert_eq!(ids(&sort_items(&reviews, SortKey::MostHelpful)), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_nan_rating_sorts_last() {
        let reviews = vec![
            review(1, f32::NAN, 0, "2024-01-01T00:00:00Z"),
            review(2, 2.0, 0, "2024-01-01T00:00:00Z"),
            review(3, 5.0, 0, "2024-01-01T00:00:00Z"),
        ];
        assert_eq!(ids(&sort_items(&reviews, SortKey::HighestRated)), vec![3, 2, 1]);
    }

    #[test]
    fn test_sort_key_parses_select_values() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>(), Ok(key));
        }
        assert!("sideways".parse::<SortKey>().is_err());
    }

    fn arb_review() -> impl Strategy<Value = Review> {
        (
            0u32..1000,
            1u32..=5,
            0u32..5,
            prop::sample::select(vec![
                "2024-01-01T00:00:00Z",
                "2024-01-02T00:00:00Z",
                "2023-12-31T23:59:59Z",
                "not a date",
            ]),
        )
            .prop_map(|(id, rating, helpful, ts)| review(id, rating as f32, helpful, ts))
    }

    proptest! {
        /// Property: sorting twice equals sorting once
        #[test]
        fn prop_sort_idempotent(
            reviews in prop::collection::vec(arb_review(), 0..30),
            key in prop::sample::select(SortKey::ALL.to_vec())
        ) {
            let once = sort_items(&reviews, key);
            let twice = sort_items(&once, key);
            prop_assert_eq!(once, twice);
        }

        /// Property: records with equal keys keep their input order
        #[test]
        fn prop_sort_stable(
            reviews in prop::collection::vec(arb_review(), 0..30),
            key in prop::sample::select(SortKey::ALL.to_vec())
        ) {
            let indexed: Vec<Review> = reviews
                .iter()
                .enumerate()
                .map(|(i, r)| Review { id: i as u32, ..r.clone() })
                .collect();
            let sorted = sort_items(&indexed, key);
            for pair in sorted.windows(2) {
                if key.compare(&pair[0], &pair[1]) == Ordering::Equal {
                    prop_assert!(pair[0].id < pair[1].id);
                }
            }
        }
    }
}
