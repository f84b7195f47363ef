//! Capped Most-Recent List
//!
//! Newest entry first. Re-inserting an existing entry moves it to the front;
//! the oldest entry falls off once the cap is reached.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentList {
    cap: usize,
    entries: VecDeque<String>,
}

impl RecentList {
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            entries: VecDeque::with_capacity(cap),
        }
    }

    /// Rebuild from stored entries (newest first), dropping blanks,
    /// duplicates and anything past the cap.
    pub fn from_entries<I>(cap: usize, entries: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut list = Self::new(cap);
        for entry in entries {
            let entry = entry.trim();
            if entry.is_empty() || list.entries.iter().any(|e| e == entry) {
                continue;
            }
            if list.entries.len() == cap {
                break;
            }
            list.entries.push_back(entry.to_string());
        }
        list
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert at the front. Returns false when nothing changed.
    pub fn push(&mut self, term: &str) -> bool {
        let term = term.trim();
        if term.is_empty() || self.cap == 0 {
            return false;
        }
        if self.entries.front().map(String::as_str) == Some(term) {
            return false;
        }
        self.entries.retain(|e| e != term);
        self.entries.push_front(term.to_string());
        self.entries.truncate(self.cap);
        true
    }

    /// Remove an entry. Returns false when it was not present.
    pub fn remove(&mut self, term: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e != term);
        self.entries.len() != before
    }

    pub fn clear(&mut self) -> bool {
        let had_entries = !self.entries.is_empty();
        self.entries.clear();
        had_entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_push_evicts_oldest() {
        let mut list = RecentList::new(5);
        for term in ["A", "B", "C", "D", "E", "F"] {
            list.push(term);
        }
        assert_eq!(list.to_vec(), vec!["F", "E", "D", "C", "B"]);
    }

    #[test]
    fn test_duplicate_moves_to_front_without_growing() {
        let mut list = RecentList::new(5);
        for term in ["A", "B", "C"] {
            list.push(term);
        }
        assert!(list.push("A"));
        assert_eq!(list.to_vec(), vec!["A", "C", "B"]);
        assert!(!list.push("A"));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_blank_terms_ignored_and_trimmed() {
        let mut list = RecentList::new(5);
        assert!(!list.push("   "));
        assert!(list.push("  solo leveling "));
        assert_eq!(list.to_vec(), vec!["solo leveling"]);
    }

    #[test]
    fn test_from_entries_truncates_and_dedupes() {
        let stored = ["x", "y", "x", "", "z", "w", "v", "u"].map(String::from);
        let list = RecentList::from_entries(4, stored);
        assert_eq!(list.to_vec(), vec!["x", "y", "z", "w"]);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut list = RecentList::new(3);
        list.push("a");
        list.push("b");
        assert!(list.remove("a"));
        assert!(!list.remove("a"));
        assert!(list.clear());
        assert!(!list.clear());
        assert!(list.is_empty());
    }

    proptest! {
        /// Property: the list keeps the `cap` most recent distinct terms, newest first
        #[test]
        fn prop_keeps_most_recent_distinct(
            terms in prop::collection::vec("[a-f]", 0..40),
            cap in 1usize..8
        ) {
            let mut list = RecentList::new(cap);
            for term in &terms {
                list.push(term);
            }

            let mut expected: Vec<String> = Vec::new();
            for term in terms.iter().rev() {
                if !expected.contains(term) {
                    expected.push(term.clone());
                }
            }
            expected.truncate(cap);

            prop_assert_eq!(list.to_vec(), expected);
            prop_assert!(list.len() <= cap);
        }
    }
}
