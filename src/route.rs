//! Hash Routing
//!
//! Pages are addressed by the location hash so links survive a reload:
//! `#/`, `#/search/<query>`, `#/novel/<id>`, `#/signin`.

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    /// Catalog, optionally narrowed by a search query
    Browse { query: Option<String> },
    Novel(u32),
    SignIn,
}

impl Default for Page {
    fn default() -> Self {
        Page::Browse { query: None }
    }
}

impl Page {
    pub fn search(query: &str) -> Self {
        let query = query.trim();
        Page::Browse {
            query: (!query.is_empty()).then(|| query.to_string()),
        }
    }

    pub fn to_hash(&self) -> String {
        match self {
            Page::Browse { query: None } => "#/".to_string(),
            Page::Browse { query: Some(q) } => {
                format!("#/search/{}", utf8_percent_encode(q, NON_ALPHANUMERIC))
            }
            Page::Novel(id) => format!("#/novel/{}", id),
            Page::SignIn => "#/signin".to_string(),
        }
    }

    /// Unknown or malformed hashes land on the catalog
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_start_matches('/');
        let (head, rest) = path.split_once('/').unwrap_or((path, ""));
        match head {
            "search" => {
                let query = percent_decode_str(rest).decode_utf8_lossy();
                Page::search(&query)
            }
            "novel" => rest
                .parse()
                .map(Page::Novel)
                .unwrap_or_default(),
            "signin" => Page::SignIn,
            _ => Page::default(),
        }
    }
}

/// Current page from `window.location.hash`
pub fn current_page() -> Page {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|hash| Page::from_hash(&hash))
        .unwrap_or_default()
}

/// Push the page into the address bar (fires `hashchange`)
pub fn push_page(page: &Page) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_hash(&page.to_hash()) {
            tracing::warn!(target: "novilist::route", error = ?e, "could not update location hash");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let pages = [
            Page::default(),
            Page::Novel(42),
            Page::SignIn,
            Page::search("solo leveling & co"),
            Page::search("전지적 독자 시점"),
            Page::search("50%/off?"),
        ];
        for page in pages {
            assert_eq!(Page::from_hash(&page.to_hash()), page);
        }
    }

    #[test]
    fn test_search_hash_is_encoded() {
        assert_eq!(Page::search("a b").to_hash(), "#/search/a%20b");
    }

    #[test]
    fn test_blank_search_is_plain_browse() {
        assert_eq!(Page::search("   "), Page::default());
        assert_eq!(Page::from_hash("#/search/"), Page::default());
    }

    #[test]
    fn test_unknown_hashes_fall_back() {
        assert_eq!(Page::from_hash(""), Page::default());
        assert_eq!(Page::from_hash("#/novel/abc"), Page::default());
        assert_eq!(Page::from_hash("#/wat"), Page::default());
        assert_eq!(Page::from_hash("#/novel/7"), Page::Novel(7));
    }
}
