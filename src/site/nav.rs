//! Navigation entry table and active-entry selection
//!
//! The entry set is fixed at compile time. Selection is first-match-wins
//! over the table order, which realizes the precedence
//! installing > using > history > tweets > merch, with About as the
//! fallback when no recognized key is present.

use std::collections::HashSet;

/// One destination in the navigation bar
#[derive(Debug, PartialEq, Eq)]
pub struct NavEntry {
    /// Label shown in the navigation bar
    pub label: &'static str,
    /// Query key that selects this entry; `None` for the default entry
    pub query_key: Option<&'static str>,
    /// Fragment file holding this entry's body
    pub fragment: &'static str,
    /// Whether the entry appears in the rendered navigation bar
    pub listed: bool,
}

/// The fixed navigation table, in display and precedence order
///
/// Merch is reachable only by its query key and is kept out of the
/// rendered navigation bar.
pub const ENTRIES: &[NavEntry] = &[
    NavEntry {
        label: "About",
        query_key: None,
        fragment: "about.html",
        listed: true,
    },
    NavEntry {
        label: "Installing",
        query_key: Some("installing"),
        fragment: "installing.html",
        listed: true,
    },
    NavEntry {
        label: "Using",
        query_key: Some("using"),
        fragment: "using.html",
        listed: true,
    },
    NavEntry {
        label: "Version History",
        query_key: Some("history"),
        fragment: "history.html",
        listed: true,
    },
    NavEntry {
        label: "Recent Tweets",
        query_key: Some("tweets"),
        fragment: "tweets.html",
        listed: true,
    },
    NavEntry {
        label: "Merch",
        query_key: Some("merch"),
        fragment: "merch.html",
        listed: false,
    },
];

/// Select the active entry for a set of query keys
///
/// The first entry whose key is present wins; entries without a key are
/// skipped during matching. Falls back to the default entry when none of
/// the recognized keys is present.
pub fn select_active(keys: &HashSet<&str>) -> &'static NavEntry {
    ENTRIES
        .iter()
        .find(|entry| entry.query_key.is_some_and(|key| keys.contains(key)))
        .unwrap_or_else(default_entry)
}

/// The entry used when no recognized query key is present
pub fn default_entry() -> &'static NavEntry {
    &ENTRIES[0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::query::parse_keys;

    #[test]
    fn test_default_selection() {
        let active = select_active(&parse_keys(None));
        assert_eq!(active.label, "About");
        assert_eq!(active.fragment, "about.html");
    }

    #[test]
    fn test_unknown_keys_fall_back_to_default() {
        let active = select_active(&parse_keys(Some("bogus&other=1")));
        assert_eq!(active.label, "About");
    }

    #[test]
    fn test_single_key_selection() {
        for (query, fragment) in [
            ("installing", "installing.html"),
            ("using", "using.html"),
            ("history", "history.html"),
            ("tweets", "tweets.html"),
            ("merch", "merch.html"),
        ] {
            let active = select_active(&parse_keys(Some(query)));
            assert_eq!(active.fragment, fragment, "query: {query}");
        }
    }

    #[test]
    fn test_precedence_first_match_wins() {
        let active = select_active(&parse_keys(Some("installing&tweets")));
        assert_eq!(active.fragment, "installing.html");

        let active = select_active(&parse_keys(Some("merch&history")));
        assert_eq!(active.fragment, "history.html");

        let active = select_active(&parse_keys(Some("tweets&using")));
        assert_eq!(active.fragment, "using.html");
    }

    #[test]
    fn test_merch_is_unlisted() {
        let merch = ENTRIES
            .iter()
            .find(|e| e.query_key == Some("merch"))
            .unwrap();
        assert!(!merch.listed);

        // Every other entry is listed
        assert!(ENTRIES
            .iter()
            .filter(|e| e.query_key != Some("merch"))
            .all(|e| e.listed));
    }

    #[test]
    fn test_exactly_one_default() {
        assert_eq!(ENTRIES.iter().filter(|e| e.query_key.is_none()).count(), 1);
        assert_eq!(default_entry().label, "About");
    }
}
