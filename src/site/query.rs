//! Query string parsing module
//!
//! The page is selected by bare query keys (`?installing`, `?using`, ...).
//! Only key presence matters; values after `=` are ignored.

use std::collections::HashSet;

/// Parse a raw query string into the set of present keys
///
/// Splits on `&` and keeps the part of each pair before `=`. Empty
/// segments (as in `?a&&b`) are dropped. A missing query string yields
/// the empty set.
///
/// The recognized keys are plain ASCII, so no percent-decoding is done;
/// an encoded key simply fails to match and is ignored like any other
/// unknown key.
pub fn parse_keys(raw: Option<&str>) -> HashSet<&str> {
    let Some(raw) = raw else {
        return HashSet::new();
    };

    raw.split('&')
        .map(|pair| pair.split_once('=').map_or(pair, |(key, _)| key))
        .filter(|key| !key.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_query() {
        assert!(parse_keys(None).is_empty());
        assert!(parse_keys(Some("")).is_empty());
    }

    #[test]
    fn test_single_key() {
        let keys = parse_keys(Some("using"));
        assert_eq!(keys.len(), 1);
        assert!(keys.contains("using"));
    }

    #[test]
    fn test_multiple_keys() {
        let keys = parse_keys(Some("installing&tweets"));
        assert!(keys.contains("installing"));
        assert!(keys.contains("tweets"));
        assert_eq!(keys.len(), 2);
    }

    #[test]
    fn test_value_is_ignored() {
        let keys = parse_keys(Some("using=1&history=yes"));
        assert!(keys.contains("using"));
        assert!(keys.contains("history"));
    }

    #[test]
    fn test_empty_segments_dropped() {
        let keys = parse_keys(Some("&&history&"));
        assert_eq!(keys.len(), 1);
        assert!(keys.contains("history"));
    }
}
