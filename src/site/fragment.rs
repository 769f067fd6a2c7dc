//! Fragment loading module
//!
//! Fragments are opaque HTML blobs, one per navigation destination,
//! inlined verbatim into the content region. Filenames come only from
//! the fixed navigation table, never from request input.

use std::path::Path;
use tokio::fs;

use crate::site::SiteError;

/// Load a fragment file from the fragment directory
///
/// A missing or unreadable file is an explicit error carrying the
/// fragment name; the caller decides how to surface it.
pub async fn load(fragment_dir: &str, name: &str) -> Result<String, SiteError> {
    let path = Path::new(fragment_dir).join(name);
    fs::read_to_string(&path)
        .await
        .map_err(|source| SiteError::FragmentNotFound {
            name: name.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_existing_fragment() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = std::fs::File::create(dir.path().join("about.html")).unwrap();
        write!(file, "<p>hello</p>").unwrap();

        let body = load(dir.path().to_str().unwrap(), "about.html")
            .await
            .unwrap();
        assert_eq!(body, "<p>hello</p>");
    }

    #[tokio::test]
    async fn test_missing_fragment_is_explicit_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path().to_str().unwrap(), "installing.html")
            .await
            .unwrap_err();

        let SiteError::FragmentNotFound { name, .. } = err;
        assert_eq!(name, "installing.html");
    }

    #[tokio::test]
    async fn test_error_message_names_fragment() {
        let err = load("no-such-dir", "tweets.html").await.unwrap_err();
        assert!(err.to_string().contains("tweets.html"));
    }
}
