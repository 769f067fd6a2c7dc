use thiserror::Error;

/// Errors produced while rendering the documentation page
#[derive(Debug, Error)]
pub enum SiteError {
    /// The selected fragment file is missing or unreadable
    #[error("fragment '{name}' is missing or unreadable: {source}")]
    FragmentNotFound {
        name: String,
        #[source]
        source: std::io::Error,
    },
}
