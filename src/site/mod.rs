//! Page renderer module
//!
//! Turns a request's query string into a rendered documentation page:
//! query-key parsing, navigation entry selection, fragment loading, and
//! HTML shell rendering.

mod error;
pub mod fragment;
pub mod nav;
pub mod page;
pub mod query;

pub use error::SiteError;
pub use nav::NavEntry;
