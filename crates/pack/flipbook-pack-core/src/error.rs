//! Error types for pack loading and lookup.

use thiserror::Error;

/// Errors surfaced by the loader and the checked pack accessors.
///
/// Only structural failures abort a load; every malformed-but-present
/// field is recovered locally with a documented default instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PackError {
    /// The manifest is not a structurally valid JSON document.
    #[error("manifest parse error: {0}")]
    Parse(String),

    /// Reserved for front-ends that reject malformed fields instead of
    /// default-filling them; the bundled loader never raises it.
    #[error("manifest schema error: {0}")]
    Schema(String),

    /// Manifest bytes could not be read from the file provider.
    #[error("resource unavailable: {path}")]
    Resource { path: String },

    /// A frame referenced a page slot outside the pack's page table.
    /// Checked accessors return None instead; this is the loud form for
    /// callers that treat detection as an internal bug.
    #[error("page index {page} out of range (pack has {pages} pages)")]
    PageOutOfRange { page: i32, pages: usize },
}

impl From<serde_json::Error> for PackError {
    fn from(err: serde_json::Error) -> Self {
        PackError::Parse(err.to_string())
    }
}
