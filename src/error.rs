//! Error types for feed-sanitizer.
//!
//! The sanitizer itself only ever fails with [`Error::ParseFailure`]. The other
//! variants belong to the article cleaning workflow and its collaborators.

/// Error type for sanitizing and cleaning operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No HTML tree could be built from the input.
    #[error("HTML parsing failed: {0}")]
    ParseFailure(String),

    /// The rewriting service did not return usable text.
    #[error("Rewriting failed: {0}")]
    RewriteFailure(String),

    /// Reading or writing feed items failed.
    #[error("Item store failed: {0}")]
    StoreFailure(String),

    /// Reading a prompt template or stdin failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for sanitizing and cleaning operations.
pub type Result<T> = std::result::Result<T, Error>;
