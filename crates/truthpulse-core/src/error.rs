//! Error types for truthpulse-core.

use thiserror::Error;

/// Result type for truthpulse-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building domain values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A truth score outside `[0, 100)`.
    #[error("Truth score {0} is out of range (expected 0..100)")]
    ScoreOutOfRange(u32),

    /// A path that does not belong to any page.
    #[error("No page is registered at '{0}'")]
    UnknownPage(String),
}
