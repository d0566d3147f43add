use thiserror::Error;

/// Errors which can occur while setting up a run.
///
/// Failures of individual requests are never reported through this type;
/// they are recorded as [`Outcome::Error`](crate::Outcome::Error) instead.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The underlying HTTP client could not be constructed
    #[error("Failed to build the HTTP client: {0}")]
    BuildClient(#[from] reqwest::Error),
}

/// Result type used across the library
pub type Result<T> = std::result::Result<T, ErrorKind>;
