//! Error types for chemfinder.

use thiserror::Error;

/// Chemfinder error type.
#[derive(Error, Debug)]
pub enum Error {
    /// The resolver endpoint URL could not be parsed
    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),

    /// The resolver endpoint cannot serve as a base for request paths
    #[error("endpoint {0:?} cannot be used as a base URL")]
    InvalidEndpoint(String),

    /// A lookup fetch failed
    #[error("fetch error: {0}")]
    Fetch(#[from] crate::resolver::FetchError),
}

/// Result type alias for chemfinder operations.
pub type Result<T> = std::result::Result<T, Error>;
