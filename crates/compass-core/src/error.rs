//! Error types for compass-core

use thiserror::Error;

/// Result type alias for compass operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the workspace navigation core
#[derive(Debug, Error)]
pub enum Error {
    /// Team record violating the caller contract
    #[error("malformed team: {reason}")]
    MalformedTeam { reason: String },

    /// Index redirects re-dispatched past the hop limit
    #[error("redirect loop at {path}: {hops} hops without a terminal route")]
    RedirectLoop { path: String, hops: usize },
}
