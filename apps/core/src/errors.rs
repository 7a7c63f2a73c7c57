use thiserror::Error;

/// Application-level error type for the counseling core.
///
/// Propagation policy: network and API errors are caught at the navigation
/// gate boundary and degraded to safe defaults; `InvalidRating` indicates a
/// backend data-contract violation and is surfaced to the caller instead of
/// being silently masked.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid fit rating: {0:?}")]
    InvalidRating(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Backend error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
