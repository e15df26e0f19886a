//! Error types for the zunsplash plugin.
//!
//! [`SearchError`] describes why a single search settled without results.
//! [`ZunsplashError`] is the crate-wide error, wrapping search failures along
//! with URL, theme, and I/O problems. Both use `thiserror`.

use thiserror::Error;

/// Failure of a single search request.
///
/// Every variant is presented to the user as an empty result set; the
/// distinction is kept for logging and for the notice line.
///
/// # Examples
///
/// ```
/// use zunsplash::domain::SearchError;
///
/// let err = SearchError::Endpoint(vec!["OAuth error: The access token is invalid".into()]);
/// assert_eq!(err.kind(), "endpoint");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The endpoint answered with a well-formed payload carrying an `errors`
    /// marker (bad query, rate limit, invalid credential).
    #[error("search rejected: {}", .0.join("; "))]
    Endpoint(Vec<String>),

    /// No usable payload was obtained: network failure, non-JSON body, or a
    /// body that does not match the expected shape.
    #[error("search failed: {0}")]
    Transport(String),

    /// No access key is configured, so no request could be issued.
    #[error("no Unsplash access key configured (set `access_key` in the plugin configuration)")]
    Unconfigured,
}

impl SearchError {
    /// Short machine-friendly name of the variant, used as a tracing field.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Endpoint(_) => "endpoint",
            Self::Transport(_) => "transport",
            Self::Unconfigured => "unconfigured",
        }
    }
}

/// The main error type for zunsplash operations.
#[derive(Debug, Error)]
pub enum ZunsplashError {
    /// A search request could not be completed.
    #[error(transparent)]
    Search(#[from] SearchError),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The configured API URL could not be turned into a request URL.
    #[error("Invalid API URL: {0}")]
    Url(#[from] url::ParseError),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for zunsplash operations.
pub type Result<T> = std::result::Result<T, ZunsplashError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_messages_are_joined() {
        let err = SearchError::Endpoint(vec!["first".into(), "second".into()]);
        assert_eq!(err.to_string(), "search rejected: first; second");
    }

    #[test]
    fn search_errors_convert_transparently() {
        let err: ZunsplashError = SearchError::Transport("connection reset".into()).into();
        assert_eq!(err.to_string(), "search failed: connection reset");
    }
}
