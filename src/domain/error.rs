//! Error types for the pixzel plugin.
//!
//! Errors are split by where they can surface:
//!
//! - [`SearchError`]: rejected user intents (empty query, duplicate query,
//!   load-more while nothing is left). These never change search state and
//!   are reported to the user as advisories.
//! - [`FetchError`]: a failed page fetch (HTTP status, malformed payload,
//!   unusable request). Recoverable: the gallery stays usable.
//! - [`PixzelError`]: the top-level error returned by the event handler and
//!   theme loading, wrapping the two above via `#[from]`.
//!
//! All errors are implemented using the `thiserror` crate.

use thiserror::Error;

/// A user intent the search layer refused to act on.
///
/// None of these variants mutate search state. The event handler turns each
/// one into an advisory (or ignores it) and carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The search bar was submitted with nothing but whitespace in it.
    #[error("Type something in the search field")]
    EmptyQuery,

    /// The normalized query equals the one currently displayed.
    #[error("Pictures on this query have already been requested!")]
    DuplicateQuery {
        /// The query that was submitted again.
        query: String,
    },

    /// `load_more` was requested while the load-more control is hidden
    /// (everything is loaded, nothing was searched yet, or a fetch is in flight).
    #[error("No more pages to load")]
    LoadMoreUnavailable,
}

/// A page fetch that did not produce a results page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The (query, page) pair violates the client's input constraints.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The provider (or the host transport) answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http {
        /// Status code reported by the host.
        status: u16,
        /// Response body, lossily decoded and truncated for display.
        body: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request context attached to a web request result was missing or garbled.
    #[error("Invalid request context: {0}")]
    Context(String),
}

/// The main error type for pixzel plugin operations.
#[derive(Debug, Error)]
pub enum PixzelError {
    /// A rejected search intent.
    #[error(transparent)]
    Search(#[from] SearchError),

    /// A failed page fetch.
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for pixzel operations.
pub type Result<T> = std::result::Result<T, PixzelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_errors_read_as_advisories() {
        assert_eq!(
            SearchError::EmptyQuery.to_string(),
            "Type something in the search field"
        );
        let duplicate = SearchError::DuplicateQuery {
            query: "cats".to_string(),
        };
        assert_eq!(
            duplicate.to_string(),
            "Pictures on this query have already been requested!"
        );
    }

    #[test]
    fn fetch_error_converts_into_top_level_error() {
        let err: PixzelError = FetchError::Http {
            status: 503,
            body: "unavailable".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Fetch error: HTTP 503: unavailable");
    }
}
