//! Error types for page fetching.
//!
//! Uses `thiserror` to derive `Display` and `Error` from the `#[error(...)]`
//! attributes. Any [`FetchError`] is fatal to a run: the watcher never
//! notifies or persists on top of a partial scrape.

use thiserror::Error;

/// Errors raised while retrieving a source page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    HttpStatus { status: u16, url: String },

    /// Transport-level failure (DNS, refused connection, timeout).
    /// Wraps the underlying `reqwest` error via `#[from]`.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}
