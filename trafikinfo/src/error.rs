//! Error types for the traffic-information client.

use std::path::PathBuf;

/// Errors surfaced by [`Client`](crate::Client) operations.
///
/// Every failure is reported to the immediate caller; nothing is retried
/// or recovered internally. A successful call can still carry a
/// service-level `<ERROR>` block inside its result data — inspecting
/// those is the caller's job.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP request failed: connect error, timeout, or a failure while
    /// reading the response body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Reading a saved response file or writing a fetched response to
    /// disk failed. On a write failure the file may be partially
    /// written.
    #[error("I/O error for {}: {source}", .path.display())]
    Io {
        /// The file being read or written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Content did not decode as a `<RESPONSE>` envelope of the expected
    /// schema.
    #[error("decode error: {message} (body: {body})")]
    Decode {
        /// What the XML decoder reported.
        message: String,
        /// The first 500 characters of the offending document.
        body: String,
    },
}
