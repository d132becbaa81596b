//! Core library for posting analyzer findings as review comments.
//!
//! The crate is layered around three responsibilities:
//! - loading posting configuration
//! - decoding comments produced upstream
//! - driving a [`posting::CommentService`] over a batch of comments

#![warn(
    clippy::all,
    clippy::cargo,
    clippy::nursery,
    clippy::pedantic,
    missing_docs
)]
#![cfg_attr(
    not(test),
    deny(
        clippy::dbg_macro,
        clippy::expect_used,
        clippy::panic,
        clippy::print_stderr,
        clippy::print_stdout,
        clippy::todo,
        clippy::unwrap_used
    )
)]

/// Posting configuration and its TOML loader.
pub mod config;
/// JSON-lines comment decoding.
pub mod input;
/// Comment services and the batch posting façade.
pub mod posting;

pub use config::{load_config, PostingConfig};
pub use input::read_comments;
pub use lintpost_api::{CheckResult, Comment, Diagnostic, Location, Position, Range};
pub use posting::{PostSummary, PostingService};

/// Common result type for the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the core library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A comment service failed to post.
    #[error("comment service '{service}' failed: {source}")]
    Service {
        /// Identifier of the failing service.
        service: &'static str,
        /// Error returned by the service, unchanged.
        #[source]
        source: posting::ServiceError,
    },
    /// The context was cancelled before the batch finished.
    #[error("posting cancelled after {posted} comment(s)")]
    Cancelled {
        /// Number of comments posted before cancellation was observed.
        posted: usize,
    },
    /// An input line could not be decoded as a comment.
    #[error("invalid comment on input line {line}: {source}")]
    Decode {
        /// 1-based line number of the offending input.
        line: usize,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// A configuration file could not be parsed.
    #[error("invalid config {path}: {source}")]
    Config {
        /// Path of the configuration file.
        path: String,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
    /// Filesystem or stream interaction failed.
    #[error("failed to access {path}: {source}")]
    Io {
        /// Path or stream name involved in the failed operation.
        path: String,
        /// Source I/O error returned by the standard library.
        #[source]
        source: std::io::Error,
    },
}
