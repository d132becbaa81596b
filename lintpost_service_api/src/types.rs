use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cancellation handle passed to every [`crate::CommentService::post`] call.
///
/// Clones share the same flag, so cancelling any clone cancels all of them.
#[derive(Debug, Clone, Default)]
pub struct PostContext {
    cancelled: Arc<AtomicBool>,
}

impl PostContext {
    /// A context that is never cancelled unless [`cancel`](Self::cancel) is called.
    #[must_use]
    pub fn background() -> Self {
        Self::default()
    }

    /// Request cancellation of in-flight and future posts.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Errors surfaced by comment services.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The sink rejected the write. Display and source are those of the
    /// underlying I/O error.
    #[error(transparent)]
    Write(#[from] io::Error),
    /// Generic failure surfaced by a remote backend.
    #[error("{message}")]
    Failure {
        /// Human-readable error message.
        message: String,
    },
}

impl ServiceError {
    /// Helper to construct a failure from any displayable message.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    /// The original sink error, if this is a write failure.
    #[must_use]
    pub fn into_io_error(self) -> Option<io::Error> {
        match self {
            Self::Write(err) => Some(err),
            Self::Failure { .. } => None,
        }
    }
}

/// Convenience result alias for comment service operations.
pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
