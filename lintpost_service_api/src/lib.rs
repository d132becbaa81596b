mod format;
mod types;

pub use format::{OutputFormat, ParseFormatError};
pub use types::{PostContext, ServiceError, ServiceResult};

use lintpost_api::Comment;

/// Trait implemented by every backend that can publish a review comment
/// (local writers, code-hosting APIs, ...).
///
/// `post` takes `&mut self`: a service is driven by one caller at a time, and
/// sharing one across threads requires external locking.
pub trait CommentService {
    /// Stable identifier used for lookup and logging.
    fn id(&self) -> &'static str;

    /// Publish a single comment.
    ///
    /// Implementations that block on I/O should honour cancellation through
    /// `ctx`; purely local writers may ignore it.
    ///
    /// # Errors
    ///
    /// Returns the backend's failure, e.g. [`ServiceError::Write`] when the
    /// underlying sink rejects the write.
    fn post(&mut self, ctx: &PostContext, comment: &Comment) -> ServiceResult<()>;
}
