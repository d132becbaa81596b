use std::io::Write;

use serde::Serialize;

use super::{writer_for, CommentService, OutputFormat, PostContext, ServiceResult};
use crate::{Comment, Error, Result};

/// Outcome of posting a batch of comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PostSummary {
    /// Number of comments successfully posted.
    pub posted: usize,
}

/// High-level façade that drives one comment service.
pub struct PostingService<'a> {
    service: Box<dyn CommentService + 'a>,
}

impl<'a> PostingService<'a> {
    /// Create a posting service backed by the provided comment service.
    #[must_use]
    pub fn new(service: Box<dyn CommentService + 'a>) -> Self {
        Self { service }
    }

    /// Posting service that writes `format` text to `sink`.
    #[must_use]
    pub fn local<W>(format: OutputFormat, sink: W) -> Self
    where
        W: Write + 'a,
    {
        Self::new(writer_for(format, sink))
    }

    /// Identifier of the wrapped service.
    #[must_use]
    pub fn service_id(&self) -> &'static str {
        self.service.id()
    }

    /// Post a single comment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Service`] carrying the service's error unchanged.
    pub fn post(&mut self, ctx: &PostContext, comment: &Comment) -> Result<()> {
        let service = self.service.id();
        let result = self.service.post(ctx, comment);
        Self::invoke(service, comment, result)
    }

    /// Post every comment in order, stopping at the first failure.
    ///
    /// Cancellation is checked before each comment; a post already in
    /// progress is never interrupted by this layer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cancelled`] once `ctx` is cancelled, or the first
    /// [`Error::Service`] failure. Nothing is retried.
    pub fn post_all(&mut self, ctx: &PostContext, comments: &[Comment]) -> Result<PostSummary> {
        let mut summary = PostSummary::default();
        for comment in comments {
            if ctx.is_cancelled() {
                tracing::warn!(
                    service = self.service_id(),
                    posted = summary.posted,
                    "posting cancelled"
                );
                return Err(Error::Cancelled {
                    posted: summary.posted,
                });
            }
            self.post(ctx, comment)?;
            summary.posted += 1;
        }
        tracing::info!(
            service = self.service_id(),
            posted = summary.posted,
            "posted comments"
        );
        Ok(summary)
    }

    fn invoke(service: &'static str, comment: &Comment, result: ServiceResult<()>) -> Result<()> {
        let path = comment.result.diagnostic.path();
        match result {
            Ok(()) => {
                tracing::debug!(service, path, tool = %comment.tool_name, "posted comment");
                Ok(())
            }
            Err(source) => {
                tracing::warn!(service, path, error = %source, "failed to post comment");
                Err(Error::Service { service, source })
            }
        }
    }
}

impl std::fmt::Debug for PostingService<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostingService")
            .field("service", &self.service.id())
            .finish()
    }
}
