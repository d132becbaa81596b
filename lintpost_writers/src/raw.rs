use std::io::Write;

use lintpost_api::Comment;
use lintpost_service_api::{CommentService, PostContext, ServiceResult};

/// Render the analyzer's own lines, newline-joined, with one trailing newline.
#[must_use]
pub fn render_raw(comment: &Comment) -> String {
    let mut out = comment.result.lines.join("\n");
    out.push('\n');
    out
}

/// Writes each comment's pre-rendered result lines without any formatting.
#[derive(Debug)]
pub struct RawWriter<W> {
    sink: W,
}

impl<W: Write> RawWriter<W> {
    /// Wrap `sink`. The writer never flushes or closes it.
    pub const fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Borrow the sink.
    pub const fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Mutably borrow the sink.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    /// Give the sink back.
    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<W: Write> CommentService for RawWriter<W> {
    fn id(&self) -> &'static str {
        "raw"
    }

    fn post(&mut self, _ctx: &PostContext, comment: &Comment) -> ServiceResult<()> {
        self.sink.write_all(render_raw(comment).as_bytes())?;
        Ok(())
    }
}
