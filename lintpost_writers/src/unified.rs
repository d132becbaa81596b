use std::io::Write;

use lintpost_api::Comment;
use lintpost_service_api::{CommentService, PostContext, ServiceResult};

/// Render a comment as one compiler-style line:
///
/// - `<file>: [<tool>] <message>`
/// - `<file>:<line>: [<tool>] <message>`
/// - `<file>:<line>:<col>: [<tool>] <message>`
///
/// A column is only shown after a line. `<message>` may span several lines;
/// continuation lines are not re-prefixed. With no path and no position the
/// output starts with `": ["`.
#[must_use]
pub fn render_unified(comment: &Comment) -> String {
    let diagnostic = &comment.result.diagnostic;
    let start = diagnostic.start();
    let line = start.line.filter(|&line| line > 0);
    let column = start.column.filter(|&column| column > 0);

    let position = match (line, column) {
        (Some(line), Some(column)) => format!(":{line}:{column}"),
        (Some(line), None) => format!(":{line}"),
        (None, _) => String::new(),
    };

    format!(
        "{path}{position}: [{tool}] {body}\n",
        path = diagnostic.path(),
        tool = comment.tool_name,
        body = comment.body,
    )
}

/// Writes comments in the unified `path:line:col: [tool] message` format.
#[derive(Debug)]
pub struct UnifiedWriter<W> {
    sink: W,
}

impl<W: Write> UnifiedWriter<W> {
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

impl<W: Write> CommentService for UnifiedWriter<W> {
    fn id(&self) -> &'static str {
        "unified"
    }

    fn post(&mut self, _ctx: &PostContext, comment: &Comment) -> ServiceResult<()> {
        self.sink.write_all(render_unified(comment).as_bytes())?;
        Ok(())
    }
}
