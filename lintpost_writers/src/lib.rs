mod raw;
mod unified;

pub use raw::{render_raw, RawWriter};
pub use unified::{render_unified, UnifiedWriter};

use std::io::Write;

use lintpost_service_api::{CommentService, OutputFormat};

/// Build the local writer for `format` over `sink`.
///
/// The writer borrows or owns `sink` as given; it never flushes or closes it.
pub fn writer_for<'a, W>(format: OutputFormat, sink: W) -> Box<dyn CommentService + 'a>
where
    W: Write + 'a,
{
    match format {
        OutputFormat::Raw => Box::new(RawWriter::new(sink)),
        OutputFormat::Unified => Box::new(UnifiedWriter::new(sink)),
    }
}
