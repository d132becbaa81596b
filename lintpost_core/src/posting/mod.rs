//! Comment service entry points.

mod service;

pub use lintpost_service_api::{
    CommentService, OutputFormat, ParseFormatError, PostContext, ServiceError, ServiceResult,
};
pub use lintpost_writers::{render_raw, render_unified, writer_for, RawWriter, UnifiedWriter};

pub use service::{PostSummary, PostingService};
