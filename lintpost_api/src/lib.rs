//! Shared lintpost data models consumed by the core library and comment writers.

pub mod comment;
pub mod diagnostic;

pub use comment::*;
pub use diagnostic::*;
