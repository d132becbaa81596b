use std::io::BufRead;

use crate::{Comment, Error, Result};

/// Decode JSON-lines input, one [`Comment`] per non-blank line.
///
/// # Errors
///
/// Returns [`Error::Decode`] with the 1-based line number of the first
/// malformed line, or [`Error::Io`] when reading fails.
pub fn read_comments<R: BufRead>(reader: R) -> Result<Vec<Comment>> {
    let mut comments = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| Error::Io {
            path: "<input>".to_string(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let comment = serde_json::from_str(&line).map_err(|source| Error::Decode {
            line: index + 1,
            source,
        })?;
        comments.push(comment);
    }
    tracing::debug!(count = comments.len(), "decoded comments");
    Ok(comments)
}
