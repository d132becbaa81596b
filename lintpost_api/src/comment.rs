use serde::{Deserialize, Deserializer, Serialize};

use super::diagnostic::Diagnostic;

/// A diagnostic together with the analyzer's own rendering of it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CheckResult {
    /// The structured finding.
    pub diagnostic: Diagnostic,
    /// Pre-rendered output lines, in order, without trailing newlines.
    #[serde(default)]
    pub lines: Vec<String>,
}

impl CheckResult {
    /// Result whose lines are the diagnostic message split with [`str::lines`].
    ///
    /// A single trailing newline does not produce an empty last line, and a
    /// `\r` before each `\n` is dropped. Use [`with_lines`](Self::with_lines)
    /// when the exact line layout matters.
    #[must_use]
    pub fn new(diagnostic: Diagnostic) -> Self {
        let lines = diagnostic.message.lines().map(str::to_owned).collect();
        Self { diagnostic, lines }
    }

    /// Result with explicit pre-rendered lines.
    #[must_use]
    pub fn with_lines(diagnostic: Diagnostic, lines: Vec<String>) -> Self {
        Self { diagnostic, lines }
    }
}

/// The unit handed to a comment service: one finding plus tool attribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    /// The finding being reported.
    pub result: CheckResult,
    /// Name of the analyzer that produced the finding.
    pub tool_name: String,
    /// Rendered message text; may contain newlines.
    pub body: String,
}

impl Comment {
    /// Create a comment whose body is the diagnostic message.
    pub fn new(result: CheckResult, tool_name: impl Into<String>) -> Self {
        let body = result.diagnostic.message.clone();
        Self {
            result,
            tool_name: tool_name.into(),
            body,
        }
    }

    /// Replace the rendered body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }
}

#[derive(Deserialize)]
struct CommentFields {
    result: CheckResult,
    #[serde(default)]
    tool_name: String,
    #[serde(default)]
    body: Option<String>,
}

impl<'de> Deserialize<'de> for Comment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = CommentFields::deserialize(deserializer)?;
        let body = fields
            .body
            .unwrap_or_else(|| fields.result.diagnostic.message.clone());
        Ok(Self {
            result: fields.result,
            tool_name: fields.tool_name,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Location, Position, Range};

    #[test]
    fn result_lines_follow_message() {
        let result = CheckResult::new(Diagnostic::new("first\nsecond"));
        assert_eq!(result.lines, vec!["first", "second"]);
    }

    #[test]
    fn result_lines_drop_trailing_newline_and_carriage_returns() {
        let result = CheckResult::new(Diagnostic::new("first\r\nsecond\n"));
        assert_eq!(result.lines, vec!["first", "second"]);

        let exact = CheckResult::with_lines(
            Diagnostic::new("first\n"),
            vec!["first".into(), String::new()],
        );
        assert_eq!(exact.lines.len(), 2);
    }

    #[test]
    fn comment_body_defaults_to_message() {
        let comment = Comment::new(CheckResult::new(Diagnostic::new("unused var")), "golint");
        assert_eq!(comment.body, "unused var");
        assert_eq!(comment.tool_name, "golint");

        let comment = comment.with_body("rewritten");
        assert_eq!(comment.body, "rewritten");
        assert_eq!(comment.result.diagnostic.message, "unused var");
    }

    #[test]
    fn deserialize_fills_missing_body() {
        let json = r#"{
            "result": {
                "diagnostic": {
                    "message": "shadowed err",
                    "location": {"path": "a.go", "range": {"start": {"line": 3}}}
                },
                "lines": ["a.go:3: shadowed err"]
            },
            "tool_name": "govet"
        }"#;
        let comment: Comment = serde_json::from_str(json).expect("comment");
        assert_eq!(comment.body, "shadowed err");
        assert_eq!(comment.result.lines, vec!["a.go:3: shadowed err"]);
        assert_eq!(comment.result.diagnostic.start(), Position::line(3));
    }

    #[test]
    fn explicit_body_wins() {
        let json = r#"{"result": {"diagnostic": {"message": "m"}}, "tool_name": "t", "body": "b"}"#;
        let comment: Comment = serde_json::from_str(json).expect("comment");
        assert_eq!(comment.body, "b");
        assert!(comment.result.lines.is_empty());
    }

    #[test]
    fn serialized_comment_reads_back() {
        let diagnostic = Diagnostic::new("unused var").with_location(Location::new(
            "main.go",
            Some(Range::new(Position::new(10, 2), None)),
        ));
        let comment = Comment::new(CheckResult::new(diagnostic), "golint");
        let json = serde_json::to_string(&comment).expect("serialize");
        let parsed: Comment = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, comment);
    }
}
