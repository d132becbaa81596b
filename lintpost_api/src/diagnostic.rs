use serde::{Deserialize, Deserializer, Serialize};

/// A 1-based line/column pair where either half may be absent.
///
/// Producers that cannot express absence encode it as `0`; both the
/// constructor and deserialization fold that sentinel into `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    /// 1-based line number.
    #[serde(
        default,
        deserialize_with = "zero_as_absent",
        skip_serializing_if = "Option::is_none"
    )]
    pub line: Option<u32>,
    /// 1-based column.
    #[serde(
        default,
        deserialize_with = "zero_as_absent",
        skip_serializing_if = "Option::is_none"
    )]
    pub column: Option<u32>,
}

impl Position {
    /// Position with neither line nor column.
    pub const ABSENT: Self = Self {
        line: None,
        column: None,
    };

    /// Build a position from raw numbers, treating `0` as absent.
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self {
            line: non_zero(line),
            column: non_zero(column),
        }
    }

    /// Line-only position.
    #[must_use]
    pub const fn line(line: u32) -> Self {
        Self::new(line, 0)
    }

    /// Returns `true` when neither a line nor a column is present.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        self.line.is_none() && self.column.is_none()
    }
}

const fn non_zero(value: u32) -> Option<u32> {
    if value == 0 {
        None
    } else {
        Some(value)
    }
}

fn zero_as_absent<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<u32>::deserialize(deserializer)?;
    Ok(value.filter(|&n| n > 0))
}

/// A span inside a file. Only the start is needed for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Range {
    /// Inclusive start position.
    #[serde(default)]
    pub start: Position,
    /// Optional end position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<Position>,
}

impl Range {
    /// Construct a range with an explicit start and optional end.
    #[must_use]
    pub const fn new(start: Position, end: Option<Position>) -> Self {
        Self { start, end }
    }
}

/// File path plus optional range a diagnostic points at.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Location {
    /// Path as reported by the analyzer, usually relative to the repository root.
    #[serde(default)]
    pub path: String,
    /// Optional span within the file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<Range>,
}

impl Location {
    /// Create a new location.
    pub fn new(path: impl Into<String>, range: Option<Range>) -> Self {
        Self {
            path: path.into(),
            range,
        }
    }

    /// Location that only names a file.
    pub fn file(path: impl Into<String>) -> Self {
        Self::new(path, None)
    }
}

/// A single analyzer finding.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Free-text message, possibly spanning several lines.
    pub message: String,
    /// Where the finding points, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl Diagnostic {
    /// Diagnostic without a location.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: None,
        }
    }

    /// Attach a location.
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// File path, or `""` when the diagnostic has no location.
    #[must_use]
    pub fn path(&self) -> &str {
        self.location
            .as_ref()
            .map_or("", |location| location.path.as_str())
    }

    /// Start position, or [`Position::ABSENT`] when location or range is missing.
    #[must_use]
    pub fn start(&self) -> Position {
        self.location
            .as_ref()
            .and_then(|location| location.range)
            .map_or(Position::ABSENT, |range| range.start)
    }
}
