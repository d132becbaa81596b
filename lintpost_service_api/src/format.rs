use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Text formats a local writer can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// The analyzer's own lines, verbatim.
    Raw,
    /// `path:line:col: [tool] message`.
    #[default]
    Unified,
}

impl OutputFormat {
    /// Every supported format.
    pub const ALL: [Self; 2] = [Self::Raw, Self::Unified];

    /// Identifier used on the command line and in config files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::Unified => "unified",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a format name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown output format '{name}' (expected one of: raw, unified)")]
pub struct ParseFormatError {
    /// The rejected input.
    pub name: String,
}

impl FromStr for OutputFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseFormatError { name: s.to_owned() })
    }
}
