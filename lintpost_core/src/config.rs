use std::fs;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::posting::OutputFormat;
use crate::{Comment, Error, Result};

/// Table name accepted for a nested configuration section.
const SECTION: &str = "lintpost";

/// Settings that control how comments are posted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PostingConfig {
    /// Output format used by local writers.
    pub format: OutputFormat,
    /// Tool name assigned to comments that arrive without one.
    pub default_tool_name: Option<String>,
}

impl PostingConfig {
    /// Parse a TOML document, either top-level keys or a `[lintpost]` table.
    ///
    /// # Errors
    ///
    /// Returns the TOML error when the document or its values are invalid.
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        let raw: toml::Value = toml::from_str(content)?;
        let section = match raw.get(SECTION) {
            Some(nested) => nested.clone(),
            None => raw,
        };
        section.try_into()
    }

    /// Fill in fields the upstream producer left empty.
    pub fn apply_defaults(&self, comment: &mut Comment) {
        if comment.tool_name.is_empty() {
            if let Some(tool_name) = &self.default_tool_name {
                comment.tool_name.clone_from(tool_name);
            }
        }
    }
}

/// Load a [`PostingConfig`] from a TOML file.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read and [`Error::Config`]
/// when it does not parse.
pub fn load_config(path: &Utf8Path) -> Result<PostingConfig> {
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_string(),
        source,
    })?;
    let config = PostingConfig::from_toml_str(&content).map_err(|source| Error::Config {
        path: path.to_string(),
        source,
    })?;
    tracing::debug!(%path, format = %config.format, "loaded posting config");
    Ok(config)
}
