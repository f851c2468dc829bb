//! mdview_options: render options.
//!
//! Controls how a token stream is rendered. Options are plain data that can be
//! built in code or loaded from JSON; every field has a default, so `{}` is a
//! valid options document.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How the parser renders a token stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub space: SpaceStyle,
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OutputFormat {
    /// Flat HTML-ish tags.
    #[default]
    Markup,
    /// Token kind names as JSON strings, with text and line breaks inline.
    TokenDump,
}

/// How `SPACE` tokens appear in markup output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpaceStyle {
    /// `<space>`
    #[default]
    Tag,
    /// The space byte itself.
    Literal,
}

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("invalid render options: {0}")]
    Json(#[from] serde_json::Error),
}

impl RenderOptions {
    /// Options producing the token dump.
    pub fn token_dump() -> Self {
        Self {
            format: OutputFormat::TokenDump,
            ..Self::default()
        }
    }

    /// Load options from a JSON document.
    pub fn from_json(content: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_json(&self) -> Result<String, OptionsError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Parse render options from a JSON string.
pub fn parse_options(content: &str) -> Result<RenderOptions, OptionsError> {
    RenderOptions::from_json(content)
}
