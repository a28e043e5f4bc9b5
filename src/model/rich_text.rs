// src/model/rich_text.rs
//! Styled text runs as returned by the Notion API.
//!
//! Only `plain_text` participates in rendering and extraction today; the
//! annotations are carried so the model stays faithful to the wire payload.

use serde::{Deserialize, Serialize};

/// A single styled text run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RichTextItem {
    pub plain_text: String,
    #[serde(default)]
    pub annotations: Annotations,
    #[serde(default)]
    pub href: Option<String>,
}

impl RichTextItem {
    /// A run with no styling, convenient for tests and fixtures.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            plain_text: text.into(),
            ..Default::default()
        }
    }
}

/// Formatting metadata on a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Annotations {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub strikethrough: bool,
    #[serde(default)]
    pub underline: bool,
    #[serde(default)]
    pub code: bool,
}

/// Concatenates the plain text of all runs, preserving run order.
pub fn plain_text(runs: &[RichTextItem]) -> String {
    runs.iter().map(|run| run.plain_text.as_str()).collect()
}
