//! `[markdown]` section configuration.
//!
//! Toggles for Markdown extensions on top of CommonMark.
//!
//! ```toml
//! [markdown]
//! tables = true
//! footnotes = true
//! strikethrough = true
//! task_lists = true
//! heading_attributes = true   # `# Heading {#custom-id}`
//! smart_punctuation = false
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// Enable tables extension
    pub tables: bool,
    /// Enable footnotes extension
    pub footnotes: bool,
    /// Enable strikethrough extension
    pub strikethrough: bool,
    /// Enable task lists extension
    pub task_lists: bool,
    /// Enable heading attributes extension
    pub heading_attributes: bool,
    /// Convert quotes, dashes and ellipses to typographic forms
    pub smart_punctuation: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            tables: true,
            footnotes: true,
            strikethrough: true,
            task_lists: true,
            heading_attributes: true,
            smart_punctuation: false,
        }
    }
}

impl MarkdownConfig {
    /// Plain CommonMark, no extensions.
    #[cfg(test)]
    pub fn commonmark() -> Self {
        Self {
            tables: false,
            footnotes: false,
            strikethrough: false,
            task_lists: false,
            heading_attributes: false,
            smart_punctuation: false,
        }
    }
}
