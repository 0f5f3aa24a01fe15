//! Page metadata decoded from a document's front matter block.

use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize a scalar title as its source text, `null` as the default.
///
/// Asking the YAML deserializer for a string keeps the scalar exactly as
/// written, so `1.10`, `0x1F` and `true` are not reformatted. Sequences and
/// mappings are rejected.
fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_else(default_title))
}

fn default_title() -> String {
    String::new()
}

/// Page metadata from the `---` front matter block of a Markdown file
///
/// # Fields
///
/// | Field   | Type     | Default | Description |
/// |---------|----------|---------|-------------|
/// | `title` | `String` | `""`    | Page title  |
///
/// Unknown keys are ignored. New optional fields must carry an explicit
/// `#[serde(default = ...)]` so documents that omit them keep decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    #[serde(default = "default_title", deserialize_with = "deserialize_text")]
    pub title: String,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

impl PageMeta {
    /// Title with a fallback for display purposes (logs).
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "untitled"
        } else {
            &self.title
        }
    }
}
