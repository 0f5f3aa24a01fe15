//! Front matter extraction for Markdown documents.
//!
//! A document may start with a YAML block fenced by `---` lines:
//!
//! ```text
//! ---
//! title: Hello
//! ---
//! # Body
//! ```
//!
//! The opening marker must be the very first bytes of the document. The
//! closing marker is the first line after it that consists of `---` alone;
//! `----`, `--- x` or marker text in the middle of a line never close the
//! block.

use super::PageError;
use crate::page::PageMeta;

/// Front matter fence.
pub const MARKER: &str = "---";

/// Result of splitting a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted<'a> {
    /// Decoded metadata (defaults when there is no block)
    pub meta: PageMeta,
    /// Markdown after the block, or the whole document
    pub body: &'a str,
    /// Whether a front matter block was found
    pub has_block: bool,
}

/// Markdown metadata extractor for YAML (`---`) front matter
pub struct MarkdownMetaExtractor;

impl MarkdownMetaExtractor {
    /// Extract front matter and return metadata plus body.
    ///
    /// A missing block is not an error: the whole document becomes the body
    /// and metadata takes its defaults. A block that is not a YAML mapping is.
    pub fn extract_frontmatter<'a>(&self, content: &'a str) -> Result<Extracted<'a>, PageError> {
        match Self::detect_frontmatter(content) {
            Some((block, body)) => Ok(Extracted {
                meta: Self::parse_yaml(block)?,
                body,
                has_block: true,
            }),
            None => Ok(Extracted {
                meta: PageMeta::default(),
                body: content,
                has_block: false,
            }),
        }
    }

    /// Decode the block text. Blank blocks decode to defaults.
    fn parse_yaml(block: &str) -> Result<PageMeta, serde_yaml_ng::Error> {
        if block.trim().is_empty() {
            return Ok(PageMeta::default());
        }
        serde_yaml_ng::from_str(block)
    }

    /// Detect and split front matter.
    /// Returns `(block, body)` if found.
    fn detect_frontmatter(content: &str) -> Option<(&str, &str)> {
        let rest = content.strip_prefix(MARKER)?;
        let end = Self::find_closing_marker(rest)?;

        let block = &rest[..end];
        let body = rest[end + MARKER.len()..].trim_start_matches(['\r', '\n']);
        Some((block, body))
    }

    /// Offset of the first line in `rest` that is exactly the marker.
    ///
    /// `rest` starts right after the opening marker, so offset 0 is never a
    /// line start.
    fn find_closing_marker(rest: &str) -> Option<usize> {
        rest.match_indices(MARKER)
            .map(|(idx, _)| idx)
            .find(|&idx| {
                let starts_line = idx > 0 && rest.as_bytes()[idx - 1] == b'\n';
                let tail = &rest[idx + MARKER.len()..];
                let ends_line = tail.is_empty() || tail.starts_with('\n') || tail.starts_with("\r\n");
                starts_line && ends_line
            })
    }
}
