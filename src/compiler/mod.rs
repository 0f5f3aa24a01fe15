//! Page compilation: front matter extraction, Markdown conversion, rendering.
//!
//! # Module Structure
//!
//! - [`frontmatter`] - Split a document into metadata and body
//! - [`markdown`] - Markdown → HTML via `pulldown-cmark`
//! - [`process`] - Per-file pipeline (read → extract → convert → render → write)
//! - [`error`] - Per-file error taxonomy

mod error;
pub mod frontmatter;
pub mod markdown;
mod process;

pub use error::PageError;
pub use frontmatter::MarkdownMetaExtractor;
pub use process::process_page;

use crate::config::SiteConfig;
use crate::render::Renderer;

/// Context for the compilation pipeline, shared by every page of a build
pub struct CompileContext<'a> {
    pub config: &'a SiteConfig,
    pub renderer: &'a dyn Renderer,
}

impl<'a> CompileContext<'a> {
    pub fn new(config: &'a SiteConfig, renderer: &'a dyn Renderer) -> Self {
        Self { config, renderer }
    }
}
