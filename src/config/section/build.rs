//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! content = "content"   # Source directory for .md files (relative to site root)
//! output = "public"     # Output directory, recreated on every build
//! format = "html"       # Output format: html | json
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Rendered output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Base layout + page fragment templates
    #[default]
    Html,
    /// Page data serialized as JSON
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Content source directory (Markdown files).
    pub content: PathBuf,

    /// Build output directory.
    pub output: PathBuf,

    /// Output format.
    pub format: OutputFormat,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            content: "content".into(),
            output: "public".into(),
            format: OutputFormat::Html,
        }
    }
}

impl BuildSectionConfig {
    /// Validate normalized paths.
    ///
    /// The output directory is removed on every build, so it must not hold
    /// the content directory.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.content.starts_with(&self.output) {
            diag.error_with_hint(
                FieldPath::new("build.output"),
                format!(
                    "output directory `{}` contains the content directory",
                    self.output.display()
                ),
                "the output directory is deleted before each build, choose a separate one",
            );
        }
    }
}
