//! Starter file generation.
//!
//! Creates folio.toml, templates, the first page and ignore files.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::config::SiteConfig;
use crate::embed::init::{BASE_HTML, FOLIO_TOML, INDEX_MD, PAGE_HTML, SiteVars};

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Generate folio.toml content with comments
pub fn generate_config_template(config: &SiteConfig) -> String {
    FOLIO_TOML.render(&SiteVars::from_config(config))
}

/// Write default configuration to the config path
pub fn write_config(config: &SiteConfig) -> Result<()> {
    let path = &config.config_path;
    fs::write(path, generate_config_template(config))
        .with_context(|| format!("Failed to write config file '{}'", path.display()))
}

/// Write base and page templates plus `index.md`.
///
/// Existing files are left untouched.
pub fn write_starter_files(config: &SiteConfig) -> Result<()> {
    let index = INDEX_MD.render(&SiteVars::from_config(config));

    write_if_missing(&config.templates.base_path(), BASE_HTML)?;
    write_if_missing(&config.templates.page_path(), PAGE_HTML)?;
    write_if_missing(&config.build.content.join("index.md"), &index)
}

/// Write .gitignore and .ignore files ignoring the output directory
pub fn write_ignore_files(root: &Path, output_dir: &Path) -> Result<()> {
    let output_pattern = Path::new("/").join(output_dir);
    let patterns = [
        format!("{}/", output_pattern.to_string_lossy()),
        ".DS_Store".to_string(),
    ];

    let content = patterns.join("\n") + "\n";

    for filename in IGNORE_FILES {
        write_if_missing(&root.join(filename), &content)?;
    }

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    fs::write(path, content).with_context(|| format!("Failed to write '{}'", path.display()))
}
