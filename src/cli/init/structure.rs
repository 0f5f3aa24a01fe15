//! Site directory structure creation.

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Create the site root and the given directories beneath it.
///
/// Directories may be absolute or relative to `root`.
pub fn create_structure(root: &Path, dirs: &[&Path]) -> Result<()> {
    if !root.exists() {
        fs::create_dir_all(root)
            .with_context(|| format!("Failed to create root directory '{}'", root.display()))?;
    }

    for dir in dirs {
        let path = root.join(dir);
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create directory '{}'", path.display()))?;
    }

    Ok(())
}
