//! Checks run before `init` touches the filesystem.
//!
//! A named site needs a fresh directory. Initializing in place is allowed
//! next to unrelated files, but never over a path folio would own: the
//! config file, the content and template directories, or the output
//! directory, which the first build deletes.

use crate::config::SiteConfig;
use crate::utils::plural_count;
use std::{io, path::Path, path::PathBuf};
use thiserror::Error;

/// Where `init` puts the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitMode {
    /// `folio init`
    CurrentDir,
    /// `folio init <name>`
    NewDir,
}

impl InitMode {
    pub const fn from_has_name(has_name: bool) -> Self {
        if has_name { Self::NewDir } else { Self::CurrentDir }
    }
}

/// A path `init` would write or a later build would delete.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Conflict {
    #[error("config file `{0}` already exists")]
    Config(PathBuf),

    #[error("content directory `{0}` already exists")]
    Content(PathBuf),

    #[error("template directory `{0}` already exists")]
    Templates(PathBuf),

    #[error("`{0}` already exists and would be deleted by the first build")]
    Output(PathBuf),
}

#[derive(Debug, Error)]
pub enum InitError {
    #[error("directory `{0}` already exists, choose another name")]
    RootExists(PathBuf),

    #[error("{}", describe(.0))]
    Conflicts(Vec<Conflict>),

    #[error("cannot inspect `{0}`")]
    Inspect(PathBuf, #[source] io::Error),
}

fn describe(conflicts: &[Conflict]) -> String {
    let mut text = format!(
        "cannot initialize here ({} found)",
        plural_count(conflicts.len(), "existing site path")
    );
    for conflict in conflicts {
        text.push_str("\n  - ");
        text.push_str(&conflict.to_string());
    }
    text
}

/// Reject targets where scaffolding would overwrite or endanger files.
///
/// Every conflict is reported at once.
pub fn check_target(config: &SiteConfig, mode: InitMode) -> Result<(), InitError> {
    let root = config.get_root();
    if mode == InitMode::NewDir && exists(root)? {
        return Err(InitError::RootExists(root.to_path_buf()));
    }

    let candidates: [(&Path, fn(PathBuf) -> Conflict); 4] = [
        (config.config_path.as_path(), Conflict::Config),
        (config.build.content.as_path(), Conflict::Content),
        (config.templates.dir.as_path(), Conflict::Templates),
        (config.build.output.as_path(), Conflict::Output),
    ];

    let mut conflicts = Vec::new();
    for (path, conflict) in candidates {
        if exists(path)? {
            conflicts.push(conflict(config.root_relative(path)));
        }
    }

    if conflicts.is_empty() { Ok(()) } else { Err(InitError::Conflicts(conflicts)) }
}

fn exists(path: &Path) -> Result<bool, InitError> {
    path.try_exists()
        .map_err(|e| InitError::Inspect(path.to_path_buf(), e))
}
