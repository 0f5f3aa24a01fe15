//! Per-file compilation errors.
//!
//! Every variant is scoped to a single document: the build logs it and
//! moves on to the next file.

use std::path::PathBuf;
use thiserror::Error;

use crate::render::RenderError;

#[derive(Debug, Error)]
pub enum PageError {
    /// Document missing, unreadable or not UTF-8.
    #[error("failed to read `{0}`")]
    Read(PathBuf, #[source] std::io::Error),

    /// Front matter block is not a valid YAML mapping.
    #[error("invalid front matter")]
    Metadata(#[from] serde_yaml_ng::Error),

    #[error("`{0}` is not inside the content directory")]
    OutsideContent(PathBuf),

    #[error(transparent)]
    Render(#[from] RenderError),

    /// Output file or its parent directories could not be written.
    #[error("failed to write `{0}`")]
    Write(PathBuf, #[source] std::io::Error),
}
