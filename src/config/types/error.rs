//! Configuration errors.
//!
//! Loading fails fast on I/O and TOML errors. Validation does not: every
//! section pushes its problems into [`ConfigDiagnostics`] and the loader
//! reports them in one message.

use super::FieldPath;
use crate::utils::plural_count;
use owo_colors::OwoColorize;
use std::{fmt, io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file `{0}`")]
    Read(PathBuf, #[source] io::Error),

    #[error("config file `{0}` not found")]
    NotFound(PathBuf),

    #[error("config file is not valid TOML")]
    Parse(#[from] toml::de::Error),

    /// Printed in full by its own Display, so it carries no source.
    #[error("{0}")]
    Invalid(ConfigDiagnostics),
}

/// One rejected setting
#[derive(Debug, Clone)]
pub struct Issue {
    pub field: FieldPath,
    pub message: String,
    pub hint: Option<&'static str>,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)?;
        if let Some(hint) = self.hint {
            write!(f, "\n    {} {hint}", "hint:".yellow())?;
        }
        Ok(())
    }
}

/// Validation problems collected across all sections
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    issues: Vec<Issue>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.push(field, message.into(), None);
    }

    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: &'static str,
    ) {
        self.push(field, message.into(), Some(hint));
    }

    fn push(&mut self, field: FieldPath, message: String, hint: Option<&'static str>) {
        self.issues.push(Issue {
            field,
            message,
            hint,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = format!("invalid configuration ({})", plural_count(self.issues.len(), "problem"));
        write!(f, "{}", summary.red().bold())?;
        for issue in &self.issues {
            write!(f, "\n  - {issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}
