//! `[templates]` section configuration.
//!
//! ```toml
//! [templates]
//! dir = "templates"     # Template directory (relative to site root)
//! base = "base.html"    # Base layout, rendered for every page
//! page = "page.html"    # Page fragment, included by the base layout
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplatesConfig {
    /// Template directory.
    pub dir: PathBuf,

    /// Base layout file name. Also its template name.
    pub base: String,

    /// Page fragment file name. Also its template name.
    pub page: String,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            dir: "templates".into(),
            base: "base.html".into(),
            page: "page.html".into(),
        }
    }
}

impl TemplatesConfig {
    pub fn base_path(&self) -> PathBuf {
        self.dir.join(&self.base)
    }

    pub fn page_path(&self) -> PathBuf {
        self.dir.join(&self.page)
    }

    pub fn validate(&self, output: &Path, diag: &mut ConfigDiagnostics) {
        Self::validate_name(&self.base, FieldPath::new("templates.base"), diag);
        Self::validate_name(&self.page, FieldPath::new("templates.page"), diag);

        if self.base == self.page {
            diag.error(
                FieldPath::new("templates.page"),
                format!("page template must differ from base template `{}`", self.base),
            );
        }

        if self.dir.starts_with(output) {
            diag.error_with_hint(
                FieldPath::new("templates.dir"),
                format!(
                    "template directory `{}` is inside the output directory",
                    self.dir.display()
                ),
                "the output directory is deleted before each build",
            );
        }
    }

    /// Template names must be single file names inside `dir`.
    fn validate_name(name: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
        let mut components = Path::new(name).components();
        let is_plain = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if !is_plain {
            diag.error_with_hint(
                field,
                format!("`{name}` is not a plain file name"),
                "set `templates.dir` for the directory and use a file name here",
            );
        }
    }
}
