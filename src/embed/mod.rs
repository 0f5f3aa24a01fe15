//! Embedded static resources for Folio.
//!
//! # Module Structure
//!
//! - `template` - Template types for typed variable injection
//! - `init` - Starter files written by `folio init`

mod template;

pub use template::{Template, TemplateVars};

pub mod init {
    use super::{Template, TemplateVars};
    use crate::config::SiteConfig;
    use std::path::Path;

    /// Directory layout substituted into the starter files.
    pub struct SiteVars {
        pub title: String,
        pub content_dir: String,
        pub output_dir: String,
        pub templates_dir: String,
    }

    impl SiteVars {
        /// Build starter variables from site config.
        ///
        /// The title is the site root's directory name.
        pub fn from_config(config: &SiteConfig) -> Self {
            let title = config
                .get_root()
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "My Site".to_string());

            Self {
                title,
                content_dir: relative_str(config, &config.build.content),
                output_dir: relative_str(config, &config.build.output),
                templates_dir: relative_str(config, &config.templates.dir),
            }
        }
    }

    /// Root-relative path with `/` separators, as written in folio.toml.
    fn relative_str(config: &SiteConfig, path: &Path) -> String {
        config
            .root_relative(path)
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }

    impl TemplateVars for SiteVars {
        fn apply(&self, content: &str) -> String {
            content
                .replace("__VERSION__", env!("CARGO_PKG_VERSION"))
                .replace("__SITE_TITLE__", &escape_quoted(&self.title))
                .replace("__CONTENT_DIR__", &escape_quoted(&self.content_dir))
                .replace("__OUTPUT_DIR__", &escape_quoted(&self.output_dir))
                .replace("__TEMPLATES_DIR__", &escape_quoted(&self.templates_dir))
        }
    }

    /// Escape text placed between double quotes in YAML or TOML.
    ///
    /// Both formats share the `\\` and `\"` escapes; backslashes go first.
    fn escape_quoted(text: &str) -> String {
        text.replace('\\', "\\\\").replace('"', "\\\"")
    }

    /// Commented configuration file.
    pub const FOLIO_TOML: Template<SiteVars> = Template::new(include_str!("init/folio.toml"));

    /// Starter page.
    pub const INDEX_MD: Template<SiteVars> = Template::new(include_str!("init/index.md"));

    /// Base layout, includes the page fragment.
    pub const BASE_HTML: &str = include_str!("init/base.html");

    /// Page fragment.
    pub const PAGE_HTML: &str = include_str!("init/page.html");
}
