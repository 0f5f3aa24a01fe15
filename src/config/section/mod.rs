//! Configuration section definitions.
//!
//! Each module corresponds to a section in `folio.toml`:
//!
//! | Module      | TOML Section  | Purpose                               |
//! |-------------|---------------|---------------------------------------|
//! | `build`     | `[build]`     | Content/output paths, output format   |
//! | `templates` | `[templates]` | Template directory and file names     |
//! | `markdown`  | `[markdown]`  | Markdown extensions                   |

pub mod build;
mod markdown;
mod templates;

pub use build::{BuildSectionConfig, OutputFormat};
pub use markdown::MarkdownConfig;
pub use templates::TemplatesConfig;
