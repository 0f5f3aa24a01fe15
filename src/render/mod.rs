//! Page renderers.
//!
//! A [`Renderer`] turns [`PageData`] into output bytes. The output format is
//! chosen by `build.format`:
//!
//! | Format | Renderer           | Extension |
//! |--------|--------------------|-----------|
//! | `html` | [`TemplateRenderer`] | `html`  |
//! | `json` | [`JsonRenderer`]   | `json`    |

mod json;
mod template;

pub use json::JsonRenderer;
pub use template::TemplateRenderer;

use std::path::PathBuf;
use thiserror::Error;

use crate::config::{OutputFormat, SiteConfig};
use crate::page::PageData;

/// Rendering errors, scoped to the page being rendered
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to load template `{0}`")]
    TemplateLoad(PathBuf, #[source] std::io::Error),

    #[error("template error")]
    Template(#[from] tera::Error),

    #[error("failed to encode page data")]
    Json(#[from] serde_json::Error),
}

/// Render page data to output bytes
pub trait Renderer {
    /// File extension of rendered output (without dot).
    fn extension(&self) -> &'static str;

    fn render(&self, page: &PageData<'_>) -> Result<Vec<u8>, RenderError>;
}

/// Create the renderer selected by `build.format`.
pub fn create_renderer(config: &SiteConfig) -> Box<dyn Renderer> {
    match config.build.format {
        OutputFormat::Html => Box::new(TemplateRenderer::from_config(&config.templates)),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
