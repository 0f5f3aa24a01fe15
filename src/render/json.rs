//! JSON renderer: page data as a pretty-printed JSON document.

use super::{RenderError, Renderer};
use crate::page::PageData;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn render(&self, page: &PageData<'_>) -> Result<Vec<u8>, RenderError> {
        let mut out = serde_json::to_vec_pretty(page)?;
        out.push(b'\n');
        Ok(out)
    }
}
