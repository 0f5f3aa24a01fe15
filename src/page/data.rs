//! Page data - the render input for a single page.

use serde::Serialize;

use super::PageMeta;

/// Decoded metadata plus converted HTML for one page
///
/// `content` is trusted, already-rendered HTML. Renderers must inject it
/// without escaping.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PageData<'a> {
    pub metadata: &'a PageMeta,
    pub content: &'a str,
}

impl<'a> PageData<'a> {
    pub const fn new(metadata: &'a PageMeta, content: &'a str) -> Self {
        Self { metadata, content }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_data_serialize_shape() {
        let meta = PageMeta {
            title: "Hello".to_string(),
        };
        let data = PageData::new(&meta, "<h1>Hi</h1>\n");
        let json = serde_json::to_value(data).unwrap();

        assert_eq!(json["metadata"]["title"], "Hello");
        assert_eq!(json["content"], "<h1>Hi</h1>\n");
    }
}
