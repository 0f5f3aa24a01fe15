//! Two-template HTML renderer: a base layout that includes a page fragment.
//!
//! ```text
//! templates/
//! ├── base.html   # {% include "page.html" %}
//! └── page.html   # {{ metadata.title }} {{ content | safe }}
//! ```
//!
//! Both templates are registered under their file names and see the same
//! context: `metadata` (page metadata) and `content` (rendered HTML).
//! `content` is already HTML and must be output with the `safe` filter.

use std::fs;
use std::path::{Path, PathBuf};

use tera::{Context, Tera};

use super::{RenderError, Renderer};
use crate::config::TemplatesConfig;
use crate::page::PageData;

pub struct TemplateRenderer {
    dir: PathBuf,
    base: String,
    page: String,
}

impl TemplateRenderer {
    pub fn new(dir: impl Into<PathBuf>, base: impl Into<String>, page: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            base: base.into(),
            page: page.into(),
        }
    }

    pub fn from_config(config: &TemplatesConfig) -> Self {
        Self::new(&config.dir, &config.base, &config.page)
    }

    /// Read and parse both templates.
    ///
    /// Called for every page, so template edits apply to the next page.
    pub fn load(&self) -> Result<Tera, RenderError> {
        let base_src = read_template(&self.dir.join(&self.base))?;
        let page_src = read_template(&self.dir.join(&self.page))?;

        let mut tera = Tera::default();
        // Empty suffix matches every name: escape regardless of file extension
        tera.autoescape_on(vec![""]);
        tera.add_raw_templates(vec![
            (self.base.as_str(), base_src.as_str()),
            (self.page.as_str(), page_src.as_str()),
        ])?;
        Ok(tera)
    }
}

fn read_template(path: &Path) -> Result<String, RenderError> {
    fs::read_to_string(path).map_err(|e| RenderError::TemplateLoad(path.to_path_buf(), e))
}

impl Renderer for TemplateRenderer {
    fn extension(&self) -> &'static str {
        "html"
    }

    fn render(&self, page: &PageData<'_>) -> Result<Vec<u8>, RenderError> {
        let tera = self.load()?;
        let context = Context::from_serialize(page)?;
        let html = tera.render(&self.base, &context)?;
        Ok(html.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageMeta;
    use tempfile::TempDir;

    const BASE: &str = "<html><head><title>{{ metadata.title }}</title></head><body>{% include \"page.html\" %}</body></html>";
    const PAGE: &str = "<main>{{ content | safe }}</main>";

    fn setup(base: &str, page: &str) -> (TempDir, TemplateRenderer) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("base.html"), base).unwrap();
        fs::write(dir.path().join("page.html"), page).unwrap();
        let renderer = TemplateRenderer::new(dir.path(), "base.html", "page.html");
        (dir, renderer)
    }

    fn meta(title: &str) -> PageMeta {
        PageMeta {
            title: title.to_string(),
        }
    }

    fn render_str(renderer: &TemplateRenderer, meta: &PageMeta, content: &str) -> Result<String, RenderError> {
        renderer
            .render(&PageData::new(meta, content))
            .map(|bytes| String::from_utf8(bytes).unwrap())
    }

    #[test]
    fn test_render_base_includes_page() {
        let (_dir, renderer) = setup(BASE, PAGE);
        let html = render_str(&renderer, &meta("Hello"), "<h1>Hi</h1>\n").unwrap();

        assert_eq!(
            html,
            "<html><head><title>Hello</title></head><body><main><h1>Hi</h1>\n</main></body></html>"
        );
    }

    #[test]
    fn test_title_escaped_content_not() {
        let (_dir, renderer) = setup(BASE, PAGE);
        let html = render_str(&renderer, &meta("Tom & <Jerry>"), "<p>a &amp; b</p>").unwrap();

        assert!(html.contains("<title>Tom &amp; &lt;Jerry&gt;</title>"));
        assert!(html.contains("<main><p>a &amp; b</p></main>"));
    }

    #[test]
    fn test_escaping_independent_of_extension() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("base.tpl"), "{{ metadata.title }}|{% include \"page.tpl\" %}").unwrap();
        fs::write(dir.path().join("page.tpl"), "{{ content | safe }}").unwrap();
        let renderer = TemplateRenderer::new(dir.path(), "base.tpl", "page.tpl");

        let html = render_str(&renderer, &meta("<b>"), "<i>x</i>").unwrap();
        assert_eq!(html, "&lt;b&gt;|<i>x</i>");
    }

    #[test]
    fn test_empty_title() {
        let (_dir, renderer) = setup(BASE, PAGE);
        let html = render_str(&renderer, &PageMeta::default(), "").unwrap();
        assert!(html.contains("<title></title>"));
    }

    #[test]
    fn test_missing_template_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("base.html"), BASE).unwrap();
        let renderer = TemplateRenderer::new(dir.path(), "base.html", "page.html");

        let err = render_str(&renderer, &meta("x"), "").unwrap_err();
        match err {
            RenderError::TemplateLoad(path, _) => assert!(path.ends_with("page.html")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_template_syntax_error() {
        let (_dir, renderer) = setup(BASE, "<main>{{ content | safe </main>");
        let err = render_str(&renderer, &meta("x"), "").unwrap_err();
        assert!(matches!(err, RenderError::Template(_)));
    }

    #[test]
    fn test_undefined_variable_is_error() {
        let (_dir, renderer) = setup(BASE, "{{ metadata.subtitle }}");
        let err = render_str(&renderer, &meta("x"), "").unwrap_err();
        assert!(matches!(err, RenderError::Template(_)));
    }

    #[test]
    fn test_templates_reloaded_per_render() {
        let (dir, renderer) = setup(BASE, PAGE);
        let first = render_str(&renderer, &meta("x"), "body").unwrap();
        assert!(first.contains("<main>body</main>"));

        fs::write(dir.path().join("page.html"), "<article>{{ content | safe }}</article>").unwrap();
        let second = render_str(&renderer, &meta("x"), "body").unwrap();
        assert!(second.contains("<article>body</article>"));
    }
}
