//! Single page processing: read → extract → convert → render → write.

use std::fs;
use std::path::Path;

use super::{CompileContext, MarkdownMetaExtractor, PageError, markdown};
use crate::log;
use crate::page::{PageData, PageMeta, PageRoute};

/// Result of processing one page
#[derive(Debug)]
pub struct PageOutput {
    pub route: PageRoute,
    pub meta: PageMeta,
}

/// Run the full pipeline for one Markdown file.
///
/// Any failure is scoped to this file; nothing is written unless rendering
/// succeeded.
pub fn process_page(source: &Path, ctx: &CompileContext<'_>) -> Result<PageOutput, PageError> {
    let build = &ctx.config.build;
    let route = PageRoute::new(source, &build.content, &build.output, ctx.renderer.extension())
        .ok_or_else(|| PageError::OutsideContent(source.to_path_buf()))?;

    let document =
        fs::read_to_string(source).map_err(|e| PageError::Read(source.to_path_buf(), e))?;

    let extracted = MarkdownMetaExtractor.extract_frontmatter(&document)?;
    if !extracted.has_block {
        log!("warning"; "no front matter in {}, using default title", route.relative.display());
    }

    let html = markdown::to_html(extracted.body, &ctx.config.markdown);
    let bytes = ctx.renderer.render(&PageData::new(&extracted.meta, &html))?;

    write_page(&route, &bytes)?;

    Ok(PageOutput {
        route,
        meta: extracted.meta,
    })
}

/// Write rendered bytes to the route's output file, creating parent dirs.
pub fn write_page(route: &PageRoute, bytes: &[u8]) -> Result<(), PageError> {
    if let Some(parent) = route.output_dir() {
        fs::create_dir_all(parent).map_err(|e| PageError::Write(parent.to_path_buf(), e))?;
    }

    fs::write(&route.output_file, bytes)
        .map_err(|e| PageError::Write(route.output_file.clone(), e))
}
