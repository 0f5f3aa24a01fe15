//! Markdown to HTML conversion using pulldown-cmark.

use pulldown_cmark::{Options, Parser, html};

use crate::config::MarkdownConfig;

/// Convert extension toggles to pulldown-cmark Options
fn to_pulldown_options(config: &MarkdownConfig) -> Options {
    let mut opts = Options::empty();
    if config.tables {
        opts.insert(Options::ENABLE_TABLES);
    }
    if config.footnotes {
        opts.insert(Options::ENABLE_FOOTNOTES);
    }
    if config.strikethrough {
        opts.insert(Options::ENABLE_STRIKETHROUGH);
    }
    if config.task_lists {
        opts.insert(Options::ENABLE_TASKLISTS);
    }
    if config.heading_attributes {
        opts.insert(Options::ENABLE_HEADING_ATTRIBUTES);
    }
    if config.smart_punctuation {
        opts.insert(Options::ENABLE_SMART_PUNCTUATION);
    }
    opts
}

/// Render Markdown to an HTML fragment.
///
/// Raw HTML in the source passes through untouched; documents are trusted.
pub fn to_html(markdown: &str, config: &MarkdownConfig) -> String {
    let parser = Parser::new_ext(markdown, to_pulldown_options(config));

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
