//! Page route - source to output path mapping.

use std::path::{Path, PathBuf};

/// Source -> output path mapping for a page
///
/// # Example
///
/// ```text
/// Source: content/blog/post.md
/// Output: public/blog/post.html
///
/// PageRoute {
///     source:      content/blog/post.md
///     relative:    blog/post.md
///     output_file: public/blog/post.html
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRoute {
    /// Source file path (e.g., content/blog/post.md)
    pub source: PathBuf,
    /// Source path relative to the content root (for logging)
    pub relative: PathBuf,
    /// Output file (e.g., public/blog/post.html)
    pub output_file: PathBuf,
}

impl PageRoute {
    /// Map `source` from `content_root` onto `output_root`, swapping the
    /// file extension for `extension`.
    ///
    /// Returns `None` if `source` is not inside `content_root`.
    pub fn new(
        source: &Path,
        content_root: &Path,
        output_root: &Path,
        extension: &str,
    ) -> Option<Self> {
        let relative = source.strip_prefix(content_root).ok()?;
        if relative.as_os_str().is_empty() {
            return None;
        }

        let output_file = output_root.join(relative).with_extension(extension);

        Some(Self {
            source: source.to_path_buf(),
            relative: relative.to_path_buf(),
            output_file,
        })
    }

    /// Parent directory of the output file.
    pub fn output_dir(&self) -> Option<&Path> {
        self.output_file.parent()
    }
}
