//! Site building orchestration.
//!
//! Build phases:
//! - **Setup** - Remove and recreate the output directory
//! - **Collect** - Walk the content directory for `.md` files
//! - **Compile** - Process each page in walk order, one at a time
//! - **Finalize** - Log a summary
//!
//! Setup and collect failures abort the build. Page failures are logged,
//! recorded in the [`BuildReport`] and skipped.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use jwalk::{Parallelism, WalkDir};
use thiserror::Error;

use crate::{
    compiler::{CompileContext, process_page},
    config::SiteConfig,
    debug, log,
    logger::ProgressLine,
    render::create_renderer,
    utils::plural_count,
};

/// Extension of content files.
const CONTENT_EXTENSION: &str = "md";

/// Build-level errors. These abort the whole build.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to prepare output directory `{0}`")]
    Setup(PathBuf, #[source] io::Error),

    #[error("content directory `{0}` does not exist")]
    MissingContent(PathBuf),

    #[error("failed to walk content directory at `{0}`")]
    Traversal(PathBuf, #[source] jwalk::Error),
}

/// A page that failed to build
#[derive(Debug)]
pub struct FileFailure {
    pub source: PathBuf,
    pub error: anyhow::Error,
}

/// Per-page outcomes of one build
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Output files written, in processing order
    pub written: Vec<PathBuf>,
    /// Pages that failed, in processing order
    pub failures: Vec<FileFailure>,
}

impl BuildReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Build the entire site.
///
/// Pipeline: setup -> collect -> compile -> finalize
pub fn build_site(config: &SiteConfig, quiet: bool) -> Result<BuildReport, BuildError> {
    setup_output(&config.build.output)?;

    let files = collect_content_files(&config.build.content)?;
    if files.is_empty() && !quiet {
        log!("warning"; "no .{} files in {}", CONTENT_EXTENSION, config.build.content.display());
    }

    let renderer = create_renderer(config);
    let ctx = CompileContext::new(config, renderer.as_ref());
    let progress = (!quiet && !files.is_empty()).then(|| ProgressLine::new("markdown", files.len()));

    let mut report = BuildReport::default();
    for path in &files {
        compile_one(path, &ctx, &mut report);
        if let Some(p) = &progress {
            p.inc();
        }
    }

    if let Some(p) = progress {
        p.finish();
    }

    if !quiet {
        log_build_result(&report);
    }

    Ok(report)
}

/// Process one page, recording the outcome.
fn compile_one(path: &Path, ctx: &CompileContext<'_>, report: &mut BuildReport) {
    let relative = ctx.config.root_relative(path);

    match process_page(path, ctx) {
        Ok(output) => {
            debug!("page"; "{} -> {} ({})",
                relative.display(),
                ctx.config.root_relative(&output.route.output_file).display(),
                output.meta.display_title());
            report.written.push(output.route.output_file);
        }
        Err(e) => {
            let error = anyhow::Error::new(e);
            log!("error"; "{}: {:#}", relative.display(), error);
            report.failures.push(FileFailure {
                source: path.to_path_buf(),
                error,
            });
        }
    }
}

/// Remove the output directory if present and recreate it empty
pub fn setup_output(output: &Path) -> Result<(), BuildError> {
    debug!("build"; "clearing output directory {}", output.display());

    match fs::remove_dir_all(output) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(BuildError::Setup(output.to_path_buf(), e)),
    }

    fs::create_dir_all(output).map_err(|e| BuildError::Setup(output.to_path_buf(), e))
}

/// Collect `.md` files under `content`, in walk order
///
/// The walk is serial and sorted by file name within each directory,
/// descending into directories depth-first.
pub fn collect_content_files(content: &Path) -> Result<Vec<PathBuf>, BuildError> {
    if !content.is_dir() {
        return Err(BuildError::MissingContent(content.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(content)
        .parallelism(Parallelism::Serial)
        .sort(true)
    {
        let mut entry = entry.map_err(|e| BuildError::Traversal(content.to_path_buf(), e))?;
        // jwalk reports an unreadable directory on its own entry, not as an item
        if let Some(e) = entry.read_children_error.take() {
            return Err(BuildError::Traversal(entry.path(), e));
        }
        if entry.file_type().is_file() && is_content_file(&entry.path()) {
            files.push(entry.path());
        }
    }

    Ok(files)
}

fn is_content_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == CONTENT_EXTENSION)
}

fn log_build_result(report: &BuildReport) {
    if report.is_success() {
        log!("build"; "done, {} written", plural_count(report.written.len(), "page"));
    } else {
        log!("build"; "done, {} written, {} failed",
            plural_count(report.written.len(), "page"),
            report.failures.len());
    }
}

#[cfg(test)]
mod tests;
