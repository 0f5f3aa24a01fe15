//! Site initialization module.
//!
//! Creates new site structure with default configuration.
//!
//! # Module Structure
//!
//! - [`validate`]: Refuses targets that already hold site paths
//! - [`structure`]: Directory structure creation
//! - [`config`]: Configuration and starter file generation

mod config;
mod structure;
mod validate;

use crate::{config::SiteConfig, log};
use anyhow::Result;

pub use validate::InitMode;

/// Create a new site with default structure
///
/// # Steps
/// 1. Check the target for existing site paths
/// 2. Create content and template directories
/// 3. Write folio.toml and ignore files
/// 4. Write starter templates and `index.md`
///
/// If `dry_run` is true, only prints the config template to stdout
pub fn new_site(site_config: &SiteConfig, has_name: bool, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", config::generate_config_template(site_config));
        return Ok(());
    }

    validate::check_target(site_config, InitMode::from_has_name(has_name))?;
    let root = site_config.get_root();

    structure::create_structure(
        root,
        &[
            site_config.build.content.as_path(),
            site_config.templates.dir.as_path(),
        ],
    )?;

    config::write_config(site_config)?;
    let output_dir = site_config.root_relative(&site_config.build.output);
    config::write_ignore_files(root, &output_dir)?;
    config::write_starter_files(site_config)?;

    log!("init"; "site initialized in {}", root.display());
    Ok(())
}
