//! Command handlers

pub mod generate;
pub mod inspect;
mod project_root;

use std::path::PathBuf;

use anyhow::{Context, Result};

use persistgen::config::Config;
use persistgen::presentation::output::render_config_warnings;
use persistgen::presentation::{OutputFormat, SourceArgs};

use project_root::discover_project_root;

/// Project root plus the config with CLI overrides applied
pub(crate) fn load_project(source: &SourceArgs, format: OutputFormat) -> Result<(PathBuf, Config)> {
    let start = if source.root.is_absolute() {
        source.root.clone()
    } else {
        std::env::current_dir()
            .context("cannot determine the current directory")?
            .join(&source.root)
    };
    let root = discover_project_root(&start);
    let (mut config, warnings) = Config::discover(&root, source.config.as_deref())?;
    render_config_warnings(&warnings, format)?;

    if let Some(source_root) = &source.source_root {
        config.paths.source_root = source_root.clone();
    }
    Ok((root, config))
}
