//! Inspect command handler

use std::io;
use std::process::ExitCode;

use anyhow::Result;

use persistgen::application::inspect;
use persistgen::presentation::output::render_inspect;
use persistgen::presentation::{create_generate_use_case, OutputFormat, SourceArgs};

pub fn cmd_inspect(type_path: &str, source: &SourceArgs, json: bool) -> Result<ExitCode> {
    let format = OutputFormat::from_json_flag(json);
    let (root, config) = super::load_project(source, format)?;

    let use_case = create_generate_use_case(&root, &config, source.schema.as_deref())?;
    let report = inspect(&use_case, type_path)?;

    render_inspect(&report, format, &mut io::stdout().lock())?;
    Ok(ExitCode::SUCCESS)
}
