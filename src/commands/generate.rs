//! Generate command handler

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;

use persistgen::application::GenerateOptions;
use persistgen::presentation::output::create_renderer;
use persistgen::presentation::{create_generate_use_case, OutputFormat, SourceArgs};

pub fn cmd_generate(
    type_path: &str,
    source: &SourceArgs,
    out_root: Option<PathBuf>,
    dry_run: bool,
    check: bool,
    json: bool,
    verbose: u8,
) -> Result<ExitCode> {
    let format = OutputFormat::from_json_flag(json);
    let (root, mut config) = super::load_project(source, format)?;
    if let Some(out_root) = out_root {
        config.paths.output_root = out_root;
    }

    let use_case = create_generate_use_case(&root, &config, source.schema.as_deref())?;
    let options = GenerateOptions::new(type_path)
        .with_project_root(&root)
        .with_flags(dry_run, check);
    let result = use_case.execute(&options)?;

    let renderer = create_renderer(format, verbose);
    renderer.render(&result, &mut io::stdout().lock())?;

    if result.check_failed() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
