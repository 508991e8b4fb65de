//! persistgen CLI
//!
//! Usage: persistgen <COMMAND>
//!
//! Commands:
//!   generate  Generate the persistence struct and mapper for a domain type
//!   inspect   Show the flattening tree, columns and reconstruction mapping

use std::process::ExitCode;

use clap::Parser;

use persistgen::presentation::output::emit;
use persistgen::presentation::{Cli, Commands};
use persistgen::GenError;

mod commands;

fn main() -> ExitCode {
    let cli = Cli::parse();
    persistgen::logging::init(cli.verbose);

    let json = cli.json;
    let verbose = cli.verbose;

    let outcome = match cli.command {
        Commands::Generate {
            type_path,
            source,
            out_root,
            dry_run,
            check,
        } => commands::generate::cmd_generate(
            &type_path, &source, out_root, dry_run, check, json, verbose,
        ),
        Commands::Inspect { type_path, source } => {
            commands::inspect::cmd_inspect(&type_path, &source, json)
        }
    };

    match outcome {
        Ok(code) => code,
        Err(err) => {
            report_error(&err, json);
            ExitCode::FAILURE
        }
    }
}

fn report_error(err: &anyhow::Error, json: bool) {
    if json {
        let kind = err
            .downcast_ref::<GenError>()
            .map(GenError::kind)
            .unwrap_or("error");
        let _ = emit(serde_json::json!({
            "event": "error",
            "kind": kind,
            "message": format!("{:#}", err),
        }));
    } else {
        eprintln!("Error: {:#}", err);
    }
}
