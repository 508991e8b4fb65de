//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --verbose) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// persistgen - flat persistence structs and mappers for Rust domain types
#[derive(Parser, Debug)]
#[command(name = "persistgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events on stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where type declarations are read from
#[derive(clap::Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceArgs {
    /// Project root (holds persistgen.toml; artifact paths are relative to it)
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Config file (default: <root>/persistgen.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Read type declarations from a TOML schema file instead of sources
    #[arg(long)]
    pub schema: Option<PathBuf>,

    /// Directory holding lib.rs / main.rs (overrides [paths] source_root)
    #[arg(long)]
    pub source_root: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the persistence struct and mapper for a domain type
    Generate {
        /// Fully qualified domain type, e.g. crate::domain::billing::Invoice
        type_path: String,

        #[command(flatten)]
        source: SourceArgs,

        /// Directory artifact paths are rooted at (overrides [paths] output_root)
        #[arg(long)]
        out_root: Option<PathBuf>,

        /// Dry run - show what would be written
        #[arg(long)]
        dry_run: bool,

        /// Fail if the artifacts on disk are missing or out of date
        #[arg(long, conflicts_with = "dry_run")]
        check: bool,
    },

    /// Show the flattening tree, columns and reconstruction mapping
    Inspect {
        /// Fully qualified domain type, e.g. crate::domain::billing::Invoice
        type_path: String,

        #[command(flatten)]
        source: SourceArgs,
    },
}
