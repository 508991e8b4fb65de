//! Generate Options
//!
//! Configuration types for generate operations.

use std::path::PathBuf;

/// What a run does with the rendered artifacts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerateMode {
    /// Write new and changed artifacts
    #[default]
    Write,
    /// Report what would be written
    DryRun,
    /// Compare with disk, fail when stale
    Check,
}

impl GenerateMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerateMode::Write => "write",
            GenerateMode::DryRun => "dry_run",
            GenerateMode::Check => "check",
        }
    }

    pub fn writes(&self) -> bool {
        matches!(self, GenerateMode::Write)
    }
}

/// Options for the generate use case
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Fully qualified domain type path, e.g. `crate::domain::billing::Invoice`
    pub type_path: String,
    /// Artifact paths are resolved against this directory
    pub project_root: PathBuf,
    pub mode: GenerateMode,
}

impl GenerateOptions {
    pub fn new(type_path: impl Into<String>) -> Self {
        Self {
            type_path: type_path.into(),
            project_root: PathBuf::from("."),
            mode: GenerateMode::Write,
        }
    }

    pub fn with_project_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.project_root = root.into();
        self
    }

    pub fn with_mode(mut self, mode: GenerateMode) -> Self {
        self.mode = mode;
        self
    }

    /// `--check` wins over `--dry-run`
    pub fn with_flags(self, dry_run: bool, check: bool) -> Self {
        let mode = if check {
            GenerateMode::Check
        } else if dry_run {
            GenerateMode::DryRun
        } else {
            GenerateMode::Write
        };
        self.with_mode(mode)
    }
}
