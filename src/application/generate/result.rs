//! Generate Result
//!
//! Result types for generate operations.

use std::path::PathBuf;

use crate::domain::entities::{ConverterPlan, GenerationContext, StorageModel};
use crate::domain::services::{FileAction, PlannedFile};
use crate::domain::value_objects::TypePath;

use super::options::GenerateMode;

/// Everything computed for one domain type before rendering
#[derive(Debug, Clone)]
pub struct Analysis {
    pub context: GenerationContext,
    pub model: StorageModel,
    pub plan: ConverterPlan,
}

/// Result of a generate operation
#[derive(Debug, Clone)]
pub struct GenerateResult {
    pub type_path: TypePath,
    pub mode: GenerateMode,
    /// Both artifacts with their planned action
    pub files: Vec<PlannedFile>,
    /// Files that were written (empty unless the mode writes)
    pub written: Vec<PathBuf>,
}

impl GenerateResult {
    pub fn new(type_path: TypePath, mode: GenerateMode) -> Self {
        Self {
            type_path,
            mode,
            files: Vec::new(),
            written: Vec::new(),
        }
    }

    /// Artifacts whose content on disk differs from the rendered one
    pub fn stale(&self) -> impl Iterator<Item = &PlannedFile> {
        self.files
            .iter()
            .filter(|f| f.action != FileAction::Unchanged)
    }

    pub fn is_up_to_date(&self) -> bool {
        self.stale().next().is_none()
    }

    /// `--check` found stale artifacts
    pub fn check_failed(&self) -> bool {
        self.mode == GenerateMode::Check && !self.is_up_to_date()
    }
}
