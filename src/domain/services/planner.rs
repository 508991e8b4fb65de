//! Emission planning service
//!
//! Pure logic deciding what happens to each rendered artifact given what is
//! currently on disk. No I/O happens here.

use crate::domain::entities::GeneratedFile;

/// The action to take for an artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    /// File does not exist yet
    Create,
    /// File exists with different content
    Update,
    /// File already holds exactly this content
    Unchanged,
}

impl FileAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileAction::Create => "create",
            FileAction::Update => "update",
            FileAction::Unchanged => "unchanged",
        }
    }
}

/// A rendered artifact with its planned action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub file: GeneratedFile,
    pub action: FileAction,
    /// Current content on disk, if any
    pub existing: Option<String>,
}

impl PlannedFile {
    pub fn new(file: GeneratedFile, existing: Option<String>) -> Self {
        let action = match &existing {
            None => FileAction::Create,
            Some(current) if current == file.content() => FileAction::Unchanged,
            Some(_) => FileAction::Update,
        };
        Self {
            file,
            action,
            existing,
        }
    }

    pub fn should_write(&self) -> bool {
        !matches!(self.action, FileAction::Unchanged)
    }
}

/// Every artifact of one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmissionPlan {
    pub files: Vec<PlannedFile>,
}

impl EmissionPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, file: PlannedFile) {
        self.files.push(file);
    }

    pub fn to_write(&self) -> impl Iterator<Item = &PlannedFile> {
        self.files.iter().filter(|f| f.should_write())
    }

    /// No artifact needs writing
    pub fn is_up_to_date(&self) -> bool {
        self.to_write().next().is_none()
    }
}
