//! GeneratedFile entity - one rendered artifact
//!
//! Both artifacts of a run are rendered into `GeneratedFile`s before anything
//! touches the file system.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::ContentHash;

/// Which artifact a file holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Persistence,
    Mapper,
}

impl ArtifactKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Persistence => "persistence",
            ArtifactKind::Mapper => "mapper",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rendered source file ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the project root
    path: PathBuf,
    content: String,
    kind: ArtifactKind,
}

impl GeneratedFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>, kind: ArtifactKind) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            kind,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    /// SHA-256 of the content
    pub fn hash(&self) -> ContentHash {
        ContentHash::from_content(&self.content)
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
