//! Schema file loader - type declarations written out by hand in TOML
//!
//! The explicit alternative to parsing sources, for types whose declaration
//! lives outside the project or behind macros:
//!
//! ```toml
//! [[types]]
//! path = "crate::domain::Email"
//! fields = [{ name = "value", type = "String" }]
//! methods = [{ name = "value", returns = "&str" }]
//! constructor = { params = [{ name = "value", type = "String" }], returns = "Result<Self, EmailError>" }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::domain::entities::TypeShape;
use crate::domain::ports::TypeLoader;
use crate::domain::value_objects::TypePath;
use crate::error::{GenError, GenResult};

#[derive(Debug, Deserialize)]
struct SchemaDocument {
    #[serde(default)]
    types: Vec<TypeShape>,
}

#[derive(Debug, Clone)]
pub struct SchemaFileLoader {
    file: PathBuf,
    types: BTreeMap<TypePath, TypeShape>,
}

impl SchemaFileLoader {
    pub fn from_path(file: impl AsRef<Path>) -> GenResult<Self> {
        let file = file.as_ref();
        let content = std::fs::read_to_string(file).map_err(|e| GenError::Schema {
            file: file.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_str(&content, file)
    }

    /// Parse schema content; `file` is only used in messages
    pub fn from_str(content: &str, file: impl Into<PathBuf>) -> GenResult<Self> {
        let file = file.into();
        let schema_error = |message: String| GenError::Schema {
            file: file.clone(),
            message,
        };

        let deserializer = toml::de::Deserializer::new(content);
        let mut unknown = Vec::new();
        let document: SchemaDocument = serde_ignored::deserialize(deserializer, |path| {
            unknown.push(path.to_string());
        })
        .map_err(|e| schema_error(e.to_string()))?;
        for key in unknown {
            warn!(file = %file.display(), key = %key, "unknown key in schema file");
        }

        let mut types = BTreeMap::new();
        for mut shape in document.types {
            let path = TypePath::parse(&shape.path)
                .map_err(|e| schema_error(e.to_string()))?;
            shape.path = path.to_string();
            if let Some(name) = reserved_field_name(&shape) {
                return Err(schema_error(format!(
                    "'{}' in type '{}' cannot be used as a field name",
                    name, path
                )));
            }
            if types.insert(path.clone(), shape).is_some() {
                return Err(schema_error(format!("type '{}' is declared twice", path)));
            }
        }

        Ok(Self { file, types })
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Path keywords have no raw identifier form
const RESERVED_NAMES: &[&str] = &["self", "Self", "super", "crate"];

fn reserved_field_name(shape: &TypeShape) -> Option<&str> {
    let params = shape.constructor.iter().flat_map(|c| c.params.iter());
    shape
        .fields
        .iter()
        .map(|f| f.name.as_str())
        .chain(params.map(|p| p.name.as_str()))
        .find(|name| RESERVED_NAMES.contains(name))
}

impl TypeLoader for SchemaFileLoader {
    fn load(&self, path: &TypePath) -> GenResult<TypeShape> {
        self.types.get(path).cloned().ok_or_else(|| {
            GenError::reflection(
                path,
                format!("not declared in schema file {}", self.file.display()),
            )
        })
    }
}
