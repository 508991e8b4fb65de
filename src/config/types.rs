//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::services::{ArtifactNaming, TypeTranslation};
use crate::domain::value_objects::{AccessorStrategy, ScalarTypes, DEFAULT_EXTRA_SCALARS};
use crate::error::GenResult;
use crate::infrastructure::render::{AnnotationAttributes, DEFAULT_ATTRIBUTE, DEFAULT_DERIVES};

use super::loader::{self, ConfigWarning};

/// Config file looked up in the project root
pub const CONFIG_FILE_NAME: &str = "persistgen.toml";

/// Where sources are read and artifacts written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory holding `lib.rs` / `main.rs`, relative to the project root
    #[serde(default = "default_src")]
    pub source_root: PathBuf,

    /// Directory the artifact paths are rooted at
    #[serde(default = "default_src")]
    pub output_root: PathBuf,

    #[serde(default = "default_domain_segment")]
    pub domain_segment: String,

    #[serde(default = "default_infrastructure_segment")]
    pub infrastructure_segment: String,

    /// Appended to the artifact module; empty disables it
    #[serde(default = "default_persistence_segment")]
    pub persistence_segment: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            source_root: default_src(),
            output_root: default_src(),
            domain_segment: default_domain_segment(),
            infrastructure_segment: default_infrastructure_segment(),
            persistence_segment: default_persistence_segment(),
        }
    }
}

fn default_src() -> PathBuf {
    PathBuf::from("src")
}

fn default_domain_segment() -> String {
    "domain".to_string()
}

fn default_infrastructure_segment() -> String {
    "infrastructure".to_string()
}

fn default_persistence_segment() -> String {
    "persistence".to_string()
}

/// Generated type names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConfig {
    #[serde(default = "default_type_prefix")]
    pub type_prefix: String,

    #[serde(default = "default_mapper_suffix")]
    pub mapper_suffix: String,

    /// Name of the validating constructor on domain and compound types
    #[serde(default = "default_constructor")]
    pub constructor: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            type_prefix: default_type_prefix(),
            mapper_suffix: default_mapper_suffix(),
            constructor: default_constructor(),
        }
    }
}

fn default_type_prefix() -> String {
    "Db".to_string()
}

fn default_mapper_suffix() -> String {
    "Mapper".to_string()
}

fn default_constructor() -> String {
    "new".to_string()
}

/// Scalar set and storage type translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypesConfig {
    /// Non-primitive types stored as-is; replaces the default list
    #[serde(default = "default_scalars")]
    pub scalars: Vec<String>,

    /// Native type -> storage type overrides
    #[serde(default)]
    pub storage: BTreeMap<String, String>,
}

impl Default for TypesConfig {
    fn default() -> Self {
        Self {
            scalars: default_scalars(),
            storage: BTreeMap::new(),
        }
    }
}

fn default_scalars() -> Vec<String> {
    DEFAULT_EXTRA_SCALARS.iter().map(|s| s.to_string()).collect()
}

/// Accessor binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AccessorsConfig {
    #[serde(default)]
    pub strategy: AccessorStrategy,
}

/// Persistence struct annotations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Attribute name used for table and column annotations
    #[serde(default = "default_attribute")]
    pub attribute: String,

    #[serde(default = "default_derives")]
    pub derives: Vec<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            attribute: default_attribute(),
            derives: default_derives(),
        }
    }
}

fn default_attribute() -> String {
    DEFAULT_ATTRIBUTE.to_string()
}

fn default_derives() -> Vec<String> {
    DEFAULT_DERIVES.iter().map(|s| s.to_string()).collect()
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub naming: NamingConfig,

    #[serde(default)]
    pub types: TypesConfig,

    #[serde(default)]
    pub accessors: AccessorsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> GenResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> GenResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Explicit file, else `persistgen.toml` in the project root, else defaults
    pub fn discover(
        project_root: &Path,
        explicit: Option<&Path>,
    ) -> GenResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(project_root, explicit)
    }

    pub fn naming(&self) -> ArtifactNaming {
        ArtifactNaming {
            domain_segment: self.paths.domain_segment.clone(),
            infrastructure_segment: self.paths.infrastructure_segment.clone(),
            persistence_segment: self.paths.persistence_segment.clone(),
            type_prefix: self.naming.type_prefix.clone(),
            mapper_suffix: self.naming.mapper_suffix.clone(),
            output_root: self.paths.output_root.clone(),
        }
    }

    pub fn scalar_types(&self) -> ScalarTypes {
        ScalarTypes::with_extras(&self.types.scalars)
    }

    pub fn translation(&self) -> TypeTranslation {
        TypeTranslation::with_overrides(&self.types.storage)
    }

    pub fn attributes(&self) -> AnnotationAttributes {
        AnnotationAttributes::new(&self.output.attribute, self.output.derives.clone())
    }
}
