//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use tracing::debug;

use crate::application::{GenerateUseCase, GenerationSettings};
use crate::config::Config;
use crate::domain::ports::TypeLoader;
use crate::domain::services::MetadataExtractor;
use crate::error::GenResult;
use crate::infrastructure::{LocalFs, SchemaFileLoader, SourceTreeLoader};

/// Type alias for the concrete GenerateUseCase with all dependencies
pub type ConcreteGenerateUseCase = GenerateUseCase<Box<dyn TypeLoader>, LocalFs>;

/// Schema file when given, else the project's source tree
pub fn create_type_loader(
    project_root: &Path,
    config: &Config,
    schema: Option<&Path>,
) -> GenResult<Box<dyn TypeLoader>> {
    match schema {
        Some(file) => {
            let loader = SchemaFileLoader::from_path(file)?;
            debug!(schema = %file.display(), types = loader.len(), "using schema file");
            Ok(Box::new(loader))
        }
        None => {
            let source_root = project_root.join(&config.paths.source_root);
            debug!(source_root = %source_root.display(), "using source tree");
            Ok(Box::new(SourceTreeLoader::new(
                source_root,
                config.naming.constructor.clone(),
            )))
        }
    }
}

/// Create a generate use case with all dependencies wired up
pub fn create_generate_use_case(
    project_root: &Path,
    config: &Config,
    schema: Option<&Path>,
) -> GenResult<ConcreteGenerateUseCase> {
    let loader = create_type_loader(project_root, config, schema)?;
    let extractor = MetadataExtractor::new(loader, config.scalar_types());
    Ok(GenerateUseCase::new(
        extractor,
        LocalFs::new(),
        GenerationSettings::from_config(config),
    ))
}
