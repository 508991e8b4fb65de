//! Generate Use Case
//!
//! Orchestrates one generation run:
//! 1. Extract the domain type's metadata
//! 2. Classify and flatten its fields
//! 3. Build the storage model
//! 4. Plan both converter directions
//! 5. Render both artifacts in memory
//! 6. Compare with disk and commit
//!
//! Nothing is written until both artifacts rendered, so a failure in any
//! phase leaves the output tree untouched.

use std::path::Path;

use tracing::{debug, info, info_span};

use crate::config::Config;
use crate::domain::entities::{ArtifactKind, GeneratedFile};
use crate::domain::ports::{FileSystem, StorageAttributes, TypeLoader};
use crate::domain::services::{
    ArtifactNaming, Classifier, ConverterGenerator, EmissionPlan, MetadataExtractor,
    ModelBuilder, PlannedFile, TypeTranslation,
};
use crate::domain::value_objects::{AccessorStrategy, TypePath};
use crate::error::GenResult;
use crate::infrastructure::render::{render_mapper, render_persistence};

use super::options::GenerateOptions;
use super::result::{Analysis, GenerateResult};

/// Settings shared by every phase of a run
pub struct GenerationSettings {
    pub naming: ArtifactNaming,
    pub translation: TypeTranslation,
    pub attributes: Box<dyn StorageAttributes>,
    pub strategy: AccessorStrategy,
    pub constructor: String,
}

impl GenerationSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            naming: config.naming(),
            translation: config.translation(),
            attributes: Box::new(config.attributes()),
            strategy: config.accessors.strategy,
            constructor: config.naming.constructor.clone(),
        }
    }
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Generate use case, parameterized by its ports
pub struct GenerateUseCase<L, FS>
where
    L: TypeLoader,
    FS: FileSystem,
{
    extractor: MetadataExtractor<L>,
    file_system: FS,
    settings: GenerationSettings,
}

impl<L, FS> GenerateUseCase<L, FS>
where
    L: TypeLoader,
    FS: FileSystem,
{
    pub fn new(extractor: MetadataExtractor<L>, file_system: FS, settings: GenerationSettings) -> Self {
        Self {
            extractor,
            file_system,
            settings,
        }
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    /// Extract, classify, build the model and plan the converter
    pub fn analyze(&self, type_path: &TypePath) -> GenResult<Analysis> {
        let span = info_span!("analyze", type_path = %type_path);
        let _enter = span.enter();

        let domain = self.extractor.extract(type_path)?;
        let classifier = Classifier::new(&self.extractor, self.settings.strategy);
        let mut context = classifier.classify(domain)?;
        info!(
            fields = context.descriptors.len(),
            compounds = context.compounds.len(),
            "classified fields"
        );

        let model = ModelBuilder::new(&self.settings.translation, &self.settings.naming)
            .build(&context);
        info!(
            columns = model.columns.len(),
            collection = %model.collection_name,
            "built storage model"
        );

        let plan = ConverterGenerator::new(&self.settings.constructor).plan(&mut context, &model)?;
        info!(returns_result = plan.returns.fallible_return().is_some(), "planned converter");

        Ok(Analysis {
            context,
            model,
            plan,
        })
    }

    /// Render the persistence struct and the mapper
    pub fn render(&self, analysis: &Analysis) -> Vec<GeneratedFile> {
        let domain = &analysis.model.domain;
        let naming = &self.settings.naming;

        let persistence = render_persistence(&analysis.model, self.settings.attributes.as_ref());
        let mapper = render_mapper(&analysis.plan, &analysis.model, naming);

        vec![
            GeneratedFile::new(
                naming.persistence_file(domain),
                persistence,
                ArtifactKind::Persistence,
            ),
            GeneratedFile::new(naming.mapper_file(domain), mapper, ArtifactKind::Mapper),
        ]
    }

    /// Decide create / update / unchanged for each artifact
    pub fn plan(&self, project_root: &Path, files: Vec<GeneratedFile>) -> GenResult<EmissionPlan> {
        let mut plan = EmissionPlan::new();
        for file in files {
            let target = project_root.join(file.path());
            let existing = if self.file_system.exists(&target) {
                Some(self.file_system.read(&target)?)
            } else {
                None
            };
            let planned = PlannedFile::new(file, existing);
            debug!(
                path = %planned.file.path().display(),
                action = planned.action.as_str(),
                "planned artifact"
            );
            plan.add(planned);
        }
        Ok(plan)
    }

    /// Execute the generate use case
    pub fn execute(&self, options: &GenerateOptions) -> GenResult<GenerateResult> {
        let type_path = TypePath::parse(&options.type_path)?;
        let analysis = self.analyze(&type_path)?;
        let files = self.render(&analysis);
        let plan = self.plan(&options.project_root, files)?;

        let mut result = GenerateResult::new(type_path, options.mode);

        if options.mode.writes() {
            let span = info_span!("commit", mode = options.mode.as_str());
            let _enter = span.enter();
            for planned in plan.to_write() {
                let target = options.project_root.join(planned.file.path());
                self.file_system.write(&target, planned.file.content())?;
                info!(
                    path = %planned.file.path().display(),
                    action = planned.action.as_str(),
                    "wrote artifact"
                );
                result.written.push(planned.file.path().to_path_buf());
            }
        }

        result.files = plan.files;
        Ok(result)
    }
}
