//! Domain Services
//!
//! Pure generation logic operating on domain entities. Type declarations
//! arrive through the `TypeLoader` port; nothing here touches the file
//! system.

mod classifier;
mod converter;
mod extractor;
mod model_builder;
mod naming;
mod planner;
mod type_translation;

pub use classifier::{resolve_accessor, Classifier, MAX_NESTING_DEPTH};
pub use converter::ConverterGenerator;
pub use extractor::MetadataExtractor;
pub use model_builder::ModelBuilder;
pub use naming::ArtifactNaming;
pub use planner::{EmissionPlan, FileAction, PlannedFile};
pub use type_translation::TypeTranslation;
