//! Domain Entities
//!
//! Data produced and consumed during one generation run.
//! - `TypeShape` - raw type declaration from a loader
//! - `TypeMetadata` - classified, resolved type
//! - `FieldDescriptor` - flattening tree node
//! - `StorageModel` - flat persistence representation
//! - `ConverterPlan` - both mapper conversions
//! - `GeneratedFile` - a rendered artifact

mod artifact;
mod converter_plan;
mod field_descriptor;
mod generation_context;
mod reconstruction;
mod storage_model;
mod type_metadata;
mod type_shape;

pub use artifact::{ArtifactKind, GeneratedFile};
pub use converter_plan::{
    Access, Assignment, ConstructorArg, ConstructorCall, ConverterPlan, DomainReturn,
};
pub use field_descriptor::{FieldDescriptor, Flattening};
pub use generation_context::GenerationContext;
pub use reconstruction::ReconstructionMapping;
pub use storage_model::{StorageColumn, StorageModel, PRIMARY_KEY_COLUMN};
pub use type_metadata::{
    ConstructorMeta, ConstructorOutput, FallibleReturn, FieldMeta, MethodMeta, ParamMeta,
    TypeMetadata,
};
pub use type_shape::{ConstructorShape, FieldShape, MethodShape, ParamShape, TypeShape};
