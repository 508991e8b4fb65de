//! Domain Layer
//!
//! The generator core: flattening and reconstruction logic without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Run data (TypeShape, TypeMetadata, FieldDescriptor, StorageModel, ConverterPlan)
//! - `value_objects/` - Immutable value types (TypePath, TypeRef, ScalarTypes)
//! - `services/` - Extractor, Classifier, ModelBuilder, ConverterGenerator, Planner
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - Type declarations come in through `TypeLoader`, artifacts go out through `FileSystem`
//! 2. **Per-run state** - Everything a run accumulates lives in one `GenerationContext`
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
