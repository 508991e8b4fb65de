//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod storage_attributes;
pub mod type_loader;

pub use file_system::{FileSystem, FsError, FsResult};
pub use storage_attributes::StorageAttributes;
pub use type_loader::TypeLoader;
