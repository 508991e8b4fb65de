//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementation (LocalFs)
//! - `loader/` - Type loaders (source tree via `syn`, TOML schema file)
//! - `render/` - Persistence struct and mapper renderers

pub mod fs;
pub mod loader;
pub mod render;

// Re-export for convenience
pub use fs::LocalFs;
pub use loader::{SchemaFileLoader, SourceTreeLoader};
pub use render::AnnotationAttributes;
