//! Type Loaders
//!
//! Implementations of the TypeLoader port.

mod schema_file;
mod source_tree;
mod syn_types;

pub use schema_file::SchemaFileLoader;
pub use source_tree::SourceTreeLoader;
