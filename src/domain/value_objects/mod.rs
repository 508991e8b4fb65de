//! Domain Value Objects
//!
//! Immutable value types that represent generator concepts: type paths,
//! declared types, the scalar set, the accessor binding rule and content
//! hashes.

mod accessor_strategy;
mod hash;
mod scalar_types;
pub mod type_path;
pub mod type_ref;

pub use accessor_strategy::AccessorStrategy;
pub use hash::ContentHash;
pub use scalar_types::{ScalarTypes, DEFAULT_EXTRA_SCALARS, PRIMITIVE_SCALARS};
pub use type_path::TypePath;
pub use type_ref::{TypeKind, TypeRef};
