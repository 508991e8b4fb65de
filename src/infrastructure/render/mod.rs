//! Artifact Renderers
//!
//! Turn the storage model and converter plan into Rust source text.

mod attributes;
mod mapper;
mod persistence;

pub use attributes::{AnnotationAttributes, DEFAULT_ATTRIBUTE, DEFAULT_DERIVES};
pub use mapper::render_mapper;
pub use persistence::render_persistence;

use crate::domain::value_objects::TypePath;

/// Marker line opening every generated file
pub const GENERATED_MARKER: &str = "// @generated by persistgen";

fn header(domain: &TypePath) -> String {
    format!("{} from {}. Do not edit by hand.\n\n", GENERATED_MARKER, domain)
}
