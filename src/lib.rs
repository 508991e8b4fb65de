//! persistgen - persistence structs and mappers for Rust domain types
//!
//! Reads the shape of a domain value type (fields, accessors, validating
//! constructor), flattens nested value types into storage columns and emits
//! two source files: a flat persistence struct and a mapper with
//! `from_domain` / `to_domain` conversions.
//!
//! ## Layers
//!
//! - `domain` - flattening, model building and converter planning
//! - `application` - generate and inspect use cases
//! - `infrastructure` - type loaders, renderers, file system
//! - `presentation` - CLI parsing and output

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{GenerateOptions, GenerateResult, GenerateUseCase, InspectReport};
pub use config::Config;
pub use error::{GenError, GenResult};
