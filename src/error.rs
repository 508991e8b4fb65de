//! Error types for persistgen
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.
//!
//! Every variant is fatal for the run that raised it. Nothing is retried and
//! no artifact is written once an error surfaces.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for persistgen operations
pub type GenResult<T> = Result<T, GenError>;

/// Main error type for generation runs
#[derive(Error, Debug)]
pub enum GenError {
    /// Type reference is not a valid `a::b::Type` path
    #[error("invalid type path '{path}': {reason}")]
    InvalidTypePath { path: String, reason: String },

    /// Domain type or a referenced compound type cannot be loaded
    #[error("cannot introspect '{type_path}': {reason}")]
    ReflectionFailure { type_path: String, reason: String },

    /// A composite field contains another compound field
    #[error(
        "unsupported nesting: field '{field}' of composite '{owner}' is itself a compound type ('{nested_type}')"
    )]
    UnsupportedNesting {
        owner: String,
        field: String,
        nested_type: String,
    },

    /// Compound type declares no fields at all
    #[error("compound type '{type_path}' used by field '{field}' declares no fields")]
    EmptyCompound { field: String, type_path: String },

    /// Optional composites cannot be rebuilt from per-member columns
    #[error("field '{field}' is an optional composite ('{type_path}'); only optional single-value wrappers are supported")]
    NullableComposite { field: String, type_path: String },

    /// Two fields share one compound type, so the reconstruction mapping would be ambiguous
    #[error("compound type '{type_path}' is used by both '{first}' and '{second}'")]
    AmbiguousCompound {
        type_path: String,
        first: String,
        second: String,
    },

    /// Domain type or compound type exposes no constructor
    #[error("type '{type_path}' has no '{constructor}' constructor")]
    MissingConstructor {
        type_path: String,
        constructor: String,
    },

    /// Constructor parameter has no persisted counterpart
    #[error("constructor parameter '{parameter}' of '{type_path}' has no matching persisted field")]
    UnmappedParameter {
        type_path: String,
        parameter: String,
    },

    /// Compound constructor does not take one argument per recorded column
    #[error("constructor of '{type_path}' takes {expected} arguments but {found} columns were recorded")]
    ConstructorArity {
        type_path: String,
        expected: usize,
        found: usize,
    },

    /// Output file could not be read, created or written
    #[error("file system error at {path}: {message}")]
    FileSystem { path: PathBuf, message: String },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Invalid schema description file
    #[error("invalid schema in {file}: {message}")]
    Schema { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GenError {
    pub(crate) fn reflection(type_path: impl ToString, reason: impl Into<String>) -> Self {
        GenError::ReflectionFailure {
            type_path: type_path.to_string(),
            reason: reason.into(),
        }
    }

    /// Stable identifier used in JSON output
    pub fn kind(&self) -> &'static str {
        match self {
            GenError::InvalidTypePath { .. } => "invalid_type_path",
            GenError::ReflectionFailure { .. } => "reflection_failure",
            GenError::UnsupportedNesting { .. } => "unsupported_nesting",
            GenError::EmptyCompound { .. } => "empty_compound",
            GenError::NullableComposite { .. } => "nullable_composite",
            GenError::AmbiguousCompound { .. } => "ambiguous_compound",
            GenError::MissingConstructor { .. } => "missing_constructor",
            GenError::UnmappedParameter { .. } => "unmapped_parameter",
            GenError::ConstructorArity { .. } => "constructor_arity",
            GenError::FileSystem { .. } => "file_system",
            GenError::Config { .. } => "config",
            GenError::Schema { .. } => "schema",
            GenError::Io(_) => "io",
        }
    }
}
