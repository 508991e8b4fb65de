//! TypeMetadata entity - an introspected, classified type
//!
//! Produced by the metadata extractor from a [`TypeShape`](super::TypeShape):
//! field and parameter types are split into base type and nullability, and
//! compound types carry their resolved [`TypePath`].

use crate::domain::value_objects::{TypePath, TypeRef};

/// Introspected type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMetadata {
    pub path: TypePath,
    pub fields: Vec<FieldMeta>,
    pub methods: Vec<MethodMeta>,
    pub constructor: Option<ConstructorMeta>,
}

/// Declared field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMeta {
    pub name: String,
    pub ty: TypeRef,
}

/// Accessor candidate; `returns` is normalised with any leading borrow removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodMeta {
    pub name: String,
    pub returns: String,
}

/// Constructor parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamMeta {
    pub name: String,
    pub ty: TypeRef,
}

/// Validating constructor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorMeta {
    pub name: String,
    pub params: Vec<ParamMeta>,
    pub output: ConstructorOutput,
}

/// What the constructor returns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructorOutput {
    /// `Self`
    Infallible,
    /// `Result<Self, E>` or a `Result<Self>` alias
    Fallible(FallibleReturn),
}

/// Rendering data for a `Result` return type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallibleReturn {
    /// How `Result` is written in generated code (`Result`, `anyhow::Result`)
    pub result: String,
    /// Import needed for `result`, when it is an alias brought in by `use`
    pub result_import: Option<TypePath>,
    /// How the error type is written, absent for single-argument aliases
    pub error: Option<String>,
    /// Import needed for `error`
    pub error_import: Option<TypePath>,
}

impl TypeMetadata {
    pub fn short_name(&self) -> &str {
        self.path.short_name()
    }

    pub fn field(&self, name: &str) -> Option<&FieldMeta> {
        self.fields.iter().find(|f| f.name == name)
    }
}

impl ConstructorMeta {
    pub fn is_fallible(&self) -> bool {
        matches!(self.output, ConstructorOutput::Fallible(_))
    }

    pub fn fallible_return(&self) -> Option<&FallibleReturn> {
        match &self.output {
            ConstructorOutput::Fallible(ret) => Some(ret),
            ConstructorOutput::Infallible => None,
        }
    }
}

impl FallibleReturn {
    /// `Result<Ok, E>` / `Result<Ok>` with the given success type
    pub fn render(&self, ok: &str) -> String {
        match &self.error {
            Some(error) => format!("{}<{}, {}>", self.result, ok, error),
            None => format!("{}<{}>", self.result, ok),
        }
    }

    /// Imports needed to name this return type
    pub fn imports(&self) -> impl Iterator<Item = &TypePath> {
        self.result_import.iter().chain(self.error_import.iter())
    }
}
