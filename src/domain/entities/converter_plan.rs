//! ConverterPlan entity - the two mapper conversions, before rendering
//!
//! `from_domain` is a list of column assignments; `to_domain` is one
//! constructor call whose arguments are either columns or nested compound
//! constructor calls.

use super::type_metadata::FallibleReturn;
use crate::domain::value_objects::TypePath;

/// How a value is read from its owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// `owner.name()`
    Method(String),
    /// `owner.name`
    Field(String),
}

impl Access {
    pub fn from_accessor(accessor: Option<&str>, field: &str) -> Self {
        match accessor {
            Some(method) => Access::Method(method.to_string()),
            None => Access::Field(field.to_string()),
        }
    }

    /// Render the read against `receiver`
    pub fn render(&self, receiver: &str) -> String {
        match self {
            Access::Method(name) => format!("{}.{}()", receiver, name),
            Access::Field(name) => format!("{}.{}", receiver, name),
        }
    }
}

/// `target.column = read(read(domain, outer), inner)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub column: String,
    pub outer: Access,
    /// Read on the compound value; `None` for leaves
    pub inner: Option<Access>,
    /// Outer value is an `Option<..>` that must be mapped over
    pub optional: bool,
}

/// One positional argument of a constructor call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructorArg {
    /// `source.column`
    Column { column: String },
    /// A compound rebuilt from recorded columns
    Compound {
        call: ConstructorCall,
        /// Single optional column mapped through the constructor
        optional: bool,
    },
}

/// `Type::constructor(args...)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorCall {
    pub type_path: TypePath,
    pub constructor: String,
    pub args: Vec<ConstructorArg>,
    pub fallible: bool,
}

impl ConstructorCall {
    /// Compound types rebuilt by this call, in argument order
    pub fn compound_types(&self) -> impl Iterator<Item = &TypePath> {
        self.args.iter().filter_map(|arg| match arg {
            ConstructorArg::Compound { call, .. } => Some(&call.type_path),
            ConstructorArg::Column { .. } => None,
        })
    }
}

/// Return type of `to_domain`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainReturn {
    /// Plain domain value
    Value,
    /// The domain constructor itself returns this `Result`
    Constructor(FallibleReturn),
    /// Only compound constructors fail; the domain value is wrapped in `Ok`
    Wrapped(FallibleReturn),
}

impl DomainReturn {
    pub fn fallible_return(&self) -> Option<&FallibleReturn> {
        match self {
            DomainReturn::Value => None,
            DomainReturn::Constructor(ret) | DomainReturn::Wrapped(ret) => Some(ret),
        }
    }
}

/// Both conversion directions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterPlan {
    pub assignments: Vec<Assignment>,
    pub call: ConstructorCall,
    pub returns: DomainReturn,
}
