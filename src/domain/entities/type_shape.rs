//! TypeShape entity - raw declaration of a type as seen by a loader
//!
//! Loaders (source parser, schema file) produce shapes with type strings
//! exactly as written. The metadata extractor turns them into
//! [`TypeMetadata`](super::TypeMetadata) with resolved, classified types.
//!
//! Shapes double as the explicit schema format:
//!
//! ```toml
//! [[types]]
//! path = "crate::domain::billing::Invoice"
//! fields = [{ name = "id", type = "InvoiceId" }, { name = "active", type = "bool" }]
//! methods = [{ name = "id", returns = "&InvoiceId" }]
//! constructor = { params = [{ name = "id", type = "InvoiceId" }, { name = "active", type = "bool" }] }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Declaration of one type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeShape {
    /// Fully qualified path of the type
    pub path: String,
    /// Fields in declaration order
    #[serde(default)]
    pub fields: Vec<FieldShape>,
    /// Zero-argument `&self` methods in declaration order
    #[serde(default)]
    pub methods: Vec<MethodShape>,
    /// The validating constructor, if any
    #[serde(default)]
    pub constructor: Option<ConstructorShape>,
    /// Names brought into scope by `use` items, alias -> full path
    #[serde(default)]
    pub imports: BTreeMap<String, String>,
}

/// One declared field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldShape {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

/// One accessor candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodShape {
    pub name: String,
    pub returns: String,
}

/// Constructor signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorShape {
    #[serde(default = "default_constructor_name")]
    pub name: String,
    #[serde(default)]
    pub params: Vec<ParamShape>,
    #[serde(default = "default_returns")]
    pub returns: String,
}

/// One constructor parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamShape {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

fn default_constructor_name() -> String {
    "new".to_string()
}

fn default_returns() -> String {
    "Self".to_string()
}

impl TypeShape {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            fields: Vec::new(),
            methods: Vec::new(),
            constructor: None,
            imports: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push(FieldShape {
            name: name.into(),
            ty: ty.into(),
        });
        self
    }

    pub fn with_method(mut self, name: impl Into<String>, returns: impl Into<String>) -> Self {
        self.methods.push(MethodShape {
            name: name.into(),
            returns: returns.into(),
        });
        self
    }

    pub fn with_constructor(mut self, constructor: ConstructorShape) -> Self {
        self.constructor = Some(constructor);
        self
    }

    pub fn with_import(mut self, alias: impl Into<String>, path: impl Into<String>) -> Self {
        self.imports.insert(alias.into(), path.into());
        self
    }
}

impl ConstructorShape {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            returns: default_returns(),
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.params.push(ParamShape {
            name: name.into(),
            ty: ty.into(),
        });
        self
    }

    pub fn returning(mut self, returns: impl Into<String>) -> Self {
        self.returns = returns.into();
        self
    }
}
