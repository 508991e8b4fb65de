//! FieldDescriptor entity - one node of the flattening tree
//!
//! The number of children decides how a field lands in storage:
//!
//! | children | shape          | columns                                   |
//! |----------|----------------|-------------------------------------------|
//! | 0        | leaf           | `name`                                    |
//! | 1        | simple wrapper | `name` (nullability of the outer field)   |
//! | n > 1    | composite      | `name_child` (nullability of each child)  |

use crate::domain::value_objects::{TypePath, TypeRef};

/// Field of the domain type, or of a compound nested in it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub ty: TypeRef,
    /// Resolved accessor method; `None` reads the field directly
    pub accessor: Option<String>,
    pub children: Vec<FieldDescriptor>,
}

/// How a descriptor is flattened into columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flattening {
    Leaf,
    SimpleWrapper,
    Composite,
}

impl Flattening {
    pub fn as_str(&self) -> &'static str {
        match self {
            Flattening::Leaf => "leaf",
            Flattening::SimpleWrapper => "simple_wrapper",
            Flattening::Composite => "composite",
        }
    }
}

impl FieldDescriptor {
    pub fn leaf(name: impl Into<String>, ty: TypeRef, accessor: Option<String>) -> Self {
        Self {
            name: name.into(),
            ty,
            accessor,
            children: Vec::new(),
        }
    }

    pub fn compound(
        name: impl Into<String>,
        ty: TypeRef,
        accessor: Option<String>,
        children: Vec<FieldDescriptor>,
    ) -> Self {
        Self {
            name: name.into(),
            ty,
            accessor,
            children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn flattening(&self) -> Flattening {
        match self.children.len() {
            0 => Flattening::Leaf,
            1 => Flattening::SimpleWrapper,
            _ => Flattening::Composite,
        }
    }

    /// Path of the compound type, `None` for leaves
    pub fn compound_path(&self) -> Option<&TypePath> {
        if self.is_leaf() {
            None
        } else {
            self.ty.compound_path()
        }
    }

    /// Column names produced by this descriptor, in order
    pub fn column_names(&self) -> Vec<String> {
        match self.flattening() {
            Flattening::Leaf | Flattening::SimpleWrapper => vec![self.name.clone()],
            Flattening::Composite => self
                .children
                .iter()
                .map(|child| format!("{}_{}", self.name, child.name))
                .collect(),
        }
    }
}
