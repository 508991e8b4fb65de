//! StorageModel entity - the flat persistence representation
//!
//! One [`StorageColumn`] per leaf of the flattening tree. A column named
//! `id` is the primary key wherever it appears.

use crate::domain::value_objects::TypePath;

/// Name of the primary-key column
pub const PRIMARY_KEY_COLUMN: &str = "id";

/// One persisted column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageColumn {
    pub name: String,
    /// Storage engine type identifier (`boolean`, `string`, ...)
    pub storage_type: String,
    /// Rust type of the column, without `Option<..>`
    pub rust_type: String,
    pub nullable: bool,
    pub primary_key: bool,
}

impl StorageColumn {
    /// Rust type as declared on the persistence struct
    pub fn field_type(&self) -> String {
        if self.nullable {
            format!("Option<{}>", self.rust_type)
        } else {
            self.rust_type.clone()
        }
    }
}

/// The persistence struct
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageModel {
    /// Domain type this model persists
    pub domain: TypePath,
    /// Persistence struct name (`DbInvoice`)
    pub type_name: String,
    /// Storage identifier (`invoices`)
    pub collection_name: String,
    pub columns: Vec<StorageColumn>,
}

impl StorageModel {
    pub fn column(&self, name: &str) -> Option<&StorageColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn primary_key(&self) -> Option<&StorageColumn> {
        self.columns.iter().find(|c| c.primary_key)
    }
}
