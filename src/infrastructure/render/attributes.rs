//! Attribute-style storage annotations
//!
//! ```text
//! #[derive(Debug, Clone, Default, PartialEq)]
//! #[storage(table = "invoices")]
//! pub struct DbInvoice {
//!     #[storage(type = "bigint", primary_key)]
//!     pub id: i64,
//! }
//! ```

use crate::domain::entities::{StorageColumn, StorageModel};
use crate::domain::ports::StorageAttributes;

pub const DEFAULT_ATTRIBUTE: &str = "storage";
pub const DEFAULT_DERIVES: &[&str] = &["Debug", "Clone", "Default", "PartialEq"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationAttributes {
    attribute: String,
    derives: Vec<String>,
}

impl AnnotationAttributes {
    /// `derives` always ends up containing `Default`, which `from_domain` needs
    pub fn new(attribute: impl Into<String>, derives: Vec<String>) -> Self {
        let mut derives = derives;
        if !derives.iter().any(|d| d == "Default" || d.ends_with("::Default")) {
            derives.push("Default".to_string());
        }
        Self {
            attribute: attribute.into(),
            derives,
        }
    }
}

impl Default for AnnotationAttributes {
    fn default() -> Self {
        Self::new(
            DEFAULT_ATTRIBUTE,
            DEFAULT_DERIVES.iter().map(|d| d.to_string()).collect(),
        )
    }
}

impl StorageAttributes for AnnotationAttributes {
    fn derives(&self) -> Vec<String> {
        self.derives.clone()
    }

    fn table_attributes(&self, model: &StorageModel) -> Vec<String> {
        vec![format!(
            "#[{}(table = {:?})]",
            self.attribute, model.collection_name
        )]
    }

    fn column_attributes(&self, column: &StorageColumn) -> Vec<String> {
        let mut args = vec![format!("type = {:?}", column.storage_type)];
        if column.nullable {
            args.push("nullable".to_string());
        }
        if column.primary_key {
            args.push("primary_key".to_string());
        }
        vec![format!("#[{}({})]", self.attribute, args.join(", "))]
    }
}
