//! StorageAttributes port - storage-engine annotations on the persistence struct

use crate::domain::entities::{StorageColumn, StorageModel};

pub trait StorageAttributes {
    /// Derives for the persistence struct; must include `Default`
    fn derives(&self) -> Vec<String>;

    /// Attribute lines placed above the struct
    fn table_attributes(&self, model: &StorageModel) -> Vec<String>;

    /// Attribute lines placed above one column field
    fn column_attributes(&self, column: &StorageColumn) -> Vec<String>;
}
