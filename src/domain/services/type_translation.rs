//! Native scalar type -> storage type identifier
//!
//! Lookups ignore module qualifiers. Types missing from the table pass
//! through unchanged.

use std::collections::BTreeMap;

use crate::domain::value_objects::type_ref::unqualified;

const DEFAULT_TRANSLATIONS: &[(&str, &str)] = &[
    ("bool", "boolean"),
    ("i8", "smallint"),
    ("i16", "smallint"),
    ("i32", "integer"),
    ("i64", "bigint"),
    ("u8", "smallint"),
    ("u16", "integer"),
    ("u32", "bigint"),
    ("f32", "float"),
    ("f64", "float"),
    ("String", "string"),
    ("DateTime<Utc>", "datetime_immutable"),
    ("DateTime<FixedOffset>", "datetimetz_immutable"),
    ("NaiveDateTime", "datetime"),
    ("NaiveDate", "date"),
    ("NaiveTime", "time"),
    ("Uuid", "guid"),
    ("Decimal", "decimal"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeTranslation {
    table: BTreeMap<String, String>,
}

impl TypeTranslation {
    /// Defaults with `overrides` applied on top
    pub fn with_overrides<'a, I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut translation = Self::default();
        for (native, storage) in overrides {
            translation
                .table
                .insert(unqualified(native), storage.clone());
        }
        translation
    }

    pub fn translate(&self, rust_type: &str) -> String {
        self.table
            .get(&unqualified(rust_type))
            .cloned()
            .unwrap_or_else(|| rust_type.to_string())
    }
}

impl Default for TypeTranslation {
    fn default() -> Self {
        let table = DEFAULT_TRANSLATIONS
            .iter()
            .map(|(native, storage)| (native.to_string(), storage.to_string()))
            .collect();
        Self { table }
    }
}
