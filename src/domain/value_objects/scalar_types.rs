//! ScalarTypes value object - which base types are stored as-is
//!
//! Rust primitives and `String` are always scalar. Everything else is a
//! compound value type unless listed as an extra scalar in the config
//! (`[types] scalars = [...]`). Lookups ignore module qualifiers, so
//! `chrono::DateTime<chrono::Utc>` matches `DateTime<Utc>`.

use std::collections::BTreeSet;

use super::type_ref::unqualified;

/// Builtin scalar types
pub const PRIMITIVE_SCALARS: &[&str] = &[
    "bool", "char", "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128",
    "usize", "f32", "f64", "String",
];

/// Extra scalars enabled when the config does not override them
pub const DEFAULT_EXTRA_SCALARS: &[&str] = &[
    "DateTime<Utc>",
    "DateTime<FixedOffset>",
    "NaiveDate",
    "NaiveDateTime",
    "NaiveTime",
    "Uuid",
    "Decimal",
];

/// Set of scalar base types
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarTypes {
    names: BTreeSet<String>,
}

impl ScalarTypes {
    /// Primitives plus the given extra scalar types
    pub fn with_extras<I, S>(extras: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = PRIMITIVE_SCALARS
            .iter()
            .map(|s| s.to_string())
            .chain(extras.into_iter().map(|s| unqualified(s.as_ref())))
            .collect();
        Self { names }
    }

    /// Whether `base` (already stripped of `Option<..>`) is stored as-is
    pub fn is_scalar(&self, base: &str) -> bool {
        self.names.contains(&unqualified(base))
    }

    /// Whether `name` is a configured scalar rather than a builtin one
    pub fn is_extra(&self, name: &str) -> bool {
        let name = unqualified(name);
        self.names.contains(&name) && !PRIMITIVE_SCALARS.contains(&name.as_str())
    }
}

impl Default for ScalarTypes {
    fn default() -> Self {
        Self::with_extras(DEFAULT_EXTRA_SCALARS)
    }
}
