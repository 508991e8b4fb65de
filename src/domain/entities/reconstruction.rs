//! ReconstructionMapping - compound type to the columns that rebuild it
//!
//! Filled while planning `from_domain`, read while planning `to_domain`.
//! Column order is the order the compound's children were visited, which is
//! the positional order of the compound constructor's arguments.

use std::collections::BTreeMap;

use crate::domain::value_objects::TypePath;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconstructionMapping {
    entries: BTreeMap<TypePath, Vec<String>>,
}

impl ReconstructionMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh entry for `ty`, dropping anything recorded before
    pub fn begin(&mut self, ty: &TypePath) {
        self.entries.insert(ty.clone(), Vec::new());
    }

    /// Append a column reference to the entry for `ty`
    pub fn record(&mut self, ty: &TypePath, column: impl Into<String>) {
        self.entries
            .entry(ty.clone())
            .or_default()
            .push(column.into());
    }

    pub fn get(&self, ty: &TypePath) -> Option<&[String]> {
        self.entries.get(ty).map(Vec::as_slice)
    }

    pub fn contains(&self, ty: &TypePath) -> bool {
        self.entries.contains_key(ty)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TypePath, &[String])> {
        self.entries.iter().map(|(k, v)| (k, v.as_slice()))
    }
}
