//! GenerationContext - state of one generation run
//!
//! Created by the classifier, threaded through model building and converter
//! planning, dropped when the run ends. Nothing outlives the run.

use std::collections::BTreeMap;

use super::{FieldDescriptor, ReconstructionMapping, TypeMetadata};
use crate::domain::value_objects::TypePath;

#[derive(Debug, Clone)]
pub struct GenerationContext {
    pub domain: TypeMetadata,
    pub descriptors: Vec<FieldDescriptor>,
    /// Metadata of every compound type reached from the domain type
    pub compounds: BTreeMap<TypePath, TypeMetadata>,
    pub mapping: ReconstructionMapping,
}

impl GenerationContext {
    pub fn new(domain: TypeMetadata) -> Self {
        Self {
            domain,
            descriptors: Vec::new(),
            compounds: BTreeMap::new(),
            mapping: ReconstructionMapping::new(),
        }
    }

    pub fn compound(&self, path: &TypePath) -> Option<&TypeMetadata> {
        self.compounds.get(path)
    }
}
