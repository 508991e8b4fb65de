//! Persistence model building
//!
//! Walks the flattening tree and emits one column per leaf:
//! - leaf: the field itself
//! - simple wrapper: the outer name, the wrapped type, the outer nullability
//! - composite: `parent_child` per child, each child's own nullability

use tracing::debug;

use super::naming::ArtifactNaming;
use super::type_translation::TypeTranslation;
use crate::domain::entities::{
    FieldDescriptor, Flattening, GenerationContext, StorageColumn, StorageModel,
    PRIMARY_KEY_COLUMN,
};
use crate::domain::value_objects::TypeRef;

pub struct ModelBuilder<'a> {
    translation: &'a TypeTranslation,
    naming: &'a ArtifactNaming,
}

impl<'a> ModelBuilder<'a> {
    pub fn new(translation: &'a TypeTranslation, naming: &'a ArtifactNaming) -> Self {
        Self {
            translation,
            naming,
        }
    }

    pub fn build(&self, ctx: &GenerationContext) -> StorageModel {
        let domain = &ctx.domain.path;
        let columns = ctx
            .descriptors
            .iter()
            .flat_map(|d| self.columns(d))
            .collect::<Vec<_>>();

        debug!(columns = columns.len(), "built storage model");
        StorageModel {
            domain: domain.clone(),
            type_name: self.naming.persistence_type(domain),
            collection_name: self.naming.collection_name(domain),
            columns,
        }
    }

    fn columns(&self, descriptor: &FieldDescriptor) -> Vec<StorageColumn> {
        match descriptor.flattening() {
            Flattening::Leaf => vec![self.column(&descriptor.name, &descriptor.ty)],
            Flattening::SimpleWrapper => {
                // child already carries the outer nullability
                vec![self.column(&descriptor.name, &descriptor.children[0].ty)]
            }
            Flattening::Composite => descriptor
                .children
                .iter()
                .map(|child| self.column(&format!("{}_{}", descriptor.name, child.name), &child.ty))
                .collect(),
        }
    }

    fn column(&self, name: &str, ty: &TypeRef) -> StorageColumn {
        StorageColumn {
            name: name.to_string(),
            storage_type: self.translation.translate(ty.name()),
            rust_type: ty.name().to_string(),
            nullable: ty.is_nullable(),
            primary_key: name == PRIMARY_KEY_COLUMN,
        }
    }
}
