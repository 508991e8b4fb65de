//! Property classification and flattening
//!
//! Builds the flattening tree for a domain type. Each top-level field becomes
//! a leaf, a simple wrapper (compound with one field) or a composite
//! (compound with several scalar fields). Recursion is bounded by
//! [`MAX_NESTING_DEPTH`]; a compound found below that depth is rejected.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use super::extractor::MetadataExtractor;
use crate::domain::entities::{
    FieldDescriptor, FieldMeta, GenerationContext, MethodMeta, TypeMetadata,
};
use crate::domain::ports::TypeLoader;
use crate::domain::value_objects::type_ref::unqualified;
use crate::domain::value_objects::{AccessorStrategy, TypePath};
use crate::error::{GenError, GenResult};

/// Compound levels below the domain type that can be flattened
pub const MAX_NESTING_DEPTH: usize = 1;

pub struct Classifier<'a, L> {
    extractor: &'a MetadataExtractor<L>,
    strategy: AccessorStrategy,
}

impl<'a, L: TypeLoader> Classifier<'a, L> {
    pub fn new(extractor: &'a MetadataExtractor<L>, strategy: AccessorStrategy) -> Self {
        Self {
            extractor,
            strategy,
        }
    }

    /// Classify every field of `domain` and start a fresh run context
    pub fn classify(&self, domain: TypeMetadata) -> GenResult<GenerationContext> {
        let mut ctx = GenerationContext::new(domain.clone());
        let mut owners: BTreeMap<TypePath, String> = BTreeMap::new();

        for field in &domain.fields {
            if let Some(path) = field.ty.compound_path() {
                if let Some(first) = owners.get(path) {
                    return Err(GenError::AmbiguousCompound {
                        type_path: path.to_string(),
                        first: first.clone(),
                        second: field.name.clone(),
                    });
                }
                owners.insert(path.clone(), field.name.clone());
            }

            let descriptor = self.flatten(&mut ctx, &domain, field, 0)?;
            debug!(
                field = %descriptor.name,
                shape = descriptor.flattening().as_str(),
                columns = ?descriptor.column_names(),
                "classified field"
            );
            ctx.descriptors.push(descriptor);
        }

        Ok(ctx)
    }

    fn flatten(
        &self,
        ctx: &mut GenerationContext,
        owner: &TypeMetadata,
        field: &FieldMeta,
        depth: usize,
    ) -> GenResult<FieldDescriptor> {
        let accessor = self.accessor(owner, field);

        let Some(path) = field.ty.compound_path() else {
            return Ok(FieldDescriptor::leaf(&field.name, field.ty.clone(), accessor));
        };

        if depth >= MAX_NESTING_DEPTH {
            return Err(GenError::UnsupportedNesting {
                owner: owner.path.to_string(),
                field: field.name.clone(),
                nested_type: field.ty.name().to_string(),
            });
        }

        let compound = self.extractor.extract(path)?;
        let mut children = Vec::with_capacity(compound.fields.len());
        for nested in &compound.fields {
            children.push(self.flatten(ctx, &compound, nested, depth + 1)?);
        }

        match children.len() {
            0 => {
                return Err(GenError::EmptyCompound {
                    field: field.name.clone(),
                    type_path: path.to_string(),
                })
            }
            1 => {
                let child = &mut children[0];
                if child.ty.is_nullable() && !field.ty.is_nullable() {
                    warn!(
                        field = %field.name,
                        inner = %child.name,
                        "wrapped value is optional but the field is not; column follows the field"
                    );
                }
                child.ty = child.ty.clone().with_nullable(field.ty.is_nullable());
            }
            _ if field.ty.is_nullable() => {
                return Err(GenError::NullableComposite {
                    field: field.name.clone(),
                    type_path: path.to_string(),
                })
            }
            _ => {}
        }

        ctx.compounds.insert(path.clone(), compound);
        Ok(FieldDescriptor::compound(
            &field.name,
            field.ty.clone(),
            accessor,
            children,
        ))
    }

    fn accessor(&self, owner: &TypeMetadata, field: &FieldMeta) -> Option<String> {
        let accessor = resolve_accessor(&owner.methods, field, self.strategy);
        if accessor.is_none() {
            warn!(
                owner = %owner.path,
                field = %field.name,
                "no accessor matches the field type; reading the field directly"
            );
        }
        accessor
    }
}

/// First method whose return type equals the field's declared type.
///
/// With [`AccessorStrategy::Name`] the method must also carry the field's name.
pub fn resolve_accessor(
    methods: &[MethodMeta],
    field: &FieldMeta,
    strategy: AccessorStrategy,
) -> Option<String> {
    let declared = unqualified(&field.ty.declared());
    methods
        .iter()
        .filter(|m| strategy == AccessorStrategy::ReturnType || m.name == field.name)
        .find(|m| unqualified(&m.returns) == declared)
        .map(|m| m.name.clone())
}
