//! Converter planning
//!
//! `from_domain` is planned first: every compound field records the columns
//! it wrote into the run's [`ReconstructionMapping`]. `to_domain` then walks
//! the domain constructor's parameters and rebuilds each compound from the
//! recorded columns, in recorded order.

use tracing::debug;

use crate::domain::entities::{
    Access, Assignment, ConstructorArg, ConstructorCall, ConverterPlan, DomainReturn,
    FieldDescriptor, Flattening, GenerationContext, ParamMeta, ReconstructionMapping,
    StorageModel,
};
use crate::error::{GenError, GenResult};

pub struct ConverterGenerator {
    constructor: String,
}

impl ConverterGenerator {
    /// `constructor` names the constructor reported when one is missing
    pub fn new(constructor: impl Into<String>) -> Self {
        Self {
            constructor: constructor.into(),
        }
    }

    /// Plan both directions, filling `ctx.mapping` on the way
    pub fn plan(&self, ctx: &mut GenerationContext, model: &StorageModel) -> GenResult<ConverterPlan> {
        let assignments = self.plan_from_domain(&ctx.descriptors, &mut ctx.mapping);
        let (call, returns) = self.plan_to_domain(ctx, model)?;
        debug!(
            assignments = assignments.len(),
            compounds = ctx.mapping.len(),
            "planned converter"
        );
        Ok(ConverterPlan {
            assignments,
            call,
            returns,
        })
    }

    pub fn plan_from_domain(
        &self,
        descriptors: &[FieldDescriptor],
        mapping: &mut ReconstructionMapping,
    ) -> Vec<Assignment> {
        let mut assignments = Vec::new();

        for descriptor in descriptors {
            let outer = Access::from_accessor(descriptor.accessor.as_deref(), &descriptor.name);
            let Some(path) = descriptor.compound_path() else {
                assignments.push(Assignment {
                    column: descriptor.name.clone(),
                    outer,
                    inner: None,
                    optional: false,
                });
                continue;
            };

            mapping.begin(path);
            let optional = descriptor.flattening() == Flattening::SimpleWrapper
                && descriptor.ty.is_nullable();
            for (child, column) in descriptor.children.iter().zip(descriptor.column_names()) {
                assignments.push(Assignment {
                    column: column.clone(),
                    outer: outer.clone(),
                    inner: Some(Access::from_accessor(child.accessor.as_deref(), &child.name)),
                    optional,
                });
                mapping.record(path, column);
            }
        }

        assignments
    }

    pub fn plan_to_domain(
        &self,
        ctx: &GenerationContext,
        model: &StorageModel,
    ) -> GenResult<(ConstructorCall, DomainReturn)> {
        let domain = &ctx.domain;
        let ctor = domain
            .constructor
            .as_ref()
            .ok_or_else(|| GenError::MissingConstructor {
                type_path: domain.path.to_string(),
                constructor: self.constructor.clone(),
            })?;

        let mut args = Vec::with_capacity(ctor.params.len());
        let mut compound_return = None;
        for param in &ctor.params {
            let arg = match param.ty.compound_path() {
                None => {
                    if model.column(&param.name).is_none() {
                        return Err(unmapped(ctx, param));
                    }
                    ConstructorArg::Column {
                        column: param.name.clone(),
                    }
                }
                Some(path) => {
                    let columns = ctx.mapping.get(path).ok_or_else(|| unmapped(ctx, param))?;
                    let compound = ctx.compound(path).ok_or_else(|| unmapped(ctx, param))?;
                    let compound_ctor =
                        compound
                            .constructor
                            .as_ref()
                            .ok_or_else(|| GenError::MissingConstructor {
                                type_path: path.to_string(),
                                constructor: self.constructor.clone(),
                            })?;

                    if compound_ctor.params.len() != columns.len() {
                        return Err(GenError::ConstructorArity {
                            type_path: path.to_string(),
                            expected: compound_ctor.params.len(),
                            found: columns.len(),
                        });
                    }
                    let optional = param.ty.is_nullable();
                    if optional && columns.len() != 1 {
                        return Err(GenError::NullableComposite {
                            field: param.name.clone(),
                            type_path: path.to_string(),
                        });
                    }
                    if compound_return.is_none() {
                        compound_return = compound_ctor.fallible_return().cloned();
                    }

                    ConstructorArg::Compound {
                        call: ConstructorCall {
                            type_path: path.clone(),
                            constructor: compound_ctor.name.clone(),
                            args: columns
                                .iter()
                                .map(|column| ConstructorArg::Column {
                                    column: column.clone(),
                                })
                                .collect(),
                            fallible: compound_ctor.is_fallible(),
                        },
                        optional,
                    }
                }
            };
            args.push(arg);
        }

        let returns = match (ctor.fallible_return(), compound_return) {
            (Some(ret), _) => DomainReturn::Constructor(ret.clone()),
            (None, Some(ret)) => DomainReturn::Wrapped(ret),
            (None, None) => DomainReturn::Value,
        };

        Ok((
            ConstructorCall {
                type_path: domain.path.clone(),
                constructor: ctor.name.clone(),
                args,
                fallible: ctor.is_fallible(),
            },
            returns,
        ))
    }
}

fn unmapped(ctx: &GenerationContext, param: &ParamMeta) -> GenError {
    GenError::UnmappedParameter {
        type_path: ctx.domain.path.to_string(),
        parameter: param.name.clone(),
    }
}
