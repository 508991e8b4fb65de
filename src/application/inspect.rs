//! Inspect
//!
//! Runs the analysis half of a generation run and reports the flattening
//! tree, the storage columns and the reconstruction mapping. Never touches
//! the output tree.

use serde::Serialize;

use crate::domain::entities::FieldDescriptor;
use crate::domain::ports::{FileSystem, TypeLoader};
use crate::domain::services::ArtifactNaming;
use crate::domain::value_objects::TypePath;
use crate::error::GenResult;

use super::generate::{Analysis, GenerateUseCase};

/// One node of the flattening tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldNode {
    pub name: String,
    pub declared: String,
    pub shape: &'static str,
    /// `None` when the field is read directly
    pub accessor: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<FieldNode>,
}

impl FieldNode {
    fn from_descriptor(descriptor: &FieldDescriptor) -> Self {
        Self {
            name: descriptor.name.clone(),
            declared: descriptor.ty.declared(),
            shape: descriptor.flattening().as_str(),
            accessor: descriptor.accessor.clone(),
            children: descriptor
                .children
                .iter()
                .map(FieldNode::from_descriptor)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnRow {
    pub name: String,
    pub storage_type: String,
    pub rust_type: String,
    pub nullable: bool,
    pub primary_key: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingEntry {
    pub compound: String,
    pub columns: Vec<String>,
}

/// What `generate` would produce for a domain type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectReport {
    pub type_path: String,
    pub persistence_type: String,
    pub mapper_type: String,
    pub collection: String,
    pub persistence_file: String,
    pub mapper_file: String,
    pub fields: Vec<FieldNode>,
    pub columns: Vec<ColumnRow>,
    pub mapping: Vec<MappingEntry>,
    /// Return type of the generated `to_domain`
    pub to_domain_returns: String,
}

impl InspectReport {
    pub fn from_analysis(analysis: &Analysis, naming: &ArtifactNaming) -> Self {
        let domain = &analysis.model.domain;
        let to_domain_returns = match analysis.plan.returns.fallible_return() {
            Some(ret) => ret.render(domain.short_name()),
            None => domain.short_name().to_string(),
        };

        Self {
            type_path: domain.to_string(),
            persistence_type: analysis.model.type_name.clone(),
            mapper_type: naming.mapper_type(domain),
            collection: analysis.model.collection_name.clone(),
            persistence_file: naming.persistence_file(domain).display().to_string(),
            mapper_file: naming.mapper_file(domain).display().to_string(),
            fields: analysis
                .context
                .descriptors
                .iter()
                .map(FieldNode::from_descriptor)
                .collect(),
            columns: analysis
                .model
                .columns
                .iter()
                .map(|c| ColumnRow {
                    name: c.name.clone(),
                    storage_type: c.storage_type.clone(),
                    rust_type: c.field_type(),
                    nullable: c.nullable,
                    primary_key: c.primary_key,
                })
                .collect(),
            mapping: analysis
                .context
                .mapping
                .iter()
                .map(|(ty, columns)| MappingEntry {
                    compound: ty.to_string(),
                    columns: columns.to_vec(),
                })
                .collect(),
            to_domain_returns,
        }
    }
}

/// Analyze `type_path` without rendering or writing anything
pub fn inspect<L, FS>(use_case: &GenerateUseCase<L, FS>, type_path: &str) -> GenResult<InspectReport>
where
    L: TypeLoader,
    FS: FileSystem,
{
    let type_path = TypePath::parse(type_path)?;
    let analysis = use_case.analyze(&type_path)?;
    Ok(InspectReport::from_analysis(
        &analysis,
        &use_case.settings().naming,
    ))
}
