//! Artifact naming and placement
//!
//! Derives where the persistence struct and mapper live and what they are
//! called from the domain type path:
//!
//! ```text
//! crate::domain::billing::Invoice
//!   module  crate::infrastructure::billing::persistence
//!   types   DbInvoice, DbInvoiceMapper
//!   files   src/infrastructure/billing/persistence/db_invoice.rs
//!           src/infrastructure/billing/persistence/db_invoice_mapper.rs
//! ```

use std::path::PathBuf;

use heck::ToSnakeCase;

use crate::domain::value_objects::TypePath;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactNaming {
    pub domain_segment: String,
    pub infrastructure_segment: String,
    pub persistence_segment: String,
    pub type_prefix: String,
    pub mapper_suffix: String,
    pub output_root: PathBuf,
}

impl Default for ArtifactNaming {
    fn default() -> Self {
        Self {
            domain_segment: "domain".to_string(),
            infrastructure_segment: "infrastructure".to_string(),
            persistence_segment: "persistence".to_string(),
            type_prefix: "Db".to_string(),
            mapper_suffix: "Mapper".to_string(),
            output_root: PathBuf::from("src"),
        }
    }
}

impl ArtifactNaming {
    /// Module of both artifacts.
    ///
    /// Every segment equal to the domain segment is replaced; the
    /// persistence segment is appended when non-empty.
    pub fn module(&self, domain: &TypePath) -> Vec<String> {
        let mut module: Vec<String> = domain
            .module()
            .iter()
            .map(|segment| {
                if *segment == self.domain_segment {
                    self.infrastructure_segment.clone()
                } else {
                    segment.clone()
                }
            })
            .collect();
        if !self.persistence_segment.is_empty() {
            module.push(self.persistence_segment.clone());
        }
        module
    }

    pub fn persistence_type(&self, domain: &TypePath) -> String {
        format!("{}{}", self.type_prefix, domain.short_name())
    }

    pub fn mapper_type(&self, domain: &TypePath) -> String {
        format!("{}{}", self.persistence_type(domain), self.mapper_suffix)
    }

    /// Lower-cased short name plus `s`, with no further inflection
    pub fn collection_name(&self, domain: &TypePath) -> String {
        format!("{}s", domain.short_name().to_lowercase())
    }

    /// Rust module name of the file holding `type_name`
    pub fn file_stem(&self, type_name: &str) -> String {
        type_name.to_snake_case()
    }

    pub fn persistence_file(&self, domain: &TypePath) -> PathBuf {
        self.file_for(domain, &self.persistence_type(domain))
    }

    pub fn mapper_file(&self, domain: &TypePath) -> PathBuf {
        self.file_for(domain, &self.mapper_type(domain))
    }

    fn file_for(&self, domain: &TypePath, type_name: &str) -> PathBuf {
        let mut path = self.output_root.clone();
        for segment in self.module(domain).iter().skip(1) {
            path.push(segment);
        }
        path.push(format!("{}.rs", self.file_stem(type_name)));
        path
    }
}
