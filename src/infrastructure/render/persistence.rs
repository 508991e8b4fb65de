//! Persistence struct rendering

use std::fmt::Write;

use super::header;
use crate::domain::entities::StorageModel;
use crate::domain::ports::StorageAttributes;

pub fn render_persistence(model: &StorageModel, attributes: &dyn StorageAttributes) -> String {
    let mut out = header(&model.domain);

    let _ = writeln!(out, "#[derive({})]", attributes.derives().join(", "));
    for line in attributes.table_attributes(model) {
        let _ = writeln!(out, "{}", line);
    }

    if model.columns.is_empty() {
        let _ = writeln!(out, "pub struct {} {{}}", model.type_name);
        return out;
    }

    let _ = writeln!(out, "pub struct {} {{", model.type_name);
    for column in &model.columns {
        for line in attributes.column_attributes(column) {
            let _ = writeln!(out, "    {}", line);
        }
        let _ = writeln!(out, "    pub {}: {},", field_ident(&column.name), column.field_type());
    }
    out.push_str("}\n");
    out
}

/// Column names that are Rust keywords need a raw identifier
pub(crate) fn field_ident(name: &str) -> String {
    if syn::parse_str::<syn::Ident>(name).is_ok() {
        name.to_string()
    } else {
        format!("r#{}", name)
    }
}
