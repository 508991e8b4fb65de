//! Mapper rendering
//!
//! Turns a [`ConverterPlan`] into a unit struct with `from_domain` and
//! `to_domain` associated functions.

use std::collections::BTreeSet;
use std::fmt::Write;

use super::header;
use super::persistence::field_ident;
use crate::domain::entities::{
    Access, Assignment, ConstructorArg, ConstructorCall, ConverterPlan, DomainReturn, StorageModel,
};
use crate::domain::services::ArtifactNaming;

pub fn render_mapper(plan: &ConverterPlan, model: &StorageModel, naming: &ArtifactNaming) -> String {
    let domain = &model.domain;
    let domain_name = domain.short_name();
    let mapper = naming.mapper_type(domain);
    let persistence = &model.type_name;

    let mut out = header(domain);
    for import in imports(plan, model, naming) {
        let _ = writeln!(out, "use {};", import);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "pub struct {};", mapper);
    let _ = writeln!(out);
    let _ = writeln!(out, "#[allow(clippy::clone_on_copy)]");
    let _ = writeln!(out, "impl {} {{", mapper);

    let _ = writeln!(
        out,
        "    pub fn from_domain(domain: &{}, target: Option<{}>) -> {} {{",
        domain_name, persistence, persistence
    );
    if plan.assignments.is_empty() {
        let _ = writeln!(out, "        target.unwrap_or_default()");
    } else {
        let _ = writeln!(out, "        let mut target = target.unwrap_or_default();");
        for assignment in &plan.assignments {
            let _ = writeln!(out, "        {}", render_assignment(assignment));
        }
        let _ = writeln!(out, "        target");
    }
    let _ = writeln!(out, "    }}");
    let _ = writeln!(out);

    let returns = match plan.returns.fallible_return() {
        Some(ret) => ret.render(domain_name),
        None => domain_name.to_string(),
    };
    let _ = writeln!(out, "    pub fn to_domain(source: &{}) -> {} {{", persistence, returns);
    let call = render_call(&plan.call, "        ");
    match plan.returns {
        DomainReturn::Wrapped(_) => {
            let _ = writeln!(out, "        Ok({})", call);
        }
        DomainReturn::Value | DomainReturn::Constructor(_) => {
            let _ = writeln!(out, "        {}", call);
        }
    }
    let _ = writeln!(out, "    }}");
    out.push_str("}\n");
    out
}

fn imports(plan: &ConverterPlan, model: &StorageModel, naming: &ArtifactNaming) -> BTreeSet<String> {
    let mut imports = BTreeSet::new();
    imports.insert(format!(
        "super::{}::{}",
        naming.file_stem(&model.type_name),
        model.type_name
    ));
    imports.insert(model.domain.to_string());
    for path in plan.call.compound_types() {
        imports.insert(path.to_string());
    }
    if let Some(ret) = plan.returns.fallible_return() {
        for path in ret.imports() {
            imports.insert(path.to_string());
        }
    }
    imports
}

fn render_assignment(assignment: &Assignment) -> String {
    let column = field_ident(&assignment.column);
    let outer = assignment.outer.render("domain");
    match (&assignment.inner, assignment.optional) {
        (None, _) => format!("target.{} = {}.clone();", column, outer),
        (Some(inner), false) => format!("target.{} = {}.clone();", column, inner.render(&outer)),
        (Some(inner), true) => format!(
            "target.{} = {}.as_ref().map(|v| {}.clone());",
            column,
            outer,
            inner.render("v")
        ),
    }
}

fn render_call(call: &ConstructorCall, indent: &str) -> String {
    let name = call.type_path.short_name();
    if call.args.is_empty() {
        return format!("{}::{}()", name, call.constructor);
    }

    let mut out = format!("{}::{}(\n", name, call.constructor);
    for arg in &call.args {
        let _ = writeln!(out, "{}    {},", indent, render_arg(arg));
    }
    out.push_str(indent);
    out.push(')');
    out
}

fn render_arg(arg: &ConstructorArg) -> String {
    match arg {
        ConstructorArg::Column { column } => source_column(column),
        ConstructorArg::Compound { call, optional } => {
            let name = call.type_path.short_name();
            let question = if call.fallible { "?" } else { "" };
            if *optional {
                let column = match call.args.first() {
                    Some(ConstructorArg::Column { column }) => source_column(column),
                    _ => String::new(),
                };
                let transpose = if call.fallible { ".transpose()?" } else { "" };
                format!("{}.map({}::{}){}", column, name, call.constructor, transpose)
            } else {
                let args = call
                    .args
                    .iter()
                    .map(render_arg)
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{}::{}({}){}", name, call.constructor, args, question)
            }
        }
    }
}

fn source_column(column: &str) -> String {
    Access::Field(field_ident(column)).render("source") + ".clone()"
}
