//! Source tree loader - reads type declarations straight from Rust sources
//!
//! `crate::domain::billing::Invoice` is looked up under the source root by
//! trying, longest module prefix first:
//!
//! - `domain/billing.rs`, `domain/billing/mod.rs`
//! - `domain.rs` / `domain/mod.rs` with an inline `mod billing { .. }`
//! - `lib.rs` / `main.rs` with inline modules
//!
//! The file is parsed with `syn`. Fields come from the struct declaration,
//! methods and the constructor from inherent `impl` blocks in the same
//! module, imports from its `use` items.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use super::syn_types::{last_ident, render_return, render_type};
use crate::domain::entities::{ConstructorShape, MethodShape, TypeShape};
use crate::domain::ports::TypeLoader;
use crate::domain::value_objects::TypePath;
use crate::error::{GenError, GenResult};

const CRATE_ROOT_FILES: &[&str] = &["lib.rs", "main.rs"];

pub struct SourceTreeLoader {
    source_root: PathBuf,
    constructor: String,
}

impl SourceTreeLoader {
    pub fn new(source_root: impl Into<PathBuf>, constructor: impl Into<String>) -> Self {
        Self {
            source_root: source_root.into(),
            constructor: constructor.into(),
        }
    }

    /// Find the file holding `module` and the inline modules left to descend
    fn locate<'m>(&self, module: &'m [String]) -> Option<(PathBuf, &'m [String])> {
        for split in (0..=module.len()).rev() {
            let (files, inline) = module.split_at(split);
            let candidates: Vec<PathBuf> = if files.is_empty() {
                CRATE_ROOT_FILES
                    .iter()
                    .map(|f| self.source_root.join(f))
                    .collect()
            } else {
                let dir: PathBuf = files.iter().collect();
                vec![
                    self.source_root.join(dir.with_extension("rs")),
                    self.source_root.join(&dir).join("mod.rs"),
                ]
            };
            if let Some(found) = candidates.into_iter().find(|p| p.is_file()) {
                return Some((found, inline));
            }
        }
        None
    }

    fn parse(&self, path: &TypePath, file: &Path) -> GenResult<syn::File> {
        let source = std::fs::read_to_string(file).map_err(|e| {
            GenError::reflection(path, format!("cannot read {}: {}", file.display(), e))
        })?;
        syn::parse_file(&source).map_err(|e| {
            GenError::reflection(path, format!("cannot parse {}: {}", file.display(), e))
        })
    }
}

impl TypeLoader for SourceTreeLoader {
    fn load(&self, path: &TypePath) -> GenResult<TypeShape> {
        let module = path.module_below_root();
        let (file, inline) = self.locate(module).ok_or_else(|| {
            GenError::reflection(
                path,
                format!(
                    "no source file for module '{}' under {}",
                    module.join("::"),
                    self.source_root.display()
                ),
            )
        })?;
        debug!(type_path = %path, file = %file.display(), "parsing source file");

        let parsed = self.parse(path, &file)?;
        let mut items: &[syn::Item] = &parsed.items;
        for name in inline {
            items = inline_module(items, name).ok_or_else(|| {
                GenError::reflection(
                    path,
                    format!("module '{}' not found in {}", name, file.display()),
                )
            })?;
        }

        let name = path.short_name();
        let item = find_struct(items, name).ok_or_else(|| {
            GenError::reflection(
                path,
                format!("no struct '{}' declared in {}", name, file.display()),
            )
        })?;

        let mut shape = TypeShape::new(path.to_string());
        for (index, field) in item.fields.iter().enumerate() {
            let field_name = field
                .ident
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| index.to_string());
            shape = shape.with_field(field_name, render_type(&field.ty));
        }

        for block in inherent_impls(items, name) {
            for fn_item in block.items.iter().filter_map(|i| match i {
                syn::ImplItem::Fn(f) => Some(f),
                _ => None,
            }) {
                self.collect_fn(&mut shape, &fn_item.sig);
            }
        }

        shape.imports = collect_imports(items);
        trace!(?shape, "collected type shape");
        Ok(shape)
    }
}

impl SourceTreeLoader {
    fn collect_fn(&self, shape: &mut TypeShape, sig: &syn::Signature) {
        if sig.generics.type_params().next().is_some() {
            return;
        }
        let name = sig.ident.to_string();

        match sig.receiver() {
            Some(receiver) => {
                let by_shared_ref = receiver.reference.is_some() && receiver.mutability.is_none();
                if !by_shared_ref || sig.inputs.len() != 1 {
                    return;
                }
                if let Some(returns) = render_return(&sig.output) {
                    shape.methods.push(MethodShape { name, returns });
                }
            }
            None if name == self.constructor && shape.constructor.is_none() => {
                let mut ctor = ConstructorShape::new(name);
                for (index, input) in sig.inputs.iter().enumerate() {
                    if let syn::FnArg::Typed(arg) = input {
                        let param = match arg.pat.as_ref() {
                            syn::Pat::Ident(ident) => ident.ident.to_string(),
                            _ => format!("arg{}", index),
                        };
                        ctor = ctor.with_param(param, render_type(&arg.ty));
                    }
                }
                if let Some(returns) = render_return(&sig.output) {
                    ctor = ctor.returning(returns);
                }
                shape.constructor = Some(ctor);
            }
            None => {}
        }
    }
}

fn inline_module<'a>(items: &'a [syn::Item], name: &str) -> Option<&'a [syn::Item]> {
    items.iter().find_map(|item| match item {
        syn::Item::Mod(m) if m.ident == name => m.content.as_ref().map(|(_, i)| i.as_slice()),
        _ => None,
    })
}

fn find_struct<'a>(items: &'a [syn::Item], name: &str) -> Option<&'a syn::ItemStruct> {
    items.iter().find_map(|item| match item {
        syn::Item::Struct(s) if s.ident == name => Some(s),
        _ => None,
    })
}

fn inherent_impls<'a>(
    items: &'a [syn::Item],
    name: &'a str,
) -> impl Iterator<Item = &'a syn::ItemImpl> + 'a {
    items.iter().filter_map(move |item| match item {
        syn::Item::Impl(block)
            if block.trait_.is_none() && last_ident(&block.self_ty).as_deref() == Some(name) =>
        {
            Some(block)
        }
        _ => None,
    })
}

/// Flatten `use` items into alias -> path as written
fn collect_imports(items: &[syn::Item]) -> BTreeMap<String, String> {
    let mut imports = BTreeMap::new();
    for item in items {
        if let syn::Item::Use(item_use) = item {
            flatten_use(&item_use.tree, &mut Vec::new(), &mut imports);
        }
    }
    imports
}

fn flatten_use(tree: &syn::UseTree, prefix: &mut Vec<String>, out: &mut BTreeMap<String, String>) {
    match tree {
        syn::UseTree::Path(path) => {
            prefix.push(path.ident.to_string());
            flatten_use(&path.tree, prefix, out);
            prefix.pop();
        }
        syn::UseTree::Name(name) => {
            let ident = name.ident.to_string();
            if ident == "self" {
                if let Some(last) = prefix.last() {
                    out.insert(last.clone(), prefix.join("::"));
                }
            } else {
                out.insert(ident.clone(), join(prefix, &ident));
            }
        }
        syn::UseTree::Rename(rename) => {
            let target = rename.ident.to_string();
            let full = if target == "self" {
                prefix.join("::")
            } else {
                join(prefix, &target)
            };
            if !full.is_empty() {
                out.insert(rename.rename.to_string(), full);
            }
        }
        syn::UseTree::Group(group) => {
            for tree in &group.items {
                flatten_use(tree, prefix, out);
            }
        }
        syn::UseTree::Glob(_) => {}
    }
}

fn join(prefix: &[String], name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}::{}", prefix.join("::"), name)
    }
}
