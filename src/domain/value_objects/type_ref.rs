//! TypeRef value object - the declared type of a field or parameter
//!
//! A `TypeRef` carries the base type as written (with `Option<..>` peeled
//! off), the nullability flag, and whether the base type is a scalar storage
//! value or a compound value type that must be flattened.
//!
//! The free functions in this module normalise type strings so that types
//! coming from `syn` and types written by hand in schema files compare equal.

use std::fmt;

use super::TypePath;

/// Scalar vs compound classification of a base type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeKind {
    /// Stored directly in one column
    Scalar,
    /// A value type that gets flattened; carries its resolved path
    Compound(TypePath),
}

/// Declared type of a field or constructor parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    name: String,
    nullable: bool,
    kind: TypeKind,
}

impl TypeRef {
    /// A non-nullable scalar
    pub fn scalar(name: impl Into<String>) -> Self {
        Self {
            name: normalize_type(&name.into()),
            nullable: false,
            kind: TypeKind::Scalar,
        }
    }

    /// A non-nullable compound type resolved to `path`
    pub fn compound(name: impl Into<String>, path: TypePath) -> Self {
        Self {
            name: normalize_type(&name.into()),
            nullable: false,
            kind: TypeKind::Compound(path),
        }
    }

    /// Same type with the given nullability
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Base type as written, without `Option<..>`
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self.kind, TypeKind::Scalar)
    }

    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }

    /// Resolved path for compound types
    pub fn compound_path(&self) -> Option<&TypePath> {
        match &self.kind {
            TypeKind::Compound(path) => Some(path),
            TypeKind::Scalar => None,
        }
    }

    /// The full declared type, `Option<T>` for nullable types
    pub fn declared(&self) -> String {
        if self.nullable {
            format!("Option<{}>", self.name)
        } else {
            self.name.clone()
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.declared())
    }
}

const OPTION_PREFIXES: &[&str] = &["Option<", "std::option::Option<", "core::option::Option<"];

/// Split a declared type into `(nullable, base)`.
///
/// `Option<String>` yields `(true, "String")`; anything else is returned
/// unchanged with `false`.
pub fn split_optional(declared: &str) -> (bool, String) {
    let normalized = normalize_type(declared);
    for prefix in OPTION_PREFIXES {
        if let Some(rest) = normalized.strip_prefix(prefix) {
            if let Some(inner) = rest.strip_suffix('>') {
                return (true, inner.trim().to_string());
            }
        }
    }
    (false, normalized)
}

/// Collapse whitespace so equal types render equal.
///
/// Spaces are kept only between two identifier characters (`&'a T`,
/// `dyn Trait`) and after commas.
pub fn normalize_type(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;

    for ch in raw.chars() {
        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space {
            if out.chars().last().is_some_and(is_ident_char) && is_ident_char(ch) {
                out.push(' ');
            }
            pending_space = false;
        }
        out.push(ch);
        if ch == ',' {
            out.push(' ');
        }
    }

    out.trim_end().to_string()
}

/// Strip a leading borrow (`&T`, `&'a T`, `&mut T`) from a type string
pub fn strip_reference(ty: &str) -> String {
    let normalized = normalize_type(ty);
    let Some(rest) = normalized.strip_prefix('&') else {
        return normalized;
    };
    let rest = match rest.strip_prefix('\'') {
        Some(lifetime) => lifetime
            .split_once(' ')
            .map(|(_, after)| after)
            .unwrap_or_default(),
        None => rest,
    };
    let rest = rest.strip_prefix("mut ").unwrap_or(rest);
    rest.trim().to_string()
}

/// Drop module qualifiers from every path in a type string:
/// `chrono::DateTime<chrono::Utc>` becomes `DateTime<Utc>`.
pub fn unqualified(ty: &str) -> String {
    map_paths(ty, |path| {
        Some(path.rsplit("::").next().unwrap_or_default().to_string())
    })
}

/// Rewrite every path in a type string through `rewrite`; paths for which it
/// returns `None` are kept as written.
pub fn map_paths(ty: &str, rewrite: impl Fn(&str) -> Option<String>) -> String {
    let normalized = normalize_type(ty);
    let mut out = String::with_capacity(normalized.len());
    let mut token = String::new();

    let flush = |token: &mut String, out: &mut String| {
        if !token.is_empty() {
            match rewrite(token.as_str()) {
                Some(replaced) => out.push_str(&replaced),
                None => out.push_str(token.as_str()),
            }
            token.clear();
        }
    };

    for ch in normalized.chars() {
        if is_ident_char(ch) || ch == ':' {
            token.push(ch);
        } else {
            flush(&mut token, &mut out);
            out.push(ch);
        }
    }
    flush(&mut token, &mut out);
    out
}

/// Split the generic arguments of `Head<A, B<C, D>>` at top-level commas.
///
/// Returns the head and the argument list, or `None` when the type has no
/// generic arguments.
pub fn split_generics(ty: &str) -> Option<(String, Vec<String>)> {
    let normalized = normalize_type(ty);
    let open = normalized.find('<')?;
    let inner = normalized[open + 1..].strip_suffix('>')?;
    let head = normalized[..open].to_string();

    let mut args = Vec::new();
    let mut depth = 0usize;
    let mut current = String::new();
    for ch in inner.chars() {
        match ch {
            '<' | '(' | '[' => {
                depth += 1;
                current.push(ch);
            }
            '>' | ')' | ']' => {
                depth = depth.saturating_sub(1);
                current.push(ch);
            }
            ',' if depth == 0 => {
                args.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    if !current.trim().is_empty() {
        args.push(current.trim().to_string());
    }

    Some((head, args))
}

fn is_ident_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '\''
}
