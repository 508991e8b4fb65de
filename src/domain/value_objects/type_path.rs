//! TypePath value object - a fully qualified Rust type reference
//!
//! `crate::domain::billing::Invoice` is split into module segments
//! (`crate`, `domain`, `billing`) and a short name (`Invoice`). The first
//! segment is the crate root; it never maps to a directory.

use std::fmt;

use crate::error::{GenError, GenResult};

/// Fully qualified path of a type, e.g. `crate::domain::billing::Invoice`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypePath {
    segments: Vec<String>,
}

impl TypePath {
    /// Parse a `::`-separated type path
    pub fn parse(input: &str) -> GenResult<Self> {
        let trimmed = input.trim();
        let invalid = |reason: &str| GenError::InvalidTypePath {
            path: input.to_string(),
            reason: reason.to_string(),
        };

        if trimmed.is_empty() {
            return Err(invalid("path is empty"));
        }

        let segments: Vec<String> = trimmed.split("::").map(|s| s.trim().to_string()).collect();
        if let Some(bad) = segments.iter().find(|s| !is_identifier(s)) {
            if bad.is_empty() {
                return Err(invalid("path contains an empty segment"));
            }
            return Err(invalid(&format!("'{}' is not an identifier", bad)));
        }

        Ok(Self { segments })
    }

    /// Build a path from segments that are already known to be identifiers
    pub(crate) fn from_segments(segments: Vec<String>) -> Self {
        debug_assert!(!segments.is_empty());
        Self { segments }
    }

    /// All segments including the short name
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The type's own name (last segment)
    pub fn short_name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// Module segments (everything but the short name)
    pub fn module(&self) -> &[String] {
        &self.segments[..self.segments.len() - 1]
    }

    /// Module segments below the crate root
    pub fn module_below_root(&self) -> &[String] {
        let module = self.module();
        if module.is_empty() {
            module
        } else {
            &module[1..]
        }
    }

    /// A type with `name` living in the same module as `self`
    pub fn sibling(&self, name: &str) -> TypePath {
        let mut segments = self.module().to_vec();
        segments.push(name.to_string());
        Self { segments }
    }

    /// Resolve a possibly relative path (`Name`, `self::Name`, `super::x::Name`,
    /// `crate::x::Name`) written inside the module of `self`.
    pub fn resolve_relative(&self, written: &str) -> GenResult<TypePath> {
        let parsed = TypePath::parse(written)?;
        let first = parsed.segments[0].clone();
        let relative = first == "self" || first == "super";
        if first == "crate" || (parsed.segments.len() > 1 && !relative) {
            return Ok(parsed);
        }

        let mut base: Vec<String> = self.module().to_vec();
        let mut rest = parsed.segments.into_iter().peekable();
        if first == "self" {
            rest.next();
        }
        while rest.peek().map(String::as_str) == Some("super") {
            rest.next();
            if base.len() <= 1 {
                return Err(GenError::InvalidTypePath {
                    path: written.to_string(),
                    reason: format!("'super' escapes the crate root of {}", self),
                });
            }
            base.pop();
        }

        let rest: Vec<String> = rest.collect();
        if rest.is_empty() {
            return Err(GenError::InvalidTypePath {
                path: written.to_string(),
                reason: "path names a module, not a type".to_string(),
            });
        }
        base.extend(rest);
        Ok(Self { segments: base })
    }
}

impl fmt::Display for TypePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("::"))
    }
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}
