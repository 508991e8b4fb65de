//! AccessorStrategy value object - how field accessors are bound
//!
//! - `ReturnType`: the first zero-argument method whose return type matches
//!   the field's declared type, in declaration order
//! - `Name`: a method named exactly like the field with a matching return type

use serde::{Deserialize, Serialize};

/// Accessor binding rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AccessorStrategy {
    /// First method with a matching return type wins
    #[default]
    ReturnType,
    /// Method must also share the field's name
    Name,
}

impl std::fmt::Display for AccessorStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccessorStrategy::ReturnType => write!(f, "return_type"),
            AccessorStrategy::Name => write!(f, "name"),
        }
    }
}
