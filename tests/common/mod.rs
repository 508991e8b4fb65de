//! Common test utilities for persistgen integration, contract and golden tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project in a temp directory plus CLI runner
//! - Assertion macros: `assert_generated!`, `assert_not_generated!`, `assert_parses!`
//! - Fixtures: Domain sources and schema files
//! - `SchemaType`: In-process analysis against generated schema files

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;
pub mod schema;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
pub use schema::*;
