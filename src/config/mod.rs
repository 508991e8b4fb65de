//! Configuration module for persistgen
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Config file (`--config <path>`, else `persistgen.toml` in the project root)
//! 3. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::ConfigWarning;
pub use types::{
    AccessorsConfig, Config, NamingConfig, OutputConfig, PathsConfig, TypesConfig,
    CONFIG_FILE_NAME,
};
