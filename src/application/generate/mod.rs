//! Generate Module
//!
//! Orchestrates one generation run for a domain type.
//!
//! ## Structure
//!
//! - `options` - Run configuration (`GenerateOptions`, `GenerateMode`)
//! - `result` - Result types (`Analysis`, `GenerateResult`)
//! - `use_case` - Core use case logic (`GenerateUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use persistgen::application::generate::{GenerateOptions, GenerateUseCase};
//!
//! let use_case = GenerateUseCase::new(extractor, LocalFs::new(), settings);
//! let result = use_case.execute(&GenerateOptions::new("crate::domain::Invoice"))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::{GenerateMode, GenerateOptions};
pub use result::{Analysis, GenerateResult};
pub use use_case::{GenerateUseCase, GenerationSettings};
