//! Application Layer
//!
//! Use cases that orchestrate the generation flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain flattening rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `GenerateUseCase` - extract, classify, build, plan, render, commit
//! - `inspect` - the analysis half of a run, reported instead of rendered

pub mod generate;
pub mod inspect;

pub use generate::{
    Analysis, GenerateMode, GenerateOptions, GenerateResult, GenerateUseCase, GenerationSettings,
};
pub use inspect::{inspect, InspectReport};
