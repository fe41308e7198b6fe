//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate ordering and filtering into the contact pipeline.
//! - Keep the CLI layer free of sorting/partitioning details.

pub mod pipeline;
pub mod scenario;
