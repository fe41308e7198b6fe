//! Core domain logic for the contact book.
//! Owns the contact model, ordering strategies, filters and the pipeline.

pub mod dataset;
pub mod filter;
pub mod logging;
pub mod model;
pub mod ordering;
pub mod service;

pub use dataset::{builtin_contacts, load_contacts, parse_contacts, DatasetError, DatasetResult};
pub use filter::partition::move_matching;
pub use filter::predicate::ContactFilter;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::contact::{Contact, ContactDetails, ContactKind, UNKNOWN_FIELD};
pub use ordering::strategy::{ContactOrdering, SortDirection};
pub use service::pipeline::{
    ContactPipeline, PipelineConfig, PipelineReport, ReportSection, SectionTitles,
};
pub use service::scenario::{Scenario, ScenarioParseError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
