//! Classification predicates and stable partitioning.
//!
//! # Responsibility
//! - Decide which contacts move into the secondary collection.
//! - Move matches out of the main collection without copying records.

pub mod partition;
pub mod predicate;
