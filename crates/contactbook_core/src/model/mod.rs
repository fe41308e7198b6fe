//! Contact domain model.
//!
//! # Responsibility
//! - Define the canonical contact record and its closed variant set.
//!
//! # Invariants
//! - Variant checks are exhaustive `match`es on `ContactKind`/`ContactDetails`;
//!   there is no runtime downcast and no "unknown variant" case in memory.

pub mod contact;
