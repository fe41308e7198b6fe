//! Contact ordering strategies and stable sorting helpers.

pub mod insertion;
pub mod strategy;
