//! Named contact ordering strategies.
//!
//! # Responsibility
//! - Provide each comparison policy as a standalone, testable comparator.
//! - Sort contact slices stably with the selected policy.
//!
//! # Invariants
//! - Direction is applied per compared field, never by reversing the result.
//! - Sorting is stable for every strategy.
//! - `VariantAware` is not transitive across mixed variants and is therefore
//!   sorted with [`insertion_sort_by`]; the other strategies are total orders
//!   and use `slice::sort_by`.

use crate::model::contact::{Contact, ContactDetails};
use crate::ordering::insertion::insertion_sort_by;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// Direction applied to every lexicographic field comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Maps an ascending field comparison into this direction.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

/// Comparison policy used to sort contact collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactOrdering {
    /// Same-variant pairs compare by variant fields, mixed pairs by name.
    ///
    /// Work: `company`, then `position`. Personal: `birth_date`.
    VariantAware(SortDirection),
    /// Personal contacts first, then work contacts, each group descending.
    ///
    /// Personal: `birth_date`. Work: `company`, then `position`.
    VariantPartitioned,
    /// `name` only.
    ByName(SortDirection),
}

impl ContactOrdering {
    /// Compares two contacts under this policy.
    pub fn compare(&self, a: &Contact, b: &Contact) -> Ordering {
        match self {
            Self::VariantAware(direction) => compare_variant_aware(a, b, *direction),
            Self::VariantPartitioned => compare_variant_partitioned(a, b),
            Self::ByName(direction) => compare_by_name(a, b, *direction),
        }
    }

    /// Returns whether `compare` is a total order over any input.
    pub fn is_total_order(&self) -> bool {
        !matches!(self, Self::VariantAware(_))
    }

    /// Sorts `contacts` in place, preserving the order of equal elements.
    pub fn sort(&self, contacts: &mut [Contact]) {
        if self.is_total_order() {
            contacts.sort_by(|a, b| self.compare(a, b));
        } else {
            insertion_sort_by(contacts, |a, b| self.compare(a, b));
        }
    }
}

impl Display for ContactOrdering {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VariantAware(direction) => write!(f, "variant_aware:{}", direction.as_str()),
            Self::VariantPartitioned => write!(f, "variant_partitioned:descending"),
            Self::ByName(direction) => write!(f, "by_name:{}", direction.as_str()),
        }
    }
}

/// Variant-aware comparator.
///
/// Falls back to `name` whenever the two contacts are different variants.
pub fn compare_variant_aware(a: &Contact, b: &Contact, direction: SortDirection) -> Ordering {
    match (a.details(), b.details()) {
        (
            ContactDetails::Work {
                position: position_a,
                company: company_a,
            },
            ContactDetails::Work {
                position: position_b,
                company: company_b,
            },
        ) => direction
            .apply(company_a.cmp(company_b))
            .then_with(|| direction.apply(position_a.cmp(position_b))),
        (
            ContactDetails::Personal {
                birth_date: birth_a,
                ..
            },
            ContactDetails::Personal {
                birth_date: birth_b,
                ..
            },
        ) => direction.apply(birth_a.cmp(birth_b)),
        _ => direction.apply(a.name().cmp(b.name())),
    }
}

/// Variant-partitioned comparator: personal before work, fields descending.
pub fn compare_variant_partitioned(a: &Contact, b: &Contact) -> Ordering {
    match (a.details(), b.details()) {
        (
            ContactDetails::Personal {
                birth_date: birth_a,
                ..
            },
            ContactDetails::Personal {
                birth_date: birth_b,
                ..
            },
        ) => birth_b.cmp(birth_a),
        (
            ContactDetails::Work {
                position: position_a,
                company: company_a,
            },
            ContactDetails::Work {
                position: position_b,
                company: company_b,
            },
        ) => company_b
            .cmp(company_a)
            .then_with(|| position_b.cmp(position_a)),
        (ContactDetails::Personal { .. }, ContactDetails::Work { .. }) => Ordering::Less,
        (ContactDetails::Work { .. }, ContactDetails::Personal { .. }) => Ordering::Greater,
    }
}

/// Name-only comparator.
pub fn compare_by_name(a: &Contact, b: &Contact, direction: SortDirection) -> Ordering {
    direction.apply(a.name().cmp(b.name()))
}
