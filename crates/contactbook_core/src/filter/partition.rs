//! Stable move-partition between the main and secondary collections.
//!
//! # Invariants
//! - Every record ends up in exactly one of the two collections.
//! - Both collections keep the relative order the records had before.
//! - Records are moved, never cloned.

use crate::filter::predicate::ContactFilter;
use crate::model::contact::Contact;
use std::collections::VecDeque;

/// Moves every contact matching `filter` out of `contacts`.
///
/// Returns the moved contacts in their original relative order; `contacts`
/// keeps the non-matching ones, also in order.
pub fn move_matching(contacts: &mut Vec<Contact>, filter: &ContactFilter) -> VecDeque<Contact> {
    let (selected, kept): (Vec<_>, Vec<_>) =
        contacts.drain(..).partition(|contact| filter.matches(contact));

    // `drain` leaves the buffer in place; refill it instead of replacing it.
    contacts.extend(kept);
    VecDeque::from(selected)
}
