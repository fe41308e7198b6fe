//! Contact classification predicates.
//!
//! # Invariants
//! - Predicates are pure functions of one contact.
//! - Work contacts never match any predicate defined here.
//! - Substring tests are case-sensitive and operate on whole `char`s.

use crate::model::contact::Contact;
use std::fmt::{Display, Formatter};

/// Boolean test used to split one contact collection into two.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContactFilter {
    /// Personal contact whose name contains the needle.
    PersonalNameContains(String),
    /// Personal contact whose email contains the needle.
    PersonalEmailContains(String),
}

impl ContactFilter {
    pub fn personal_name_contains(needle: impl Into<String>) -> Self {
        Self::PersonalNameContains(needle.into())
    }

    pub fn personal_email_contains(needle: impl Into<String>) -> Self {
        Self::PersonalEmailContains(needle.into())
    }

    /// Returns whether `contact` satisfies this predicate.
    pub fn matches(&self, contact: &Contact) -> bool {
        if !contact.is_personal() {
            return false;
        }

        match self {
            Self::PersonalNameContains(needle) => contact.name().contains(needle.as_str()),
            Self::PersonalEmailContains(needle) => contact
                .email()
                .is_some_and(|email| email.contains(needle.as_str())),
        }
    }
}

impl Display for ContactFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PersonalNameContains(needle) => {
                write!(f, "personal contacts with name containing '{needle}'")
            }
            Self::PersonalEmailContains(needle) => {
                write!(f, "personal contacts with email containing '{needle}'")
            }
        }
    }
}
