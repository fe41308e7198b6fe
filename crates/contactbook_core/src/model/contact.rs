//! Contact domain model.
//!
//! # Responsibility
//! - Define the closed set of contact variants sharing one base record.
//! - Render the stable one-line display text used by every report section.
//!
//! # Invariants
//! - Every contact belongs to exactly one variant (`ContactKind`).
//! - Field values never change after construction; only read accessors exist.
//! - Unset fields hold the literal [`UNKNOWN_FIELD`].
//! - Display text is base fields followed by variant fields, in fixed order.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Placeholder stored in any field the caller did not provide.
pub const UNKNOWN_FIELD: &str = "Unknown";

fn unknown_field() -> String {
    UNKNOWN_FIELD.to_string()
}

/// Variant tag of a contact, without the variant payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    /// Colleague or business partner.
    Work,
    /// Friend or family member.
    Personal,
}

impl ContactKind {
    /// Stable lowercase id, matching the serialized `kind` tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Personal => "personal",
        }
    }
}

/// Variant-specific payload of a contact.
///
/// Serialized inline next to the base fields, discriminated by `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContactDetails {
    /// Fields meaningful only for work contacts.
    Work {
        #[serde(default = "unknown_field")]
        position: String,
        #[serde(default = "unknown_field")]
        company: String,
    },
    /// Fields meaningful only for personal contacts.
    Personal {
        /// Free-form date text; compared lexicographically, never parsed.
        #[serde(default = "unknown_field")]
        birth_date: String,
        #[serde(default = "unknown_field")]
        email: String,
    },
}

impl ContactDetails {
    /// Returns the variant tag of this payload.
    pub fn kind(&self) -> ContactKind {
        match self {
            Self::Work { .. } => ContactKind::Work,
            Self::Personal { .. } => ContactKind::Personal,
        }
    }
}

/// One contact record: shared base fields plus one variant payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default = "unknown_field")]
    name: String,
    #[serde(default = "unknown_field")]
    phone: String,
    #[serde(default = "unknown_field")]
    address: String,
    #[serde(flatten)]
    details: ContactDetails,
}

impl Contact {
    /// Creates a work contact from its full field set.
    pub fn work(
        name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
        position: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            address: address.into(),
            details: ContactDetails::Work {
                position: position.into(),
                company: company.into(),
            },
        }
    }

    /// Creates a personal contact from its full field set.
    pub fn personal(
        name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
        birth_date: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            address: address.into(),
            details: ContactDetails::Personal {
                birth_date: birth_date.into(),
                email: email.into(),
            },
        }
    }

    /// Creates a work contact with every field set to [`UNKNOWN_FIELD`].
    pub fn unknown_work() -> Self {
        Self::work(
            UNKNOWN_FIELD,
            UNKNOWN_FIELD,
            UNKNOWN_FIELD,
            UNKNOWN_FIELD,
            UNKNOWN_FIELD,
        )
    }

    /// Creates a personal contact with every field set to [`UNKNOWN_FIELD`].
    pub fn unknown_personal() -> Self {
        Self::personal(
            UNKNOWN_FIELD,
            UNKNOWN_FIELD,
            UNKNOWN_FIELD,
            UNKNOWN_FIELD,
            UNKNOWN_FIELD,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn kind(&self) -> ContactKind {
        self.details.kind()
    }

    pub fn details(&self) -> &ContactDetails {
        &self.details
    }

    pub fn is_work(&self) -> bool {
        self.kind() == ContactKind::Work
    }

    pub fn is_personal(&self) -> bool {
        self.kind() == ContactKind::Personal
    }

    /// Job title. `None` for personal contacts.
    pub fn position(&self) -> Option<&str> {
        match &self.details {
            ContactDetails::Work { position, .. } => Some(position),
            ContactDetails::Personal { .. } => None,
        }
    }

    /// Employer. `None` for personal contacts.
    pub fn company(&self) -> Option<&str> {
        match &self.details {
            ContactDetails::Work { company, .. } => Some(company),
            ContactDetails::Personal { .. } => None,
        }
    }

    /// Birth date text. `None` for work contacts.
    pub fn birth_date(&self) -> Option<&str> {
        match &self.details {
            ContactDetails::Personal { birth_date, .. } => Some(birth_date),
            ContactDetails::Work { .. } => None,
        }
    }

    /// Email address. `None` for work contacts.
    pub fn email(&self) -> Option<&str> {
        match &self.details {
            ContactDetails::Personal { email, .. } => Some(email),
            ContactDetails::Work { .. } => None,
        }
    }
}

impl Display for Contact {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Name: {}, Phone: {}, Address: {}",
            self.name, self.phone, self.address
        )?;
        match &self.details {
            ContactDetails::Work { position, company } => {
                write!(f, ", Position: {position}, Company: {company}")
            }
            ContactDetails::Personal { birth_date, email } => {
                write!(f, ", BirthDate: {birth_date}, Email: {email}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Contact, ContactKind, UNKNOWN_FIELD};

    #[test]
    fn unknown_constructors_fill_every_field() {
        let work = Contact::unknown_work();
        assert_eq!(work.name(), UNKNOWN_FIELD);
        assert_eq!(work.position(), Some(UNKNOWN_FIELD));
        assert_eq!(work.company(), Some(UNKNOWN_FIELD));

        let personal = Contact::unknown_personal();
        assert_eq!(personal.address(), UNKNOWN_FIELD);
        assert_eq!(personal.birth_date(), Some(UNKNOWN_FIELD));
        assert_eq!(personal.email(), Some(UNKNOWN_FIELD));
    }

    #[test]
    fn variant_accessors_are_none_for_other_variant() {
        let work = Contact::work("Петр", "222", "ул. Мира 5", "Директор", "ООО Ромашка");
        assert_eq!(work.kind(), ContactKind::Work);
        assert_eq!(work.birth_date(), None);
        assert_eq!(work.email(), None);

        let personal = Contact::personal(
            "Иван",
            "111",
            "ул. Ленина 1",
            "1990-01-01",
            "ivan@mail.ru",
        );
        assert_eq!(personal.kind(), ContactKind::Personal);
        assert_eq!(personal.position(), None);
        assert_eq!(personal.company(), None);
    }

    #[test]
    fn kind_ids_match_wire_tags() {
        assert_eq!(ContactKind::Work.as_str(), "work");
        assert_eq!(ContactKind::Personal.as_str(), "personal");
    }
}
