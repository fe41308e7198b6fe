//! Contact datasets: the built-in demo list and JSON files.
//!
//! # Responsibility
//! - Provide the fixed five-record dataset in its canonical order.
//! - Load caller-supplied contact lists from JSON.
//!
//! # Invariants
//! - The built-in dataset is 3 personal and 2 work contacts, in fixed order.
//! - Missing string fields in JSON load as `"Unknown"`; unknown `kind` tags
//!   are rejected.

use crate::model::contact::Contact;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type DatasetResult<T> = Result<T, DatasetError>;

/// Dataset loading error.
#[derive(Debug)]
pub enum DatasetError {
    /// File could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Content is not a JSON array of contacts.
    Parse(serde_json::Error),
}

impl Display for DatasetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read dataset `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid contact dataset: {err}"),
        }
    }
}

impl Error for DatasetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Returns the built-in demo contacts in construction order.
pub fn builtin_contacts() -> Vec<Contact> {
    vec![
        Contact::personal(
            "Иван",
            "111",
            "ул. Ленина 1",
            "1990-01-01",
            "ivan@mail.ru",
        ),
        Contact::work("Петр", "222", "ул. Мира 5", "Директор", "ООО Ромашка"),
        Contact::personal(
            "Анна",
            "333",
            "пр. Победы 10",
            "1985-05-15",
            "anna@gmail.com",
        ),
        Contact::work("Ольга", "444", "ул. Центральная 3", "Менеджер", "ООО Код"),
        Contact::personal(
            "Сергей",
            "555",
            "ул. Лесная 7",
            "2000-11-20",
            "sergey@yandex.ru",
        ),
    ]
}

/// Parses a JSON array of contacts.
pub fn parse_contacts(json: &str) -> DatasetResult<Vec<Contact>> {
    Ok(serde_json::from_str(json)?)
}

/// Reads and parses a JSON contact list from `path`.
pub fn load_contacts(path: &Path) -> DatasetResult<Vec<Contact>> {
    let raw = std::fs::read_to_string(path).map_err(|source| {
        warn!("event=dataset_load module=dataset status=error reason=io");
        DatasetError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let contacts = parse_contacts(&raw).inspect_err(|_| {
        warn!("event=dataset_load module=dataset status=error reason=parse");
    })?;

    let work = contacts.iter().filter(|contact| contact.is_work()).count();
    info!(
        "event=dataset_load module=dataset status=ok count={} work={} personal={}",
        contacts.len(),
        work,
        contacts.len() - work
    );
    Ok(contacts)
}
