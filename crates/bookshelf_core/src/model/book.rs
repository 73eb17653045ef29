//! Book record model.
//!
//! # Responsibility
//! - Hold the five catalog fields of one book.
//! - Convert a record to and from its persisted JSON object form.
//!
//! # Invariants
//! - The persisted object carries exactly `id`, `title`, `author`, `year`,
//!   `status`.
//! - Decoding fails when any of those keys is absent; nothing is defaulted on
//!   read.

use crate::input::InputError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Store-assigned identifier of a book.
pub type BookId = u64;

/// Availability of a book.
///
/// Files written by the earlier localized tool use Russian literals; those are
/// accepted on read and rewritten in English on the next save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BookStatus {
    /// On the shelf.
    #[default]
    #[serde(rename = "available", alias = "в наличии")]
    Available,
    /// Lent out.
    #[serde(rename = "checked out", alias = "выдана")]
    CheckedOut,
}

impl BookStatus {
    /// Persisted literal for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::CheckedOut => "checked out",
        }
    }
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for BookStatus {
    type Err = InputError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "available" | "в наличии" => Ok(Self::Available),
            "checked out" | "выдана" => Ok(Self::CheckedOut),
            _ => Err(InputError::UnknownStatus(value.trim().to_string())),
        }
    }
}

/// A persisted object could not be decoded into a [`Book`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRecord {
    pub reason: String,
}

impl Display for MalformedRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "malformed book record: {}", self.reason)
    }
}

impl Error for MalformedRecord {}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    /// Publication year. Not range-checked.
    pub year: i32,
    pub status: BookStatus,
}

impl Book {
    /// Creates an available book.
    pub fn new(id: BookId, title: impl Into<String>, author: impl Into<String>, year: i32) -> Self {
        Self::with_status(id, title, author, year, BookStatus::Available)
    }

    /// Creates a book with an explicit status.
    pub fn with_status(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        status: BookStatus,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            year,
            status,
        }
    }

    /// Returns the persisted JSON object for this book.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    /// Decodes one persisted JSON object.
    ///
    /// # Errors
    /// - Returns [`MalformedRecord`] when a key is missing, has the wrong JSON
    ///   type, or carries an unknown status literal.
    pub fn from_value(value: Value) -> Result<Self, MalformedRecord> {
        serde_json::from_value(value).map_err(|err| MalformedRecord {
            reason: err.to_string(),
        })
    }
}
