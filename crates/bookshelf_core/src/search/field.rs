//! Searchable record fields.
//!
//! # Invariants
//! - Only `title`, `author` and `year` are searchable; any other name is an
//!   input error rather than an empty match.
//! - Matching compares the full string form of the field, case-insensitively.

use crate::input::InputError;
use crate::model::book::Book;
use std::borrow::Cow;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Record field a search compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    Title,
    Author,
    Year,
}

impl SearchField {
    /// Every searchable field, in menu order.
    pub const ALL: [SearchField; 3] = [Self::Title, Self::Author, Self::Year];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Year => "year",
        }
    }

    /// Returns the string form of this field on `book`.
    pub fn value_of(self, book: &Book) -> Cow<'_, str> {
        match self {
            Self::Title => Cow::Borrowed(book.title.as_str()),
            Self::Author => Cow::Borrowed(book.author.as_str()),
            Self::Year => Cow::Owned(book.year.to_string()),
        }
    }

    /// Whether `book`'s field equals `query`, ignoring case.
    pub fn matches(self, book: &Book, query: &str) -> bool {
        self.value_of(book).to_lowercase() == query.to_lowercase()
    }
}

impl Display for SearchField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for SearchField {
    type Err = InputError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == trimmed)
            .ok_or_else(|| InputError::UnknownSearchField(trimmed.to_string()))
    }
}
