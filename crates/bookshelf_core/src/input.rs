//! Parsing of raw user text at the interactive boundary.
//!
//! # Responsibility
//! - Turn menu answers into typed values before they reach the store.
//! - Report rejected text as [`InputError`] so the caller can abandon the
//!   current action and keep the loop alive.

use crate::model::book::BookId;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// User-supplied text that does not parse as the expected value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    InvalidId(String),
    InvalidYear(String),
    EmptyTitle,
    UnknownStatus(String),
    UnknownSearchField(String),
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidId(raw) => write!(f, "invalid book id `{raw}`"),
            Self::InvalidYear(raw) => write!(f, "invalid year `{raw}`"),
            Self::EmptyTitle => write!(f, "title cannot be empty"),
            Self::UnknownStatus(raw) => write!(
                f,
                "unknown status `{raw}`; expected `available` or `checked out`"
            ),
            Self::UnknownSearchField(raw) => write!(
                f,
                "unknown search field `{raw}`; expected title|author|year"
            ),
        }
    }
}

impl Error for InputError {}

/// Parses a book id.
pub fn parse_id(raw: &str) -> Result<BookId, InputError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<BookId>()
        .map_err(|_| InputError::InvalidId(trimmed.to_string()))
}

/// Parses a publication year. Any `i32` is accepted.
pub fn parse_year(raw: &str) -> Result<i32, InputError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<i32>()
        .map_err(|_| InputError::InvalidYear(trimmed.to_string()))
}

/// Rejects blank titles. Surrounding whitespace is dropped.
pub fn parse_title(raw: &str) -> Result<String, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::EmptyTitle);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::{parse_id, parse_title, parse_year, InputError};

    #[test]
    fn parse_id_accepts_padded_integers() {
        assert_eq!(parse_id(" 42\n").unwrap(), 42);
    }

    #[test]
    fn parse_id_rejects_negative_and_text() {
        assert_eq!(parse_id("-1"), Err(InputError::InvalidId("-1".to_string())));
        assert_eq!(
            parse_id("abc"),
            Err(InputError::InvalidId("abc".to_string()))
        );
    }

    #[test]
    fn parse_year_allows_negative_years() {
        assert_eq!(parse_year("-500").unwrap(), -500);
        assert!(matches!(parse_year("19x5"), Err(InputError::InvalidYear(_))));
    }

    #[test]
    fn parse_title_rejects_blank_input() {
        assert_eq!(parse_title("   "), Err(InputError::EmptyTitle));
        assert_eq!(parse_title(" Dune ").unwrap(), "Dune");
    }
}
