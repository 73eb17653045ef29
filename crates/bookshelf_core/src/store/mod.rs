//! Flat-file persistence for the book catalog.
//!
//! # Responsibility
//! - Load the catalog from its backing JSON file, creating the file if absent.
//! - Own the in-memory collection and every catalog operation.
//!
//! # Invariants
//! - Memory and backing file agree after every successful mutating call.
//! - Malformed persisted data is rejected at open time, never skipped.

use crate::model::book::{BookId, MalformedRecord};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

mod book_store;
mod file;

pub use book_store::BookStore;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    /// Backing file could not be read, created or written.
    Io { path: PathBuf, source: io::Error },
    /// Backing file is not a JSON array.
    InvalidDocument { path: PathBuf, reason: String },
    /// Array element `index` is not a valid book record.
    MalformedRecord {
        index: usize,
        source: MalformedRecord,
    },
    DuplicateId(BookId),
    NotFound(BookId),
}

impl StoreError {
    /// Whether this error leaves the store unusable.
    ///
    /// Only open-time data errors are fatal; a failed save or a missing id is
    /// reported and the store keeps its last consistent state.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::InvalidDocument { .. } | Self::MalformedRecord { .. } | Self::DuplicateId(_)
        )
    }

    fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "`{}`: {source}", path.display()),
            Self::InvalidDocument { path, reason } => write!(
                f,
                "`{}` is not a valid book catalog: {reason}",
                path.display()
            ),
            Self::MalformedRecord { index, source } => write!(f, "entry #{index}: {source}"),
            Self::DuplicateId(id) => write!(f, "duplicate book id {id}"),
            Self::NotFound(id) => write!(f, "book not found: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::MalformedRecord { source, .. } => Some(source),
            Self::InvalidDocument { .. } => None,
            Self::DuplicateId(_) => None,
            Self::NotFound(_) => None,
        }
    }
}
