//! Backing file read/write.
//!
//! # Invariants
//! - A missing file is created holding an empty array.
//! - Writes replace the whole file; there is no append or partial update.

use super::{StoreError, StoreResult};
use crate::model::book::{Book, BookId};
use log::{error, info};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Instant;

const JSON_INDENT: &[u8] = b"    ";

/// Reads every record from `path`, creating an empty catalog when absent.
pub(super) fn load_or_create(path: &Path) -> StoreResult<Vec<Book>> {
    let started_at = Instant::now();
    info!(
        "event=store_load module=store status=start path={}",
        path.display()
    );

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            write_books(path, &[])?;
            info!(
                "event=store_load module=store status=ok mode=created count=0 duration_ms={}",
                started_at.elapsed().as_millis()
            );
            return Ok(Vec::new());
        }
        Err(err) => return Err(StoreError::io(path, err)),
    };

    match decode_books(path, &text) {
        Ok(books) => {
            info!(
                "event=store_load module=store status=ok mode=existing count={} duration_ms={}",
                books.len(),
                started_at.elapsed().as_millis()
            );
            Ok(books)
        }
        Err(err) => {
            error!(
                "event=store_load module=store status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

/// Overwrites `path` with `books` as an indented JSON array.
pub(super) fn write_books(path: &Path, books: &[Book]) -> StoreResult<()> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
    // Field order on disk follows the `Book` declaration.
    books
        .serialize(&mut serializer)
        .map_err(|err| StoreError::io(path, err.into()))?;
    buf.push(b'\n');

    if let Err(err) = fs::write(path, &buf) {
        error!(
            "event=store_save module=store status=error path={} error={}",
            path.display(),
            err
        );
        return Err(StoreError::io(path, err));
    }

    info!(
        "event=store_save module=store status=ok count={} bytes={}",
        books.len(),
        buf.len()
    );
    Ok(())
}

fn decode_books(path: &Path, text: &str) -> StoreResult<Vec<Book>> {
    let document: Value =
        serde_json::from_str(text).map_err(|err| StoreError::InvalidDocument {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;

    let Value::Array(items) = document else {
        return Err(StoreError::InvalidDocument {
            path: path.to_path_buf(),
            reason: "top-level value must be an array".to_string(),
        });
    };

    let mut seen: HashSet<BookId> = HashSet::with_capacity(items.len());
    let mut books = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let book = Book::from_value(item)
            .map_err(|source| StoreError::MalformedRecord { index, source })?;
        if !seen.insert(book.id) {
            return Err(StoreError::DuplicateId(book.id));
        }
        books.push(book);
    }

    Ok(books)
}
