//! In-memory book catalog bound to one backing file.
//!
//! # Invariants
//! - Ids in the collection are unique.
//! - Collection order is insertion order; nothing is re-sorted.
//! - A mutation whose save fails is rolled back before the error returns.

use super::file::{load_or_create, write_books};
use super::{StoreError, StoreResult};
use crate::model::book::{Book, BookId, BookStatus};
use crate::search::field::SearchField;
use log::{info, warn};
use std::path::{Path, PathBuf};

const TABLE_RULE_WIDTH: usize = 75;

/// Book catalog persisted as a JSON array.
#[derive(Debug)]
pub struct BookStore {
    path: PathBuf,
    books: Vec<Book>,
}

impl BookStore {
    /// Opens the catalog at `path`, creating an empty backing file if needed.
    ///
    /// # Errors
    /// - `MalformedRecord` when a persisted entry lacks a field or has a bad
    ///   value.
    /// - `InvalidDocument` when the file is not a JSON array.
    /// - `DuplicateId` when two persisted entries share an id.
    /// - `Io` when the file cannot be read or created.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();
        let books = load_or_create(&path)?;
        Ok(Self { path, books })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All books in insertion order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Rewrites the backing file from the in-memory collection.
    pub fn save(&self) -> StoreResult<()> {
        write_books(&self.path, &self.books)
    }

    /// Next id: one above the current maximum, or `1` for an empty catalog.
    ///
    /// Recomputed from the collection on every call, so deleting the highest
    /// id lets that id be issued again.
    pub fn generate_id(&self) -> BookId {
        self.books
            .iter()
            .map(|book| book.id)
            .max()
            .map_or(1, |max| max.saturating_add(1))
    }

    /// Appends a new available book and saves.
    pub fn add_book(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
    ) -> StoreResult<&Book> {
        let id = self.generate_id();
        if self.find_by_id(id).is_some() {
            // Only reachable once ids hit `BookId::MAX`.
            return Err(StoreError::DuplicateId(id));
        }

        self.books.push(Book::new(id, title, author, year));
        if let Err(err) = self.save() {
            self.books.pop();
            warn!("event=book_add module=store status=rolled_back id={id}");
            return Err(err);
        }

        info!("event=book_add module=store status=ok id={id}");
        let index = self.books.len() - 1;
        Ok(&self.books[index])
    }

    /// Removes the book with `id` and saves.
    ///
    /// Returns the removed book, or `NotFound` without touching the file.
    pub fn delete_book(&mut self, id: BookId) -> StoreResult<Book> {
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;

        let removed = self.books.remove(index);
        if let Err(err) = self.save() {
            self.books.insert(index, removed);
            warn!("event=book_delete module=store status=rolled_back id={id}");
            return Err(err);
        }

        info!("event=book_delete module=store status=ok id={id}");
        Ok(removed)
    }

    /// Books whose `field` equals `query`, ignoring case, in collection order.
    pub fn search_books(&self, query: &str, field: SearchField) -> Vec<&Book> {
        let hits: Vec<&Book> = self
            .books
            .iter()
            .filter(|book| field.matches(book, query))
            .collect();
        info!(
            "event=book_search module=store status=ok field={} hits={}",
            field,
            hits.len()
        );
        hits
    }

    /// Sets the status of book `id` and saves.
    pub fn update_status(&mut self, id: BookId, status: BookStatus) -> StoreResult<&Book> {
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;

        let previous = std::mem::replace(&mut self.books[index].status, status);
        if let Err(err) = self.save() {
            self.books[index].status = previous;
            warn!("event=book_status module=store status=rolled_back id={id}");
            return Err(err);
        }

        info!(
            "event=book_status module=store status=ok id={id} from={} to={}",
            previous.as_str(),
            status.as_str()
        );
        Ok(&self.books[index])
    }

    pub fn find_by_id(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// Renders `subset` (or the whole catalog) as a fixed-width table.
    ///
    /// Returns `None` when there is nothing to list.
    pub fn list_books(&self, subset: Option<&[&Book]>) -> Option<String> {
        match subset {
            Some(books) => render_table(books.iter().copied()),
            None => render_table(self.books.iter()),
        }
    }

    fn position(&self, id: BookId) -> Option<usize> {
        self.books.iter().position(|book| book.id == id)
    }
}

fn render_table<'a>(books: impl Iterator<Item = &'a Book>) -> Option<String> {
    let mut rows = books.peekable();
    rows.peek()?;

    let mut out = String::new();
    push_row(&mut out, "ID", "Title", "Author", "Year", "Status");
    out.push_str(&"-".repeat(TABLE_RULE_WIDTH));
    out.push('\n');
    for book in rows {
        push_row(
            &mut out,
            &book.id.to_string(),
            &book.title,
            &book.author,
            &book.year.to_string(),
            book.status.as_str(),
        );
    }
    Some(out)
}

fn push_row(out: &mut String, id: &str, title: &str, author: &str, year: &str, status: &str) {
    let line = format!("{id:<5} {title:<30} {author:<20} {year:<6} {status:<10}");
    out.push_str(line.trim_end());
    out.push('\n');
}
