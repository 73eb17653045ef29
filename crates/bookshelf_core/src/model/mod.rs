//! Catalog domain model.
//!
//! # Responsibility
//! - Define the book record owned by the store.
//! - Own the persisted (JSON object) shape of a single record.
//!
//! # Invariants
//! - Every record is identified by a `BookId` assigned by the store.
//! - Status is a closed two-value set; free text never reaches a record.

pub mod book;
