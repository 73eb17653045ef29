//! Field-based catalog search.
//!
//! # Responsibility
//! - Map user-facing search field names to explicit record accessors.
//! - Define the case-insensitive equality used by store search.

pub mod field;
