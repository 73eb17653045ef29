//! Book catalog core.
//! Owns the record model, the flat-file store and every catalog operation.

pub mod input;
pub mod logging;
pub mod model;
pub mod search;
pub mod store;

pub use input::{parse_id, parse_title, parse_year, InputError};
pub use logging::{default_log_level, init_logging, LoggingError};
pub use model::book::{Book, BookId, BookStatus, MalformedRecord};
pub use search::field::SearchField;
pub use store::{BookStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
