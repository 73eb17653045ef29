use bookshelf_core::{Book, BookStatus, InputError};
use serde_json::json;

#[test]
fn book_new_defaults_to_available() {
    let book = Book::new(7, "Dune", "Herbert", 1965);

    assert_eq!(book.id, 7);
    assert_eq!(book.title, "Dune");
    assert_eq!(book.author, "Herbert");
    assert_eq!(book.year, 1965);
    assert_eq!(book.status, BookStatus::Available);
}

#[test]
fn to_value_uses_expected_wire_fields() {
    let book = Book::with_status(1, "Test Title", "Test Author", 2020, BookStatus::CheckedOut);

    assert_eq!(
        book.to_value().unwrap(),
        json!({
            "id": 1,
            "title": "Test Title",
            "author": "Test Author",
            "year": 2020,
            "status": "checked out",
        })
    );
}

#[test]
fn from_value_reads_all_fields() {
    let value = json!({
        "id": 1,
        "title": "Test Title",
        "author": "Test Author",
        "year": 2020,
        "status": "available",
    });

    let book = Book::from_value(value).unwrap();
    assert_eq!(book, Book::new(1, "Test Title", "Test Author", 2020));
}

#[test]
fn from_value_rejects_missing_status() {
    let value = json!({
        "id": 1,
        "title": "Test Title",
        "author": "Test Author",
        "year": 2020,
    });

    let err = Book::from_value(value).unwrap_err();
    assert!(err.reason.contains("status"), "unexpected error: {err}");
}

#[test]
fn from_value_rejects_unknown_status_and_wrong_types() {
    let unknown_status = json!({
        "id": 1, "title": "t", "author": "a", "year": 2020, "status": "lost",
    });
    assert!(Book::from_value(unknown_status).is_err());

    let text_year = json!({
        "id": 1, "title": "t", "author": "a", "year": "2020", "status": "available",
    });
    assert!(Book::from_value(text_year).is_err());
}

#[test]
fn from_value_accepts_legacy_localized_status() {
    let value = json!({
        "id": 3, "title": "t", "author": "a", "year": 1999, "status": "выдана",
    });

    let book = Book::from_value(value).unwrap();
    assert_eq!(book.status, BookStatus::CheckedOut);
    assert_eq!(book.to_value().unwrap()["status"], "checked out");
}

#[test]
fn status_parses_user_text() {
    assert_eq!(" Available ".parse::<BookStatus>().unwrap(), BookStatus::Available);
    assert_eq!("checked out".parse::<BookStatus>().unwrap(), BookStatus::CheckedOut);
    assert_eq!("в наличии".parse::<BookStatus>().unwrap(), BookStatus::Available);
    assert_eq!(
        "gone".parse::<BookStatus>(),
        Err(InputError::UnknownStatus("gone".to_string()))
    );
}
