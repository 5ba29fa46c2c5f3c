//! Book list state for the guarded application view.

#[cfg(test)]
#[path = "books_test.rs"]
mod books_test;

use crate::net::api::Book;

/// Shared book-list state, populated by the `/books` fetch on the books
/// page and provided as an `RwSignal` context at mount.
#[derive(Clone, Debug, Default)]
pub struct BooksState {
    pub items: Vec<Book>,
    pub loading: bool,
    pub error: Option<String>,
}
