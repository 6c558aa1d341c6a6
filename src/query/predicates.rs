//! Named filters and projections shared by the queries.

use std::slice;

use crate::datamodel::{Author, Book};

pub fn is_active(author: &Author) -> bool {
    author.active()
}

pub fn is_published(book: &Book) -> bool {
    book.published()
}

/// Short-circuits on the first published book.
pub fn has_published_book(author: &Author) -> bool {
    author.books().iter().any(is_published)
}

pub fn books_of(author: &Author) -> slice::Iter<'_, Book> {
    author.books().iter()
}

pub fn price_of(book: &Book) -> f64 {
    f64::from(book.price())
}
