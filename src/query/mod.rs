//! Lazy views over a library.
//!
//! Every query borrows the authors and yields rendered lines on demand. Nothing
//! is collected in between; calling a query again starts a fresh traversal.
//! The filters and projections are parameters, so callers can pass either the
//! named functions from [`predicates`] or inline closures.

use std::iter;

use crate::datamodel::{Author, Book};

pub mod predicates;

pub fn all_authors(authors: &[Author]) -> impl Iterator<Item = String> {
    authors.iter().map(Author::to_string)
}

pub fn active_authors<P>(authors: &[Author], is_active: P) -> impl Iterator<Item = String>
where
    P: Fn(&Author) -> bool,
{
    authors
        .iter()
        .filter(move |&author| is_active(author))
        .map(Author::to_string)
}

/// Published books of every author, inactive authors included.
pub fn published_books<P>(authors: &[Author], is_published: P) -> impl Iterator<Item = String>
where
    P: Fn(&Book) -> bool + Copy,
{
    authors
        .iter()
        .flat_map(move |author| {
            author
                .books()
                .iter()
                .filter(move |&book| is_published(book))
        })
        .map(Book::to_string)
}

/// Mean price over every book of every author, as a single line.
///
/// Yields nothing when the library holds no books at all.
pub fn average_price<'a, B, I, F>(
    authors: &'a [Author],
    books_of: B,
    price_of: F,
) -> impl Iterator<Item = String>
where
    B: Fn(&'a Author) -> I,
    I: IntoIterator<Item = &'a Book>,
    F: Fn(&Book) -> f64,
{
    iter::once_with(move || mean(authors.iter().flat_map(books_of).map(price_of)))
        .flatten()
        .map(|average| average.to_string())
}

pub fn active_authors_with_published_book<A, H>(
    authors: &[Author],
    is_active: A,
    has_published_book: H,
) -> impl Iterator<Item = String>
where
    A: Fn(&Author) -> bool,
    H: Fn(&Author) -> bool,
{
    authors
        .iter()
        .filter(move |&author| is_active(author))
        .filter(move |&author| has_published_book(author))
        .map(Author::to_string)
}

/// Arithmetic mean in one pass, keeping a running sum and count.
pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0_f64, 0_u64), |(sum, count), value| (sum + value, count + 1));
    (count > 0).then(|| sum / count as f64)
}
