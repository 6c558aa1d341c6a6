use std::io::{self, Write};

use tracing::{debug, info};

use crate::datamodel::Author;
use crate::query::{self, predicates};

pub const AUTHORS_INFORMATION: &str = "Authors information";
pub const ACTIVE_AUTHORS: &str = "Active authors";
pub const ACTIVE_AUTHORS_LAMBDA: &str = "Active authors - lambda";
pub const PUBLISHED_BOOKS: &str = "Active books for all authors";
pub const PUBLISHED_BOOKS_LAMBDA: &str = "Active books for all authors - lambda";
pub const AVERAGE_PRICE: &str = "Average price for all books in the library";
pub const AVERAGE_PRICE_LAMBDA: &str = "Average price for all books in the library - lambda";
pub const ACTIVE_WITH_PUBLISHED: &str = "Active authors that have at least one published book";
pub const ACTIVE_WITH_PUBLISHED_LAMBDA: &str =
    "Active authors that have at least one published book - lambda";

/// Section titles in the order [`run`] writes them.
pub const SECTIONS: [&str; 9] = [
    AUTHORS_INFORMATION,
    ACTIVE_AUTHORS,
    ACTIVE_AUTHORS_LAMBDA,
    PUBLISHED_BOOKS,
    PUBLISHED_BOOKS_LAMBDA,
    AVERAGE_PRICE,
    AVERAGE_PRICE_LAMBDA,
    ACTIVE_WITH_PUBLISHED,
    ACTIVE_WITH_PUBLISHED_LAMBDA,
];

/// Writes every demonstration section to `out`.
///
/// Each query is run twice: once through the named functions in
/// [`predicates`], once through inline closures. Both passes write the same
/// bytes.
pub fn run<W: Write>(authors: &[Author], out: &mut W) -> io::Result<()> {
    banner(out, AUTHORS_INFORMATION)?;
    let written = emit(out, query::all_authors(authors))?;
    query::all_authors(authors).try_for_each(|line| writeln!(out, "{line}"))?;
    debug!(section = AUTHORS_INFORMATION, lines = written * 2, "section written");

    let is_active = predicates::is_active;
    section(out, ACTIVE_AUTHORS, query::active_authors(authors, is_active))?;
    section(
        out,
        ACTIVE_AUTHORS_LAMBDA,
        query::active_authors(authors, |author| author.active()),
    )?;

    let is_published = predicates::is_published;
    section(out, PUBLISHED_BOOKS, query::published_books(authors, is_published))?;
    section(
        out,
        PUBLISHED_BOOKS_LAMBDA,
        query::published_books(authors, |book| book.published()),
    )?;

    let books_of = predicates::books_of;
    let price_of = predicates::price_of;
    section(
        out,
        AVERAGE_PRICE,
        query::average_price(authors, books_of, price_of),
    )?;
    section(
        out,
        AVERAGE_PRICE_LAMBDA,
        query::average_price(
            authors,
            |author| author.books(),
            |book| f64::from(book.price()),
        ),
    )?;

    let has_published_book = predicates::has_published_book;
    section(
        out,
        ACTIVE_WITH_PUBLISHED,
        query::active_authors_with_published_book(authors, is_active, has_published_book),
    )?;
    section(
        out,
        ACTIVE_WITH_PUBLISHED_LAMBDA,
        query::active_authors_with_published_book(
            authors,
            |author| author.active(),
            |author| author.books().iter().any(|book| book.published()),
        ),
    )?;

    info!(sections = SECTIONS.len(), "demonstration complete");
    Ok(())
}

fn banner<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "#### {title} ####")
}

fn section<W: Write>(
    out: &mut W,
    title: &str,
    lines: impl Iterator<Item = String>,
) -> io::Result<()> {
    banner(out, title)?;
    let written = emit(out, lines)?;
    debug!(section = title, lines = written, "section written");
    Ok(())
}

fn emit<W: Write>(out: &mut W, lines: impl Iterator<Item = String>) -> io::Result<usize> {
    let mut written = 0;
    for line in lines {
        writeln!(out, "{line}")?;
        written += 1;
    }
    Ok(written)
}
