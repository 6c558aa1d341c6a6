use std::fmt;
use std::sync::LazyLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    name: String,
    active: bool,
    books: Vec<Book>,
}

impl Author {
    pub fn new(name: impl Into<String>, active: bool, books: Vec<Book>) -> Self {
        Self {
            name: name.into(),
            active,
            books,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn active(&self) -> bool {
        self.active
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.active { "Active" } else { "Inactive" };
        write!(f, "{}\t| {status}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    name: String,
    /// Price in minor units.
    price: u32,
    published: bool,
}

impl Book {
    pub fn new(name: impl Into<String>, price: u32, published: bool) -> Self {
        Self {
            name: name.into(),
            price,
            published,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> u32 {
        self.price
    }

    pub fn published(&self) -> bool {
        self.published
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.published {
            "Published"
        } else {
            "Unpublished"
        };
        // the middle column is intentionally left empty
        write!(f, "{}\t| \t| ${}\t| {status}", self.name(), self.price())
    }
}

pub static ALL_AUTHORS: LazyLock<Vec<Author>> = LazyLock::new(|| {
    vec![
        Author::new(
            "Author A",
            true,
            vec![
                Book::new("A1", 100, true),
                Book::new("A2", 200, true),
                Book::new("A3", 220, true),
            ],
        ),
        Author::new(
            "Author B",
            true,
            vec![
                Book::new("B1", 80, true),
                Book::new("B2", 80, false),
                Book::new("B3", 190, true),
                Book::new("B4", 210, true),
            ],
        ),
        Author::new(
            "Author C",
            true,
            vec![
                Book::new("C1", 110, true),
                Book::new("C2", 120, false),
                Book::new("C3", 130, true),
            ],
        ),
        Author::new(
            "Author D",
            false,
            vec![Book::new("D1", 200, true), Book::new("D2", 300, false)],
        ),
        Author::new("Author X", true, vec![]),
    ]
});

/// The seed library. Every call hands out the same read-only slice.
pub fn authors() -> &'static [Author] {
    &ALL_AUTHORS
}
