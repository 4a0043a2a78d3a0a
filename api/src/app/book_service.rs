//! Book service
//!
//! A fixed, in-process catalogue of books.

use crate::domain::entities::Book;
use crate::error::DomainError;

pub struct BookService {
    books: Vec<Book>,
}

impl BookService {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    pub fn find_all(&self) -> &[Book] {
        &self.books
    }

    pub fn find_one(&self, id: i64) -> Result<&Book, DomainError> {
        self.books
            .iter()
            .find(|book| book.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("Book {} not found", id)))
    }
}

impl Default for BookService {
    /// The three books the catalogue starts with
    fn default() -> Self {
        Self::new(vec![
            book(
                1,
                "97 Things Every Java Programmer Should Know",
                "Kevlin Henney, Trisha Gee",
                "OReilly Media, Inc.",
                "May 2020",
                "9781491952696",
                "Java",
            ),
            book(
                2,
                "Spring Boot: Up and Running",
                "Mark Heckler",
                "OReilly Media, Inc.",
                "February 2021",
                "9781492076919",
                "Spring",
            ),
            book(
                3,
                "Hacking with Spring Boot 2.3: Reactive Edition",
                "Greg L. Turnquist",
                "Amazon.com Services LLC",
                "May 2020",
                "B086722L4L",
                "Spring",
            ),
        ])
    }
}

fn book(
    id: i64,
    title: &str,
    author: &str,
    publisher: &str,
    date_created: &str,
    isbn: &str,
    description: &str,
) -> Book {
    Book {
        id,
        title: title.to_string(),
        author: author.to_string(),
        publisher: publisher.to_string(),
        date_created: date_created.to_string(),
        isbn: isbn.to_string(),
        description: description.to_string(),
    }
}
