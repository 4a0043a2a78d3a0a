//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{Book, User};

/// Create a test user with default values
pub fn test_user() -> User {
    User::new(1, "Test User")
}

/// Create a test user with a specific id and name
pub fn test_user_named(id: i64, username: &str) -> User {
    User::new(id, username)
}

/// Create a test book with default values
pub fn test_book(id: i64) -> Book {
    Book {
        id,
        title: format!("Test Book {}", id),
        author: "Test Author".to_string(),
        publisher: "Test Press".to_string(),
        date_created: "January 2024".to_string(),
        isbn: format!("97800000000{:02}", id),
        description: "Testing".to_string(),
    }
}
