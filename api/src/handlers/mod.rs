//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod books;
pub mod data;
pub mod greeting;
pub mod lists;
pub mod products;
pub mod users;

pub use books::{get_book, list_books};
pub use data::{processed, report_sum};
pub use greeting::{greeting, hello};
pub use lists::{add_item, item_count, list_size};
pub use products::{list_products, PRODUCTS_CONTENT_TYPE};
pub use users::{get_user, list_users};
