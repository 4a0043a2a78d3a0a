//! Domain entities
//!
//! Plain domain models. These are separate from the SeaORM entities in the
//! `entity` module.

pub mod book;
pub mod product;
pub mod user;

pub use book::Book;
pub use product::{Product, ProductId};
pub use user::{User, UserId};
