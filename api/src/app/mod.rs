//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod book_service;
pub mod data_processor;
pub mod greeting_service;
pub mod list_manager;
pub mod product_catalogue;
pub mod user_service;

pub use book_service::BookService;
pub use data_processor::DataProcessor;
pub use greeting_service::{StaticGreetingService, DEFAULT_GREETING};
pub use list_manager::ListManager;
pub use product_catalogue::ProductCatalogue;
pub use user_service::UserService;
