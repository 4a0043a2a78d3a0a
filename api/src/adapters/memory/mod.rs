//! In-process adapters
//!
//! Used when the server runs without external services.

pub mod data_service;
pub mod user_repo;

pub use data_service::FixedDataService;
pub use user_repo::InMemoryUserRepository;
