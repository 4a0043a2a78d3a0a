//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod memory;
pub mod postgres;

pub use memory::{FixedDataService, InMemoryUserRepository};
pub use postgres::PostgresUserRepository;
