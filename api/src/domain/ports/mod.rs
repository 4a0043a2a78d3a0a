//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod repositories;
pub mod services;

pub use repositories::UserRepository;
pub use services::{DataService, GreetingService, ListManagement};

#[cfg(test)]
pub use services::MockGreetingService;
