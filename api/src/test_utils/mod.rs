//! Test utilities
//!
//! Doubles for the port traits and fixtures for unit and handler tests.
//!
//! Async repositories get hand-written doubles over `sandbox_doubles::Double`;
//! the synchronous collaborator ports use `test_double!`. `GreetingService`
//! also has a mockall mock (`MockGreetingService`) generated next to the trait.

pub mod doubles;
pub mod fixtures;

pub use doubles::*;
pub use fixtures::*;
