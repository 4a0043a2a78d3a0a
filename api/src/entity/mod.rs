//! SeaORM entities
//!
//! Table mappings for the PostgreSQL adapters. Domain code works with
//! `crate::domain::entities` and never sees these types.

pub mod users;
