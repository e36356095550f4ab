//! Deedflow Core - Domain entities, services, and traits.
//!
//! This crate holds the valuation engine and business logic for the property
//! exchange. It is storage-agnostic and defines repository traits that are
//! implemented by the `storage-memory` crate.

pub mod constants;
pub mod errors;
pub mod markets;
pub mod portfolio;
pub mod properties;
pub mod users;
pub mod utils;

// Re-export common types from the portfolio module
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
