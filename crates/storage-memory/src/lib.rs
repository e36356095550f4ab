//! In-memory storage implementation for Deedflow.
//!
//! Implements the repository traits defined in `deedflow-core` on top of a
//! shared [`MemoryStore`]. Every table sits behind its own `RwLock`; listing a
//! property appends the row and its history under a single write lock.
//!
//! ```text
//!        core (domain + traits)
//!                  │
//!                  ▼
//!     storage-memory (this crate)
//!                  │
//!                  ▼
//!      MemoryStore (process lifetime)
//! ```

pub mod markets;
pub mod portfolio;
pub mod properties;
pub mod seed;
pub mod store;
pub mod users;

pub use store::MemoryStore;

// Re-export from deedflow-core for convenience
pub use deedflow_core::errors::{Error, Result};
