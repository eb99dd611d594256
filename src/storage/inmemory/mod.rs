//! In-memory storage implementations
//!
//! These implementations are suitable for development and testing.

mod clients;

pub use clients::MemoryClientStore;
