//! Trait-based client store abstraction with an in-memory backend.

pub mod inmemory;
pub mod traits;

// Re-export commonly used types and traits
pub use inmemory::MemoryClientStore;
pub use traits::*;
