//! Driven persistence adapters.

mod memory;

pub use memory::{MemoryCollection, MemoryStore};
