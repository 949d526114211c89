//! Page cache implementations.

mod memory;

pub use memory::InMemoryPageCache;
