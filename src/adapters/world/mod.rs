//! World registry adapters.

mod in_memory;

pub use in_memory::InMemoryWorldRegistry;
