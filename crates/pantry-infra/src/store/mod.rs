//! Recipe store implementations.

mod memory;

pub use memory::InMemoryRecipeStore;
