//! # Pantry Infrastructure
//!
//! Concrete implementations of the ports defined in `pantry-core`.

pub mod store;

pub use store::InMemoryRecipeStore;
