//! # Pantry Core
//!
//! The domain layer of the Pantry recipe service.
//! This crate contains the recipe model and the storage port, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
