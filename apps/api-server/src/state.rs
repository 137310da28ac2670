//! Application state - shared across all handlers.

use std::sync::Arc;

use pantry_core::domain::PublishedAtPolicy;
use pantry_core::ports::RecipeRepository;
use pantry_infra::InMemoryRecipeStore;

use crate::config::AppConfig;

/// Shared application state.
///
/// Cloned into every worker; the store itself is shared through the `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub recipes: Arc<dyn RecipeRepository>,
    pub published_at_policy: PublishedAtPolicy,
}

impl AppState {
    /// Build the application state with an empty in-memory store.
    pub fn new(config: &AppConfig) -> Self {
        tracing::info!(
            published_at_policy = %config.published_at_policy,
            "Application state initialized with in-memory recipe store"
        );

        Self::with_repository(
            Arc::new(InMemoryRecipeStore::new()),
            config.published_at_policy,
        )
    }

    pub fn with_repository(
        recipes: Arc<dyn RecipeRepository>,
        published_at_policy: PublishedAtPolicy,
    ) -> Self {
        Self {
            recipes,
            published_at_policy,
        }
    }
}
