use async_trait::async_trait;

use crate::domain::{PublishedAtPolicy, Recipe, RecipeDraft};
use crate::error::RepoError;

/// Recipe repository - the single owner of every stored recipe.
///
/// Implementations must be internally synchronized; callers only ever see clones.
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// All recipes, most recently published first.
    ///
    /// Recipes with equal publish times keep their creation order.
    async fn list(&self) -> Result<Vec<Recipe>, RepoError>;

    /// Find a recipe by its ID.
    async fn find_by_id(&self, id: &str) -> Result<Option<Recipe>, RepoError>;

    /// Store a freshly created recipe under its own ID.
    ///
    /// Fails with [`RepoError::Conflict`] if the ID is already taken.
    async fn insert(&self, recipe: Recipe) -> Result<Recipe, RepoError>;

    /// Replace the recipe stored under `id` with `draft`.
    ///
    /// The existence check and the overwrite are one atomic step.
    async fn update(
        &self,
        id: &str,
        draft: RecipeDraft,
        policy: PublishedAtPolicy,
    ) -> Result<Recipe, RepoError>;

    /// Delete a recipe by its ID.
    async fn delete(&self, id: &str) -> Result<(), RepoError>;

    /// Number of stored recipes.
    async fn count(&self) -> usize;
}
