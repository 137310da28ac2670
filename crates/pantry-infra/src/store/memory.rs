//! In-memory recipe store - lives exactly as long as the process.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use pantry_core::domain::{PublishedAtPolicy, Recipe, RecipeDraft};
use pantry_core::error::RepoError;
use pantry_core::ports::RecipeRepository;

struct StoredRecipe {
    /// Creation order, used to break publish-time ties.
    seq: u64,
    recipe: Recipe,
}

#[derive(Default)]
struct Shelf {
    recipes: HashMap<String, StoredRecipe>,
    next_seq: u64,
}

/// In-memory recipe store using a HashMap behind an async RwLock.
///
/// Reads share the lock, every mutation takes it exclusively.
/// Note: Data is lost on process restart.
pub struct InMemoryRecipeStore {
    shelf: RwLock<Shelf>,
}

impl InMemoryRecipeStore {
    pub fn new() -> Self {
        Self {
            shelf: RwLock::new(Shelf::default()),
        }
    }
}

impl Default for InMemoryRecipeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecipeRepository for InMemoryRecipeStore {
    async fn list(&self) -> Result<Vec<Recipe>, RepoError> {
        let shelf = self.shelf.read().await;

        let mut stored: Vec<&StoredRecipe> = shelf.recipes.values().collect();
        stored.sort_by(|a, b| {
            b.recipe
                .published_at
                .cmp(&a.recipe.published_at)
                .then(a.seq.cmp(&b.seq))
        });

        Ok(stored.into_iter().map(|s| s.recipe.clone()).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Recipe>, RepoError> {
        let shelf = self.shelf.read().await;
        Ok(shelf.recipes.get(id).map(|s| s.recipe.clone()))
    }

    async fn insert(&self, recipe: Recipe) -> Result<Recipe, RepoError> {
        let mut shelf = self.shelf.write().await;

        if shelf.recipes.contains_key(&recipe.id) {
            return Err(RepoError::Conflict(format!(
                "recipe {} already exists",
                recipe.id
            )));
        }

        let seq = shelf.next_seq;
        shelf.next_seq += 1;
        shelf.recipes.insert(
            recipe.id.clone(),
            StoredRecipe {
                seq,
                recipe: recipe.clone(),
            },
        );

        tracing::debug!(recipe_id = %recipe.id, seq, "Recipe stored");
        Ok(recipe)
    }

    async fn update(
        &self,
        id: &str,
        draft: RecipeDraft,
        policy: PublishedAtPolicy,
    ) -> Result<Recipe, RepoError> {
        let mut shelf = self.shelf.write().await;
        let stored = shelf.recipes.get_mut(id).ok_or(RepoError::NotFound)?;

        stored.recipe = stored.recipe.replaced_by(draft, policy);

        tracing::debug!(recipe_id = %id, %policy, "Recipe replaced");
        Ok(stored.recipe.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), RepoError> {
        let mut shelf = self.shelf.write().await;
        shelf.recipes.remove(id).ok_or(RepoError::NotFound)?;

        tracing::debug!(recipe_id = %id, "Recipe removed");
        Ok(())
    }

    async fn count(&self) -> usize {
        self.shelf.read().await.recipes.len()
    }
}
