//! Domain entities - the core business objects.

mod recipe;

pub use recipe::{Chef, PublishedAtPolicy, Recipe, RecipeDraft, unpublished};
