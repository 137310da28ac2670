//! Recipe handlers.

use actix_web::{HttpResponse, web};

use pantry_core::DomainError;
use pantry_core::domain::Recipe;
use pantry_shared::MessageResponse;
use pantry_shared::dto::RecipeRequest;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /recipes
pub async fn create_recipe(
    state: web::Data<AppState>,
    body: web::Json<RecipeRequest>,
) -> AppResult<HttpResponse> {
    let draft = body.into_inner().validate()?;

    let recipe = state.recipes.insert(Recipe::new(draft)).await?;
    tracing::info!(recipe_id = %recipe.id, name = %recipe.name, "Recipe created");

    Ok(HttpResponse::Ok().json(recipe))
}

/// GET /recipes - newest first.
pub async fn list_recipes(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let recipes = state.recipes.list().await?;
    Ok(HttpResponse::Ok().json(recipes))
}

/// GET /recipes/{recipe_id}
pub async fn get_recipe(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let recipe = state
        .recipes
        .find_by_id(&id)
        .await?
        .ok_or_else(|| DomainError::NotFound {
            entity_type: "Recipe",
            id: id.clone(),
        })?;

    Ok(HttpResponse::Ok().json(recipe))
}

/// PUT /recipes/{recipe_id}
///
/// The body is validated before the ID is looked up.
pub async fn update_recipe(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<RecipeRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let draft = body.into_inner().validate()?;

    let recipe = state
        .recipes
        .update(&id, draft, state.published_at_policy)
        .await?;
    tracing::info!(recipe_id = %recipe.id, "Recipe updated");

    Ok(HttpResponse::Ok().json(recipe))
}

/// DELETE /recipes/{recipe_id}
pub async fn delete_recipe(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    state.recipes.delete(&id).await?;
    tracing::info!(recipe_id = %id, "Recipe deleted");

    Ok(HttpResponse::Ok().json(MessageResponse::new("Recipe deleted")))
}
