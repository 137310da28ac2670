//! HTTP handlers and route configuration.

mod health;
mod recipes;

use actix_web::web;

use crate::middleware::error::json_error_handler;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .content_type_required(false)
            .error_handler(json_error_handler),
    )
    .route("/health", web::get().to(health::health_check))
    .service(
        web::scope("/recipes")
            .route("", web::post().to(recipes::create_recipe))
            .route("", web::get().to(recipes::list_recipes))
            .route("/{recipe_id}", web::get().to(recipes::get_recipe))
            .route("/{recipe_id}", web::put().to(recipes::update_recipe))
            .route("/{recipe_id}", web::delete().to(recipes::delete_recipe)),
    );
}
