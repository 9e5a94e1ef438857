pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::contact::handlers as contact;
use crate::content::handlers as content;
use crate::errors::AppError;
use crate::render::handlers as pages;
use crate::seo::handlers as seo;
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound("No such page".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::handle_index))
        .route("/health", get(health::health_handler))
        // Crawler-facing
        .route("/sitemap.xml", get(seo::handle_sitemap))
        .route("/robots.txt", get(seo::handle_robots))
        .route("/api/og", get(seo::handle_og_image))
        // Content API
        .route("/api/content", get(content::handle_get_content))
        .route("/api/content/:section", get(content::handle_get_section))
        // Contact form
        .route("/contact", post(contact::handle_contact_form))
        .route("/api/contact", post(contact::handle_contact_json))
        .fallback(not_found)
        .with_state(state)
}
