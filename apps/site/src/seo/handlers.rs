//! Axum route handlers for the crawler-facing endpoints.

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};
use chrono::Utc;

use crate::seo::og::{self, OgOverrides};
use crate::seo::{robots, sitemap};
use crate::state::AppState;

/// GET /sitemap.xml
pub async fn handle_sitemap(State(state): State<AppState>) -> impl IntoResponse {
    let body = sitemap::render(&state.config.site_url, Utc::now().date_naive());
    ([(header::CONTENT_TYPE, "application/xml")], body)
}

/// GET /robots.txt
pub async fn handle_robots(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain")],
        robots::render(&state.config.site_url),
    )
}

/// GET /api/og
///
/// Optional `title` and `description` query parameters replace the card text.
pub async fn handle_og_image(
    State(state): State<AppState>,
    Query(overrides): Query<OgOverrides>,
) -> impl IntoResponse {
    let content = state.content.content();
    let svg = og::render_document(&content.name, &content.title, &overrides);
    (
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, "public, max-age=86400"),
        ],
        svg,
    )
}
