//! Read-only JSON view of the resume document.

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use crate::content::ResumeContent;
use crate::errors::AppError;
use crate::state::AppState;

/// GET /api/content
/// The phone is blank unless `settings.showPhone` is set.
pub async fn handle_get_content(State(state): State<AppState>) -> Json<ResumeContent> {
    Json(state.content.public_content())
}

/// GET /api/content/:section
pub async fn handle_get_section(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> Result<Json<Value>, AppError> {
    Ok(Json(state.content.section_value(&section)?))
}
