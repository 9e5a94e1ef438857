use axum::{extract::State, response::Html};
use chrono::Utc;

use crate::errors::AppError;
use crate::render::{page, ContactFormView, PageView};
use crate::state::AppState;

/// Renders the page for `state` with the given contact form state.
pub fn render_page(state: &AppState, contact: ContactFormView) -> Result<Html<String>, AppError> {
    let markup = page(&PageView {
        provider: &state.content,
        site_url: &state.config.site_url,
        today: Utc::now().date_naive(),
        contact,
    })?;
    Ok(Html(markup.into_string()))
}

/// GET /
pub async fn handle_index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let contact = ContactFormView {
        enabled: state.contact.is_configured(),
        ..Default::default()
    };
    render_page(&state, contact)
}
