//! Axum route handlers for the contact form.
//!
//! Both endpoints run the same `ContactService::submit`; they differ only in
//! how the outcome is presented.

use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    Form, Json,
};

use crate::contact::{ContactOutcome, ContactSubmission};
use crate::errors::AppError;
use crate::render::handlers::render_page;
use crate::render::ContactFormView;
use crate::state::AppState;

/// POST /api/contact
///
/// JSON in, `ContactOutcome` out. The status code reflects the outcome; the
/// body always carries the notification and the resulting form state.
pub async fn handle_contact_json(
    State(state): State<AppState>,
    Json(submission): Json<ContactSubmission>,
) -> (StatusCode, Json<ContactOutcome>) {
    let outcome = state.contact.submit(&submission).await;
    (outcome.status, Json(outcome))
}

/// POST /contact
///
/// Plain HTML form post. Re-renders the page with the notification and,
/// unless the message was sent, the visitor's input still in place.
pub async fn handle_contact_form(
    State(state): State<AppState>,
    Form(submission): Form<ContactSubmission>,
) -> Result<(StatusCode, Html<String>), AppError> {
    let outcome = state.contact.submit(&submission).await;
    let status = outcome.status;
    let view = ContactFormView {
        notification: Some(outcome.notification),
        fields: outcome.form,
        enabled: state.contact.is_configured(),
    };
    Ok((status, render_page(&state, view)?))
}
