use std::sync::Arc;

use axum::http::StatusCode;
use serde::Serialize;
use tracing::{info, warn};

use crate::contact::form::{ContactError, ContactFields, ContactSubmission};
use crate::contact::relay::ContactRelay;

const SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
}

/// Transient message shown next to the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

/// Result of one submission: what to tell the visitor and what the form
/// should contain afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct ContactOutcome {
    pub notification: Notification,
    /// Cleared after a successful send, otherwise exactly what was submitted.
    pub form: ContactFields,
    #[serde(skip)]
    pub status: StatusCode,
}

impl ContactOutcome {
    fn sent() -> Self {
        Self {
            notification: Notification {
                kind: NotificationKind::Success,
                message: SENT_MESSAGE.to_string(),
            },
            form: ContactFields::default(),
            status: StatusCode::OK,
        }
    }

    fn failed(error: &ContactError, submission: &ContactSubmission) -> Self {
        Self {
            notification: Notification {
                kind: NotificationKind::Error,
                message: error.user_message(),
            },
            form: submission.fields(),
            status: error.status_code(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.notification.kind == NotificationKind::Success
    }
}

/// Runs the submission checks and hands accepted messages to the relay.
#[derive(Clone)]
pub struct ContactService {
    /// `None` when no relay endpoint is configured.
    relay: Option<Arc<dyn ContactRelay>>,
}

impl ContactService {
    pub fn new(relay: Option<Arc<dyn ContactRelay>>) -> Self {
        Self { relay }
    }

    pub fn is_configured(&self) -> bool {
        self.relay.is_some()
    }

    pub async fn submit(&self, submission: &ContactSubmission) -> ContactOutcome {
        match self.try_submit(submission).await {
            Ok(()) => {
                info!("Contact message relayed");
                ContactOutcome::sent()
            }
            Err(e) => {
                match &e {
                    ContactError::Spam => warn!("Contact submission rejected: honeypot filled"),
                    ContactError::MissingFields => info!("Contact submission missing fields"),
                    other => warn!("Contact submission failed: {other}"),
                }
                ContactOutcome::failed(&e, submission)
            }
        }
    }

    async fn try_submit(&self, submission: &ContactSubmission) -> Result<(), ContactError> {
        let fields = submission.check()?;
        let relay = self.relay.as_ref().ok_or(ContactError::NotConfigured)?;
        relay.deliver(&fields).await
    }
}
