//! Outbound client for the third-party form-relay service.
//!
//! One POST per submission, JSON body `{name, email, message}`. No retries: a
//! failed send is reported to the visitor, who still has their form filled in.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::contact::form::{ContactError, ContactFields};

/// Delivers a checked submission somewhere a human will read it.
///
/// Carried in `ContactService` as `Arc<dyn ContactRelay>`.
#[async_trait]
pub trait ContactRelay: Send + Sync {
    async fn deliver(&self, fields: &ContactFields) -> Result<(), ContactError>;
}

/// Posts submissions to a Formspree-style JSON endpoint.
#[derive(Clone)]
pub struct HttpRelay {
    client: Client,
    endpoint: String,
}

impl HttpRelay {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ContactError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContactRelay for HttpRelay {
    async fn deliver(&self, fields: &ContactFields) -> Result<(), ContactError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("accept", "application/json")
            .json(fields)
            .send()
            .await
            .map_err(|e| {
                warn!("Form relay request failed: {e}");
                ContactError::Transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Form relay returned {}: {}", status, body);
            return Err(ContactError::Rejected {
                status: status.as_u16(),
            });
        }

        debug!("Form relay accepted message (status {})", status);
        Ok(())
    }
}
