use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("Spam detected. Please try again.")]
    Spam,

    #[error("Please fill in all required fields.")]
    MissingFields,

    #[error("Contact form is not configured. Please use direct contact methods.")]
    NotConfigured,

    #[error("Form relay rejected the message (status {status})")]
    Rejected { status: u16 },

    #[error("Form relay unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ContactError {
    /// Text shown to the visitor. Relay failures share one message so upstream
    /// details never reach the page.
    pub fn user_message(&self) -> String {
        match self {
            ContactError::Rejected { .. } | ContactError::Transport(_) => {
                "Failed to send message. Please try again or use direct contact methods."
                    .to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ContactError::Spam | ContactError::MissingFields => StatusCode::BAD_REQUEST,
            ContactError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            ContactError::Rejected { .. } | ContactError::Transport(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

/// What the visitor typed, plus the hidden decoy field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Hidden from people; anything here came from a bot.
    pub honeypot: String,
}

/// The three visible fields. This is both the relay payload and the form
/// state echoed back to the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Spam check first, then required fields. Values are relayed as typed.
    pub fn check(&self) -> Result<ContactFields, ContactError> {
        if !self.honeypot.is_empty() {
            return Err(ContactError::Spam);
        }

        if [&self.name, &self.email, &self.message]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(ContactError::MissingFields);
        }

        Ok(self.fields())
    }

    pub fn fields(&self) -> ContactFields {
        ContactFields {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            message: "Hello there".to_string(),
            honeypot: String::new(),
        }
    }

    #[test]
    fn test_valid_submission_yields_visible_fields() {
        let fields = submission().check().unwrap();
        assert_eq!(fields.name, "Sam");
        assert_eq!(fields.email, "sam@example.com");
        assert_eq!(fields.message, "Hello there");
    }

    #[test]
    fn test_honeypot_rejected_as_spam() {
        let spam = ContactSubmission {
            honeypot: "http://cheap-pills.example".to_string(),
            ..submission()
        };
        assert!(matches!(spam.check(), Err(ContactError::Spam)));
    }

    #[test]
    fn test_honeypot_checked_before_required_fields() {
        let spam = ContactSubmission {
            honeypot: "x".to_string(),
            ..ContactSubmission::default()
        };
        assert!(matches!(spam.check(), Err(ContactError::Spam)));
    }

    #[test]
    fn test_blank_fields_rejected() {
        for blank in ["", "   "] {
            let missing = ContactSubmission {
                message: blank.to_string(),
                ..submission()
            };
            assert!(matches!(missing.check(), Err(ContactError::MissingFields)));
        }
    }

    #[test]
    fn test_missing_keys_default_to_empty() {
        let parsed: ContactSubmission = serde_json::from_str(r#"{"name": "Sam"}"#).unwrap();
        assert_eq!(parsed.email, "");
        assert_eq!(parsed.honeypot, "");
    }

    #[test]
    fn test_payload_excludes_honeypot() {
        let value = serde_json::to_value(submission().check().unwrap()).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 3);
        assert!(!keys.contains(&"honeypot".to_string()));
    }

    #[test]
    fn test_relay_failures_share_user_message() {
        let rejected = ContactError::Rejected { status: 500 };
        assert_eq!(
            rejected.user_message(),
            "Failed to send message. Please try again or use direct contact methods."
        );
        assert_eq!(rejected.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(ContactError::Spam.status_code(), StatusCode::BAD_REQUEST);
    }
}
