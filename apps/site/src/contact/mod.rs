// Contact form: submission checks, the outbound form-relay client, and the
// handlers behind the JSON and HTML form endpoints.
// Submission failures are answered with a notification and never become an
// `AppError`.

pub mod form;
pub mod handlers;
pub mod relay;
pub mod service;

pub use form::{ContactError, ContactFields, ContactSubmission};
pub use relay::{ContactRelay, HttpRelay};
pub use service::{ContactOutcome, ContactService, Notification, NotificationKind};
