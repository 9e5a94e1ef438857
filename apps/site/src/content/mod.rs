// Resume content: the typed document, its shape check, and the provider every
// other module reads from.

pub mod handlers;
pub mod provider;
pub mod schema;
pub mod validator;

pub use provider::{ContentError, ContentProvider, ContentSource};
pub use schema::ResumeContent;
