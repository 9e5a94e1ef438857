use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::content::ContentSource;

const DEFAULT_SITE_URL: &str = "http://localhost:3000";

/// Application configuration loaded from environment variables.
/// Every variable has a default; only malformed values are rejected.
#[derive(Debug, Clone)]
pub struct Config {
    /// Public origin used in the sitemap, robots.txt, JSON-LD and OG links.
    pub site_url: String,
    /// Overrides the bundled resume.json when set.
    pub content_path: Option<PathBuf>,
    /// Form-relay endpoint the contact form posts to. Unset disables the form.
    pub contact_endpoint: Option<String>,
    pub contact_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            site_url: normalize_site_url(
                &std::env::var("SITE_URL").unwrap_or_else(|_| DEFAULT_SITE_URL.to_string()),
            ),
            content_path: optional_env("CONTENT_PATH").map(PathBuf::from),
            contact_endpoint: optional_env("CONTACT_ENDPOINT"),
            contact_timeout_secs: std::env::var("CONTACT_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse::<u64>()
                .context("CONTACT_TIMEOUT_SECS must be a whole number of seconds")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn content_source(&self) -> ContentSource {
        match &self.content_path {
            Some(path) => ContentSource::File(path.clone()),
            None => ContentSource::Embedded,
        }
    }
}

/// Treats unset and blank variables alike.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn normalize_site_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_SITE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
impl Config {
    pub(crate) fn for_tests() -> Self {
        Config {
            site_url: "https://alex.example".to_string(),
            content_path: None,
            contact_endpoint: None,
            contact_timeout_secs: 5,
            port: 0,
            rust_log: "debug".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_url_trailing_slash_trimmed() {
        assert_eq!(normalize_site_url("https://alex.example/"), "https://alex.example");
        assert_eq!(normalize_site_url("https://alex.example//"), "https://alex.example");
    }

    #[test]
    fn test_blank_site_url_falls_back() {
        assert_eq!(normalize_site_url("   "), DEFAULT_SITE_URL);
    }

    #[test]
    fn test_content_source_defaults_to_embedded() {
        let config = Config::for_tests();
        assert!(matches!(config.content_source(), ContentSource::Embedded));

        let config = Config {
            content_path: Some(PathBuf::from("/srv/resume.json")),
            ..Config::for_tests()
        };
        assert!(matches!(config.content_source(), ContentSource::File(_)));
    }
}
