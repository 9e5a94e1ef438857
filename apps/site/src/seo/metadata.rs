//! Page-level `<head>` metadata.
//!
//! Built from the `meta` section when content is available; otherwise a
//! generic fallback so the page head never depends on a successful load.

use crate::content::ResumeContent;
use crate::seo::og::{OG_HEIGHT, OG_WIDTH};

const FALLBACK_TITLE: &str = "Resume Site";
const FALLBACK_DESCRIPTION: &str = "Personal resume website";

#[derive(Debug, Clone, PartialEq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub canonical_url: String,
    /// `None` in the fallback.
    pub author: Option<String>,
    pub og: Option<OpenGraph>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub site_name: String,
    pub image_url: String,
    pub image_alt: String,
    pub image_width: u32,
    pub image_height: u32,
}

impl PageMetadata {
    pub fn resolve(content: Option<&ResumeContent>, site_url: &str) -> Self {
        match content {
            Some(content) => Self::from_content(content, site_url),
            None => Self::fallback(site_url),
        }
    }

    pub fn from_content(content: &ResumeContent, site_url: &str) -> Self {
        let meta = &content.meta;
        PageMetadata {
            title: meta.og_title.clone(),
            description: meta.og_desc.clone(),
            keywords: meta.keywords.clone(),
            canonical_url: site_url.to_string(),
            author: Some(content.name.clone()),
            og: Some(OpenGraph {
                title: meta.og_title.clone(),
                description: meta.og_desc.clone(),
                site_name: format!("{} - Resume Portfolio", content.name),
                image_url: format!("{site_url}/api/og"),
                image_alt: format!("{} - {}", content.name, meta.og_desc),
                image_width: OG_WIDTH,
                image_height: OG_HEIGHT,
            }),
        }
    }

    pub fn fallback(site_url: &str) -> Self {
        PageMetadata {
            title: FALLBACK_TITLE.to_string(),
            description: FALLBACK_DESCRIPTION.to_string(),
            keywords: Vec::new(),
            canonical_url: site_url.to_string(),
            author: None,
            og: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::provider::tests::provider_from;
    use crate::content::provider::tests::sample_document;

    #[test]
    fn test_metadata_from_meta_section() {
        let provider = provider_from(sample_document());
        let meta = PageMetadata::resolve(Some(provider.content()), "https://ada.example");

        assert_eq!(meta.title, "Ada Example — Resume");
        assert_eq!(meta.keywords, vec!["rust"]);
        assert_eq!(meta.author.as_deref(), Some("Ada Example"));
        let og = meta.og.expect("open graph tags");
        assert_eq!(og.image_url, "https://ada.example/api/og");
        assert_eq!(og.site_name, "Ada Example - Resume Portfolio");
        assert_eq!((og.image_width, og.image_height), (1200, 630));
    }

    #[test]
    fn test_missing_content_falls_back() {
        let meta = PageMetadata::resolve(None, "https://ada.example");
        assert_eq!(meta.title, FALLBACK_TITLE);
        assert_eq!(meta.description, FALLBACK_DESCRIPTION);
        assert!(meta.og.is_none());
        assert_eq!(meta.canonical_url, "https://ada.example");
    }
}
