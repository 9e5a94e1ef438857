//! HTML page rendering.
//!
//! Plain semantic markup built with maud; every interpolated value is escaped.
//! No styling or scripts beyond the JSON-LD block.

pub mod handlers;
pub mod sections;

use anyhow::Context;
use chrono::{Datelike, NaiveDate};
use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::contact::{ContactFields, Notification};
use crate::content::ContentProvider;
use crate::errors::AppError;
use crate::seo::{structured_data, PageMetadata};

/// State of the contact form for one render.
#[derive(Debug, Clone, Default)]
pub struct ContactFormView {
    pub notification: Option<Notification>,
    pub fields: ContactFields,
    /// False when no relay endpoint is configured.
    pub enabled: bool,
}

/// Everything one page render needs.
pub struct PageView<'a> {
    pub provider: &'a ContentProvider,
    pub site_url: &'a str,
    pub today: NaiveDate,
    pub contact: ContactFormView,
}

/// JSON inside `<script>` must not be able to close the element.
fn script_safe_json(json: &str) -> String {
    json.replace("</", "<\\/")
}

fn head(meta: &PageMetadata, json_ld: &str) -> Markup {
    html! {
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            title { (meta.title) }
            meta name="description" content=(meta.description);
            @if !meta.keywords.is_empty() {
                meta name="keywords" content=(meta.keywords.join(", "));
            }
            @if let Some(author) = &meta.author {
                meta name="author" content=(author);
            }
            meta name="robots" content="index, follow";
            link rel="canonical" href=(meta.canonical_url);
            @if let Some(og) = &meta.og {
                meta property="og:type" content="website";
                meta property="og:locale" content="en_US";
                meta property="og:url" content=(meta.canonical_url);
                meta property="og:title" content=(og.title);
                meta property="og:description" content=(og.description);
                meta property="og:site_name" content=(og.site_name);
                meta property="og:image" content=(og.image_url);
                meta property="og:image:width" content=(og.image_width);
                meta property="og:image:height" content=(og.image_height);
                meta property="og:image:alt" content=(og.image_alt);
                meta name="twitter:card" content="summary_large_image";
                meta name="twitter:title" content=(og.title);
                meta name="twitter:description" content=(og.description);
                meta name="twitter:image" content=(og.image_url);
            }
            script type="application/ld+json" { (PreEscaped(script_safe_json(json_ld))) }
        }
    }
}

/// Renders the full page.
pub fn page(view: &PageView<'_>) -> Result<Markup, AppError> {
    let provider = view.provider;
    let meta = PageMetadata::resolve(Some(provider.content()), view.site_url);
    let json_ld = serde_json::to_string_pretty(&structured_data::person(
        provider,
        view.site_url,
        view.today,
    ))
    .context("serializing JSON-LD")?;

    Ok(html! {
        (DOCTYPE)
        html lang="en" {
            (head(&meta, &json_ld))
            body {
                a href="#main-content" { "Skip to content" }
                header {
                    nav aria-label="Sections" {
                        a href="#about" { "About" } " "
                        a href="#experience" { "Experience" } " "
                        a href="#skills" { "Skills" } " "
                        a href="#education" { "Education" } " "
                        a href="#contact" { "Contact" }
                    }
                }
                main #main-content {
                    (sections::hero(provider))
                    (sections::about(provider))
                    (sections::experience(provider))
                    (sections::skills(provider))
                    (sections::education(provider))
                    (sections::contact(provider, &view.contact))
                }
                footer {
                    p { "© " (view.today.year()) " " (provider.content().name) }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::NotificationKind;
    use crate::content::provider::tests::{provider_from, sample_document};
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date")
    }

    fn render(provider: &ContentProvider, contact: ContactFormView) -> String {
        page(&PageView {
            provider,
            site_url: "https://ada.example",
            today: today(),
            contact,
        })
        .expect("page renders")
        .into_string()
    }

    fn enabled_form() -> ContactFormView {
        ContactFormView {
            enabled: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_page_has_every_section() {
        let html = render(&provider_from(sample_document()), enabled_form());
        for id in ["hero", "about", "experience", "skills", "education", "contact"] {
            assert!(html.contains(&format!(r#"<section id="{id}""#)), "missing #{id}");
        }
        assert!(html.contains("<title>Ada Example — Resume</title>"));
        assert!(html.contains(r#"<script type="application/ld+json">"#));
    }

    #[test]
    fn test_empty_skill_categories_not_rendered() {
        let html = render(&provider_from(sample_document()), enabled_form());
        assert!(html.contains("<h3>Languages</h3>"));
        assert!(html.contains("<h3>Cloud</h3>"));
        assert!(!html.contains("<h3>Tools</h3>"));
    }

    #[test]
    fn test_blank_links_not_rendered() {
        let html = render(&provider_from(sample_document()), enabled_form());
        assert!(html.contains("https://github.com/ada"));
        assert!(!html.contains("LinkedIn"));
    }

    #[test]
    fn test_phone_absent_when_hidden() {
        let html = render(&provider_from(sample_document()), enabled_form());
        assert!(!html.contains("555 0100"));
        assert!(!html.contains("tel:"));
    }

    #[test]
    fn test_phone_shown_when_enabled() {
        let mut doc = sample_document();
        doc["settings"]["showPhone"] = json!(true);
        let html = render(&provider_from(doc), enabled_form());
        assert!(html.contains(r#"href="tel:+1 555 0100""#));
        assert!(html.contains(r#""telephone": "+1 555 0100""#));
    }

    #[test]
    fn test_content_is_escaped() {
        let mut doc = sample_document();
        doc["summary"] = json!("<img src=x onerror=alert(1)>");
        doc["name"] = json!("Ada </script><script>alert(1)</script>");
        let html = render(&provider_from(doc), enabled_form());
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(!html.contains("</script><script>alert(1)"));
    }

    #[test]
    fn test_form_has_hidden_honeypot() {
        let html = render(&provider_from(sample_document()), enabled_form());
        assert!(html.contains(r#"name="honeypot""#));
        assert!(html.contains(r#"action="/contact#contact""#));
    }

    #[test]
    fn test_notification_and_retained_fields() {
        let contact = ContactFormView {
            notification: Some(Notification {
                kind: NotificationKind::Error,
                message: "Failed to send message. Please try again or use direct contact methods."
                    .to_string(),
            }),
            fields: ContactFields {
                name: "Sam".to_string(),
                email: "sam@example.com".to_string(),
                message: "Still here".to_string(),
            },
            enabled: true,
        };
        let html = render(&provider_from(sample_document()), contact);
        assert!(html.contains(r#"class="notice error""#));
        assert!(html.contains(r#"value="Sam""#));
        assert!(html.contains(r#"value="sam@example.com""#));
        assert!(html.contains(">Still here</textarea>"));
    }

    #[test]
    fn test_disabled_form_points_to_direct_contact() {
        let html = render(&provider_from(sample_document()), ContactFormView::default());
        assert!(!html.contains("<form"));
        assert!(html.contains("Contact form is not configured."));
    }

    #[test]
    fn test_script_safe_json() {
        assert_eq!(script_safe_json(r#"{"a":"</script>"}"#), r#"{"a":"<\/script>"}"#);
    }
}
