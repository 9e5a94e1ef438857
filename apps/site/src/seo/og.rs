//! Open Graph card, drawn as a 1200×630 SVG.
//!
//! Name, title (or a `?title=` override), an optional `?description=` line and
//! a footer mark. All text goes through maud, which escapes it.

use maud::{html, Markup, PreEscaped};
use serde::Deserialize;

pub const OG_WIDTH: u32 = 1200;
pub const OG_HEIGHT: u32 = 630;

/// Longest text drawn on the card before it is cut with an ellipsis.
const MAX_TITLE_CHARS: usize = 60;
const MAX_DESCRIPTION_CHARS: usize = 110;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OgOverrides {
    pub title: Option<String>,
    pub description: Option<String>,
}

fn clip(text: &str, max: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(max.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

pub fn render_card(name: &str, title: &str, overrides: &OgOverrides) -> Markup {
    let title = non_blank(overrides.title.as_deref()).unwrap_or(title);
    let description = non_blank(overrides.description.as_deref());

    html! {
        svg xmlns="http://www.w3.org/2000/svg"
            width=(OG_WIDTH) height=(OG_HEIGHT)
            viewBox={ "0 0 " (OG_WIDTH) " " (OG_HEIGHT) } {
            defs {
                linearGradient id="accent" x1="0" y1="0" x2="1" y2="1" {
                    stop offset="0%" stop-color="#3b82f6" {}
                    stop offset="50%" stop-color="#8b5cf6" {}
                    stop offset="100%" stop-color="#ec4899" {}
                }
            }
            rect width="100%" height="100%" fill="#fafafa" {}
            rect width="100%" height="100%" fill="url(#accent)" opacity="0.1" {}
            rect x="150" y="95" width="900" height="400" rx="24"
                fill="#ffffff" fill-opacity="0.95" stroke="#000000" stroke-opacity="0.1" {}
            text x="600" y="240" text-anchor="middle" font-family="sans-serif"
                font-size="72" font-weight="bold" fill="url(#accent)" {
                (clip(name, MAX_TITLE_CHARS))
            }
            text x="600" y="320" text-anchor="middle" font-family="sans-serif"
                font-size="36" font-weight="600" fill="#404040" {
                (clip(title, MAX_TITLE_CHARS))
            }
            @if let Some(description) = description {
                text x="600" y="380" text-anchor="middle" font-family="sans-serif"
                    font-size="24" fill="#737373" {
                    (clip(description, MAX_DESCRIPTION_CHARS))
                }
            }
            rect x="540" y="440" width="120" height="4" rx="2" fill="url(#accent)" {}
            circle cx="520" cy="584" r="4" fill="#3b82f6" {}
            text x="536" y="590" font-family="sans-serif" font-size="18" fill="#737373" {
                "Resume Portfolio"
            }
        }
    }
}

/// Full SVG document with XML prolog, ready to serve as `image/svg+xml`.
pub fn render_document(name: &str, title: &str, overrides: &OgOverrides) -> String {
    let card = render_card(name, title, overrides);
    html! {
        (PreEscaped(r#"<?xml version="1.0" encoding="UTF-8"?>"#))
        (card)
    }
    .into_string()
}
