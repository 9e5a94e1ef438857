//! Content provider: the single load point for the resume document.
//!
//! The document is read, shape-checked and decoded once at startup. The
//! resulting `ContentProvider` is owned by `AppState` and handed to every
//! consumer; there is no ambient global. A failed load is fatal.

use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error};

use crate::content::schema::{
    ContactLink, Contacts, Education, Experience, Meta, ResumeContent, Settings, Skills,
};
use crate::content::validator::{validate_shape, SchemaViolation};

/// Bundled default document, compiled into the binary.
const EMBEDDED_RESUME: &str = include_str!("../../content/resume.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to read resume content from {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Resume content is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Invalid resume data structure: {0}")]
    Schema(#[from] SchemaViolation),

    #[error("Resume content has malformed entries: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Failed to encode resume section '{section}': {source}")]
    Encode {
        section: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown resume section '{0}'")]
    UnknownSection(String),
}

/// Where the resume document comes from.
#[derive(Debug, Clone, Default)]
pub enum ContentSource {
    #[default]
    Embedded,
    File(PathBuf),
    Inline(String),
}

impl ContentSource {
    fn read(&self) -> Result<Cow<'_, str>, ContentError> {
        match self {
            ContentSource::Embedded => Ok(Cow::Borrowed(EMBEDDED_RESUME)),
            ContentSource::Inline(raw) => Ok(Cow::Borrowed(raw.as_str())),
            ContentSource::File(path) => {
                std::fs::read_to_string(path)
                    .map(Cow::Owned)
                    .map_err(|source| ContentError::Read {
                        path: path.display().to_string(),
                        source,
                    })
            }
        }
    }
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentSource::Embedded => f.write_str("embedded resume.json"),
            ContentSource::File(path) => write!(f, "{}", path.display()),
            ContentSource::Inline(_) => f.write_str("inline document"),
        }
    }
}

/// Reads, validates and decodes the resume document.
pub fn load(source: &ContentSource) -> Result<ResumeContent, ContentError> {
    let raw = source.read()?;
    let value: Value = serde_json::from_str(&raw).map_err(ContentError::Parse)?;
    validate_shape(&value)?;
    // Decoded from the raw text so skill categories keep their source order.
    let content = serde_json::from_str(&raw).map_err(ContentError::Decode)?;
    debug!(%source, "resume content loaded");
    Ok(content)
}

/// Like [`load`], but logs the failure and yields `None` for callers that have
/// a fallback.
pub fn safe_load(source: &ContentSource) -> Option<ResumeContent> {
    match load(source) {
        Ok(content) => Some(content),
        Err(e) => {
            error!(%source, "Failed to load resume data: {e}");
            None
        }
    }
}

/// Top-level fields of the document, addressable by their JSON names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKey {
    Name,
    Title,
    Summary,
    Contacts,
    Skills,
    Education,
    Experience,
    Meta,
    Settings,
}

impl SectionKey {
    pub const ALL: [SectionKey; 9] = [
        SectionKey::Name,
        SectionKey::Title,
        SectionKey::Summary,
        SectionKey::Contacts,
        SectionKey::Skills,
        SectionKey::Education,
        SectionKey::Experience,
        SectionKey::Meta,
        SectionKey::Settings,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKey::Name => "name",
            SectionKey::Title => "title",
            SectionKey::Summary => "summary",
            SectionKey::Contacts => "contacts",
            SectionKey::Skills => "skills",
            SectionKey::Education => "education",
            SectionKey::Experience => "experience",
            SectionKey::Meta => "meta",
            SectionKey::Settings => "settings",
        }
    }
}

impl FromStr for SectionKey {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ContentError::UnknownSection(s.to_string()))
    }
}

/// A borrowed view of one top-level field. `Contacts` carries the phone only
/// when it is visible.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Section<'a> {
    Name(&'a str),
    Title(&'a str),
    Summary(&'a str),
    Contacts(Cow<'a, Contacts>),
    Skills(&'a Skills),
    Education(&'a [Education]),
    Experience(&'a [Experience]),
    Meta(&'a Meta),
    Settings(Settings),
}

/// Owned handle on the validated document. Cloning shares the same document.
#[derive(Debug, Clone)]
pub struct ContentProvider {
    content: Arc<ResumeContent>,
}

impl ContentProvider {
    pub fn load(source: &ContentSource) -> Result<Self, ContentError> {
        load(source).map(Self::new)
    }

    pub fn new(content: ResumeContent) -> Self {
        Self {
            content: Arc::new(content),
        }
    }

    pub fn content(&self) -> &ResumeContent {
        &self.content
    }

    pub fn section(&self, key: SectionKey) -> Section<'_> {
        let c = &*self.content;
        match key {
            SectionKey::Name => Section::Name(&c.name),
            SectionKey::Title => Section::Title(&c.title),
            SectionKey::Summary => Section::Summary(&c.summary),
            SectionKey::Contacts => Section::Contacts(self.public_contacts()),
            SectionKey::Skills => Section::Skills(&c.skills),
            SectionKey::Education => Section::Education(&c.education),
            SectionKey::Experience => Section::Experience(&c.experience),
            SectionKey::Meta => Section::Meta(&c.meta),
            SectionKey::Settings => Section::Settings(c.settings),
        }
    }

    /// JSON projection of one section, keyed by its wire name.
    pub fn section_value(&self, key: &str) -> Result<Value, ContentError> {
        let key = key.parse::<SectionKey>()?;
        serde_json::to_value(self.section(key)).map_err(|source| ContentError::Encode {
            section: key.as_str(),
            source,
        })
    }

    /// Contacts with the phone blanked unless [`Self::visible_phone`] allows it.
    pub fn public_contacts(&self) -> Cow<'_, Contacts> {
        let contacts = &self.content.contacts;
        match self.visible_phone() {
            Some(phone) if phone == contacts.phone => Cow::Borrowed(contacts),
            phone => Cow::Owned(Contacts {
                phone: phone.unwrap_or_default().to_string(),
                ..contacts.clone()
            }),
        }
    }

    /// The whole document as served to clients, with contacts from
    /// [`Self::public_contacts`].
    pub fn public_content(&self) -> ResumeContent {
        ResumeContent {
            contacts: self.public_contacts().into_owned(),
            ..(*self.content).clone()
        }
    }

    /// Contact links with a non-blank url, in source order.
    pub fn valid_contact_links(&self) -> Vec<&ContactLink> {
        self.content
            .contacts
            .links
            .iter()
            .filter(|link| link.has_url())
            .collect()
    }

    /// Skill categories that list at least one skill, in source order.
    pub fn skills_with_content(&self) -> Skills {
        self.content
            .skills
            .iter()
            .filter(|category| !category.skills.is_empty())
            .map(|category| (category.name.clone(), category.skills.clone()))
            .collect()
    }

    /// The phone number, only when the owner opted in and one is set.
    pub fn visible_phone(&self) -> Option<&str> {
        let phone = self.content.contacts.phone.trim();
        (self.content.settings.show_phone && !phone.is_empty()).then_some(phone)
    }
}
