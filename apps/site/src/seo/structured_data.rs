//! schema.org `Person` JSON-LD for the page head.
//!
//! The phone number is only emitted when the owner has opted in through
//! `settings.showPhone`.

use chrono::{Datelike, NaiveDate};
use serde_json::{json, Map, Value};

use crate::content::schema::{Education, Experience};
use crate::content::ContentProvider;

const PERIOD_SEPARATOR: &str = " – ";
const SEEKS: &str =
    "Software development opportunities, technical consulting, and collaborative projects";

/// Splits "2020 – Present" into a start and an end. An open-ended period ends
/// in the current year; a period without a separator has no end.
fn period_bounds(period: &str, today: NaiveDate) -> (String, Option<String>) {
    let (start, end) = match period.split_once(PERIOD_SEPARATOR) {
        Some((start, end)) => (start.trim(), Some(end.trim())),
        None => (period.trim(), None),
    };
    let end = if period.contains("Present") {
        Some(today.year().to_string())
    } else {
        end.map(str::to_string)
    };
    (start.to_string(), end)
}

fn work_experience(job: &Experience, today: NaiveDate) -> Value {
    let (start, end) = period_bounds(&job.period, today);
    let employer = if job.company.is_empty() {
        "Current Company"
    } else {
        job.company.as_str()
    };

    let mut entry = Map::new();
    entry.insert("@type".into(), json!("WorkExperience"));
    entry.insert("jobTitle".into(), json!(job.role));
    entry.insert(
        "employer".into(),
        json!({ "@type": "Organization", "name": employer }),
    );
    entry.insert("startDate".into(), json!(start));
    if let Some(end) = end {
        entry.insert("endDate".into(), json!(end));
    }
    entry.insert("description".into(), json!(job.highlights.join(". ")));
    Value::Object(entry)
}

fn credential(edu: &Education) -> Value {
    json!({
        "@type": "EducationalOccupationalCredential",
        "name": edu.degree,
        "educationalCredentialAwarded": edu.degree,
        "recognizedBy": { "@type": "EducationalOrganization", "name": edu.org },
        "dateCreated": edu.period
    })
}

/// Builds the `Person` document for `provider`'s content.
pub fn person(provider: &ContentProvider, site_url: &str, today: NaiveDate) -> Value {
    let content = provider.content();
    let skills = provider.skills_with_content().flatten();
    let same_as: Vec<&str> = provider
        .valid_contact_links()
        .into_iter()
        .map(|link| link.url.as_str())
        .collect();

    let mut person = Map::new();
    person.insert("@context".into(), json!("https://schema.org"));
    person.insert("@type".into(), json!("Person"));
    person.insert("name".into(), json!(content.name));
    person.insert("jobTitle".into(), json!(content.title));
    person.insert("description".into(), json!(content.summary));
    person.insert("email".into(), json!(content.contacts.email));
    if let Some(phone) = provider.visible_phone() {
        person.insert("telephone".into(), json!(phone));
    }
    person.insert(
        "address".into(),
        json!({ "@type": "PostalAddress", "addressLocality": content.contacts.location }),
    );
    person.insert("url".into(), json!(site_url));
    person.insert("image".into(), json!(format!("{site_url}/api/og")));
    person.insert("sameAs".into(), json!(same_as));
    person.insert("knowsAbout".into(), json!(skills));
    person.insert(
        "workExperience".into(),
        Value::Array(
            content
                .experience
                .iter()
                .map(|job| work_experience(job, today))
                .collect(),
        ),
    );
    person.insert(
        "educationalCredential".into(),
        Value::Array(content.education.iter().map(credential).collect()),
    );
    person.insert(
        "seeks".into(),
        json!({ "@type": "Demand", "description": SEEKS }),
    );
    person.insert(
        "alumniOf".into(),
        Value::Array(
            content
                .education
                .iter()
                .map(|edu| json!({ "@type": "EducationalOrganization", "name": edu.org }))
                .collect(),
        ),
    );
    person.insert(
        "hasOccupation".into(),
        json!({
            "@type": "Occupation",
            "name": content.title,
            "description": content.summary,
            "skills": skills
        }),
    );
    Value::Object(person)
}
