//! Shape check for the raw resume document.
//!
//! Runs against the untyped `serde_json::Value` before anything is allowed to
//! read from it. Checks are ordered and stop at the first failure. Element
//! shapes inside `contacts.links`, `education`, `experience` and the `skills`
//! values are not inspected here; typed decoding in `provider::load` covers them.
//! "Object" means a JSON object: arrays and `null` never pass as one.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Object,
    String,
    Array,
    Boolean,
}

impl Expected {
    fn matches(self, value: Option<&Value>) -> bool {
        match (self, value) {
            (Expected::Object, Some(v)) => v.is_object(),
            (Expected::String, Some(v)) => v.is_string(),
            (Expected::Array, Some(v)) => v.is_array(),
            (Expected::Boolean, Some(v)) => v.is_boolean(),
            (_, None) => false,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Expected::Object => "an object",
            Expected::String => "a string",
            Expected::Array => "an array",
            Expected::Boolean => "a boolean",
        }
    }
}

/// The first field that did not have the expected JSON kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{path}` must be {}", .expected.as_str())]
pub struct SchemaViolation {
    pub path: &'static str,
    pub expected: Expected,
}

/// Every checked path in evaluation order. A parent object always precedes its
/// children, so child lookups only run once the parent is known to be an object.
const CHECKS: &[(&str, Expected)] = &[
    ("", Expected::Object),
    ("name", Expected::String),
    ("title", Expected::String),
    ("summary", Expected::String),
    ("contacts", Expected::Object),
    ("contacts.email", Expected::String),
    ("contacts.phone", Expected::String),
    ("contacts.location", Expected::String),
    ("contacts.links", Expected::Array),
    ("skills", Expected::Object),
    ("education", Expected::Array),
    ("experience", Expected::Array),
    ("meta", Expected::Object),
    ("meta.ogTitle", Expected::String),
    ("meta.ogDesc", Expected::String),
    ("meta.keywords", Expected::Array),
    ("settings", Expected::Object),
    ("settings.showPhone", Expected::Boolean),
];

fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(root);
    }
    path.split('.').try_fold(root, |value, key| value.get(key))
}

/// Checks `value` against the resume document shape.
pub fn validate_shape(value: &Value) -> Result<(), SchemaViolation> {
    for &(path, expected) in CHECKS {
        if !expected.matches(lookup(value, path)) {
            return Err(SchemaViolation {
                path: if path.is_empty() { "<root>" } else { path },
                expected,
            });
        }
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_document() -> Value {
        json!({
            "name": "Ada Example",
            "title": "Systems Engineer",
            "summary": "Builds things.",
            "contacts": {
                "email": "ada@example.com",
                "phone": "",
                "location": "Lisbon",
                "links": [{ "label": "GitHub", "url": "https://github.com/ada" }]
            },
            "skills": { "Languages": ["Rust"] },
            "education": [],
            "experience": [],
            "meta": { "ogTitle": "Ada", "ogDesc": "Resume", "keywords": [] },
            "settings": { "showPhone": false }
        })
    }

    #[test]
    fn test_well_formed_document_passes() {
        assert!(validate_shape(&valid_document()).is_ok());
    }

    #[test]
    fn test_missing_any_top_level_field_fails() {
        for key in [
            "name",
            "title",
            "summary",
            "contacts",
            "skills",
            "education",
            "experience",
            "meta",
            "settings",
        ] {
            let mut doc = valid_document();
            doc.as_object_mut().unwrap().remove(key);
            let err = validate_shape(&doc).unwrap_err();
            assert_eq!(err.path, key, "removing `{key}` should fail on `{key}`");
        }
    }

    #[test]
    fn test_non_object_root_fails() {
        for root in [json!(null), json!([]), json!("resume"), json!(3)] {
            let err = validate_shape(&root).unwrap_err();
            assert_eq!(err.path, "<root>");
            assert_eq!(err.expected, Expected::Object);
        }
    }

    #[test]
    fn test_contacts_must_be_object() {
        let mut doc = valid_document();
        doc["contacts"] = json!("ada@example.com");
        let err = validate_shape(&doc).unwrap_err();
        assert_eq!(err.path, "contacts");
        assert_eq!(err.to_string(), "`contacts` must be an object");
    }

    #[test]
    fn test_null_sections_fail() {
        for key in ["contacts", "skills", "meta", "settings"] {
            let mut doc = valid_document();
            doc[key] = Value::Null;
            assert!(validate_shape(&doc).is_err(), "null `{key}` should fail");
        }
    }

    #[test]
    fn test_array_is_not_an_object() {
        let mut doc = valid_document();
        doc["skills"] = json!([["Rust"]]);
        let err = validate_shape(&doc).unwrap_err();
        assert_eq!(err.path, "skills");
        assert_eq!(err.expected, Expected::Object);
    }

    #[test]
    fn test_nested_field_kinds() {
        let cases = [
            ("contacts", "phone", json!(123), "contacts.phone"),
            ("contacts", "links", json!({}), "contacts.links"),
            ("meta", "keywords", json!("rust"), "meta.keywords"),
            ("meta", "ogDesc", json!(null), "meta.ogDesc"),
            ("settings", "showPhone", json!("false"), "settings.showPhone"),
        ];
        for (parent, field, bad, path) in cases {
            let mut doc = valid_document();
            doc[parent][field] = bad;
            assert_eq!(validate_shape(&doc).unwrap_err().path, path);
        }
    }

    #[test]
    fn test_first_failure_wins() {
        let mut doc = valid_document();
        doc["title"] = json!(1);
        doc["settings"] = json!(null);
        assert_eq!(validate_shape(&doc).unwrap_err().path, "title");
    }

    #[test]
    fn test_element_shapes_are_not_inspected() {
        let mut doc = valid_document();
        doc["contacts"]["links"] = json!([1, "two", null]);
        doc["education"] = json!([{ "unexpected": true }]);
        doc["experience"] = json!(["free text"]);
        doc["skills"] = json!({ "Languages": "Rust" });
        assert!(validate_shape(&doc).is_ok());
    }
}
