use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The whole resume document. Field names on the wire are camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeContent {
    pub name: String,
    pub title: String,
    pub summary: String,
    pub contacts: Contacts,
    pub skills: Skills,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub meta: Meta,
    pub settings: Settings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    /// Empty means "not provided".
    pub url: String,
}

impl ContactLink {
    pub fn has_url(&self) -> bool {
        !self.url.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contacts {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub links: Vec<ContactLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub org: String,
    pub period: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub period: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub og_title: String,
    pub og_desc: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub show_phone: bool,
}

/// A named group of skills, e.g. `Languages: [Rust, Go]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
}

/// Skill categories in document order.
///
/// Serialized as a JSON object. Deserialization keeps the key order of the
/// source object, which a `HashMap` would lose.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Skills(Vec<SkillCategory>);

impl Skills {
    pub fn iter(&self) -> impl Iterator<Item = &SkillCategory> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.skills.as_slice())
    }

    /// Category names in order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|c| c.name.as_str())
    }

    /// Every skill across every category, in order.
    pub fn flatten(&self) -> Vec<String> {
        self.0.iter().flat_map(|c| c.skills.iter().cloned()).collect()
    }
}

impl FromIterator<(String, Vec<String>)> for Skills {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, skills)| SkillCategory { name, skills })
                .collect(),
        )
    }
}

impl Serialize for Skills {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for category in &self.0 {
            map.serialize_entry(&category.name, &category.skills)?;
        }
        map.end()
    }
}

struct SkillsVisitor;

impl<'de> Visitor<'de> for SkillsVisitor {
    type Value = Skills;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object mapping category names to lists of skills")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Skills, A::Error> {
        let mut categories = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((name, skills)) = access.next_entry::<String, Vec<String>>()? {
            categories.push(SkillCategory { name, skills });
        }
        Ok(Skills(categories))
    }
}

impl<'de> Deserialize<'de> for Skills {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Skills, D::Error> {
        deserializer.deserialize_map(SkillsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skills_keep_document_order() {
        let skills: Skills =
            serde_json::from_str(r#"{"Tools": ["Git"], "Languages": ["Go", "Rust"], "Cloud": []}"#)
                .unwrap();
        let order: Vec<_> = skills.categories().collect();
        assert_eq!(order, vec!["Tools", "Languages", "Cloud"]);
        assert_eq!(skills.get("Languages"), Some(&["Go".to_string(), "Rust".to_string()][..]));
    }

    #[test]
    fn test_skills_serialize_as_object_in_order() {
        let skills: Skills = vec![
            ("Zeta".to_string(), vec!["a".to_string()]),
            ("Alpha".to_string(), vec![]),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            serde_json::to_string(&skills).unwrap(),
            r#"{"Zeta":["a"],"Alpha":[]}"#
        );
    }

    #[test]
    fn test_flatten_skills() {
        let skills: Skills = serde_json::from_str(r#"{"A": ["x", "y"], "B": ["z"]}"#).unwrap();
        assert_eq!(skills.flatten(), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_meta_uses_camel_case_keys() {
        let meta: Meta =
            serde_json::from_str(r#"{"ogTitle": "T", "ogDesc": "D", "keywords": ["k"]}"#).unwrap();
        assert_eq!(meta.og_title, "T");
        assert_eq!(meta.og_desc, "D");
    }

    #[test]
    fn test_contact_link_blank_url_is_not_provided() {
        let link = ContactLink {
            label: "GitHub".to_string(),
            url: "   ".to_string(),
        };
        assert!(!link.has_url());
    }
}
