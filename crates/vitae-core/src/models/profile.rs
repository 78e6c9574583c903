use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::SectionInfo;

/// The `personal_info` resource: hero banner plus profile summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    pub hero: Hero,
    pub profile_summary: ProfileSummary,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Hero {
    #[serde(default)]
    pub title_main: String,
    /// Comma-separated phrases cycled by the typing effect.
    #[serde(default)]
    pub typed_items: String,
    #[serde(default)]
    pub title_researcher: Option<String>,
    #[serde(default)]
    pub title_institute_primary: Option<String>,
    #[serde(default)]
    pub title_institute_secondary: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfileSummary {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub link_printable_cv: Option<String>,
    #[serde(default)]
    pub intro_paragraph_html: Option<String>,
    #[serde(default)]
    pub key_points_left: Vec<KeyPoint>,
    #[serde(default)]
    pub key_points_right: Vec<KeyPoint>,
    #[serde(default)]
    pub research_area: Option<KeyPoint>,
    #[serde(default)]
    pub recent_works: Option<KeyPoint>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KeyPoint {
    #[serde(default)]
    pub icon_class: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub strong: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// The `key_metrics` resource: counter cards for the stats strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyMetrics {
    pub section_info: SectionInfo,
    #[serde(default)]
    pub metrics: Vec<KeyMetric>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KeyMetric {
    #[serde(default)]
    pub icon_class: Option<String>,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub strong_text: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// The `contacts` resource: named contact channels (email, location, ...),
/// each optionally absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contacts {
    pub section_info: SectionInfo,
    #[serde(default)]
    pub contacts: BTreeMap<String, Option<ContactItem>>,
    #[serde(default)]
    pub email_primary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContactItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub icon_class: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_personal_info_requires_name_and_hero() {
        let err = serde_json::from_str::<PersonalInfo>("{}");
        assert!(err.is_err());

        let ok: PersonalInfo = serde_json::from_str(
            r#"{"name":"A. Researcher","hero":{},"profile_summary":{}}"#,
        )
        .unwrap();
        assert_eq!(ok.name, "A. Researcher");
        assert!(ok.location.is_none());
    }

    #[test]
    fn test_contacts_tolerates_null_entries() {
        let contacts: Contacts = serde_json::from_str(
            r#"{
                "section_info": {"title": "Contacts"},
                "contacts": {"email": {"text": "a@b.c"}, "fax": null}
            }"#,
        )
        .unwrap();
        assert!(contacts.contacts["fax"].is_none());
        assert_eq!(
            contacts.contacts["email"].as_ref().unwrap().text.as_deref(),
            Some("a@b.c")
        );
    }
}
