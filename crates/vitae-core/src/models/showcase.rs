use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{SectionInfo, Timeframe};

/// The `honors_awards` resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HonorsAwards {
    pub section_info: SectionInfo,
    #[serde(default)]
    pub honorsawards: Vec<Award>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Award {
    #[serde(default)]
    pub id_ref: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub icon_class: Option<String>,
    #[serde(default)]
    pub issuer_organization: Option<IssuerOrganization>,
    #[serde(default)]
    pub short_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IssuerOrganization {
    #[serde(default)]
    pub name: Option<String>,
}

/// The `courses_trainings_certificates` resource. Entries without a
/// `serial_no` are drafts the site filters out of the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoursesTrainingsCertificates {
    pub section_info: SectionInfo,
    #[serde(default)]
    pub coursestrainingscertificates: Vec<Course>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Course {
    #[serde(default)]
    pub id_ref: Option<String>,
    #[serde(default)]
    pub serial_no: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub filter_tags: Vec<String>,
}

impl Course {
    /// Whether the entry is published (has a non-blank serial number).
    pub fn is_published(&self) -> bool {
        self.serial_no
            .as_deref()
            .is_some_and(|s| !s.trim().is_empty())
    }
}

/// The `projects` resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projects {
    pub section_info: SectionInfo,
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub id_ref: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub icon_class: Option<String>,
    #[serde(default)]
    pub timeframe_details: Option<Timeframe>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
}

/// The `memberships` resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Memberships {
    pub section_info: SectionInfo,
    #[serde(default)]
    pub memberships: Vec<Membership>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Membership {
    #[serde(default)]
    pub id_ref: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub icon_class: Option<String>,
    #[serde(default)]
    pub timeframe_details: Timeframe,
    #[serde(default)]
    pub membership_organization: Vec<IssuerOrganization>,
    #[serde(default)]
    pub description_full: Option<String>,
}

/// The `sessions_events` resource: talks, sessions, attended events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionsEvents {
    pub section_info: SectionInfo,
    #[serde(default)]
    pub sessionsevents: Vec<SessionEvent>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionEvent {
    #[serde(default)]
    pub id_ref: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, rename = "type")]
    pub event_type: Option<String>,
    #[serde(default)]
    pub icon_class: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// The `portfolios` resource: external repository cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolios {
    pub section_info: SectionInfo,
    #[serde(default)]
    pub portfolios: Vec<PortfolioRepo>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PortfolioRepo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub portfolio_url: Option<String>,
    #[serde(default)]
    pub icon_class: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// The `volunteerings` resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Volunteerings {
    pub section_info: SectionInfo,
    #[serde(default)]
    pub volunteerings: Vec<Volunteering>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Volunteering {
    #[serde(default)]
    pub id_ref: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub icon_class: Option<String>,
    #[serde(default)]
    pub timeframe_details: Timeframe,
    #[serde(default)]
    pub cause: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub summary_text: Option<String>,
    #[serde(default)]
    pub image_path: Option<String>,
}

/// The `publications` resource: named groups (journal articles, conference
/// papers, ...), each carrying its layout column and items. An ordered map
/// keeps serialization deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Publications {
    pub section_info: SectionInfo,
    #[serde(default)]
    pub publications: BTreeMap<String, PublicationGroup>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PublicationGroup {
    #[serde(default, rename = "type")]
    pub group_type: Option<String>,
    #[serde(default)]
    pub column: Option<String>,
    #[serde(default)]
    pub icon_class: Option<String>,
    #[serde(default)]
    pub items: Vec<Publication>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Publication {
    #[serde(default)]
    pub id_ref: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// Citation with inline HTML markup (author emphasis etc.).
    #[serde(default)]
    pub citation_text: Option<String>,
    #[serde(default)]
    pub journal_link: Option<String>,
    #[serde(default)]
    pub conference_link: Option<String>,
    #[serde(default, rename = "abstract")]
    pub abstract_text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_published_filter() {
        let published = Course {
            serial_no: Some("C-001".to_string()),
            ..Default::default()
        };
        let draft = Course {
            serial_no: Some("  ".to_string()),
            ..Default::default()
        };
        let missing = Course::default();

        assert!(published.is_published());
        assert!(!draft.is_published());
        assert!(!missing.is_published());
    }

    #[test]
    fn test_publications_grouping_parses() {
        let publications: Publications = serde_json::from_str(
            r#"{
                "section_info": {"title": "Publications"},
                "publications": {
                    "journals": {
                        "type": "Journal Articles",
                        "column": "left",
                        "items": [{"title": "On Caching", "abstract": "..."}]
                    }
                }
            }"#,
        )
        .unwrap();
        let group = &publications.publications["journals"];
        assert_eq!(group.group_type.as_deref(), Some("Journal Articles"));
        assert_eq!(
            group.items[0].abstract_text.as_deref(),
            Some("...")
        );
    }
}
