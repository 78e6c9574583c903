use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{SectionInfo, Timeframe};

/// The `education` resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub section_info: SectionInfo,
    #[serde(default)]
    pub summary: Option<EducationSummary>,
    #[serde(default)]
    pub degrees: Vec<Degree>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EducationSummary {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub status_list: Vec<String>,
}

/// One degree entry. `degree_level` is the grouping header and `column`
/// ("left"/"right") the layout hint the site renders by.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Degree {
    #[serde(default)]
    pub degree_id: Option<String>,
    #[serde(default)]
    pub degree_major: Option<String>,
    #[serde(default)]
    pub degree_level: Option<String>,
    #[serde(default)]
    pub degree_type: Option<String>,
    #[serde(default)]
    pub column: Option<String>,
    #[serde(default)]
    pub department_name: Option<String>,
    #[serde(default)]
    pub institution_name: Option<String>,
    #[serde(default)]
    pub institution_link: Option<String>,
    #[serde(default)]
    pub institution_location: Option<String>,
    #[serde(default)]
    pub timeframe_details: Timeframe,
    #[serde(default)]
    pub specialisation: Option<String>,
    #[serde(default)]
    pub collaboration: Vec<Collaboration>,
    #[serde(default)]
    pub scholarship: Option<Scholarship>,
    #[serde(default)]
    pub research_topic: Option<String>,
    #[serde(default)]
    pub thesis_details: Option<ThesisDetails>,
    #[serde(default)]
    pub activities_involvement: Option<String>,
    #[serde(default)]
    pub description_full: Option<String>,
    #[serde(default)]
    pub research_projects: Vec<ResearchProject>,
    #[serde(default)]
    pub related_skills: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Collaboration {
    #[serde(default)]
    pub collaboration_type: Option<String>,
    #[serde(default)]
    pub institution_name: Option<String>,
    #[serde(default)]
    pub degree_major: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scholarship {
    #[serde(default)]
    pub scholarship_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ThesisDetails {
    #[serde(default)]
    pub thesis_title: Option<String>,
    #[serde(default)]
    pub thesis_length: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResearchProject {
    #[serde(default, rename = "type")]
    pub project_type: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

/// The `professional_experience` resource: an expertise summary plus
/// experience groups (category -> organisations -> roles).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessionalExperience {
    pub section_info: SectionInfo,
    #[serde(default)]
    pub summary: Option<ExperienceSummary>,
    #[serde(default)]
    pub experiences: Vec<ExperienceGroup>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExperienceSummary {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub expertise_list: Vec<ExpertiseList>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExpertiseList {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub areas_of_expertise: Option<Vec<String>>,
    #[serde(default)]
    pub research_interests_columns: Option<Vec<Vec<String>>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExperienceGroup {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub column: Option<String>,
    #[serde(default)]
    pub organisation: Vec<ExperienceOrganisation>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExperienceOrganisation {
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub icon_class: Option<String>,
    #[serde(default)]
    pub roles: Vec<Role>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Role {
    #[serde(default)]
    pub role_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub role_type: Option<String>,
    #[serde(default)]
    pub timeframe_details: Timeframe,
    #[serde(default)]
    pub description_list: Vec<String>,
    #[serde(default)]
    pub responsibilities_list: Vec<String>,
    #[serde(default)]
    pub course_involvement: Vec<String>,
    #[serde(default)]
    pub related_skills: Option<String>,
}

/// The `skills` resource: progress-bar entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skills {
    pub section_info: SectionInfo,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Skill {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    /// Percentage, 0-100.
    #[serde(default)]
    pub level: Option<f64>,
}

/// The `languages` resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Languages {
    pub section_info: SectionInfo,
    #[serde(default)]
    pub languages: Vec<Language>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Language {
    #[serde(default)]
    pub id_ref: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub proficiency_level: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub icon_class: Option<String>,
    #[serde(default)]
    pub test_scores: Vec<TestScore>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TestScore {
    #[serde(default)]
    pub test_name: Option<String>,
    #[serde(default)]
    pub test_year: Option<String>,
    #[serde(default)]
    pub test_score: Option<String>,
    /// Per-skill scores (reading, writing, ...); null values mean untested.
    #[serde(default)]
    pub proficiency_breakdown: BTreeMap<String, Option<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_tolerates_sparse_entries() {
        let degree: Degree = serde_json::from_str(
            r#"{
                "degree_major": "Computer Science",
                "degree_level": "Master's",
                "column": "left",
                "timeframe_details": {"start_date": "2019.09", "end_date": "2021.06"}
            }"#,
        )
        .unwrap();
        assert_eq!(degree.degree_level.as_deref(), Some("Master's"));
        assert!(degree.collaboration.is_empty());
        assert!(degree.thesis_details.is_none());
    }

    #[test]
    fn test_experience_nesting() {
        let experience: ProfessionalExperience = serde_json::from_str(
            r#"{
                "section_info": {"title": "Experience"},
                "experiences": [{
                    "category": "Research",
                    "column": "left",
                    "organisation": [{
                        "organization": "Some Institute",
                        "roles": [{"title": "Researcher",
                                   "timeframe_details": {"start_date": "2020.01", "end_date": "Present"}}]
                    }]
                }]
            }"#,
        )
        .unwrap();
        let role = &experience.experiences[0].organisation[0].roles[0];
        assert_eq!(role.timeframe_details.end_date.as_deref(), Some("Present"));
    }

    #[test]
    fn test_section_info_is_required() {
        assert!(serde_json::from_str::<Skills>(r#"{"skills":[]}"#).is_err());
    }
}
