//! Sample portfolio documents shared by unit and integration tests.
//!
//! The shapes mirror the published data files closely enough to exercise
//! every schema; content is synthetic.

use serde_json::{json, Value};

use crate::models::SiteData;
use crate::resources::Resource;

fn section(title: &str) -> Value {
    json!({
        "title": title,
        "details": format!("{} details", title),
        "icon_class": "bi bi-star"
    })
}

/// A sample document for one resource.
pub fn resource_json(resource: Resource) -> Value {
    match resource {
        Resource::Site => json!({
            "assets": {
                "images": {
                    "site_background": "bg.jpg",
                    "profile_image_formal": "formal.jpg",
                    "profile_image_pp": "pp.jpg"
                },
                "icons": { "logo_png": "logo.png" }
            },
            "footer_meta": {
                "menu_footer": {
                    "copyright_year": "AUTO",
                    "copyright_owner": "A. Researcher",
                    "links": []
                }
            }
        }),
        Resource::PersonalInfo => json!({
            "name": "A. Researcher",
            "location": "Espoo, Finland",
            "hero": {
                "title_main": "A. Researcher",
                "typed_items": "Researcher,Engineer,Lecturer",
                "title_researcher": "Postdoctoral Researcher",
                "tagline": "Curious about everything"
            },
            "profile_summary": {
                "title": "About",
                "subtitle": "Researcher & Engineer",
                "link_printable_cv": "/printable-cv",
                "intro_paragraph_html": "<strong>Hello.</strong>",
                "key_points_left": [
                    { "icon_class": "bi bi-chevron-right", "strong": "Degree", "text": "PhD" }
                ],
                "key_points_right": [
                    { "icon_class": "bi bi-chevron-right", "strong": "Website",
                      "text": "example.org", "link": "https://example.org" }
                ],
                "research_area": { "icon_class": "bi bi-search", "title": "Research Area",
                                    "text": "Distributed systems" },
                "recent_works": { "icon_class": "bi bi-journals", "title": "Recent Works",
                                   "text": "Caching strategies" }
            }
        }),
        Resource::KeyMetrics => json!({
            "section_info": section("Key Metrics"),
            "metrics": [
                { "icon_class": "bi bi-journal", "value": 12,
                  "strong_text": "publications", "description": "peer reviewed" },
                { "icon_class": "bi bi-people", "value": 4,
                  "strong_text": "projects", "description": "funded" }
            ]
        }),
        Resource::Education => json!({
            "section_info": section("Education"),
            "summary": {
                "title": "Summary",
                "status_list": ["PhD completed 2023"]
            },
            "degrees": [
                {
                    "degree_id": "phd-cs",
                    "degree_major": "Computer Science",
                    "degree_level": "Doctoral",
                    "degree_type": "Full-time",
                    "column": "left",
                    "institution_name": "Aalto University",
                    "institution_location": "Espoo, Finland",
                    "timeframe_details": {
                        "start_date": "2019.09", "end_date": "2023.06",
                        "award_date": "2023.08"
                    },
                    "specialisation": "Distributed systems",
                    "thesis_details": { "thesis_title": "On Caching", "thesis_length": "180 pages" },
                    "research_projects": [
                        { "type": "Funded", "title": "Edge data project" }
                    ]
                },
                {
                    "degree_id": "msc-cs",
                    "degree_major": "Software Engineering",
                    "degree_level": "Master's",
                    "column": "right",
                    "institution_name": "Aalto University",
                    "timeframe_details": { "start_date": "2017.09", "end_date": "2019.06" }
                }
            ]
        }),
        Resource::ProfessionalExperience => json!({
            "section_info": section("Professional Experience"),
            "summary": {
                "title": "Expertise",
                "expertise_list": [
                    { "title": "Areas", "areas_of_expertise": ["Systems", "Networking"] }
                ]
            },
            "experiences": [
                {
                    "category": "Research",
                    "column": "left",
                    "organisation": [
                        {
                            "organization": "Aalto University",
                            "location": "Espoo, Finland",
                            "icon_class": "bx bx-briefcase",
                            "roles": [
                                {
                                    "role_id": "postdoc",
                                    "title": "Postdoctoral Researcher",
                                    "role_type": "Full-time",
                                    "timeframe_details": {
                                        "start_date": "2023.08", "end_date": "Present"
                                    },
                                    "description_list": ["Leads the caching work"],
                                    "responsibilities_list": ["Supervision", "Teaching"]
                                }
                            ]
                        }
                    ]
                }
            ]
        }),
        Resource::ExpertiseAchievements => json!({
            "section_info": section("Expertise & Achievements"),
            "items": []
        }),
        Resource::Skills => json!({
            "section_info": section("Skills & Tools"),
            "skills": [
                { "category": "Programming", "short_description": "Rust, Python", "level": 90 },
                { "category": "Systems", "short_description": "Linux", "level": 85 }
            ]
        }),
        Resource::HonorsAwards => json!({
            "section_info": section("Honors & Awards"),
            "honorsawards": [
                {
                    "id_ref": "award-1",
                    "title": "Best Paper",
                    "date": "2022",
                    "issuer_organization": { "name": "Some Conference" },
                    "short_description": "For the caching paper"
                }
            ]
        }),
        Resource::CoursesTrainingsCertificates => json!({
            "section_info": section("Courses & Certificates"),
            "coursestrainingscertificates": [
                {
                    "id_ref": "cert-1",
                    "serial_no": "C-001",
                    "title": "Advanced Rust",
                    "source": "Online Academy - 2021",
                    "image_path": "assets/img/cert1.png",
                    "filter_tags": ["filter-programming"]
                },
                { "id_ref": "cert-draft", "serial_no": "", "title": "Draft entry" }
            ]
        }),
        Resource::Projects => json!({
            "section_info": section("Projects"),
            "projects": [
                {
                    "id_ref": "proj-1",
                    "role": "Lead Developer",
                    "status": "Ongoing",
                    "timeframe_details": { "start_date": "2024.01", "end_date": "Present" },
                    "short_description": "Edge caching platform"
                }
            ]
        }),
        Resource::Memberships => json!({
            "section_info": section("Memberships"),
            "memberships": [
                {
                    "id_ref": "mem-1",
                    "title": "ACM Member",
                    "timeframe_details": { "start_date": "2020", "end_date": "Present" },
                    "membership_organization": [{ "name": "ACM" }],
                    "description_full": "Professional membership"
                }
            ]
        }),
        Resource::SessionsEvents => json!({
            "section_info": section("Sessions & Events"),
            "sessionsevents": [
                {
                    "id_ref": "evt-1",
                    "title": "Invited Talk",
                    "date": "2024.05",
                    "type": "Talk",
                    "organization": "Some University",
                    "description": "On cache expiration policies"
                }
            ]
        }),
        Resource::Languages => json!({
            "section_info": section("Languages"),
            "languages": [
                {
                    "id_ref": "lang-en",
                    "language": "English",
                    "status": "Fluent",
                    "proficiency_level": "C1",
                    "test_scores": [
                        {
                            "test_name": "IELTS",
                            "test_year": "2018",
                            "test_score": "7.5",
                            "proficiency_breakdown": {
                                "listening": "8.0", "reading": "7.5",
                                "writing": "7.0", "speaking": null
                            }
                        }
                    ]
                }
            ]
        }),
        Resource::Portfolios => json!({
            "section_info": section("Portfolios"),
            "portfolios": [
                {
                    "title": "vitae",
                    "portfolio_url": "https://github.com/eamiri/vitae",
                    "description": "This very loader"
                }
            ]
        }),
        Resource::Volunteerings => json!({
            "section_info": section("Volunteering"),
            "volunteerings": [
                {
                    "id_ref": "vol-1",
                    "title": "Mentor",
                    "timeframe_details": { "start_date": "2021", "end_date": "2022" },
                    "cause": "Education",
                    "organization": "Code Club",
                    "summary_text": "Weekly mentoring"
                }
            ]
        }),
        Resource::Publications => json!({
            "section_info": section("Publications"),
            "publications": {
                "journals": {
                    "type": "Journal Articles",
                    "column": "left",
                    "icon_class": "bi bi-journal-text",
                    "items": [
                        {
                            "id_ref": "pub-1",
                            "title": "On Caching",
                            "citation_text": "<strong>A. Researcher</strong>, On Caching, 2023.",
                            "journal_link": "https://doi.example/1",
                            "abstract": "We study expiration policies."
                        }
                    ]
                },
                "conferences": {
                    "type": "Conference Papers",
                    "column": "right",
                    "items": []
                }
            }
        }),
        Resource::Contacts => json!({
            "section_info": section("Contacts"),
            "email_primary": "a.researcher@example.org",
            "contacts": {
                "email": {
                    "title": "Email", "text": "a.researcher@example.org",
                    "link": "mailto:a.researcher@example.org", "icon_class": "bi bi-envelope"
                },
                "location": {
                    "title": "Location", "text": "Espoo, Finland",
                    "link": "https://maps.example/espoo", "icon_class": "bi bi-geo-alt"
                }
            }
        }),
        Resource::EaLogo => json!({ "svg": "<svg/>" }),
        Resource::Copyright => json!({ "notice": "All rights reserved" }),
        Resource::Diary => json!({ "entries": [] }),
        Resource::Gallery => json!({ "albums": [] }),
    }
}

/// The full combined document: every resource name mapped to its sample.
pub fn combined_document_json() -> Value {
    let mut combined = serde_json::Map::new();
    for resource in Resource::ALL {
        combined.insert(resource.name().to_string(), resource_json(resource));
    }
    Value::Object(combined)
}

/// The typed form of [`combined_document_json`].
pub fn site_data() -> SiteData {
    serde_json::from_value(combined_document_json())
        .expect("fixture document must satisfy the schemas")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_document_is_valid() {
        let data = site_data();
        assert_eq!(data.personal_info.name, "A. Researcher");
        assert_eq!(data.cache_expiration_seconds(), 86_400);
    }

    #[test]
    fn test_fixture_serialization_keys_match_resource_set() {
        let serialized = serde_json::to_value(site_data()).unwrap();
        let keys: Vec<&str> = serialized
            .as_object()
            .unwrap()
            .keys()
            .map(|k| k.as_str())
            .collect();
        let mut expected: Vec<&str> = Resource::ALL.iter().map(|r| r.name()).collect();
        expected.sort_unstable();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, expected);
    }
}
