//! Plain-text rendering of the loaded portfolio document.
//!
//! Pure functions from the combined document to strings; all data access
//! goes through the typed models, never raw JSON.

use std::fmt::Write;

use vitae_core::models::{Degree, SiteData};
use vitae_core::{LoadSource, SiteLoader};

use crate::format;

/// One-screen overview: identity, per-section entry counts, cache state.
pub fn overview(data: &SiteData, loader: &SiteLoader) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", data.personal_info.name);
    if let Some(title) = data.personal_info.hero.title_researcher.as_deref() {
        let _ = writeln!(out, "{}", title);
    }
    if let Some(location) = data.personal_info.location.as_deref() {
        let _ = writeln!(out, "{}", location);
    }
    let _ = writeln!(out);

    let counts = [
        ("Degrees", data.education.degrees.len()),
        (
            "Experience roles",
            data.professional_experience
                .experiences
                .iter()
                .flat_map(|group| &group.organisation)
                .map(|org| org.roles.len())
                .sum(),
        ),
        ("Skills", data.skills.skills.len()),
        ("Honors & awards", data.honors_awards.honorsawards.len()),
        (
            "Certificates",
            data.courses_trainings_certificates
                .coursestrainingscertificates
                .iter()
                .filter(|course| course.is_published())
                .count(),
        ),
        ("Projects", data.projects.projects.len()),
        ("Memberships", data.memberships.memberships.len()),
        ("Sessions & events", data.sessions_events.sessionsevents.len()),
        ("Languages", data.languages.languages.len()),
        ("Portfolios", data.portfolios.portfolios.len()),
        ("Volunteering", data.volunteerings.volunteerings.len()),
        (
            "Publications",
            data.publications
                .publications
                .values()
                .map(|group| group.items.len())
                .sum(),
        ),
    ];
    for (label, count) in counts {
        let _ = writeln!(out, "{:<20} {}", label, count);
    }

    let _ = writeln!(out);
    match loader.source() {
        Some(LoadSource::Cache) => {
            let age = loader.cache_age().unwrap_or("unknown age");
            let _ = writeln!(out, "Data served from cache ({})", age);
        }
        Some(LoadSource::Network) => {
            let _ = writeln!(out, "Data freshly fetched");
        }
        None => {}
    }

    out
}

/// Full CV-style report: education grouped by level, experience with derived
/// durations, publications by group.
pub fn printable_cv(data: &SiteData) -> String {
    let today = format::today();
    let mut out = String::new();

    let _ = writeln!(out, "{}", data.personal_info.name);
    if let Some(title) = data.personal_info.hero.title_researcher.as_deref() {
        let _ = writeln!(out, "{}", title);
    }
    if let Some(email) = data.contacts.email_primary.as_deref() {
        let _ = writeln!(out, "{}", email);
    }
    let _ = writeln!(out);

    // Education, grouped by degree level in document order.
    let _ = writeln!(out, "== {} ==", data.education.section_info.title);
    for (level, degrees) in group_degrees_by_level(&data.education.degrees) {
        let _ = writeln!(out, "\n{}", level);
        for degree in degrees {
            let major = degree.degree_major.as_deref().unwrap_or("(untitled)");
            let _ = writeln!(out, "  {}", major);
            if let Some(institution) = degree.institution_name.as_deref() {
                match degree.institution_location.as_deref() {
                    Some(location) => {
                        let _ = writeln!(out, "    {} - {}", institution, location);
                    }
                    None => {
                        let _ = writeln!(out, "    {}", institution);
                    }
                }
            }
            let _ = writeln!(out, "    {}", format::date_range(&degree.timeframe_details));
            if let Some(thesis) = degree
                .thesis_details
                .as_ref()
                .and_then(|t| t.thesis_title.as_deref())
            {
                let _ = writeln!(out, "    Thesis: \"{}\"", thesis);
            }
        }
    }

    // Experience, with authored or derived durations.
    let _ = writeln!(
        out,
        "\n== {} ==",
        data.professional_experience.section_info.title
    );
    for group in &data.professional_experience.experiences {
        if let Some(category) = group.category.as_deref() {
            let _ = writeln!(out, "\n{}", category);
        }
        for org in &group.organisation {
            let name = org.organization.as_deref().unwrap_or("(unknown)");
            match org.location.as_deref() {
                Some(location) => {
                    let _ = writeln!(out, "  {} - {}", name, location);
                }
                None => {
                    let _ = writeln!(out, "  {}", name);
                }
            }
            for role in &org.roles {
                let title = role.title.as_deref().unwrap_or("(untitled role)");
                let range = format::date_range(&role.timeframe_details);
                match format::role_duration(&role.timeframe_details, today) {
                    Some(duration) => {
                        let _ = writeln!(out, "    {} ({}, {})", title, range, duration);
                    }
                    None => {
                        let _ = writeln!(out, "    {} ({})", title, range);
                    }
                }
            }
        }
    }

    // Publications by group.
    let _ = writeln!(out, "\n== {} ==", data.publications.section_info.title);
    for group in data.publications.publications.values() {
        let heading = group.group_type.as_deref().unwrap_or("Other");
        let _ = writeln!(out, "\n{} ({})", heading, group.items.len());
        for item in &group.items {
            let title = item.title.as_deref().unwrap_or("(untitled)");
            let _ = writeln!(out, "  - {}", title);
            if let Some(citation) = item.citation_text.as_deref() {
                let _ = writeln!(out, "    {}", format::truncate_string(&strip_tags(citation), 100));
            }
        }
    }

    out
}

/// Group degrees by level, preserving first-seen order of the levels.
fn group_degrees_by_level(degrees: &[Degree]) -> Vec<(&str, Vec<&Degree>)> {
    let mut groups: Vec<(&str, Vec<&Degree>)> = Vec::new();
    for degree in degrees {
        let level = degree.degree_level.as_deref().unwrap_or("Other");
        match groups.iter_mut().find(|(existing, _)| *existing == level) {
            Some((_, members)) => members.push(degree),
            None => groups.push((level, vec![degree])),
        }
    }
    groups
}

/// Remove inline HTML markup from citation strings.
fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_degrees_preserves_level_order() {
        let degrees = vec![
            Degree {
                degree_level: Some("Doctoral".to_string()),
                degree_major: Some("CS".to_string()),
                ..Default::default()
            },
            Degree {
                degree_level: Some("Master's".to_string()),
                ..Default::default()
            },
            Degree {
                degree_level: Some("Doctoral".to_string()),
                ..Default::default()
            },
        ];
        let groups = group_degrees_by_level(&degrees);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Doctoral");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, "Master's");
    }

    #[test]
    fn test_strip_tags() {
        assert_eq!(
            strip_tags("<strong>A. Researcher</strong>, On Caching, 2023."),
            "A. Researcher, On Caching, 2023."
        );
        assert_eq!(strip_tags("no markup"), "no markup");
    }

    #[test]
    fn test_printable_cv_renders_fixture() {
        let data = vitae_core::test_fixtures::site_data();
        let cv = printable_cv(&data);
        assert!(cv.contains("A. Researcher"));
        assert!(cv.contains("Doctoral"));
        assert!(cv.contains("Journal Articles (1)"));
        assert!(cv.contains("Thesis: \"On Caching\""));
    }
}
