//! The fixed set of JSON resources that make up a portfolio data set.
//!
//! Resource names are defined by the application, not user-supplied. Every
//! name in [`Resource::ALL`] must resolve for a load to succeed; the combined
//! document is all-or-nothing.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One named JSON resource backing one content category of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Site,
    PersonalInfo,
    KeyMetrics,
    Education,
    ProfessionalExperience,
    ExpertiseAchievements,
    Skills,
    HonorsAwards,
    CoursesTrainingsCertificates,
    Projects,
    Memberships,
    SessionsEvents,
    Languages,
    Portfolios,
    Volunteerings,
    Publications,
    Contacts,
    EaLogo,
    Copyright,
    Diary,
    Gallery,
}

impl Resource {
    /// Every resource in the fixed set, in fetch order.
    pub const ALL: [Resource; 21] = [
        Resource::Site,
        Resource::PersonalInfo,
        Resource::KeyMetrics,
        Resource::Education,
        Resource::ProfessionalExperience,
        Resource::ExpertiseAchievements,
        Resource::Skills,
        Resource::HonorsAwards,
        Resource::CoursesTrainingsCertificates,
        Resource::Projects,
        Resource::Memberships,
        Resource::SessionsEvents,
        Resource::Languages,
        Resource::Portfolios,
        Resource::Volunteerings,
        Resource::Publications,
        Resource::Contacts,
        Resource::EaLogo,
        Resource::Copyright,
        Resource::Diary,
        Resource::Gallery,
    ];

    /// The resource name, used as the key in the combined document.
    pub fn name(&self) -> &'static str {
        match self {
            Resource::Site => "site",
            Resource::PersonalInfo => "personal_info",
            Resource::KeyMetrics => "key_metrics",
            Resource::Education => "education",
            Resource::ProfessionalExperience => "professional_experience",
            Resource::ExpertiseAchievements => "expertise_achievements",
            Resource::Skills => "skills",
            Resource::HonorsAwards => "honors_awards",
            Resource::CoursesTrainingsCertificates => "courses_trainings_certificates",
            Resource::Projects => "projects",
            Resource::Memberships => "memberships",
            Resource::SessionsEvents => "sessions_events",
            Resource::Languages => "languages",
            Resource::Portfolios => "portfolios",
            Resource::Volunteerings => "volunteerings",
            Resource::Publications => "publications",
            Resource::Contacts => "contacts",
            Resource::EaLogo => "ea_logo",
            Resource::Copyright => "copyright",
            Resource::Diary => "diary",
            Resource::Gallery => "gallery",
        }
    }

    /// The file name fetched from the base path for this resource.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.name())
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug)]
#[error("unknown resource name: {0}")]
pub struct UnknownResource(String);

impl FromStr for Resource {
    type Err = UnknownResource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Resource::ALL
            .iter()
            .copied()
            .find(|r| r.name() == s)
            .ok_or_else(|| UnknownResource(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_names_unique() {
        let mut names: Vec<_> = Resource::ALL.iter().map(|r| r.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Resource::ALL.len());
    }

    #[test]
    fn test_name_round_trip() {
        for resource in Resource::ALL {
            assert_eq!(resource.name().parse::<Resource>().unwrap(), resource);
        }
    }

    #[test]
    fn test_file_name() {
        assert_eq!(Resource::Site.file_name(), "site.json");
        assert_eq!(
            Resource::CoursesTrainingsCertificates.file_name(),
            "courses_trainings_certificates.json"
        );
    }

    #[test]
    fn test_unknown_name_rejected() {
        assert!("not_a_resource".parse::<Resource>().is_err());
    }
}
