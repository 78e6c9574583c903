//! Typed models for the portfolio data set.
//!
//! Every resource in [`crate::resources::Resource::ALL`] has a schema here,
//! grouped by domain:
//!
//! - `site`: site-wide configuration (assets, cache settings, footer)
//! - `section`: shapes shared across content sections (headers, timeframes)
//! - `profile`: hero, profile summary, key metrics, contacts
//! - `resume`: education, professional experience, skills, languages
//! - `showcase`: awards, certificates, projects, memberships, events,
//!   portfolios, volunteering, publications
//!
//! Payloads are validated against these schemas at the load boundary; the
//! shapes are tolerant (`Option` / `#[serde(default)]`) wherever the site
//! treats a field as optional.

pub mod profile;
pub mod resume;
pub mod section;
pub mod showcase;
pub mod site;

pub use profile::{Contacts, ContactItem, Hero, KeyMetric, KeyMetrics, KeyPoint, PersonalInfo, ProfileSummary};
pub use resume::{
    Degree, Education, ExperienceGroup, ExperienceOrganisation, Language, Languages,
    ProfessionalExperience, Role, Skill, Skills,
};
pub use section::{SectionInfo, Timeframe};
pub use showcase::{
    Award, Course, CoursesTrainingsCertificates, HonorsAwards, Membership, Memberships,
    PortfolioRepo, Portfolios, Project, Projects, Publication, PublicationGroup, Publications,
    SessionEvent, SessionsEvents, Volunteering, Volunteerings,
};
pub use site::{CacheSettings, SiteAssets, SiteConfig};

use serde::{Deserialize, Serialize};

/// The combined document: every resource in the fixed set, keyed by resource
/// name. Field names match resource names exactly, so the JSON serialization
/// of this struct is the name-to-document mapping persisted in the cache.
///
/// A value of this type is complete by construction; a partial document is
/// unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteData {
    pub site: SiteConfig,
    pub personal_info: PersonalInfo,
    pub key_metrics: KeyMetrics,
    pub education: Education,
    pub professional_experience: ProfessionalExperience,
    /// Fetched for completeness; no view consumes it directly.
    pub expertise_achievements: serde_json::Value,
    pub skills: Skills,
    pub honors_awards: HonorsAwards,
    pub courses_trainings_certificates: CoursesTrainingsCertificates,
    pub projects: Projects,
    pub memberships: Memberships,
    pub sessions_events: SessionsEvents,
    pub languages: Languages,
    pub portfolios: Portfolios,
    pub volunteerings: Volunteerings,
    pub publications: Publications,
    pub contacts: Contacts,
    pub ea_logo: serde_json::Value,
    pub copyright: serde_json::Value,
    pub diary: serde_json::Value,
    pub gallery: serde_json::Value,
}

impl SiteData {
    /// Expiration duration for a cached copy of this document, read from the
    /// site configuration. Absent or non-positive values mean one day.
    pub fn cache_expiration_seconds(&self) -> i64 {
        self.site
            .cache_settings
            .as_ref()
            .and_then(|s| s.expiration_seconds)
            .filter(|&s| s > 0)
            .unwrap_or(site::DEFAULT_EXPIRATION_SECONDS)
    }
}
