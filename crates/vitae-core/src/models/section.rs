use serde::{Deserialize, Serialize};

/// Header block every content section carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionInfo {
    pub title: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub icon_class: String,
}

/// Date range attached to degrees, roles, memberships and projects.
///
/// Dates are loosely formatted author-supplied strings (e.g. "2019.09",
/// "2021_XX", "Present"); interpretation is left to the display layer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Timeframe {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub max_duration: Option<String>,
    #[serde(default)]
    pub award_date: Option<String>,
}
