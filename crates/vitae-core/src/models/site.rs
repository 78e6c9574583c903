use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Default cache expiration when the site configuration does not set one:
/// one day.
pub const DEFAULT_EXPIRATION_SECONDS: i64 = 86_400;

/// Site-wide configuration (the `site` resource).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub assets: SiteAssets,
    #[serde(default)]
    pub cache_settings: Option<CacheSettings>,
    #[serde(default)]
    pub footer_meta: Option<serde_json::Value>,
}

/// Image and icon lookups keyed by asset name (e.g. `profile_image_formal`,
/// `logo_png`). Ordered maps keep the document serialization deterministic.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SiteAssets {
    #[serde(default)]
    pub images: BTreeMap<String, String>,
    #[serde(default)]
    pub icons: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CacheSettings {
    #[serde(default)]
    pub expiration_seconds: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_site_config_parses() {
        let config: SiteConfig = serde_json::from_str("{}").unwrap();
        assert!(config.cache_settings.is_none());
        assert!(config.assets.images.is_empty());
    }

    #[test]
    fn test_cache_settings_parse() {
        let config: SiteConfig =
            serde_json::from_str(r#"{"cache_settings":{"expiration_seconds":60}}"#).unwrap();
        assert_eq!(
            config.cache_settings.unwrap().expiration_seconds,
            Some(60)
        );
    }
}
