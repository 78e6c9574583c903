use std::path::PathBuf;

use chrono::{DateTime, Duration, TimeZone, Utc};
use thiserror::Error;

use crate::models::SiteData;

/// Well-known entry holding the serialized combined document.
const DATA_KEY: &str = "site_data.json";

/// Well-known entry holding the capture time as string-encoded milliseconds
/// since epoch.
const TIMESTAMP_KEY: &str = "site_data_timestamp";

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Failed to access cache entry {key}: {source}")]
    Io {
        key: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("Cached document is not parseable: {0}")]
    MalformedDocument(#[source] serde_json::Error),

    #[error("Cached timestamp is not parseable: {0}")]
    MalformedTimestamp(String),
}

/// A combined document together with the time it was freshly fetched.
#[derive(Debug, Clone)]
pub struct CachedDocument {
    pub data: SiteData,
    pub captured_at: DateTime<Utc>,
}

impl CachedDocument {
    /// Expiration window for this entry, taken from the cached document's own
    /// site configuration (one day when unset).
    pub fn expiration(&self) -> Duration {
        Duration::seconds(self.data.cache_expiration_seconds())
    }

    /// An entry is expired once its age reaches the expiration window.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now - self.captured_at >= self.expiration()
    }

    pub fn age_minutes(&self) -> i64 {
        (Utc::now() - self.captured_at).num_minutes()
    }

    pub fn age_display(&self) -> String {
        let minutes = self.age_minutes();
        if minutes < 1 {
            // Also covers clock skew
            "just now".to_string()
        } else if minutes < 60 {
            format!("{}m ago", minutes)
        } else if minutes < 1440 {
            let hours = minutes / 60;
            let remaining_mins = minutes % 60;
            if remaining_mins >= 30 {
                format!("{}h ago", hours + 1)
            } else {
                format!("{}h ago", hours)
            }
        } else {
            let days = minutes / 1440;
            let remaining_hours = (minutes % 1440) / 60;
            if remaining_hours >= 12 {
                format!("{}d ago", days + 1)
            } else {
                format!("{}d ago", days)
            }
        }
    }
}

/// Directory-backed store holding exactly two entries: the serialized
/// combined document and its capture timestamp.
pub struct CacheStore {
    cache_dir: PathBuf,
}

impl CacheStore {
    pub fn new(cache_dir: PathBuf) -> Self {
        Self { cache_dir }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.cache_dir.join(key)
    }

    /// Load the cached combined document and its capture time.
    ///
    /// Returns `Ok(None)` when either entry is absent. A present but
    /// unreadable or unparseable entry is an error; callers treat it as a
    /// miss. The corrupt entry is deliberately left in place - the next
    /// successful fresh fetch overwrites both entries anyway.
    pub fn load(&self) -> Result<Option<CachedDocument>, CacheError> {
        let data_path = self.entry_path(DATA_KEY);
        let timestamp_path = self.entry_path(TIMESTAMP_KEY);
        if !data_path.exists() || !timestamp_path.exists() {
            return Ok(None);
        }

        let raw_timestamp = std::fs::read_to_string(&timestamp_path).map_err(|source| {
            CacheError::Io {
                key: TIMESTAMP_KEY,
                source,
            }
        })?;
        let millis: i64 = raw_timestamp
            .trim()
            .parse()
            .map_err(|_| CacheError::MalformedTimestamp(raw_timestamp.trim().to_string()))?;
        let captured_at = Utc
            .timestamp_millis_opt(millis)
            .single()
            .ok_or_else(|| CacheError::MalformedTimestamp(raw_timestamp.trim().to_string()))?;

        let contents = std::fs::read_to_string(&data_path).map_err(|source| CacheError::Io {
            key: DATA_KEY,
            source,
        })?;
        let data: SiteData =
            serde_json::from_str(&contents).map_err(CacheError::MalformedDocument)?;

        Ok(Some(CachedDocument { data, captured_at }))
    }

    /// Persist a freshly fetched document, overwriting any prior entries.
    pub fn store(&self, data: &SiteData, captured_at: DateTime<Utc>) -> Result<(), CacheError> {
        std::fs::create_dir_all(&self.cache_dir).map_err(|source| CacheError::Io {
            key: DATA_KEY,
            source,
        })?;

        let contents = serde_json::to_string(data).map_err(CacheError::MalformedDocument)?;
        std::fs::write(self.entry_path(DATA_KEY), contents).map_err(|source| CacheError::Io {
            key: DATA_KEY,
            source,
        })?;

        std::fs::write(
            self.entry_path(TIMESTAMP_KEY),
            captured_at.timestamp_millis().to_string(),
        )
        .map_err(|source| CacheError::Io {
            key: TIMESTAMP_KEY,
            source,
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::site::{CacheSettings, SiteConfig};

    fn sample_data(expiration_seconds: Option<i64>) -> SiteData {
        let mut value = crate::test_fixtures::combined_document_json();
        if let Some(secs) = expiration_seconds {
            value["site"]["cache_settings"] =
                serde_json::json!({ "expiration_seconds": secs });
        }
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_missing_entries_are_a_clean_miss() {
        let dir = tempfile::tempdir().unwrap();
        let store = CacheStore::new(dir.path().to_path_buf());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_store_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = CacheStore::new(dir.path().to_path_buf());

        let data = sample_data(None);
        let captured_at = Utc.timestamp_millis_opt(1_700_000_000_000).single().unwrap();
        store.store(&data, captured_at).unwrap();

        let cached = store.load().unwrap().unwrap();
        assert_eq!(cached.captured_at, captured_at);
        assert_eq!(cached.data, data);
    }

    #[test]
    fn test_corrupt_document_is_an_error_not_a_miss() {
        let dir = tempfile::tempdir().unwrap();
        let store = CacheStore::new(dir.path().to_path_buf());

        let data = sample_data(None);
        store.store(&data, Utc::now()).unwrap();
        std::fs::write(dir.path().join("site_data.json"), "{not json").unwrap();

        assert!(matches!(
            store.load(),
            Err(CacheError::MalformedDocument(_))
        ));
    }

    #[test]
    fn test_corrupt_timestamp_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = CacheStore::new(dir.path().to_path_buf());

        let data = sample_data(None);
        store.store(&data, Utc::now()).unwrap();
        std::fs::write(dir.path().join("site_data_timestamp"), "yesterday").unwrap();

        assert!(matches!(
            store.load(),
            Err(CacheError::MalformedTimestamp(_))
        ));
    }

    #[test]
    fn test_default_expiration_is_one_day() {
        let cached = CachedDocument {
            data: sample_data(None),
            captured_at: Utc::now(),
        };
        assert_eq!(cached.expiration(), Duration::seconds(86_400));

        let mut stale = cached.clone();
        stale.captured_at = Utc::now() - Duration::seconds(86_401);
        assert!(stale.is_expired(Utc::now()));
        assert!(!cached.is_expired(Utc::now()));
    }

    #[test]
    fn test_configured_expiration_is_honored() {
        let cached = CachedDocument {
            data: sample_data(Some(60)),
            captured_at: Utc::now() - Duration::seconds(30),
        };
        assert!(!cached.is_expired(Utc::now()));

        let expired = CachedDocument {
            data: sample_data(Some(60)),
            captured_at: Utc::now() - Duration::seconds(61),
        };
        assert!(expired.is_expired(Utc::now()));
    }

    #[test]
    fn test_non_positive_expiration_falls_back_to_default() {
        assert_eq!(
            sample_data(Some(0)).cache_expiration_seconds(),
            86_400
        );
        assert_eq!(
            sample_data(Some(-5)).cache_expiration_seconds(),
            86_400
        );
    }

    #[test]
    fn test_expiration_reads_site_settings() {
        let data = SiteData {
            site: SiteConfig {
                cache_settings: Some(CacheSettings {
                    expiration_seconds: Some(7),
                }),
                ..serde_json::from_str("{}").unwrap()
            },
            ..sample_data(None)
        };
        assert_eq!(data.cache_expiration_seconds(), 7);
    }

    #[test]
    fn test_age_display_buckets() {
        let mut cached = CachedDocument {
            data: sample_data(None),
            captured_at: Utc::now(),
        };
        assert_eq!(cached.age_display(), "just now");

        cached.captured_at = Utc::now() - Duration::minutes(5);
        assert_eq!(cached.age_display(), "5m ago");

        cached.captured_at = Utc::now() - Duration::minutes(125);
        assert_eq!(cached.age_display(), "2h ago");
    }
}
