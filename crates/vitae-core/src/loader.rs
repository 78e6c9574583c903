//! One-shot loader for the combined site document.
//!
//! `SiteLoader` resolves the document exactly once per session: from the
//! local cache when a fresh-enough entry exists, otherwise by fetching every
//! resource concurrently and requiring all of them to succeed. Consumers see
//! `(data, loading)`: `loading` starts true and drops to false once
//! resolution completes, with `data` either the complete document or `None`
//! after a failed load.

use std::sync::Arc;

use chrono::Utc;
use futures::future::try_join_all;
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::api::{DataClient, FetchError};
use crate::cache::{CacheStore, CachedDocument};
use crate::config::Config;
use crate::models::SiteData;
use crate::resources::Resource;

#[derive(Error, Debug)]
pub enum LoadError {
    /// A single resource's fetch failed; the whole batch fails with it.
    #[error("Failed to load resource '{name}': {source}")]
    ResourceFetch {
        name: &'static str,
        #[source]
        source: FetchError,
    },

    /// The assembled document did not match the expected schema.
    #[error("Combined document failed validation: {0}")]
    Validation(#[source] serde_json::Error),
}

/// Where the published document came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    Cache,
    Network,
}

pub struct SiteLoader {
    client: DataClient,
    cache: CacheStore,
    data: Option<Arc<SiteData>>,
    loading: bool,
    source: Option<LoadSource>,
    cache_age: Option<String>,
    /// Skip the cache read for this session (the cache is still written on a
    /// successful fetch).
    bypass_cache: bool,
}

impl SiteLoader {
    pub fn new(client: DataClient, cache: CacheStore) -> Self {
        Self {
            client,
            cache,
            data: None,
            loading: true,
            source: None,
            cache_age: None,
            bypass_cache: false,
        }
    }

    /// Build a loader from the application configuration.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = DataClient::new(config.resolved_base_url())?;
        let cache = CacheStore::new(config.cache_dir()?);
        Ok(Self::new(client, cache))
    }

    pub fn bypass_cache(mut self) -> Self {
        self.bypass_cache = true;
        self
    }

    /// The combined document, once `is_loading` is false: `Some` holds every
    /// resource in the fixed set, `None` means the load failed.
    pub fn data(&self) -> Option<&Arc<SiteData>> {
        self.data.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn source(&self) -> Option<LoadSource> {
        self.source
    }

    /// Human-readable age of the cache entry the document was served from.
    pub fn cache_age(&self) -> Option<&str> {
        self.cache_age.as_deref()
    }

    /// Perform the one-shot load. On failure the error is logged and `data`
    /// stays `None`; there is no automatic retry - the session has to be
    /// restarted to try again.
    pub async fn init(&mut self) {
        match self.load().await {
            Ok((data, source)) => {
                self.data = Some(data);
                self.source = Some(source);
            }
            Err(e) => {
                error!(error = %e, "Site data load failed");
            }
        }
        self.loading = false;
    }

    /// Resolve the combined document: cache first, then a full fresh fetch.
    pub async fn load(&mut self) -> Result<(Arc<SiteData>, LoadSource), LoadError> {
        if !self.bypass_cache {
            if let Some(cached) = self.read_cache() {
                if !cached.is_expired(Utc::now()) {
                    info!(
                        age = %cached.age_display(),
                        expiration_seconds = cached.data.cache_expiration_seconds(),
                        "Loading site data from cache"
                    );
                    self.cache_age = Some(cached.age_display());
                    return Ok((Arc::new(cached.data), LoadSource::Cache));
                }
                info!(age = %cached.age_display(), "Cache entry expired");
            }
        }

        let data = self.fetch_fresh().await?;
        Ok((data, LoadSource::Network))
    }

    /// Read the cache, treating unreadable entries as a miss. The corrupt
    /// entry stays in place; the next successful fetch overwrites it.
    fn read_cache(&self) -> Option<CachedDocument> {
        match self.cache.load() {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "Cache read failed, performing fresh fetch");
                None
            }
        }
    }

    /// Fetch every resource concurrently, all-or-nothing, then validate the
    /// assembled document and persist it best-effort.
    async fn fetch_fresh(&self) -> Result<Arc<SiteData>, LoadError> {
        info!(resources = Resource::ALL.len(), "Fetching fresh site data");

        let fetches = Resource::ALL.iter().map(|&resource| {
            let client = self.client.clone();
            async move {
                let value = client
                    .fetch(resource)
                    .await
                    .map_err(|source| LoadError::ResourceFetch {
                        name: resource.name(),
                        source,
                    })?;
                Ok::<(Resource, Value), LoadError>((resource, value))
            }
        });

        let results = try_join_all(fetches).await?;

        let mut combined = serde_json::Map::with_capacity(results.len());
        for (resource, value) in results {
            combined.insert(resource.name().to_string(), value);
        }

        let data: SiteData =
            serde_json::from_value(Value::Object(combined)).map_err(LoadError::Validation)?;

        // Persistence is an optimization; never let it block publication.
        if let Err(e) = self.cache.store(&data, Utc::now()) {
            warn!(error = %e, "Failed to persist site data cache");
        }

        Ok(Arc::new(data))
    }
}
