//! Core library for vitae: loading a personal portfolio's published JSON
//! data set into one typed, cached, in-memory document.
//!
//! The pieces:
//!
//! - [`resources::Resource`]: the closed set of resource names
//! - [`models::SiteData`]: the typed combined document
//! - [`api::DataClient`]: HTTP fetches, one per resource file
//! - [`cache::CacheStore`]: local two-entry persistence with time-based
//!   expiration
//! - [`loader::SiteLoader`]: the one-shot cache-or-fetch resolution

pub mod api;
pub mod cache;
pub mod config;
pub mod loader;
pub mod models;
pub mod resources;

#[cfg(any(test, feature = "fixtures"))]
pub mod test_fixtures;

pub use api::{DataClient, FetchError};
pub use cache::{CacheError, CacheStore, CachedDocument};
pub use config::Config;
pub use loader::{LoadError, LoadSource, SiteLoader};
pub use models::SiteData;
pub use resources::Resource;
