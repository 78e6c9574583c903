//! Local persistence for the combined site document.
//!
//! The cache is a best-effort optimization: a failed read falls back to a
//! fresh fetch, and a failed write never blocks publishing freshly fetched
//! data.

mod store;

pub use store::{CacheError, CacheStore, CachedDocument};
