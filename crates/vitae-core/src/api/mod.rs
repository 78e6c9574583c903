//! HTTP access to the published portfolio data files.

mod client;
mod error;

pub use client::DataClient;
pub use error::FetchError;
