//! # nestrank Source
//!
//! Data access for the nestrank housing service.
//!
//! The ranking engine only needs an in-memory batch of listings per request.
//! [`ListingSource`] is the seam that supplies it; the backing store behind a
//! source is its own concern (connection handling, credentials, schema).
//!
//! - [`JsonDataset`] - listings loaded from a JSON dataset file per fetch
//! - [`InMemorySource`] - a fixed set of listings, mainly for tests

pub mod dataset;
pub mod memory;

use nestrank_core::{Listing, Result};

/// Supplies a fresh batch of listings for one request. No caching across
/// fetches; each call returns an owned snapshot.
pub trait ListingSource: Send + Sync {
    fn fetch(&self) -> Result<Vec<Listing>>;
}

pub use dataset::JsonDataset;
pub use memory::InMemorySource;
