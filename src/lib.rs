//! # nestrank
//!
//! A housing listing service that ranks listings by amenity proximity.
//!
//! Given a set of listings and a subset of enabled amenity criteria (grocery,
//! transit, parks), nestrank scores each listing by Euclidean distance
//! between its enabled proximity distances and an ideal near-zero profile,
//! then returns the listings in ascending score order (stable on ties).
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! nestrank --data-file ./data/listings.json --http-port 5000
//! ```
//!
//! Then: `GET /houses?checkStores=true&checkTransit=true` returns
//! `{ "housingData": [ ... ] }` ordered best-first.
//!
//! ### As a Library
//!
//! ```rust
//! use nestrank::prelude::*;
//!
//! let listings: Vec<Listing> = vec![/* from a ListingSource */];
//! let criteria = Criteria::new(true, false, true);
//! let ordered = rank(listings, &criteria).unwrap();
//! ```
//!
//! ## Crate Structure
//!
//! - `nestrank-core` - Listing model, criteria, ranking engine
//! - `nestrank-source` - Listing sources (JSON dataset, in-memory)
//! - `nestrank-api` - REST API with permissive CORS

// Re-export core types
pub use nestrank_core::{
    rank, score, euclidean_distance, feature_vector, ideal_vector,
    Amenity, Criteria, Listing,
    Error, Result, IDEAL_DISTANCE,
};

// Re-export sources
pub use nestrank_source::{InMemorySource, JsonDataset, ListingSource};

// Re-export API
pub use nestrank_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        rank, score, euclidean_distance,
        Amenity, Criteria, Listing,
        Error, Result, IDEAL_DISTANCE,
        InMemorySource, JsonDataset, ListingSource,
        RestApi,
    };
}
