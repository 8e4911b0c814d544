//! # nestrank Core
//!
//! Core library for the nestrank housing service.
//!
//! This crate provides the data model and the ranking engine:
//!
//! - [`Listing`] - One housing record with location, attributes, and amenity distances
//! - [`Criteria`] - The amenity dimensions enabled for a ranking request
//! - [`rank`] - Stable ascending sort by Euclidean distance to the ideal profile
//!
//! ## Example
//!
//! ```rust
//! use nestrank_core::{rank, Criteria, Listing};
//!
//! let listings: Vec<Listing> = vec![/* fetched by a listing source */];
//! let criteria = Criteria::from_flags(Some("true"), None, Some("true"));
//! let ordered = rank(listings, &criteria).unwrap();
//! ```

pub mod criteria;
pub mod error;
pub mod listing;
pub mod rank;

pub use criteria::{Amenity, Criteria};
pub use error::{Error, Result};
pub use listing::Listing;
pub use rank::{euclidean_distance, feature_vector, ideal_vector, rank, score, IDEAL_DISTANCE};
