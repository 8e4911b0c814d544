//! Ranking engine: score listings by Euclidean distance to an ideal amenity
//! profile and order them ascending.

use crate::criteria::Criteria;
use crate::error::{Error, Result};
use crate::listing::Listing;

/// Ideal per-dimension distance. A small positive constant rather than zero;
/// since only distances to the ideal are taken, it shifts every score
/// uniformly and never changes relative order.
pub const IDEAL_DISTANCE: f64 = 0.01;

/// Compute L2 (Euclidean) distance between two vectors of equal length.
#[inline]
#[must_use]
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Project a listing's distance fields onto the enabled criteria, in
/// canonical dimension order.
///
/// Fails with [`Error::InvalidListingData`] if any referenced distance is
/// NaN, infinite, or negative, instead of letting garbage propagate into the
/// sort order.
pub fn feature_vector(listing: &Listing, criteria: &Criteria) -> Result<Vec<f64>> {
    let mut features = Vec::with_capacity(criteria.dim());
    for amenity in criteria.enabled() {
        let distance = listing.distance_to(amenity);
        if !distance.is_finite() || distance < 0.0 {
            return Err(Error::InvalidListingData {
                address: listing.address.clone(),
                field: amenity.field_name(),
            });
        }
        features.push(distance);
    }
    Ok(features)
}

/// The ideal point the feature vector is compared against.
#[inline]
#[must_use]
pub fn ideal_vector(dim: usize) -> Vec<f64> {
    vec![IDEAL_DISTANCE; dim]
}

/// Score one listing against the enabled criteria. Lower is better (closer
/// to the ideal). Empty criteria score 0 for every listing.
pub fn score(listing: &Listing, criteria: &Criteria) -> Result<f64> {
    let features = feature_vector(listing, criteria)?;
    let ideal = ideal_vector(features.len());
    Ok(euclidean_distance(&features, &ideal))
}

/// Order listings ascending by score, stable on ties.
///
/// The sort is stable, so equal scores keep their fetch order; with empty
/// criteria every score is 0 and the input comes back unchanged. Pure
/// function: re-ranking an already-ranked list is a no-op.
pub fn rank(listings: Vec<Listing>, criteria: &Criteria) -> Result<Vec<Listing>> {
    if criteria.is_empty() {
        return Ok(listings);
    }

    let mut scored = Vec::with_capacity(listings.len());
    for listing in listings {
        let s = score(&listing, criteria)?;
        scored.push((s, listing));
    }

    // Scores are validated finite above, so partial_cmp never sees NaN.
    scored.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    Ok(scored.into_iter().map(|(_, listing)| listing).collect())
}
