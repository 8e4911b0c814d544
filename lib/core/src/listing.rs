use serde::{Deserialize, Serialize};

use crate::criteria::Amenity;

/// A single housing record: location, physical attributes, price, and the
/// three amenity proximity distances used for ranking.
///
/// Wire names are camelCase to match the payload callers already consume
/// (`zipCode`, `distanceFromWholeFoods`, ...). Listings are built by a
/// listing source per fetch and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub number_of_rooms: u32,
    pub square_feet: f64,
    pub price: f64,
    /// Distance to the nearest public transportation stop.
    pub distance_from_public_transportation: f64,
    /// Distance to the nearest grocery store.
    pub distance_from_whole_foods: f64,
    /// Distance to the nearest park.
    pub distance_from_parks: f64,
}

impl Listing {
    /// Distance field for the given amenity dimension.
    #[inline]
    #[must_use]
    pub fn distance_to(&self, amenity: Amenity) -> f64 {
        match amenity {
            Amenity::Grocery => self.distance_from_whole_foods,
            Amenity::Transit => self.distance_from_public_transportation,
            Amenity::Park => self.distance_from_parks,
        }
    }
}
