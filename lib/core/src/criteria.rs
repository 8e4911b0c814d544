use serde::{Deserialize, Serialize};

/// One amenity proximity dimension a caller can rank on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Amenity {
    Grocery,
    Transit,
    Park,
}

impl Amenity {
    /// Canonical dimension order. Feature and ideal vectors are both built in
    /// this order, which is all Euclidean distance requires.
    pub const ALL: [Amenity; 3] = [Amenity::Grocery, Amenity::Transit, Amenity::Park];

    /// Wire name of the listing field this dimension reads.
    #[must_use]
    pub fn field_name(self) -> &'static str {
        match self {
            Amenity::Grocery => "distanceFromWholeFoods",
            Amenity::Transit => "distanceFromPublicTransportation",
            Amenity::Park => "distanceFromParks",
        }
    }
}

/// The subset of amenity dimensions enabled for a ranking request.
///
/// Built once at the boundary from raw query flags; everything past the
/// boundary works with plain booleans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Criteria {
    pub grocery: bool,
    pub transit: bool,
    pub park: bool,
}

impl Criteria {
    #[inline]
    #[must_use]
    pub fn new(grocery: bool, transit: bool, park: bool) -> Self {
        Self { grocery, transit, park }
    }

    /// Parse raw query flags. A dimension is enabled only by the literal
    /// string `"true"`; absent or any other value means disabled. Never errors.
    #[must_use]
    pub fn from_flags(
        check_stores: Option<&str>,
        check_transit: Option<&str>,
        check_parks: Option<&str>,
    ) -> Self {
        let enabled = |flag: Option<&str>| flag == Some("true");
        Self {
            grocery: enabled(check_stores),
            transit: enabled(check_transit),
            park: enabled(check_parks),
        }
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, amenity: Amenity) -> bool {
        match amenity {
            Amenity::Grocery => self.grocery,
            Amenity::Transit => self.transit,
            Amenity::Park => self.park,
        }
    }

    /// Enabled dimensions in canonical order.
    pub fn enabled(&self) -> impl Iterator<Item = Amenity> + '_ {
        Amenity::ALL.into_iter().filter(|a| self.contains(*a))
    }

    /// Number of enabled dimensions (the feature vector length).
    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.enabled().count()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.grocery || self.transit || self.park)
    }
}
