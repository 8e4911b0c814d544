use nestrank_core::{Listing, Result};

use crate::ListingSource;

/// Listing source over a fixed in-memory set. Each fetch clones the set, so
/// callers get the same owned snapshot a real store would hand back.
pub struct InMemorySource {
    listings: Vec<Listing>,
}

impl InMemorySource {
    #[must_use]
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

impl ListingSource for InMemorySource {
    fn fetch(&self) -> Result<Vec<Listing>> {
        Ok(self.listings.clone())
    }
}
