use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use nestrank_core::{Listing, Result};
use tracing::debug;

use crate::ListingSource;

/// Listing source backed by a JSON dataset file (a top-level array of
/// listings in wire format).
///
/// The file is re-read on every fetch so edits show up on the next request,
/// matching the no-result-caching contract of the service.
pub struct JsonDataset {
    path: PathBuf,
}

impl JsonDataset {
    #[must_use]
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ListingSource for JsonDataset {
    fn fetch(&self) -> Result<Vec<Listing>> {
        let file = File::open(&self.path)?;
        let listings: Vec<Listing> = serde_json::from_reader(BufReader::new(file))?;
        debug!("Loaded {} listings from {:?}", listings.len(), self.path);
        Ok(listings)
    }
}
