use std::collections::BTreeMap;
use std::path::Path;

use chrono::Local;
use log::{error, info};
use serde::{Deserialize, Serialize};

use crate::error::ScanError;

/// One notified listing. Created the first time a title matches a keyword
/// and is not already in the store; never mutated or deleted afterward.
/// Field names match the legacy store file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingRecord {
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Date")]
    pub date: String,
}

/// Persisted history of every listing we have ever notified about, keyed by
/// the exact listing title. Loaded wholesale at startup and overwritten
/// wholesale at the end of each cycle; there are no partial writes, so the
/// file on disk always reflects the complete in-memory state as of the last
/// successful save.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingStore {
    listings: BTreeMap<String, ListingRecord>,
}

impl ListingStore {
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path_ref = path.as_ref();
        if !path_ref.exists() {
            info!("No listing store at {:?}, starting with empty history.", path_ref);
            return ListingStore::default();
        }

        let content = match std::fs::read_to_string(path_ref) {
            Ok(c) => c,
            Err(e) => {
                error!("Failed to read listing store {:?}: {}. Starting fresh.", path_ref, e);
                return ListingStore::default();
            }
        };

        match serde_json::from_str::<ListingStore>(&content) {
            Ok(store) => {
                info!("Loaded {} previously notified listings from {:?}", store.len(), path_ref);
                store
            }
            Err(e) => {
                error!("Failed to parse listing store {:?}: {}. Starting fresh.", path_ref, e);
                ListingStore::default()
            }
        }
    }

    /// Full overwrite of the store file. On failure the new records remain
    /// in memory, so dedup still holds until the next save attempt.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ScanError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ScanError::Persist(e.to_string()))?;
        std::fs::write(path.as_ref(), json).map_err(|e| ScanError::Persist(e.to_string()))
    }

    pub fn contains(&self, title: &str) -> bool {
        self.listings.contains_key(title)
    }

    /// Records a listing under its exact title, stamped with the local time.
    pub fn insert(&mut self, title: &str, url: &str) {
        self.listings.insert(
            title.to_string(),
            ListingRecord {
                url: url.to_string(),
                date: Local::now().format("%d/%m/%Y %H:%M:%S").to_string(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ListingRecord)> {
        self.listings.iter()
    }
}
