pub mod config;
pub mod cycle;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod listing_store;
pub mod logger;
pub mod matcher;
pub mod notifier;
pub mod url_generator;

// Exporting types for convenience
pub use config::{Config, TwilioConfig};
pub use cycle::{run_cycle, CycleReport, PageOutcome, PageStats};
pub use error::ScanError;
pub use extractor::Anchor;
pub use fetcher::{Fetch, HttpFetcher};
pub use listing_store::{ListingRecord, ListingStore};
pub use notifier::{Notify, TwilioNotifier};
