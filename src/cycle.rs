use log::{error, info, warn};
use url::Url;

use crate::config::Config;
use crate::error::ScanError;
use crate::extractor::{find_listing_boundary, parse_anchors};
use crate::fetcher::Fetch;
use crate::listing_store::ListingStore;
use crate::matcher::is_new_match;
use crate::notifier::{notify_all, Notify};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageStats {
    /// All anchors on the page, chrome included.
    pub anchors: usize,
    /// Anchors from the listing boundary onward.
    pub candidates: usize,
    /// Candidates that matched a keyword and were not already in the store.
    pub new_matches: usize,
}

#[derive(Debug)]
pub struct PageOutcome {
    pub url: String,
    pub result: Result<PageStats, ScanError>,
}

/// Aggregated result of one full pass over the generated page URLs.
/// Failures are captured here per page; nothing inside a cycle terminates
/// the process.
#[derive(Debug, Default)]
pub struct CycleReport {
    pub pages: Vec<PageOutcome>,
    pub new_listings: usize,
    pub persist_error: Option<ScanError>,
}

impl CycleReport {
    pub fn pages_ok(&self) -> usize {
        self.pages.iter().filter(|p| p.result.is_ok()).count()
    }
}

/// Runs one scan cycle: fetch each page in order, extract and evaluate its
/// listings, notify and record new matches, then persist the whole store.
///
/// A fetch failure on the base page aborts the remaining pages of this cycle
/// (the site is presumed down); a failure on a later page only skips that
/// page. Either way the store is persisted with whatever was gathered, and
/// the next attempt is the next scheduled cycle.
pub fn run_cycle(
    fetcher: &dyn Fetch,
    notifier: &dyn Notify,
    config: &Config,
    page_urls: &[String],
    store: &mut ListingStore,
) -> CycleReport {
    let mut report = CycleReport::default();
    let site_root = Url::parse(&config.base_url).ok();

    for (page_index, url) in page_urls.iter().enumerate() {
        let body = match fetcher.fetch(url) {
            Ok(body) => body,
            Err(e) => {
                warn!("{}", e);
                report.pages.push(PageOutcome { url: url.clone(), result: Err(e) });
                if page_index == 0 {
                    warn!("Base page unreachable, aborting the remaining pages of this cycle.");
                    break;
                }
                continue;
            }
        };

        info!("Loaded site content for {}", url);

        let anchors = parse_anchors(&body);
        let Some(boundary) = find_listing_boundary(&anchors, &config.sentinel) else {
            let e = ScanError::SentinelNotFound { url: url.clone() };
            warn!("{}", e);
            report.pages.push(PageOutcome { url: url.clone(), result: Err(e) });
            continue;
        };

        let mut stats = PageStats {
            anchors: anchors.len(),
            candidates: anchors.len() - boundary,
            new_matches: 0,
        };

        for anchor in &anchors[boundary..] {
            if !is_new_match(&anchor.text, &config.keywords, store) {
                continue;
            }

            let listing_url = absolute_listing_url(site_root.as_ref(), &anchor.href);
            info!("POSITIVE: {}", anchor.text);

            // The listing is recorded even if every send fails; it was
            // genuinely new, and re-notifying it forever would be worse
            // than one missed text.
            notify_all(notifier, &config.recipients, &anchor.text, &listing_url);
            store.insert(&anchor.text, &listing_url);
            stats.new_matches += 1;
        }

        report.new_listings += stats.new_matches;
        report.pages.push(PageOutcome { url: url.clone(), result: Ok(stats) });
    }

    if let Err(e) = store.save(&config.store_file) {
        error!("{}", e);
        report.persist_error = Some(e);
    } else {
        info!("Persisted {} listings to {}", store.len(), config.store_file);
    }

    report
}

/// Rebuilds the absolute listing URL from the relative href on the page,
/// resolved against the search URL's origin.
fn absolute_listing_url(site_root: Option<&Url>, href: &str) -> String {
    match site_root.and_then(|root| root.join(href).ok()) {
        Some(url) => url.to_string(),
        None => href.to_string(),
    }
}
