use kijiji_scraper_lib::{logger, url_generator};
use kijiji_scraper_lib::{run_cycle, Config, HttpFetcher, ListingStore, TwilioConfig, TwilioNotifier};

use log::{error, info, warn};
use std::thread;
use std::time::Duration;

fn main() {
    logger::init();
    info!("Starting Kijiji listing scraper...");

    let config_path = std::env::var("CONFIG").unwrap_or_else(|_| "config.json".to_string());
    let config = Config::load(&config_path);

    if config.recipients.is_empty() {
        warn!("No SMS recipients configured; new listings will only be logged.");
    }

    // Startup misconfiguration is the only thing allowed to end the process.
    let twilio = match TwilioConfig::from_env() {
        Ok(t) => t,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let page_urls = match url_generator::generate_page_urls(&config.base_url, config.max_pages) {
        Ok(urls) => urls,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let fetcher = HttpFetcher::new();
    let notifier = TwilioNotifier::new(twilio);
    let mut store = ListingStore::load(&config.store_file);

    loop {
        info!("Starting scan cycle for search query: {}", config.base_url);

        let report = run_cycle(&fetcher, &notifier, &config, &page_urls, &mut store);

        info!(
            "Cycle finished: {}/{} pages ok, {} new listings, {} known in total.",
            report.pages_ok(),
            report.pages.len(),
            report.new_listings,
            store.len()
        );

        info!("Sleeping for {} seconds...", config.scan_interval_secs);
        thread::sleep(Duration::from_secs(config.scan_interval_secs));
    }
}
