use std::path::Path;

use log::{error, info, warn};
use serde::Deserialize;

use crate::error::ScanError;

/// Static scan configuration. Loaded once at startup from a JSON file;
/// if no file is present the built-in defaults (the original bike-search
/// deployment) are used.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Lowercase substrings to match against listing titles.
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,
    /// E.164 phone numbers to text on every new match.
    #[serde(default)]
    pub recipients: Vec<String>,
    /// Total result pages per cycle: the base page plus pages 2..=max_pages.
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,
    #[serde(default = "default_scan_interval")]
    pub scan_interval_secs: u64,
    /// Text landmark that appears in the last chrome anchor before the
    /// first real listing.
    #[serde(default = "default_sentinel")]
    pub sentinel: String,
    #[serde(default = "default_store_file")]
    pub store_file: String,
}

fn default_base_url() -> String {
    "https://www.kijiji.ca/b-bikes/ottawa/bike/k0c644l1700185?radius=104.0&gpTopAds=y&address=Ottawa%2C+ON&ll=45.421530,-75.697193".to_string()
}

fn default_keywords() -> Vec<String> {
    [
        "specialized",
        "giant",
        "cervelo",
        "cannondale",
        "norco",
        "trek",
        "ridley",
        "opus",
        "cube",
        "bianci",
        "canyon",
        "pinnacle",
        "brodie",
        "salsa",
        "scott",
        "ultegra",
        "dura ace",
        "zipp",
        "look",
        "fuji",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_max_pages() -> u32 {
    4
}

fn default_scan_interval() -> u64 {
    300
}

fn default_sentinel() -> String {
    "Sign Up".to_string()
}

fn default_store_file() -> String {
    "listings.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: default_base_url(),
            keywords: default_keywords(),
            recipients: Vec::new(),
            max_pages: default_max_pages(),
            scan_interval_secs: default_scan_interval(),
            sentinel: default_sentinel(),
            store_file: default_store_file(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path_ref = path.as_ref();
        if !path_ref.exists() {
            warn!("Config file {:?} not found, using built-in defaults.", path_ref);
            return Config::default();
        }

        let content = match std::fs::read_to_string(path_ref) {
            Ok(c) => c,
            Err(e) => {
                error!("Could not read config file {:?}: {}. Using defaults.", path_ref, e);
                return Config::default();
            }
        };

        match serde_json::from_str::<Config>(&content) {
            Ok(config) => {
                info!(
                    "Loaded config from {:?} ({} keywords, {} recipients, {} pages)",
                    path_ref,
                    config.keywords.len(),
                    config.recipients.len(),
                    config.max_pages
                );
                config
            }
            Err(e) => {
                error!("Error parsing config file {:?}: {}. Using defaults.", path_ref, e);
                Config::default()
            }
        }
    }
}

/// Twilio credentials, required environment. Absence of any variable is a
/// startup-fatal misconfiguration, surfaced here so the driver can exit
/// before the first cycle runs.
#[derive(Debug, Clone)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    pub from_number: String,
}

impl TwilioConfig {
    pub fn from_env() -> Result<Self, ScanError> {
        Ok(TwilioConfig {
            account_sid: require_env("KIJIJI_TWILIO_ACCOUNT_SID")?,
            auth_token: require_env("KIJIJI_TWILIO_AUTH_TOKEN")?,
            from_number: require_env("KIJIJI_TWILIO_NUMBER")?,
        })
    }
}

fn require_env(var: &str) -> Result<String, ScanError> {
    std::env::var(var).map_err(|_| ScanError::MissingEnv { var: var.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load("definitely/not/a/real/config.json");
        assert_eq!(config.max_pages, 4);
        assert_eq!(config.scan_interval_secs, 300);
        assert_eq!(config.sentinel, "Sign Up");
        assert!(config.keywords.contains(&"specialized".to_string()));
    }

    #[test]
    fn partial_config_uses_field_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"keywords": ["brompton"], "max_pages": 2}"#).unwrap();
        assert_eq!(config.keywords, vec!["brompton"]);
        assert_eq!(config.max_pages, 2);
        assert_eq!(config.store_file, "listings.json");
        assert!(config.recipients.is_empty());
    }

    #[test]
    fn keyword_defaults_are_separate_entries() {
        // The legacy keyword table fused most brands into one string by a
        // missing separator; the shipped list keeps them distinct.
        let keywords = default_keywords();
        assert_eq!(keywords.len(), 20);
        assert!(keywords.contains(&"trek".to_string()));
        assert!(keywords.contains(&"cervelo".to_string()));
        assert!(!keywords.iter().any(|k| k.contains("cervelocannondale")));
    }
}
