use std::time::Duration;

use log::{info, warn};
use reqwest::blocking::Client;

use crate::config::TwilioConfig;
use crate::error::ScanError;

/// Seam between the cycle orchestrator and SMS delivery. One call per
/// (listing, recipient) pair; implementations are synchronous and may fail
/// per recipient without affecting the others.
pub trait Notify {
    fn send(&self, to: &str, body: &str) -> Result<(), ScanError>;
}

/// Sends SMS through the Twilio Messages REST endpoint with basic auth.
pub struct TwilioNotifier {
    client: Client,
    config: TwilioConfig,
}

impl TwilioNotifier {
    pub fn new(config: TwilioConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build Twilio client");

        TwilioNotifier { client, config }
    }

    fn messages_url(&self) -> String {
        format!(
            "https://api.twilio.com/2010-04-01/Accounts/{}/Messages.json",
            self.config.account_sid
        )
    }
}

impl Notify for TwilioNotifier {
    fn send(&self, to: &str, body: &str) -> Result<(), ScanError> {
        let params = [("To", to), ("From", self.config.from_number.as_str()), ("Body", body)];

        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&params)
            .send()
            .map_err(|e| ScanError::Notify { recipient: to.to_string(), reason: e.to_string() })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().unwrap_or_default();
            return Err(ScanError::Notify {
                recipient: to.to_string(),
                reason: format!("Twilio API status {}: {}", status, detail),
            });
        }

        Ok(())
    }
}

/// Texts every configured recipient about one new listing. A failed send is
/// logged and the remaining recipients still get theirs; returns how many
/// sends succeeded.
pub fn notify_all(notifier: &dyn Notify, recipients: &[String], title: &str, url: &str) -> usize {
    let body = format!(
        "BIKE NOTIFIER for: \n - Listing title: {} \n - URL: {}",
        title, url
    );

    let mut sent = 0;
    for recipient in recipients {
        match notifier.send(recipient, &body) {
            Ok(()) => {
                info!("Notified {} about listing '{}'", recipient, title);
                sent += 1;
            }
            Err(e) => warn!("{}", e),
        }
    }
    sent
}
