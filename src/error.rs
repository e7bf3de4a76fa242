use thiserror::Error;

/// Everything that can go wrong inside one scan cycle, plus the two
/// startup-only variants surfaced by the binary driver.
///
/// Nothing in here triggers a process exit on its own: fetch and parse
/// failures are captured per page in the cycle report, notification
/// failures are logged per recipient, and the only "retry" anywhere is
/// the next scheduled cycle.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("fetch of {url} returned status {status}")]
    FetchStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The "Sign Up" landmark that precedes the first real listing was
    /// missing from the page, so no listing boundary could be located.
    #[error("listing boundary sentinel not found in page {url}")]
    SentinelNotFound { url: String },

    #[error("failed to notify {recipient}: {reason}")]
    Notify { recipient: String, reason: String },

    #[error("failed to persist listing store: {0}")]
    Persist(String),

    #[error("bad base URL {url}: {reason}")]
    BadBaseUrl { url: String, reason: String },

    #[error("required environment variable {var} is not set")]
    MissingEnv { var: String },
}
