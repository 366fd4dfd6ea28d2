//! Application configuration shape.

use std::path::PathBuf;

/// Runtime configuration, loaded from `APPLENS_*` environment variables.
///
/// Every field has a default, so a bare environment yields a working
/// configuration; see [`crate::config::load_app_config`] for the variable
/// names and defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory artifacts are written to. Created on demand, idempotently.
    pub output_dir: PathBuf,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Review language requested from the store (`hl` parameter).
    pub review_lang: String,
    /// Review storefront country (`gl` parameter).
    pub review_country: String,
    pub scraper_request_timeout_secs: u64,
    pub scraper_user_agent: String,
    /// Retry attempts after the first failure for transient scraper errors.
    pub scraper_max_retries: u32,
    /// Base delay for the scraper's exponential backoff.
    pub scraper_retry_backoff_base_secs: u64,
    /// Delay between review page requests.
    pub scraper_inter_request_delay_ms: u64,
}
