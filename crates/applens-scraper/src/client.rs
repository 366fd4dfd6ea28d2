//! HTTP client for the Play Store `batchexecute` review RPC.

use std::time::Duration;

use applens_core::{AppConfig, RawReview, ReviewSource, SourceError};
use serde_json::json;

use crate::error::ScraperError;
use crate::parse::parse_reviews_response;
use crate::rate_limit::retry_with_backoff;

/// Production base URL; tests point the client at a local mock server.
pub const PLAY_STORE_BASE_URL: &str = "https://play.google.com";

const BATCH_EXECUTE_PATH: &str = "/_/PlayStoreUi/data/batchexecute";

/// Review page size requested per RPC call.
const REVIEWS_PER_PAGE: u32 = 199;

/// Sort-order discriminant for newest-first.
const SORT_NEWEST: u32 = 2;

/// Maximum number of pages to fetch before returning an error.
/// Prevents infinite loops on cycling continuation tokens.
pub(crate) const MAX_PAGES: usize = 200;

/// HTTP client for Play Store reviews.
///
/// Handles rate limiting (429), not-found (404), and other non-2xx
/// responses as typed errors, and follows continuation tokens for callers
/// driving multi-page fetches. Transient errors (429, network failures)
/// are automatically retried with exponential backoff up to the configured
/// number of additional attempts.
pub struct PlayStoreClient {
    client: reqwest::Client,
    url: reqwest::Url,
    max_retries: u32,
    backoff_base_secs: u64,
    inter_request_delay_ms: u64,
}

impl PlayStoreClient {
    /// Creates a client against `base_url` with the configured timeout,
    /// `User-Agent`, retry policy, language, and storefront country.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidBaseUrl`] if `base_url` does not
    /// parse, and [`ScraperError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(base_url: &str, config: &AppConfig) -> Result<Self, ScraperError> {
        let joined = format!("{}{BATCH_EXECUTE_PATH}", base_url.trim_end_matches('/'));
        let mut url =
            reqwest::Url::parse(&joined).map_err(|e| ScraperError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: e.to_string(),
            })?;
        url.query_pairs_mut()
            .append_pair("hl", &config.review_lang)
            .append_pair("gl", &config.review_country);

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.scraper_request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.scraper_user_agent)
            .build()?;

        Ok(Self {
            client,
            url,
            max_retries: config.scraper_max_retries,
            backoff_base_secs: config.scraper_retry_backoff_base_secs,
            inter_request_delay_ms: config.scraper_inter_request_delay_ms,
        })
    }

    /// Creates a client against the production storefront.
    ///
    /// # Errors
    ///
    /// See [`Self::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ScraperError> {
        Self::new(PLAY_STORE_BASE_URL, config)
    }

    /// Fetches one review page, with automatic retry on transient errors.
    ///
    /// Returns the page's records and the continuation token for the next
    /// page, if any.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::RateLimited`] — HTTP 429 after all retries exhausted.
    /// - [`ScraperError::NotFound`] — HTTP 404 (not retried).
    /// - [`ScraperError::UnexpectedStatus`] — any other non-2xx status.
    /// - [`ScraperError::Http`] — network failure after all retries exhausted.
    /// - [`ScraperError::Parse`] — response body is not the expected envelope.
    pub async fn fetch_reviews_page(
        &self,
        app_id: &str,
        token: Option<&str>,
    ) -> Result<(Vec<RawReview>, Option<String>), ScraperError> {
        let body = review_request_body(app_id, REVIEWS_PER_PAGE, token);

        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let body = body.clone();
            async move {
                let response = self
                    .client
                    .post(self.url.clone())
                    .form(&[("f.req", body.as_str())])
                    .send()
                    .await?;
                let status = response.status();

                if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                    let retry_after_secs = response
                        .headers()
                        .get(reqwest::header::RETRY_AFTER)
                        .and_then(|v| v.to_str().ok())
                        .and_then(|s| s.parse::<u64>().ok())
                        .unwrap_or(60);
                    return Err(ScraperError::RateLimited {
                        domain: self.url.host_str().unwrap_or("unknown").to_owned(),
                        retry_after_secs,
                    });
                }

                if status == reqwest::StatusCode::NOT_FOUND {
                    return Err(ScraperError::NotFound {
                        app_id: app_id.to_owned(),
                    });
                }

                if !status.is_success() {
                    return Err(ScraperError::UnexpectedStatus {
                        status: status.as_u16(),
                        url: self.url.to_string(),
                    });
                }

                let text = response.text().await?;
                parse_reviews_response(&text, &format!("reviews page for {app_id}"))
            }
        })
        .await
    }

    /// Fetches all reviews for `app_id`, newest first, by following
    /// continuation tokens until exhaustion.
    ///
    /// `inter_request_delay_ms` from the config is applied between page
    /// requests (after every page except the first).
    ///
    /// **All-or-nothing semantics**: on any page failure, already-fetched
    /// reviews from earlier pages are discarded and the error is returned.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::fetch_reviews_page`]. Returns
    /// [`ScraperError::PaginationLimit`] if the number of pages exceeds
    /// the internal cap.
    pub async fn fetch_all_reviews(&self, app_id: &str) -> Result<Vec<RawReview>, ScraperError> {
        let mut all_reviews: Vec<RawReview> = Vec::new();
        let mut token: Option<String> = None;
        let mut is_first_page = true;
        let mut page_count = 0usize;

        loop {
            page_count += 1;
            if page_count > MAX_PAGES {
                return Err(ScraperError::PaginationLimit {
                    app_id: app_id.to_owned(),
                    max_pages: MAX_PAGES,
                });
            }

            if !is_first_page && self.inter_request_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.inter_request_delay_ms)).await;
            }
            is_first_page = false;

            let (reviews, next_token) = self.fetch_reviews_page(app_id, token.as_deref()).await?;
            let page_is_empty = reviews.is_empty();
            all_reviews.extend(reviews);

            token = next_token;
            if token.is_none() || page_is_empty {
                break;
            }
        }

        tracing::info!(
            app_id,
            reviews = all_reviews.len(),
            pages = page_count,
            "review fetch complete"
        );
        Ok(all_reviews)
    }
}

impl ReviewSource for PlayStoreClient {
    async fn fetch_reviews(&self, app_id: &str) -> Result<Vec<RawReview>, SourceError> {
        self.fetch_all_reviews(app_id)
            .await
            .map_err(|e| SourceError(e.to_string()))
    }
}

/// Builds the `f.req` form payload for one review page request.
///
/// The RPC wraps a JSON-encoded request spec inside an outer envelope, so
/// the spec is serialized to a string before being embedded.
fn review_request_body(app_id: &str, count: u32, token: Option<&str>) -> String {
    let token_value = token.map_or(serde_json::Value::Null, |t| {
        serde_json::Value::String(t.to_owned())
    });
    let request_spec = json!([
        null,
        null,
        [2, SORT_NEWEST, [count, null, token_value], null, []],
        [app_id, 7]
    ]);
    json!([[["UsvDTd", request_spec.to_string(), null, "generic"]]]).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_embeds_app_id_and_count() {
        let body = review_request_body("com.example.app", 199, None);
        assert!(body.contains("UsvDTd"));
        assert!(body.contains("com.example.app"));
        assert!(body.contains("199"));
    }

    #[test]
    fn request_body_carries_continuation_token() {
        let without = review_request_body("com.example.app", 199, None);
        let with = review_request_body("com.example.app", 199, Some("token-xyz"));
        assert!(!without.contains("token-xyz"));
        assert!(with.contains("token-xyz"));
    }
}
