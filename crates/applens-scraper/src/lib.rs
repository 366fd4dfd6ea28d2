//! Review scraping client for the Google Play storefront.
//!
//! Fetches all reviews for an app id, newest first, by driving the public
//! `batchexecute` RPC the Play web UI uses: POST a positional request
//! payload, strip the anti-JSON prefix from the response, parse the
//! positional review entries, and follow continuation tokens across pages.
//! Transient failures (429, network errors) are retried with exponential
//! backoff; a page cap guards against cycling tokens.

mod client;
mod parse;
mod rate_limit;

pub mod error;

pub use client::{PlayStoreClient, PLAY_STORE_BASE_URL};
pub use error::ScraperError;
