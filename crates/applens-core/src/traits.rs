//! Collaborator seams consumed by the pipeline orchestrator.
//!
//! The pipeline depends on these traits rather than on concrete
//! implementations so the scraper and renderer remain thin, swappable I/O
//! wrappers and stage-failure paths can be exercised in tests without
//! touching the network or a rasterizer.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::{RawReview, SentimentDistribution, SentimentLabel, TopicTerm};

/// The review source collaborator failed outright.
///
/// Distinct from a successful fetch with zero results, which is an `Ok`
/// with an empty `Vec`.
#[derive(Debug, Error)]
#[error("review source unavailable: {0}")]
pub struct SourceError(pub String);

/// The sentiment backend could not classify a document.
///
/// Any backend error fails the whole sentiment stage; partial failure is
/// never silently folded into a success.
#[derive(Debug, Error)]
#[error("sentiment backend failure: {0}")]
pub struct BackendError(pub String);

/// Fetches all reviews for one application identifier, newest first, in
/// the language/region the implementation was configured with.
#[allow(async_fn_in_trait)]
pub trait ReviewSource {
    async fn fetch_reviews(&self, app_id: &str) -> Result<Vec<RawReview>, SourceError>;
}

/// Classifies a single document's sentiment.
///
/// Implementations must be pure per document: the label for a text may not
/// depend on which other documents were classified before it, so documents
/// can be processed in any order with identical results.
pub trait SentimentBackend {
    /// # Errors
    ///
    /// Returns [`BackendError`] if the backend cannot produce a label.
    fn classify(&self, text: &str) -> Result<SentimentLabel, BackendError>;
}

/// Rasterizes numeric/textual summaries into image files.
///
/// Both operations return the written path on success and `None` on
/// failure; rendering failures are the implementation's to log and must
/// never propagate into the pipeline.
pub trait SummaryRenderer {
    fn render_sentiment_chart(
        &self,
        distribution: &SentimentDistribution,
        path: &Path,
    ) -> Option<PathBuf>;

    fn render_word_cloud(&self, terms: &[TopicTerm], path: &Path) -> Option<PathBuf>;
}
