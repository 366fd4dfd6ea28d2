//! Corpus normalization from raw source records.

use applens_core::{Corpus, RawReview};

/// Filter raw review records into a clean, ordered corpus.
///
/// Keeps records whose `content` is present and non-empty after whitespace
/// trimming, preserving relative order. Excluded records are silently
/// dropped — an empty or entirely invalid input yields an empty corpus,
/// which is not an error here; downstream stages check for it.
#[must_use]
pub fn normalize_reviews(raw: Vec<RawReview>) -> Corpus {
    let fetched = raw.len();
    let corpus = Corpus::from_documents(raw.into_iter().filter_map(|review| review.content));
    if corpus.len() < fetched {
        tracing::debug!(
            fetched,
            kept = corpus.len(),
            dropped = fetched - corpus.len(),
            "dropped reviews without usable text"
        );
    }
    corpus
}
