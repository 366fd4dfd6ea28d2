//! Per-document sentiment classification and aggregation.

use applens_core::{
    Corpus, LabeledReview, SentimentBackend, SentimentDistribution, SentimentLabel,
};

/// Outcome of the sentiment stage.
///
/// Recoverable conditions are values, not errors: the orchestrator's
/// branching over this enum is exhaustive and testable without triggering
/// real backend failures.
#[derive(Debug, Clone)]
pub enum SentimentOutcome {
    /// Every document received a label; `reviews` is document-aligned with
    /// the input corpus.
    Classified {
        reviews: Vec<LabeledReview>,
        distribution: SentimentDistribution,
    },
    /// The backend failed; no partial labeling is reported.
    Failed { reason: String },
}

/// Classify each document of `corpus` independently and aggregate the
/// label distribution.
///
/// Documents that are empty after trimming (should not occur
/// post-normalization, but the stage re-validates defensively) receive
/// [`SentimentLabel::Invalid`] rather than being dropped, keeping the
/// output aligned with the input. Any backend error fails the whole stage
/// — a single document's failure is never folded into a success.
pub fn classify_corpus<B: SentimentBackend>(backend: &B, corpus: &Corpus) -> SentimentOutcome {
    let mut reviews = Vec::with_capacity(corpus.len());
    let mut labels = Vec::with_capacity(corpus.len());

    for text in corpus {
        let label = if text.trim().is_empty() {
            SentimentLabel::Invalid
        } else {
            match backend.classify(text) {
                Ok(label) => label,
                Err(e) => {
                    tracing::error!(error = %e, "sentiment backend failed — aborting stage");
                    return SentimentOutcome::Failed {
                        reason: e.to_string(),
                    };
                }
            }
        };
        labels.push(label);
        reviews.push(LabeledReview {
            text: text.clone(),
            label,
        });
    }

    let distribution = SentimentDistribution::from_labels(&labels);
    tracing::info!(
        documents = reviews.len(),
        labels = distribution.len(),
        "sentiment classification complete"
    );

    SentimentOutcome::Classified {
        reviews,
        distribution,
    }
}
