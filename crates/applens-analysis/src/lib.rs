//! Review-analysis pipeline for applens.
//!
//! Takes the raw review records fetched by a [`applens_core::ReviewSource`],
//! normalizes them into a corpus, classifies per-review sentiment with the
//! lexicon model, discovers topics with a seeded LDA over a document-term
//! matrix, and drives the summary renderer. Stage failures are tagged
//! outcome values, never errors crossing stage boundaries, so one broken
//! stage degrades the run instead of aborting it.

pub mod classifier;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod scorer;
pub mod topics;

pub use classifier::{classify_corpus, SentimentOutcome};
pub use error::AnalysisError;
pub use normalize::normalize_reviews;
pub use pipeline::run_analysis;
pub use scorer::{lexicon_score, SentimentModel};
pub use topics::{discover_topics, TopicOutcome, MAX_TOPICS, MIN_DOCUMENTS};
