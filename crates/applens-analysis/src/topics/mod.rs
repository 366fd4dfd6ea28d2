//! Topic discovery over the review corpus.
//!
//! Whole-corpus batch stage: tokenize, build a document-term matrix, fit a
//! seeded LDA, rank topics by document mass, and expose the top terms of
//! the leading topics. Every failure mode is a tagged [`TopicOutcome`];
//! nothing escapes this module as an error.

mod dtm;
mod lda;
mod tokenize;

use applens_core::{Corpus, Topic, TopicTerm};

use crate::error::AnalysisError;

use dtm::DocumentTermMatrix;
use lda::LdaModel;

/// Minimum corpus size before modeling is attempted. Below this, clustering
/// is unstable enough to be meaningless, so the stage refuses rather than
/// reporting noise.
pub const MIN_DOCUMENTS: usize = 50;

/// Maximum number of topics exposed to callers, whatever the model found.
pub const MAX_TOPICS: usize = 5;

/// Representative terms reported per topic.
const TERMS_PER_TOPIC: usize = 10;

/// EM passes for the LDA fit.
const MAX_ITERATIONS: usize = 50;

/// Fixed seed so repeated runs over the same corpus agree.
const LDA_SEED: u64 = 42;

/// Outcome of the topic stage.
#[derive(Debug, Clone, PartialEq)]
pub enum TopicOutcome {
    /// Ranked topics, at most [`MAX_TOPICS`], indices 1-based.
    Discovered(Vec<Topic>),
    /// Corpus smaller than [`MIN_DOCUMENTS`]; modeling was not attempted.
    InsufficientData { document_count: usize },
    /// Modeling ran but produced nothing usable (e.g. the vocabulary was
    /// empty after tokenization). Distinct from the guard above.
    NoTopicsFound,
    /// Model construction or extraction failed; the pipeline continues.
    Failed { reason: String },
}

impl TopicOutcome {
    /// User-visible status line for this outcome.
    #[must_use]
    pub fn status_message(&self) -> String {
        match self {
            Self::Discovered(topics) => format!("discovered {} topics", topics.len()),
            Self::InsufficientData { document_count } => format!(
                "not enough data for topic modeling ({document_count} documents, {MIN_DOCUMENTS} required)"
            ),
            Self::NoTopicsFound => "no topics found".to_owned(),
            Self::Failed { reason } => format!("topic modeling failed: {reason}"),
        }
    }
}

/// Discover up to [`MAX_TOPICS`] topics in `corpus`.
///
/// Runs synchronously and may take a while on large corpora; callers that
/// live on an async runtime should wrap it in a blocking task.
#[must_use]
pub fn discover_topics(corpus: &Corpus) -> TopicOutcome {
    if corpus.len() < MIN_DOCUMENTS {
        tracing::info!(
            documents = corpus.len(),
            required = MIN_DOCUMENTS,
            "skipping topic modeling — corpus too small"
        );
        return TopicOutcome::InsufficientData {
            document_count: corpus.len(),
        };
    }

    match model_topics(corpus) {
        Ok(topics) if topics.is_empty() => TopicOutcome::NoTopicsFound,
        Ok(topics) => {
            tracing::info!(topics = topics.len(), "topic modeling complete");
            TopicOutcome::Discovered(topics)
        }
        Err(e) => {
            tracing::warn!(error = %e, "topic modeling failed");
            TopicOutcome::Failed {
                reason: e.to_string(),
            }
        }
    }
}

fn model_topics(corpus: &Corpus) -> Result<Vec<Topic>, AnalysisError> {
    let dtm = DocumentTermMatrix::from_corpus(corpus);
    if dtm.n_terms == 0 {
        // Every document tokenized to nothing; modeling has no vocabulary
        // to work with.
        return Ok(Vec::new());
    }

    // Scale the requested topic count with corpus size; the exposed set is
    // still capped at MAX_TOPICS after ranking.
    let requested = (corpus.len() / 25).clamp(2, 8);
    let model = LdaModel::fit(&dtm, requested, MAX_ITERATIONS, LDA_SEED)?;

    let mut ranked: Vec<(usize, f64)> = (0..model.n_topics)
        .map(|k| (k, model.topic_mass(k)))
        .filter(|&(_, mass)| mass > 0.0)
        .collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let topics = ranked
        .into_iter()
        .take(MAX_TOPICS)
        .filter_map(|(k, _)| top_terms(&model, &dtm, k))
        .enumerate()
        .map(|(idx, terms)| Topic {
            index: idx + 1,
            terms,
        })
        .collect();
    Ok(topics)
}

/// Top-scoring terms of topic `k`, or `None` if every weight is zero.
fn top_terms(model: &LdaModel, dtm: &DocumentTermMatrix, k: usize) -> Option<Vec<TopicTerm>> {
    let mut scored: Vec<TopicTerm> = model
        .term_weights(k)
        .iter()
        .zip(&dtm.vocabulary)
        .filter(|&(score, _)| *score > 0.0)
        .map(|(score, term)| TopicTerm {
            term: term.clone(),
            score: *score,
        })
        .collect();
    if scored.is_empty() {
        return None;
    }
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(TERMS_PER_TOPIC);
    Some(scored)
}
