//! Core data model for one review-analysis run.
//!
//! All of these values are created at the start of a pipeline run and
//! discarded at its end; nothing here persists across runs.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// File name of the rendered sentiment distribution chart.
pub const SENTIMENT_CHART_FILE: &str = "sentiment_pie_chart.png";

/// File name of the word-cloud image for a topic (1-based index).
#[must_use]
pub fn word_cloud_file(topic_index: usize) -> String {
    format!("wordcloud_topic_{topic_index}.png")
}

/// A single review record as delivered by the review source.
///
/// Every field is optional: the Play Store payload is positional JSON and
/// individual entries may be missing or malformed. Records without usable
/// `content` are dropped by the corpus normalizer, never stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawReview {
    pub review_id: Option<String>,
    /// Free-text review body. The only field the analysis pipeline consumes.
    pub content: Option<String>,
    /// Star rating 1–5 as reported by the store.
    pub score: Option<i64>,
    pub posted_at: Option<DateTime<Utc>>,
}

/// The cleaned, ordered review corpus.
///
/// Invariant: every document is non-empty after trimming. Enforced at
/// construction; there is no way to push an unvalidated document. Order is
/// the arrival order of the accepted source records, and duplicates are
/// preserved as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Corpus(Vec<String>);

impl Corpus {
    /// Build a corpus from candidate documents, keeping only those that are
    /// non-empty after whitespace trimming. Rejected candidates are silently
    /// dropped; relative order of the accepted ones is preserved.
    pub fn from_documents<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let documents = candidates
            .into_iter()
            .filter_map(|doc| {
                let trimmed = doc.as_ref().trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_owned())
                }
            })
            .collect();
        Self(documents)
    }

    #[must_use]
    pub fn documents(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Categorical sentiment of a single review.
///
/// `Invalid` is the sentinel for documents that fail re-validation inside
/// the classifier (empty after trimming); they are labeled rather than
/// dropped so classifier output stays document-aligned with its input.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
    Invalid,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
            Self::Invalid => "invalid",
        };
        f.write_str(name)
    }
}

/// A review text together with its assigned sentiment label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledReview {
    pub text: String,
    pub label: SentimentLabel,
}

/// Share of each sentiment label across a classified corpus, in percent.
///
/// Values sum to 100 (up to float rounding) whenever the source corpus was
/// non-empty; an empty corpus yields an empty distribution. Keyed on a
/// `BTreeMap` so iteration order is stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SentimentDistribution(BTreeMap<SentimentLabel, f64>);

impl SentimentDistribution {
    /// Compute each label's share of the total document count.
    #[must_use]
    pub fn from_labels(labels: &[SentimentLabel]) -> Self {
        if labels.is_empty() {
            return Self::default();
        }

        let mut counts: BTreeMap<SentimentLabel, usize> = BTreeMap::new();
        for label in labels {
            *counts.entry(*label).or_insert(0) += 1;
        }

        #[allow(clippy::cast_precision_loss)]
        let total = labels.len() as f64;
        let shares = counts
            .into_iter()
            .map(|(label, count)| {
                #[allow(clippy::cast_precision_loss)]
                let share = count as f64 / total * 100.0;
                (label, share)
            })
            .collect();
        Self(shares)
    }

    /// Percentage for `label`, if any document carried it.
    #[must_use]
    pub fn share(&self, label: SentimentLabel) -> Option<f64> {
        self.0.get(&label).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SentimentLabel, f64)> + '_ {
        self.0.iter().map(|(label, share)| (*label, *share))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One representative term of a topic, with the model's relevance score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicTerm {
    pub term: String,
    pub score: f64,
}

/// A discovered topic: a 1-based index (used for artifact naming) and its
/// representative terms, ordered by descending score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Topic {
    pub index: usize,
    pub terms: Vec<TopicTerm>,
}

/// The externally visible product of one pipeline run.
///
/// Every run produces a complete result: `status` is always present, and
/// artifact fields are empty rather than absent-with-error on failure paths.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineResult {
    /// Overall run status (fetch/normalize/sentiment outcome).
    pub status: String,
    /// Rendered sentiment chart, if the sentiment stage and its render
    /// both succeeded.
    pub sentiment_chart: Option<PathBuf>,
    /// Successfully rendered word-cloud images, in topic order. Failed
    /// renders are omitted, not signaled.
    pub word_clouds: Vec<PathBuf>,
    /// Topic-stage status, absent when the run aborted before that stage.
    pub topic_status: Option<String>,
}

impl PipelineResult {
    /// Result for a run that terminated before the analysis stages.
    #[must_use]
    pub fn aborted(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            sentiment_chart: None,
            word_clouds: Vec::new(),
            topic_status: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corpus_drops_whitespace_only_documents() {
        let corpus = Corpus::from_documents(["  good app  ", "   ", "", "\t\n", "bad app"]);
        assert_eq!(corpus.documents(), ["good app", "bad app"]);
    }

    #[test]
    fn corpus_preserves_relative_order_and_duplicates() {
        let corpus = Corpus::from_documents(["b", "a", "b", "c"]);
        assert_eq!(corpus.documents(), ["b", "a", "b", "c"]);
    }

    #[test]
    fn corpus_from_entirely_invalid_input_is_empty() {
        let corpus = Corpus::from_documents(["", "   ", "\n"]);
        assert!(corpus.is_empty());
        assert_eq!(corpus.len(), 0);
    }

    #[test]
    fn distribution_of_empty_labels_is_empty() {
        let dist = SentimentDistribution::from_labels(&[]);
        assert!(dist.is_empty());
    }

    #[test]
    fn distribution_shares_sum_to_one_hundred() {
        let labels = [
            SentimentLabel::Positive,
            SentimentLabel::Positive,
            SentimentLabel::Negative,
            SentimentLabel::Neutral,
            SentimentLabel::Invalid,
            SentimentLabel::Positive,
            SentimentLabel::Negative,
        ];
        let dist = SentimentDistribution::from_labels(&labels);
        let sum: f64 = dist.iter().map(|(_, share)| share).sum();
        assert!(
            (sum - 100.0).abs() < 1e-9,
            "expected shares to sum to 100, got {sum}"
        );
    }

    #[test]
    fn distribution_share_reflects_label_frequency() {
        let labels = [
            SentimentLabel::Positive,
            SentimentLabel::Positive,
            SentimentLabel::Positive,
            SentimentLabel::Negative,
        ];
        let dist = SentimentDistribution::from_labels(&labels);
        let positive = dist.share(SentimentLabel::Positive).unwrap();
        let negative = dist.share(SentimentLabel::Negative).unwrap();
        assert!((positive - 75.0).abs() < 1e-9);
        assert!((negative - 25.0).abs() < 1e-9);
        assert!(dist.share(SentimentLabel::Neutral).is_none());
    }

    #[test]
    fn sentiment_label_display_is_lowercase() {
        assert_eq!(SentimentLabel::Positive.to_string(), "positive");
        assert_eq!(SentimentLabel::Invalid.to_string(), "invalid");
    }

    #[test]
    fn word_cloud_file_uses_one_based_index() {
        assert_eq!(word_cloud_file(1), "wordcloud_topic_1.png");
        assert_eq!(word_cloud_file(5), "wordcloud_topic_5.png");
    }

    #[test]
    fn aborted_result_has_no_artifacts() {
        let result = PipelineResult::aborted("no reviews found");
        assert_eq!(result.status, "no reviews found");
        assert!(result.sentiment_chart.is_none());
        assert!(result.word_clouds.is_empty());
        assert!(result.topic_status.is_none());
    }
}
