//! Lexicon-based sentiment model for app-store review text.

use applens_core::{BackendError, SentimentBackend, SentimentLabel};

/// App-review word weights.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative. The final score is clamped to `[-1.0, 1.0]`.
pub(crate) const LEXICON: &[(&str, f32)] = &[
    // Positive signals
    ("love", 0.5),
    ("loved", 0.5),
    ("great", 0.4),
    ("good", 0.3),
    ("excellent", 0.5),
    ("amazing", 0.5),
    ("awesome", 0.5),
    ("perfect", 0.5),
    ("best", 0.5),
    ("fantastic", 0.5),
    ("helpful", 0.4),
    ("useful", 0.4),
    ("easy", 0.3),
    ("smooth", 0.4),
    ("fast", 0.3),
    ("intuitive", 0.4),
    ("reliable", 0.4),
    ("recommend", 0.4),
    ("fun", 0.3),
    ("beautiful", 0.4),
    ("works", 0.2),
    ("worth", 0.3),
    ("improved", 0.3),
    ("simple", 0.2),
    // Negative signals
    ("crash", -0.6),
    ("crashes", -0.6),
    ("crashed", -0.6),
    ("bug", -0.5),
    ("bugs", -0.5),
    ("buggy", -0.6),
    ("broken", -0.6),
    ("slow", -0.4),
    ("laggy", -0.5),
    ("lag", -0.4),
    ("freeze", -0.5),
    ("freezes", -0.5),
    ("stuck", -0.4),
    ("ads", -0.3),
    ("spam", -0.5),
    ("scam", -0.7),
    ("terrible", -0.6),
    ("awful", -0.6),
    ("horrible", -0.6),
    ("worst", -0.6),
    ("useless", -0.6),
    ("annoying", -0.4),
    ("uninstall", -0.5),
    ("uninstalled", -0.5),
    ("uninstalling", -0.5),
    ("waste", -0.5),
    ("expensive", -0.3),
    ("confusing", -0.4),
    ("error", -0.4),
    ("errors", -0.4),
    ("fails", -0.4),
    ("failed", -0.4),
    ("drains", -0.4),
    ("misleading", -0.5),
];

/// Scores above this are labeled positive, below its negation negative.
const NEUTRAL_BAND: f32 = 0.05;

/// Score a text string using the review lexicon.
///
/// Splits text into lowercase words, sums matching weights, and clamps
/// the result to `[-1.0, 1.0]`. Returns `0.0` for empty or unknown text.
#[must_use]
pub fn lexicon_score(text: &str) -> f32 {
    let mut score = 0.0_f32;
    for word in text.split_whitespace() {
        let w = word
            .trim_matches(|c: char| !c.is_alphabetic())
            .to_lowercase();
        for &(lex_word, weight) in LEXICON {
            if w == lex_word {
                score += weight;
                break;
            }
        }
    }
    score.clamp(-1.0, 1.0)
}

/// Map a lexicon score to its categorical label.
pub(crate) fn label_for_score(score: f32) -> SentimentLabel {
    if score > NEUTRAL_BAND {
        SentimentLabel::Positive
    } else if score < -NEUTRAL_BAND {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// The loaded sentiment model.
///
/// Constructed once by the caller and shared by reference across pipeline
/// runs; the loaded weights are never mutated. Classification is pure per
/// document, so documents may be scored in any order with identical
/// results.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentimentModel;

impl SentimentModel {
    /// Load the model. Infallible for the built-in lexicon, but callers
    /// treat the model as an explicit resource with a load step so a
    /// heavier backend can slot in behind the same lifecycle.
    #[must_use]
    pub fn load() -> Self {
        tracing::debug!(words = LEXICON.len(), "loaded sentiment lexicon");
        Self
    }
}

impl SentimentBackend for SentimentModel {
    fn classify(&self, text: &str) -> Result<SentimentLabel, BackendError> {
        Ok(label_for_score(lexicon_score(text)))
    }
}
