//! Seeded latent Dirichlet allocation over the document-term matrix.
//!
//! Simplified EM inference: each iteration distributes every (document,
//! term) count over topics proportionally to the current document-topic
//! and topic-word weights, then renormalizes both factors. Initialization
//! uses a deterministic LCG, so a given matrix and seed always produce
//! the same topics.

use crate::error::AnalysisError;

use super::dtm::DocumentTermMatrix;

/// Fitted topic factors: `doc_topic` is `n_docs` × `n_topics`,
/// `topic_word` is `n_topics` × `n_terms`, both row-normalized.
#[derive(Debug)]
pub(crate) struct LdaModel {
    pub n_topics: usize,
    doc_topic: Vec<f64>,
    topic_word: Vec<f64>,
    n_terms: usize,
}

impl LdaModel {
    /// Fit the model with `max_iter` EM passes.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::DegenerateMatrix`] for an empty matrix and
    /// [`AnalysisError::ZeroTopics`] when no topics are requested.
    pub(crate) fn fit(
        dtm: &DocumentTermMatrix,
        n_topics: usize,
        max_iter: usize,
        seed: u64,
    ) -> Result<Self, AnalysisError> {
        let n_docs = dtm.n_docs;
        let n_terms = dtm.n_terms;
        if n_docs == 0 || n_terms == 0 {
            return Err(AnalysisError::DegenerateMatrix(format!(
                "{n_docs} documents x {n_terms} terms"
            )));
        }
        if n_topics == 0 {
            return Err(AnalysisError::ZeroTopics);
        }

        // Uniform initialization plus small seeded noise to break symmetry.
        #[allow(clippy::cast_precision_loss)]
        let doc_topic_init = 1.0 / n_topics as f64;
        #[allow(clippy::cast_precision_loss)]
        let topic_word_init = 1.0 / n_terms as f64;

        let mut doc_topic = vec![0.0_f64; n_docs * n_topics];
        let mut topic_word = vec![0.0_f64; n_topics * n_terms];

        for (idx, cell) in doc_topic.iter_mut().enumerate() {
            *cell = doc_topic_init + pseudo_random(seed, idx) * 0.01;
        }
        for (idx, cell) in topic_word.iter_mut().enumerate() {
            *cell = topic_word_init + pseudo_random(seed, idx + 1000) * 0.01;
        }

        normalize_rows(&mut doc_topic, n_docs, n_topics);
        normalize_rows(&mut topic_word, n_topics, n_terms);

        for _ in 0..max_iter {
            let mut next_doc_topic = vec![0.0_f64; n_docs * n_topics];
            let mut next_topic_word = vec![0.0_f64; n_topics * n_terms];
            let mut topic_probs = vec![0.0_f64; n_topics];

            for d in 0..n_docs {
                for v in 0..n_terms {
                    let count = dtm.get(d, v);
                    if count <= 0.0 {
                        continue;
                    }

                    // p(topic | document, term) up to normalization.
                    let mut sum = 0.0;
                    for (k, prob) in topic_probs.iter_mut().enumerate() {
                        *prob = doc_topic[d * n_topics + k] * topic_word[k * n_terms + v];
                        sum += *prob;
                    }
                    if sum <= 1e-10 {
                        continue;
                    }

                    for (k, prob) in topic_probs.iter().enumerate() {
                        let responsibility = count * prob / sum;
                        next_doc_topic[d * n_topics + k] += responsibility;
                        next_topic_word[k * n_terms + v] += responsibility;
                    }
                }
            }

            normalize_rows(&mut next_doc_topic, n_docs, n_topics);
            normalize_rows(&mut next_topic_word, n_topics, n_terms);
            doc_topic = next_doc_topic;
            topic_word = next_topic_word;
        }

        Ok(Self {
            n_topics,
            doc_topic,
            topic_word,
            n_terms,
        })
    }

    /// Total document mass assigned to `topic` — the ranking criterion.
    pub(crate) fn topic_mass(&self, topic: usize) -> f64 {
        self.doc_topic
            .chunks_exact(self.n_topics)
            .map(|row| row[topic])
            .sum()
    }

    /// Per-term weights of `topic`, indexed like the matrix vocabulary.
    pub(crate) fn term_weights(&self, topic: usize) -> &[f64] {
        &self.topic_word[topic * self.n_terms..(topic + 1) * self.n_terms]
    }
}

/// Normalize each row of a row-major `n_rows` × `n_cols` buffer to sum to 1.
fn normalize_rows(data: &mut [f64], n_rows: usize, n_cols: usize) {
    for row in 0..n_rows {
        let slice = &mut data[row * n_cols..(row + 1) * n_cols];
        let sum: f64 = slice.iter().sum();
        if sum > 1e-10 {
            for cell in slice {
                *cell /= sum;
            }
        }
    }
}

/// Deterministic LCG in [0, 1) keyed on `(seed, idx)`.
fn pseudo_random(seed: u64, idx: usize) -> f64 {
    const A: u64 = 1_664_525;
    const C: u64 = 1_013_904_223;
    const M: u64 = 1 << 32;

    let x = A.wrapping_mul(seed.wrapping_add(idx as u64)).wrapping_add(C) % M;
    #[allow(clippy::cast_precision_loss)]
    let unit = x as f64 / M as f64;
    unit
}
