//! Document-term count matrix construction.

use applens_core::Corpus;

use super::tokenize::tokenize;

/// Document-term counts in row-major layout (`n_docs` rows × `n_terms`
/// columns). Vocabulary indices follow first occurrence across the corpus,
/// so construction is deterministic for a given document order.
#[derive(Debug)]
pub(crate) struct DocumentTermMatrix {
    pub vocabulary: Vec<String>,
    counts: Vec<f64>,
    pub n_docs: usize,
    pub n_terms: usize,
}

impl DocumentTermMatrix {
    /// Tokenize every document and accumulate term counts.
    ///
    /// Documents that tokenize to nothing contribute an all-zero row; a
    /// corpus whose every document does so yields an empty vocabulary
    /// (`n_terms == 0`), which callers treat as "no topics found".
    pub(crate) fn from_corpus(corpus: &Corpus) -> Self {
        let tokenized: Vec<Vec<String>> = corpus.iter().map(|doc| tokenize(doc)).collect();

        let mut vocabulary: Vec<String> = Vec::new();
        let mut index_of = std::collections::HashMap::new();
        for tokens in &tokenized {
            for token in tokens {
                if !index_of.contains_key(token.as_str()) {
                    index_of.insert(token.clone(), vocabulary.len());
                    vocabulary.push(token.clone());
                }
            }
        }

        let n_docs = tokenized.len();
        let n_terms = vocabulary.len();
        let mut counts = vec![0.0_f64; n_docs * n_terms];
        for (doc_idx, tokens) in tokenized.iter().enumerate() {
            for token in tokens {
                let term_idx = index_of[token.as_str()];
                counts[doc_idx * n_terms + term_idx] += 1.0;
            }
        }

        Self {
            vocabulary,
            counts,
            n_docs,
            n_terms,
        }
    }

    pub(crate) fn get(&self, doc: usize, term: usize) -> f64 {
        self.counts[doc * self.n_terms + term]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_term_occurrences_per_document() {
        let corpus = Corpus::from_documents(["battery battery drains", "battery life"]);
        let dtm = DocumentTermMatrix::from_corpus(&corpus);
        assert_eq!(dtm.n_docs, 2);
        let battery = dtm
            .vocabulary
            .iter()
            .position(|t| t == "battery")
            .expect("battery should be in vocabulary");
        assert_eq!(dtm.get(0, battery), 2.0);
        assert_eq!(dtm.get(1, battery), 1.0);
    }

    #[test]
    fn vocabulary_follows_first_occurrence_order() {
        let corpus = Corpus::from_documents(["login screen", "screen login password"]);
        let dtm = DocumentTermMatrix::from_corpus(&corpus);
        assert_eq!(dtm.vocabulary, ["login", "screen", "password"]);
    }

    #[test]
    fn stop_word_only_corpus_has_empty_vocabulary() {
        let corpus = Corpus::from_documents(["the and is", "of to it"]);
        let dtm = DocumentTermMatrix::from_corpus(&corpus);
        assert_eq!(dtm.n_terms, 0);
        assert_eq!(dtm.n_docs, 2);
    }
}
