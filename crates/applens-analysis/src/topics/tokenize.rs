//! Tokenization and stopword filtering for topic modeling.

/// Common English words excluded from the topic vocabulary.
///
/// Lowercase, deduplicated. Review text is dominated by function words;
/// leaving them in makes every topic's top terms identical.
const STOP_WORDS: &[&str] = &[
    // articles / pronouns
    "the", "a", "an", "i", "me", "my", "we", "our", "you", "your", "he", "him", "his", "she",
    "her", "it", "its", "they", "them", "their", "this", "that", "these", "those",
    // questions
    "what", "which", "who", "whom", "whose", "why", "when", "where", "how",
    // prepositions
    "about", "above", "after", "against", "and", "around", "at", "before", "behind", "below",
    "between", "but", "by", "down", "during", "for", "from", "in", "into", "near", "of", "off",
    "on", "onto", "out", "over", "through", "to", "under", "until", "up", "upon", "with",
    "within", "without",
    // conjunctions / verbs
    "as", "because", "if", "or", "since", "so", "than", "though", "unless", "while", "am", "is",
    "are", "was", "were", "be", "been", "being", "have", "has", "had", "having", "do", "does",
    "did", "doing", "would", "should", "could", "can", "may", "might", "must", "will", "shall",
    // quantifiers / adverbs
    "all", "any", "both", "each", "every", "few", "more", "most", "much", "no", "not", "none",
    "one", "other", "same", "some", "such", "very", "too", "only", "own", "then", "there",
    "just", "now", "here", "again", "also", "even", "ever", "still", "really",
    // common review filler
    "app", "get", "got", "make", "made", "use", "using", "used", "way", "say", "see", "please",
];

/// Split `text` into lowercase alphabetic tokens suitable for the
/// document-term matrix.
///
/// Words are trimmed of non-alphabetic edges, lowercased, and kept only if
/// at least three characters long and not a stop word.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| {
            word.trim_matches(|c: char| !c.is_alphabetic())
                .to_lowercase()
        })
        .filter(|token| token.chars().count() >= 3 && !STOP_WORDS.contains(&token.as_str()))
        .collect()
}
