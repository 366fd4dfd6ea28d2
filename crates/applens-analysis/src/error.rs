use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("degenerate document-term matrix: {0}")]
    DegenerateMatrix(String),

    #[error("topic model requested with zero topics")]
    ZeroTopics,
}
