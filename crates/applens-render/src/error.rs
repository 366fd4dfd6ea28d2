use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("drawing backend error: {0}")]
    Backend(String),

    #[error("empty sentiment distribution")]
    EmptyDistribution,

    #[error("word cloud has no terms")]
    NoTerms,
}
