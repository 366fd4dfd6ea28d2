//! Shared data model and collaborator seams for the applens review pipeline.
//!
//! Every pipeline stage and collaborator crate depends on this one: it owns
//! the review/corpus/sentiment/topic types, the `ReviewSource`,
//! `SentimentBackend`, and `SummaryRenderer` trait boundaries, and the
//! env-driven application configuration.

pub mod app_config;
pub mod config;
pub mod traits;
pub mod types;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use traits::{BackendError, ReviewSource, SentimentBackend, SourceError, SummaryRenderer};
pub use types::{
    word_cloud_file, Corpus, LabeledReview, PipelineResult, RawReview, SentimentDistribution,
    SentimentLabel, Topic, TopicTerm, SENTIMENT_CHART_FILE,
};
