//! Rasterization of pipeline summaries into PNG artifacts.
//!
//! Thin wrapper over `plotters`: a pie chart for the sentiment
//! distribution and packed-row word clouds for topics. This crate does no
//! algorithmic work — failures are logged and reported as absence, per the
//! renderer collaborator contract.

mod chart;
mod wordcloud;

pub mod error;

pub use error::RenderError;

use std::path::{Path, PathBuf};

use applens_core::{SentimentDistribution, SummaryRenderer, TopicTerm};

/// Plotters-backed [`SummaryRenderer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PlottersRenderer;

impl PlottersRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SummaryRenderer for PlottersRenderer {
    fn render_sentiment_chart(
        &self,
        distribution: &SentimentDistribution,
        path: &Path,
    ) -> Option<PathBuf> {
        match chart::render_pie_chart(distribution, path) {
            Ok(()) => Some(path.to_path_buf()),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "pie chart render failed");
                None
            }
        }
    }

    fn render_word_cloud(&self, terms: &[TopicTerm], path: &Path) -> Option<PathBuf> {
        match wordcloud::render_word_cloud(terms, path) {
            Ok(()) => Some(path.to_path_buf()),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "word cloud render failed");
                None
            }
        }
    }
}
