//! Pipeline orchestration: fetch → normalize → classify → topics → render.

use std::path::{Path, PathBuf};

use applens_core::{
    word_cloud_file, PipelineResult, ReviewSource, SentimentBackend, SummaryRenderer, Topic,
    SENTIMENT_CHART_FILE,
};

use crate::classifier::{classify_corpus, SentimentOutcome};
use crate::normalize::normalize_reviews;
use crate::topics::{discover_topics, TopicOutcome};

/// Run the full analysis pipeline for one application identifier.
///
/// Linear per-run state machine, one-way transitions, no retries:
///
/// 1. Fetch from the review source; a source failure terminates the run
///    with an error status and empty artifacts.
/// 2. Normalize; an empty corpus terminates the run, with "no reviews
///    returned" distinguished from "nothing usable after cleaning".
/// 3. Sentiment and topic stages both run and fail independently: a
///    failure in either is reported in its status field while the other
///    stage's results stand.
/// 4. Rendering is per-image isolated — a failed render is omitted from
///    the output, never aborts the run.
///
/// Every path returns a complete [`PipelineResult`] with a status string;
/// no stage condition escapes as an error.
pub async fn run_analysis<S, B, R>(
    source: &S,
    backend: &B,
    renderer: &R,
    output_dir: &Path,
    app_id: &str,
) -> PipelineResult
where
    S: ReviewSource,
    B: SentimentBackend,
    R: SummaryRenderer,
{
    tracing::info!(app_id, "starting review analysis run");

    let raw = match source.fetch_reviews(app_id).await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(app_id, error = %e, "review fetch failed");
            return PipelineResult::aborted(e.to_string());
        }
    };

    let fetched = raw.len();
    let corpus = normalize_reviews(raw);
    if corpus.is_empty() {
        let status = if fetched == 0 {
            format!("no reviews found for {app_id}")
        } else {
            format!("no usable review text in {fetched} fetched reviews")
        };
        tracing::info!(app_id, fetched, "nothing to analyze");
        return PipelineResult::aborted(status);
    }

    let sentiment = classify_corpus(backend, &corpus);

    // Whole-corpus batch stage; keep it off the async executor. A panic in
    // the model surfaces as a join error and degrades to a Failed outcome
    // rather than taking down the run.
    let topic_outcome = {
        let corpus = corpus.clone();
        match tokio::task::spawn_blocking(move || discover_topics(&corpus)).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(error = %e, "topic modeling task died");
                TopicOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    };

    let (sentiment_chart, word_clouds) =
        render_artifacts(renderer, &sentiment, &topic_outcome, output_dir).await;

    let status = match &sentiment {
        SentimentOutcome::Classified { reviews, .. } => {
            format!("analyzed {} of {fetched} fetched reviews", reviews.len())
        }
        SentimentOutcome::Failed { reason } => format!("sentiment analysis failed: {reason}"),
    };

    PipelineResult {
        status,
        sentiment_chart,
        word_clouds,
        topic_status: Some(topic_outcome.status_message()),
    }
}

/// Render the chart and word clouds, isolating each image's failure.
///
/// The output directory is created idempotently first; if that fails, all
/// rendering is skipped and both artifact sets come back empty.
pub(crate) async fn render_artifacts<R: SummaryRenderer>(
    renderer: &R,
    sentiment: &SentimentOutcome,
    topic_outcome: &TopicOutcome,
    output_dir: &Path,
) -> (Option<PathBuf>, Vec<PathBuf>) {
    if let Err(e) = tokio::fs::create_dir_all(output_dir).await {
        tracing::warn!(dir = %output_dir.display(), error = %e, "cannot create output directory — skipping rendering");
        return (None, Vec::new());
    }

    let sentiment_chart = match sentiment {
        SentimentOutcome::Classified { distribution, .. } => {
            let path = output_dir.join(SENTIMENT_CHART_FILE);
            let rendered = renderer.render_sentiment_chart(distribution, &path);
            if rendered.is_none() {
                tracing::warn!(path = %path.display(), "sentiment chart render failed — omitting");
            }
            rendered
        }
        SentimentOutcome::Failed { .. } => None,
    };

    let word_clouds = match topic_outcome {
        TopicOutcome::Discovered(topics) => render_word_clouds(renderer, topics, output_dir),
        _ => Vec::new(),
    };

    (sentiment_chart, word_clouds)
}

fn render_word_clouds<R: SummaryRenderer>(
    renderer: &R,
    topics: &[Topic],
    output_dir: &Path,
) -> Vec<PathBuf> {
    let mut rendered = Vec::with_capacity(topics.len());
    for topic in topics {
        let path = output_dir.join(word_cloud_file(topic.index));
        match renderer.render_word_cloud(&topic.terms, &path) {
            Some(path) => rendered.push(path),
            None => {
                tracing::warn!(
                    topic = topic.index,
                    path = %path.display(),
                    "word cloud render failed — omitting from gallery"
                );
            }
        }
    }
    rendered
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
