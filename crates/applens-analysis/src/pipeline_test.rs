//! Orchestrator tests with stub collaborators.
//!
//! Collaborator stubs stand in for the network scraper and the rasterizer,
//! so every stage-isolation branch is exercised without I/O beyond the
//! output directory itself.

use std::path::{Path, PathBuf};

use applens_core::{
    BackendError, RawReview, ReviewSource, SentimentBackend, SentimentDistribution,
    SentimentLabel, SourceError, SummaryRenderer, Topic, TopicTerm,
};

use crate::classifier::SentimentOutcome;
use crate::scorer::SentimentModel;
use crate::topics::TopicOutcome;

use super::{render_artifacts, run_analysis};

struct StubSource(Vec<RawReview>);

impl ReviewSource for StubSource {
    async fn fetch_reviews(&self, _app_id: &str) -> Result<Vec<RawReview>, SourceError> {
        Ok(self.0.clone())
    }
}

struct DownSource;

impl ReviewSource for DownSource {
    async fn fetch_reviews(&self, _app_id: &str) -> Result<Vec<RawReview>, SourceError> {
        Err(SourceError("HTTP 503 from store".to_owned()))
    }
}

/// Renderer that claims success for every image without touching disk.
struct OkRenderer;

impl SummaryRenderer for OkRenderer {
    fn render_sentiment_chart(
        &self,
        _distribution: &SentimentDistribution,
        path: &Path,
    ) -> Option<PathBuf> {
        Some(path.to_path_buf())
    }

    fn render_word_cloud(&self, _terms: &[TopicTerm], path: &Path) -> Option<PathBuf> {
        Some(path.to_path_buf())
    }
}

/// Renderer that fails exactly one word cloud, by topic index.
struct FailingCloudRenderer {
    failing_topic: usize,
}

impl SummaryRenderer for FailingCloudRenderer {
    fn render_sentiment_chart(
        &self,
        _distribution: &SentimentDistribution,
        path: &Path,
    ) -> Option<PathBuf> {
        Some(path.to_path_buf())
    }

    fn render_word_cloud(&self, _terms: &[TopicTerm], path: &Path) -> Option<PathBuf> {
        let file = path.file_name()?.to_str()?;
        if file == applens_core::word_cloud_file(self.failing_topic) {
            None
        } else {
            Some(path.to_path_buf())
        }
    }
}

struct BrokenBackend;

impl SentimentBackend for BrokenBackend {
    fn classify(&self, _text: &str) -> Result<SentimentLabel, BackendError> {
        Err(BackendError("weights missing".to_owned()))
    }
}

fn review(text: &str) -> RawReview {
    RawReview {
        review_id: None,
        content: Some(text.to_owned()),
        score: None,
        posted_at: None,
    }
}

fn themed_reviews(count: usize) -> Vec<RawReview> {
    (0..count)
        .map(|i| {
            if i % 2 == 0 {
                review(&format!("battery drains fast overnight charging round {i}"))
            } else {
                review(&format!("login screen password reset broken round {i}"))
            }
        })
        .collect()
}

fn out_dir(test: &str) -> PathBuf {
    std::env::temp_dir().join(format!("applens-pipeline-{test}"))
}

#[tokio::test]
async fn empty_raw_input_reports_no_reviews_found() {
    let model = SentimentModel::load();
    let result = run_analysis(
        &StubSource(Vec::new()),
        &model,
        &OkRenderer,
        &out_dir("empty-input"),
        "com.example.app",
    )
    .await;

    assert!(
        result.status.contains("no reviews found"),
        "unexpected status: {}",
        result.status
    );
    assert!(result.sentiment_chart.is_none());
    assert!(result.word_clouds.is_empty());
    assert!(result.topic_status.is_none());
}

#[tokio::test]
async fn source_failure_is_distinct_from_zero_results() {
    let model = SentimentModel::load();
    let result = run_analysis(
        &DownSource,
        &model,
        &OkRenderer,
        &out_dir("source-down"),
        "com.example.app",
    )
    .await;

    assert!(
        result.status.contains("review source unavailable"),
        "unexpected status: {}",
        result.status
    );
    assert!(result.sentiment_chart.is_none());
    assert!(result.word_clouds.is_empty());
    assert!(result.topic_status.is_none());
}

#[tokio::test]
async fn unusable_text_is_distinct_from_no_reviews() {
    let model = SentimentModel::load();
    let raw = vec![review("   "), review(""), RawReview::default()];
    let result = run_analysis(
        &StubSource(raw),
        &model,
        &OkRenderer,
        &out_dir("unusable"),
        "com.example.app",
    )
    .await;

    assert!(
        result.status.contains("no usable review text"),
        "unexpected status: {}",
        result.status
    );
    assert!(result.topic_status.is_none());
}

#[tokio::test]
async fn small_corpus_completes_sentiment_while_topic_guard_fires() {
    let model = SentimentModel::load();
    let result = run_analysis(
        &StubSource(themed_reviews(10)),
        &model,
        &OkRenderer,
        &out_dir("small-corpus"),
        "com.example.app",
    )
    .await;

    assert!(
        result.status.contains("analyzed 10 of 10"),
        "unexpected status: {}",
        result.status
    );
    assert!(result.sentiment_chart.is_some());
    assert!(result.word_clouds.is_empty());
    let topic_status = result.topic_status.expect("topic stage should have run");
    assert!(
        topic_status.contains("not enough data"),
        "unexpected topic status: {topic_status}"
    );
}

#[tokio::test]
async fn sentiment_failure_does_not_abort_topic_stage() {
    let result = run_analysis(
        &StubSource(themed_reviews(60)),
        &BrokenBackend,
        &OkRenderer,
        &out_dir("sentiment-down"),
        "com.example.app",
    )
    .await;

    assert!(
        result.status.contains("sentiment analysis failed"),
        "unexpected status: {}",
        result.status
    );
    assert!(result.sentiment_chart.is_none());
    let topic_status = result.topic_status.expect("topic stage should have run");
    assert!(
        topic_status.contains("discovered"),
        "unexpected topic status: {topic_status}"
    );
    assert!(
        !result.word_clouds.is_empty(),
        "topic artifacts should survive a sentiment failure"
    );
}

#[tokio::test]
async fn full_run_produces_chart_and_gallery() {
    let model = SentimentModel::load();
    let result = run_analysis(
        &StubSource(themed_reviews(60)),
        &model,
        &OkRenderer,
        &out_dir("full-run"),
        "com.example.app",
    )
    .await;

    assert_eq!(result.status, "analyzed 60 of 60 fetched reviews");
    let chart = result.sentiment_chart.expect("chart should render");
    assert!(chart.ends_with("sentiment_pie_chart.png"));
    assert!(!result.word_clouds.is_empty());
    assert!(result.word_clouds.len() <= crate::topics::MAX_TOPICS);
    let topic_status = result.topic_status.expect("topic stage should have run");
    assert!(topic_status.contains("discovered"));
}

#[tokio::test]
async fn one_failed_cloud_render_keeps_the_other_four() {
    let topics: Vec<Topic> = (1..=5)
        .map(|index| Topic {
            index,
            terms: vec![TopicTerm {
                term: format!("term{index}"),
                score: 0.5,
            }],
        })
        .collect();
    let sentiment = SentimentOutcome::Classified {
        reviews: Vec::new(),
        distribution: SentimentDistribution::from_labels(&[SentimentLabel::Positive]),
    };
    let topic_outcome = TopicOutcome::Discovered(topics);
    let renderer = FailingCloudRenderer { failing_topic: 3 };

    let (chart, clouds) = render_artifacts(
        &renderer,
        &sentiment,
        &topic_outcome,
        &out_dir("one-cloud-fails"),
    )
    .await;

    assert!(chart.is_some());
    assert_eq!(clouds.len(), 4, "expected the four surviving clouds");
    assert!(
        clouds
            .iter()
            .all(|p| !p.ends_with(applens_core::word_cloud_file(3))),
        "failed cloud should be omitted from the gallery"
    );
}
