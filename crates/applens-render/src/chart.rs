//! Sentiment distribution pie chart.

use std::path::Path;

use applens_core::{SentimentDistribution, SentimentLabel};
use plotters::prelude::*;

use crate::error::RenderError;

const CHART_SIZE: u32 = 600;

fn backend_err(e: impl std::fmt::Display) -> RenderError {
    RenderError::Backend(e.to_string())
}

/// Slice color per label: green/grey/red plus amber for the invalid
/// sentinel.
fn color_for(label: SentimentLabel) -> RGBColor {
    match label {
        SentimentLabel::Positive => RGBColor(76, 175, 80),
        SentimentLabel::Neutral => RGBColor(158, 158, 158),
        SentimentLabel::Negative => RGBColor(244, 67, 54),
        SentimentLabel::Invalid => RGBColor(255, 193, 7),
    }
}

/// Unzip a distribution into the parallel slices the pie element expects.
fn chart_slices(
    distribution: &SentimentDistribution,
) -> (Vec<f64>, Vec<RGBColor>, Vec<String>) {
    let mut sizes = Vec::with_capacity(distribution.len());
    let mut colors = Vec::with_capacity(distribution.len());
    let mut labels = Vec::with_capacity(distribution.len());
    for (label, share) in distribution.iter() {
        sizes.push(share);
        colors.push(color_for(label));
        labels.push(label.to_string());
    }
    (sizes, colors, labels)
}

/// Render `distribution` as a labeled pie chart PNG at `path`.
pub(crate) fn render_pie_chart(
    distribution: &SentimentDistribution,
    path: &Path,
) -> Result<(), RenderError> {
    if distribution.is_empty() {
        return Err(RenderError::EmptyDistribution);
    }

    let (sizes, colors, labels) = chart_slices(distribution);

    let root = BitMapBackend::new(path, (CHART_SIZE, CHART_SIZE)).into_drawing_area();
    root.fill(&WHITE).map_err(backend_err)?;
    let root = root
        .titled("Sentiment Distribution", ("sans-serif", 28))
        .map_err(backend_err)?;

    let dims = root.dim_in_pixel();
    #[allow(clippy::cast_possible_wrap)]
    let center = (dims.0 as i32 / 2, dims.1 as i32 / 2);
    let radius = f64::from(dims.1.min(dims.0)) * 0.35;

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(90.0);
    pie.label_style(("sans-serif", 20).into_font().color(&BLACK));
    pie.percentages(("sans-serif", 16).into_font().color(&BLACK));
    root.draw(&pie).map_err(backend_err)?;

    root.present().map_err(backend_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_distribution_is_rejected() {
        let dist = SentimentDistribution::default();
        let result = render_pie_chart(&dist, Path::new("/tmp/unused.png"));
        assert!(matches!(result, Err(RenderError::EmptyDistribution)));
    }

    #[test]
    fn slices_are_parallel_and_complete() {
        let dist = SentimentDistribution::from_labels(&[
            SentimentLabel::Positive,
            SentimentLabel::Positive,
            SentimentLabel::Negative,
        ]);
        let (sizes, colors, labels) = chart_slices(&dist);
        assert_eq!(sizes.len(), 2);
        assert_eq!(colors.len(), 2);
        assert_eq!(labels, ["positive", "negative"]);
        let total: f64 = sizes.iter().sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn each_label_has_a_distinct_color() {
        let labels = [
            SentimentLabel::Positive,
            SentimentLabel::Neutral,
            SentimentLabel::Negative,
            SentimentLabel::Invalid,
        ];
        for (i, a) in labels.iter().enumerate() {
            for b in &labels[i + 1..] {
                assert_ne!(color_for(*a), color_for(*b));
            }
        }
    }
}
