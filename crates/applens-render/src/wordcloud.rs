//! Topic word-cloud rendering.
//!
//! Not a force-directed cloud: terms arrive sorted by score, so a simple
//! packed-row layout already puts the heaviest words first and largest.

use std::path::Path;

use applens_core::TopicTerm;
use plotters::prelude::*;

use crate::error::RenderError;

const CLOUD_WIDTH: u32 = 800;
const CLOUD_HEIGHT: u32 = 400;
const MARGIN: i32 = 14;
const MIN_FONT: f64 = 18.0;
const MAX_FONT: f64 = 54.0;

/// Word colors, cycled in term order.
const PALETTE: &[RGBColor] = &[
    RGBColor(38, 70, 83),
    RGBColor(42, 157, 143),
    RGBColor(233, 151, 63),
    RGBColor(231, 111, 81),
    RGBColor(84, 101, 214),
];

fn backend_err(e: impl std::fmt::Display) -> RenderError {
    RenderError::Backend(e.to_string())
}

/// Font size for a term, linear in its share of the top score.
fn font_size_for(score: f64, max_score: f64) -> f64 {
    if max_score <= 0.0 {
        return MIN_FONT;
    }
    let ratio = (score / max_score).clamp(0.0, 1.0);
    MIN_FONT + ratio * (MAX_FONT - MIN_FONT)
}

/// Render `terms` as a packed-row word cloud PNG at `path`.
///
/// Terms that no longer fit the canvas are dropped from the tail; the
/// image is still written.
pub(crate) fn render_word_cloud(terms: &[TopicTerm], path: &Path) -> Result<(), RenderError> {
    if terms.is_empty() {
        return Err(RenderError::NoTerms);
    }

    let max_score = terms.iter().fold(0.0_f64, |acc, t| acc.max(t.score));

    let root = BitMapBackend::new(path, (CLOUD_WIDTH, CLOUD_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(backend_err)?;

    #[allow(clippy::cast_possible_wrap)]
    let (canvas_width, canvas_height) = (CLOUD_WIDTH as i32, CLOUD_HEIGHT as i32);
    let mut x = MARGIN;
    let mut y = MARGIN;
    let mut row_height = 0_i32;

    for (idx, term) in terms.iter().enumerate() {
        let size = font_size_for(term.score, max_score);
        let color = PALETTE[idx % PALETTE.len()];
        let style = ("sans-serif", size).into_font().color(&color);

        let (w, h) = root
            .estimate_text_size(&term.term, &style)
            .map_err(backend_err)?;
        #[allow(clippy::cast_possible_wrap)]
        let (w, h) = (w as i32, h as i32);

        if x + w > canvas_width - MARGIN && x > MARGIN {
            x = MARGIN;
            y += row_height + MARGIN;
            row_height = 0;
        }
        if y + h > canvas_height - MARGIN {
            break;
        }

        root.draw(&Text::new(term.term.clone(), (x, y), style))
            .map_err(backend_err)?;
        x += w + MARGIN;
        row_height = row_height.max(h);
    }

    root.present().map_err(backend_err)?;
    Ok(())
}
