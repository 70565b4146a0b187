// Highlight Ranking
// Derives the bounded, sorted, visually-weighted token subset from raw
// saliency scores

use crate::models::{Highlight, Polarity, RankedHighlight};

pub const DEFAULT_HIGHLIGHT_LIMIT: usize = 10;
pub const DEFAULT_SATURATION_POINT: f64 = 0.5;

/// Rank raw highlights by descending score magnitude and derive a visual
/// intensity for each. Stable: ties keep their input order. NaN scores get
/// magnitude 0.0 so the order stays total; they sort last with intensity 0
/// and `Polarity::Zero`.
pub fn rank_highlights(
    highlights: &[Highlight],
    limit: usize,
    saturation_point: f64,
) -> Vec<RankedHighlight> {
    if highlights.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut ordered: Vec<&Highlight> = highlights.iter().collect();
    ordered.sort_by(|a, b| {
        magnitude(b.score)
            .partial_cmp(&magnitude(a.score))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    ordered
        .into_iter()
        .take(limit)
        .map(|h| RankedHighlight {
            token: h.token.clone(),
            score: h.score,
            intensity: intensity(h.score, saturation_point),
            polarity: polarity(h.score),
        })
        .collect()
}

/// Rank with the display defaults: top 10, saturating at |score| = 0.5.
pub fn top_highlights(highlights: &[Highlight]) -> Vec<RankedHighlight> {
    rank_highlights(highlights, DEFAULT_HIGHLIGHT_LIMIT, DEFAULT_SATURATION_POINT)
}

fn magnitude(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.abs()
    }
}

fn polarity(score: f64) -> Polarity {
    if score.is_nan() {
        Polarity::Zero
    } else if score >= 0.0 {
        Polarity::Positive
    } else {
        Polarity::Negative
    }
}

fn intensity(score: f64, saturation_point: f64) -> f64 {
    let mag = magnitude(score);
    if saturation_point > 0.0 {
        (mag / saturation_point).min(1.0)
    } else if mag > 0.0 {
        1.0
    } else {
        0.0
    }
}
