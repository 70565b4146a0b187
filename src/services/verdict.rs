// Verdict View Mapping
// Maps labels, confidence, and ranked highlights to display values

use crate::models::{ClassificationResult, Label, Polarity, RankedHighlight, TokenView, VerdictView};
use crate::services::highlights::top_highlights;

const REAL_COLOR: &str = "#16a34a";
const FAKE_COLOR: &str = "#dc2626";
const NEUTRAL_COLOR: &str = "#d97706";

const POSITIVE_RGB: &str = "22,163,74";
const NEGATIVE_RGB: &str = "220,38,38";
const NEUTRAL_RGB: &str = "217,119,6";

/// Verdict chip color. Unknown labels get the neutral treatment.
pub fn label_color(label: &Label) -> &'static str {
    match label {
        Label::Real => REAL_COLOR,
        Label::Fake => FAKE_COLOR,
        Label::Unverified | Label::Other(_) => NEUTRAL_COLOR,
    }
}

/// Whole-number confidence percentage. This is the one place confidence is
/// clamped; the raw value on the result stays untouched.
pub fn confidence_percent(confidence: f64) -> u8 {
    let clamped = if confidence.is_nan() {
        0.0
    } else {
        confidence.clamp(0.0, 1.0)
    };
    (clamped * 100.0).round() as u8
}

/// RGBA background for a ranked token: polarity picks the hue, intensity
/// is the alpha.
pub fn highlight_color(highlight: &RankedHighlight) -> String {
    let rgb = match highlight.polarity {
        Polarity::Positive => POSITIVE_RGB,
        Polarity::Negative => NEGATIVE_RGB,
        Polarity::Zero => NEUTRAL_RGB,
    };
    format!("rgba({},{})", rgb, highlight.intensity)
}

impl VerdictView {
    /// Build the display-ready bundle from a fresh classification result.
    pub fn from_result(result: &ClassificationResult) -> Self {
        let highlights = top_highlights(&result.highlights)
            .iter()
            .map(|h| TokenView {
                token: h.token.clone(),
                score: h.score,
                color: highlight_color(h),
            })
            .collect();

        Self {
            label_text: result.label.to_string().to_uppercase(),
            label_color: label_color(&result.label).to_string(),
            confidence_percent: confidence_percent(result.confidence),
            reasons: result.reasons.clone(),
            highlights,
            model_version: result.model_version.clone(),
            latency_ms: result.latency_ms,
        }
    }
}
