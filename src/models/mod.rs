// ClaimLens Data Models
// Wire contract of the classification service plus derived display types

use serde::{Deserialize, Serialize};
use std::fmt;

// ============ Classification Request ============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimRequest {
    pub text: String,
}

// ============ Classification Response ============

/// Verdict label as reported by the service. The wire value is an open
/// string; anything outside the three known verdicts is preserved in
/// `Other` so unknown labels can still be rendered with a neutral
/// treatment instead of failing the parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Label {
    Real,
    Fake,
    Unverified,
    Other(String),
}

impl From<String> for Label {
    fn from(raw: String) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "real" => Self::Real,
            "fake" => Self::Fake,
            "unverified" => Self::Unverified,
            _ => Self::Other(raw),
        }
    }
}

impl From<Label> for String {
    fn from(label: Label) -> Self {
        label.to_string()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real => f.write_str("real"),
            Self::Fake => f.write_str("fake"),
            Self::Unverified => f.write_str("unverified"),
            Self::Other(raw) => f.write_str(raw),
        }
    }
}

/// One salient token and its signed contribution. Positive scores support
/// a `real` verdict, negative scores support `fake`; magnitude is strength.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub token: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub label: Label,
    pub confidence: f64,
    #[serde(default)]
    pub reasons: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    #[serde(default)]
    pub model_version: String,
    #[serde(default)]
    pub latency_ms: i64,
}

// ============ Ranked Highlights ============

/// Sign classification of a highlight score. `Zero` is reserved for NaN
/// scores; a literal 0.0 counts as non-negative and maps to `Positive`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
    Zero,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedHighlight {
    pub token: String,
    pub score: f64,
    /// Normalized visual weight in [0, 1], saturating at the ranker's
    /// saturation point.
    pub intensity: f64,
    pub polarity: Polarity,
}

// ============ Verdict View ============

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenView {
    pub token: String,
    pub score: f64,
    pub color: String,
}

/// Display-ready bundle handed to the presentation shell. Everything here
/// is already mapped; the shell only prints it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerdictView {
    pub label_text: String,
    pub label_color: String,
    pub confidence_percent: u8,
    pub reasons: Vec<String>,
    pub highlights: Vec<TokenView>,
    pub model_version: String,
    pub latency_ms: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_from_known_values() {
        assert_eq!(Label::from("real".to_string()), Label::Real);
        assert_eq!(Label::from(" FAKE ".to_string()), Label::Fake);
        assert_eq!(Label::from("Unverified".to_string()), Label::Unverified);
    }

    #[test]
    fn test_label_preserves_unknown_text() {
        let label = Label::from("satire".to_string());
        assert_eq!(label, Label::Other("satire".to_string()));
        assert_eq!(label.to_string(), "satire");
    }

    #[test]
    fn test_result_defaults_missing_optional_fields() {
        let json = r#"{"label": "fake", "confidence": 0.87}"#;
        let result: ClassificationResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.label, Label::Fake);
        assert!(result.reasons.is_empty());
        assert!(result.highlights.is_empty());
        assert_eq!(result.model_version, "");
        assert_eq!(result.latency_ms, 0);
    }

    #[test]
    fn test_result_round_trip() {
        let json = r#"{
            "label": "real",
            "confidence": 0.93,
            "reasons": ["cites named sources"],
            "highlights": [{"token": "confirmed", "score": 0.4}],
            "model_version": "tfidf-logreg-v1",
            "latency_ms": 42
        }"#;
        let result: ClassificationResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.label, Label::Real);
        assert_eq!(result.highlights.len(), 1);

        let back = serde_json::to_string(&result).unwrap();
        let reparsed: ClassificationResult = serde_json::from_str(&back).unwrap();
        assert_eq!(reparsed, result);
    }
}
