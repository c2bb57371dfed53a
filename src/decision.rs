//! Thresholding and confidence banding over the predicted probability

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse confidence band over the predicted probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::High => write!(f, "High"),
            Confidence::Medium => write!(f, "Medium"),
            Confidence::Low => write!(f, "Low"),
        }
    }
}

/// The canonical prediction: binary label, raw probability, confidence band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    #[serde(rename = "prediction")]
    pub label: u8,
    pub probability: f64,
    pub confidence: Confidence,
}

/// The earlier minimal response shape: the canonical form with the
/// confidence band projected away.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinimalPrediction {
    pub prediction: u8,
    pub probability: f64,
}

impl From<PredictionResult> for MinimalPrediction {
    fn from(result: PredictionResult) -> Self {
        MinimalPrediction {
            prediction: result.label,
            probability: result.probability,
        }
    }
}

/// Turn a probability into a discrete decision.
///
/// The label threshold is strictly greater than 0.5, so p = 0.5 maps to
/// label 0. Bands are total over [0, 1]:
/// High for p ≥ 0.8 or p ≤ 0.2, Medium for 0.6 ≤ p < 0.8 or 0.2 < p ≤ 0.4,
/// Low for 0.4 < p < 0.6.
pub fn decide(probability: f64) -> PredictionResult {
    let label = u8::from(probability > 0.5);

    let confidence = if probability >= 0.8 || probability <= 0.2 {
        Confidence::High
    } else if (0.6..0.8).contains(&probability) || (probability > 0.2 && probability <= 0.4) {
        Confidence::Medium
    } else {
        Confidence::Low
    };

    PredictionResult {
        label,
        probability,
        confidence,
    }
}
