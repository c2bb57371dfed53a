//! Classifier head contract and the bundled logistic head
//!
//! The core only requires a deterministic map from the quantum embedding to
//! a probability in [0, 1]; the trained head behind that contract is
//! pluggable.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::error::{ArtifactError, InferenceError};

/// Deterministic map from an embedding vector to a probability in [0, 1].
///
/// Implementations must be pure: identical inputs yield identical outputs.
pub trait ClassifierHead: Send + Sync {
    fn classify(&self, embedding: &Array1<f64>) -> Result<f64, InferenceError>;

    /// Embedding width this head expects.
    fn input_dim(&self) -> usize;
}

/// Persisted weights for the bundled logistic head.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticHeadParams {
    pub weights: Vec<f64>,
    pub bias: f64,
}

/// Logistic-regression head: `sigmoid(w · embedding + b)`.
#[derive(Debug, Clone)]
pub struct LogisticHead {
    weights: Vec<f64>,
    bias: f64,
}

impl LogisticHead {
    /// Create a head from persisted weights, checking the input width.
    pub fn new(params: LogisticHeadParams, input_dim: usize) -> Result<Self, ArtifactError> {
        if params.weights.len() != input_dim {
            return Err(ArtifactError::HeadDimension {
                expected: input_dim,
                got: params.weights.len(),
            });
        }
        Ok(LogisticHead {
            weights: params.weights,
            bias: params.bias,
        })
    }
}

impl ClassifierHead for LogisticHead {
    fn classify(&self, embedding: &Array1<f64>) -> Result<f64, InferenceError> {
        if embedding.len() != self.weights.len() {
            return Err(InferenceError::UpstreamClassifier(format!(
                "embedding has {} entries, head expects {}",
                embedding.len(),
                self.weights.len()
            )));
        }

        let logit: f64 = self
            .weights
            .iter()
            .zip(embedding.iter())
            .map(|(&w, &e)| w * e)
            .sum::<f64>()
            + self.bias;

        let probability = 1.0 / (1.0 + (-logit).exp());
        if !probability.is_finite() {
            return Err(InferenceError::UpstreamClassifier(format!(
                "non-finite probability from logit {}",
                logit
            )));
        }
        Ok(probability)
    }

    fn input_dim(&self) -> usize {
        self.weights.len()
    }
}
