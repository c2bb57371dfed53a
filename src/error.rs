//! Error types for the inference pipeline
//!
//! Request-scoped failures (`InferenceError`) are separated from load-time
//! configuration defects (`ArtifactError`): the former reject a single
//! request, the latter abort service construction.

use thiserror::Error;

/// Failures that can occur while serving a single prediction request.
#[derive(Debug, Error)]
pub enum InferenceError {
    /// A required input field was absent from the request payload.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// An input field could not be coerced to its declared numeric type.
    #[error("field `{field}` is not a valid {expected}: {value}")]
    TypeCoercion {
        field: &'static str,
        expected: &'static str,
        value: String,
    },

    /// A vector or parameter tensor had an unexpected dimension.
    #[error("shape mismatch: expected {expected}, got {got}")]
    ShapeMismatch { expected: String, got: String },

    /// The simulated state vector left the unit sphere or produced a
    /// non-finite amplitude. Indicates a simulator defect, never clamped.
    #[error("numeric divergence in circuit simulation: {0}")]
    NumericDivergence(String),

    /// The downstream classifier head violated its contract.
    #[error("classifier head error: {0}")]
    UpstreamClassifier(String),

    /// A batch evaluation failed on one sample; wraps the underlying error
    /// with the index of the offending input.
    #[error("sample {index}: {source}")]
    Sample {
        index: usize,
        #[source]
        source: Box<InferenceError>,
    },
}

impl InferenceError {
    /// Tag an error with the batch index it originated from.
    pub fn at_sample(self, index: usize) -> Self {
        InferenceError::Sample {
            index,
            source: Box::new(self),
        }
    }
}

/// Failures while loading or validating persisted model artifacts.
///
/// These are startup-time defects: a service is never constructed from
/// invalid artifacts, so no request can observe them.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read artifact file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse artifact file: {0}")]
    Json(#[from] serde_json::Error),

    /// Scaler statistics arrays disagree in length or have the wrong length.
    #[error("scaler statistics length mismatch: mean has {mean_len}, scale has {scale_len}, expected {expected}")]
    ScalerLength {
        mean_len: usize,
        scale_len: usize,
        expected: usize,
    },

    /// A scale entry of zero would make normalization divide by zero.
    #[error("scaler scale[{index}] is zero")]
    ZeroScale { index: usize },

    /// The circuit parameter tensor does not have shape (n_layers, n_qubits, 3).
    #[error("circuit parameters have invalid shape: {0}")]
    CircuitShape(String),

    /// The classifier head weight vector does not match the embedding width.
    #[error("classifier head expects {expected} inputs, weights have {got}")]
    HeadDimension { expected: usize, got: usize },
}
