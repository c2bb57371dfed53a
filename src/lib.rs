//! Hybrid Quantum-Classical Clinical Risk Inference
//!
//! This crate predicts a binary clinical risk label, with a probability and
//! a coarse confidence band, from eleven tabular patient features. Inference
//! runs a linear pipeline: affine standardization of the raw features, exact
//! state-vector simulation of a small variational quantum circuit producing
//! a fixed-length embedding, a classifier head mapping the embedding to a
//! probability, and a threshold/confidence policy on top.
//!
//! All model parameters are loaded once at startup and immutable thereafter;
//! every request is independent and side-effect-free.

pub mod artifacts;
pub mod batch;
pub mod classifier;
pub mod decision;
pub mod error;
pub mod features;
pub mod quantum;
pub mod scaler;
pub mod service;

pub use artifacts::ModelArtifacts;
pub use batch::BatchEvaluator;
pub use classifier::{ClassifierHead, LogisticHead, LogisticHeadParams};
pub use decision::{decide, Confidence, MinimalPrediction, PredictionResult};
pub use error::{ArtifactError, InferenceError};
pub use features::{FeatureVector, FEATURE_COUNT, FIELD_NAMES};
pub use quantum::{CircuitParameters, QuantumFeatureMap, StateVector};
pub use scaler::{Scaler, ScalerParams};
pub use service::InferenceService;

// Version and crate information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
