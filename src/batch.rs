//! Parallel batch evaluation of the feature map
//!
//! Each sample is simulated independently with no shared mutable state, so
//! batches map cleanly onto rayon's parallel iterators. Output index i
//! always corresponds to input index i.

use ndarray::Array1;
use rayon::prelude::*;

use crate::error::InferenceError;
use crate::quantum::QuantumFeatureMap;

/// Applies the feature map across a batch of normalized feature vectors.
#[derive(Debug, Clone, Copy)]
pub struct BatchEvaluator<'a> {
    feature_map: &'a QuantumFeatureMap,
}

impl<'a> BatchEvaluator<'a> {
    pub fn new(feature_map: &'a QuantumFeatureMap) -> Self {
        BatchEvaluator { feature_map }
    }

    /// Evaluate every sample, preserving input order.
    ///
    /// A failing sample aborts the batch; its error is tagged with the
    /// sample's index.
    pub fn evaluate(&self, batch: &[Array1<f64>]) -> Result<Vec<Array1<f64>>, InferenceError> {
        batch
            .par_iter()
            .enumerate()
            .map(|(index, features)| {
                self.feature_map
                    .evaluate(features)
                    .map_err(|e| e.at_sample(index))
            })
            .collect()
    }
}
