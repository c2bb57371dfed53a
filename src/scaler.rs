//! Per-feature affine standardization
//!
//! Applies the persisted training-set statistics to raw feature vectors:
//! `y[i] = (x[i] - mean[i]) / scale[i]`. The statistics are loaded once at
//! startup and never mutated.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::error::{ArtifactError, InferenceError};
use crate::features::FEATURE_COUNT;

/// Persisted standardization statistics: one mean and one scale per feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalerParams {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl ScalerParams {
    /// Identity statistics (mean 0, scale 1) of the given width.
    pub fn identity(len: usize) -> Self {
        ScalerParams {
            mean: vec![0.0; len],
            scale: vec![1.0; len],
        }
    }

    /// Check array lengths and the nonzero-scale invariant.
    pub fn validate(&self, expected_len: usize) -> Result<(), ArtifactError> {
        if self.mean.len() != expected_len || self.scale.len() != expected_len {
            return Err(ArtifactError::ScalerLength {
                mean_len: self.mean.len(),
                scale_len: self.scale.len(),
                expected: expected_len,
            });
        }
        for (index, &s) in self.scale.iter().enumerate() {
            if s == 0.0 {
                return Err(ArtifactError::ZeroScale { index });
            }
        }
        Ok(())
    }
}

/// Elementwise standardizer over validated statistics.
#[derive(Debug, Clone)]
pub struct Scaler {
    params: ScalerParams,
}

impl Scaler {
    /// Create a scaler from persisted statistics, validating them first.
    pub fn new(params: ScalerParams) -> Result<Self, ArtifactError> {
        params.validate(FEATURE_COUNT)?;
        Ok(Scaler { params })
    }

    /// Number of features this scaler standardizes.
    pub fn len(&self) -> usize {
        self.params.mean.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.mean.is_empty()
    }

    fn check_shape(&self, input_len: usize) -> Result<(), InferenceError> {
        if input_len != self.len() {
            return Err(InferenceError::ShapeMismatch {
                expected: format!("{}-vector", self.len()),
                got: format!("{}-vector", input_len),
            });
        }
        Ok(())
    }

    /// Standardize a raw feature vector: `y[i] = (x[i] - mean[i]) / scale[i]`.
    pub fn normalize(&self, x: &Array1<f64>) -> Result<Array1<f64>, InferenceError> {
        self.check_shape(x.len())?;
        let y = x
            .iter()
            .zip(self.params.mean.iter())
            .zip(self.params.scale.iter())
            .map(|((&xi, &mi), &si)| (xi - mi) / si)
            .collect::<Vec<_>>();
        Ok(Array1::from(y))
    }

    /// Invert [`normalize`](Self::normalize): `x[i] = y[i] * scale[i] + mean[i]`.
    pub fn denormalize(&self, y: &Array1<f64>) -> Result<Array1<f64>, InferenceError> {
        self.check_shape(y.len())?;
        let x = y
            .iter()
            .zip(self.params.mean.iter())
            .zip(self.params.scale.iter())
            .map(|((&yi, &mi), &si)| yi * si + mi)
            .collect::<Vec<_>>();
        Ok(Array1::from(x))
    }
}
