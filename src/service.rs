//! Request orchestration: validate → normalize → embed → classify → decide
//!
//! The service owns the once-loaded, thereafter-immutable scaler, circuit,
//! and classifier head, and is safe for unlimited concurrent readers.

use log::{debug, info};
use ndarray::Array1;
use serde_json::{Map, Value};

use crate::batch::BatchEvaluator;
use crate::classifier::{ClassifierHead, LogisticHead};
use crate::decision::{decide, PredictionResult};
use crate::error::{ArtifactError, InferenceError};
use crate::features::FeatureVector;
use crate::quantum::{CircuitParameters, QuantumFeatureMap, DEFAULT_LAYERS, DEFAULT_QUBITS};
use crate::artifacts::ModelArtifacts;
use crate::scaler::{Scaler, ScalerParams};

/// The hybrid inference pipeline for one prediction request.
pub struct InferenceService {
    scaler: Scaler,
    feature_map: QuantumFeatureMap,
    head: Box<dyn ClassifierHead>,
}

impl InferenceService {
    /// Assemble a service from validated components.
    pub fn new(
        scaler: Scaler,
        feature_map: QuantumFeatureMap,
        head: Box<dyn ClassifierHead>,
    ) -> Result<Self, ArtifactError> {
        if head.input_dim() != feature_map.output_dim() {
            return Err(ArtifactError::HeadDimension {
                expected: feature_map.output_dim(),
                got: head.input_dim(),
            });
        }
        info!(
            "{} {} inference service ready: {} features, {} qubits, {} layers",
            crate::CRATE_NAME,
            crate::VERSION,
            scaler.len(),
            feature_map.params().qubit_count(),
            feature_map.params().layer_count()
        );
        Ok(InferenceService {
            scaler,
            feature_map,
            head,
        })
    }

    /// Build a service from loaded artifacts, validating every parameter
    /// block against the others. The circuit tensor is pinned to the trained
    /// (n_layers, n_qubits, 3) shape; anything else is a configuration
    /// defect, not a servable model.
    pub fn from_artifacts(artifacts: ModelArtifacts) -> Result<Self, ArtifactError> {
        let scaler = Scaler::new(artifacts.scaler)?;
        artifacts
            .circuit
            .validate(Some((DEFAULT_LAYERS, DEFAULT_QUBITS)))?;
        let feature_map = QuantumFeatureMap::new(artifacts.circuit);
        let head = LogisticHead::new(artifacts.head, feature_map.output_dim())?;
        Self::new(scaler, feature_map, Box::new(head))
    }

    /// Build a service from component parameter structs, with the same
    /// shape pinning as [`from_artifacts`](Self::from_artifacts).
    pub fn from_params(
        scaler: ScalerParams,
        circuit: CircuitParameters,
        head: Box<dyn ClassifierHead>,
    ) -> Result<Self, ArtifactError> {
        let scaler = Scaler::new(scaler)?;
        circuit.validate(Some((DEFAULT_LAYERS, DEFAULT_QUBITS)))?;
        Self::new(scaler, QuantumFeatureMap::new(circuit), head)
    }

    pub fn scaler(&self) -> &Scaler {
        &self.scaler
    }

    pub fn feature_map(&self) -> &QuantumFeatureMap {
        &self.feature_map
    }

    /// Serve one prediction from an untyped request payload.
    ///
    /// Any component failure aborts the request with the originating error;
    /// no partial result is returned.
    pub fn predict(&self, payload: &Map<String, Value>) -> Result<PredictionResult, InferenceError> {
        let features = FeatureVector::from_payload(payload)?;
        self.predict_features(&features)
    }

    /// Serve one prediction from an already-validated feature vector.
    pub fn predict_features(
        &self,
        features: &FeatureVector,
    ) -> Result<PredictionResult, InferenceError> {
        let raw = features.to_array();
        let normalized = self.scaler.normalize(&raw)?;
        let embedding = self.feature_map.evaluate(&normalized)?;
        let probability = self.head.classify(&embedding)?;
        let result = decide(probability);
        debug!(
            "prediction: label={} probability={:.6} confidence={}",
            result.label, result.probability, result.confidence
        );
        Ok(result)
    }

    /// Serve a batch of predictions, evaluating the quantum embeddings in
    /// parallel. Output order matches input order; the first failing sample
    /// aborts the batch with its index attached.
    pub fn predict_batch(
        &self,
        batch: &[FeatureVector],
    ) -> Result<Vec<PredictionResult>, InferenceError> {
        let normalized = batch
            .iter()
            .enumerate()
            .map(|(index, features)| {
                self.scaler
                    .normalize(&features.to_array())
                    .map_err(|e| e.at_sample(index))
            })
            .collect::<Result<Vec<Array1<f64>>, _>>()?;

        let embeddings = BatchEvaluator::new(&self.feature_map).evaluate(&normalized)?;

        embeddings
            .iter()
            .enumerate()
            .map(|(index, embedding)| {
                self.head
                    .classify(embedding)
                    .map(decide)
                    .map_err(|e| e.at_sample(index))
            })
            .collect()
    }
}
