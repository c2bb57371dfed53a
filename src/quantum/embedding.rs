//! Variational feature-embedding circuit
//!
//! Maps a normalized feature vector to a fixed-length real embedding by
//! simulating the trained circuit exactly and reading out per-qubit Pauli-Z
//! expectation values.

use ndarray::Array1;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::error::{ArtifactError, InferenceError};
use crate::quantum::gates;
use crate::quantum::state::StateVector;

/// Number of qubits in the trained embedding circuit.
pub const DEFAULT_QUBITS: usize = 8;

/// Number of variational layers in the trained embedding circuit.
pub const DEFAULT_LAYERS: usize = 2;

/// Trained rotation angles, one `[rx, ry, rz]` triple per layer per qubit.
///
/// Immutable after load; the shape invariant (rectangular, non-empty) is
/// established at construction and relied on by the simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CircuitParameters {
    rotations: Vec<Vec<[f64; 3]>>,
}

impl CircuitParameters {
    /// Build from a (n_layers, n_qubits, 3) angle tensor, validating shape.
    pub fn new(rotations: Vec<Vec<[f64; 3]>>) -> Result<Self, ArtifactError> {
        Self::check_shape(&rotations)?;
        Ok(CircuitParameters { rotations })
    }

    /// All-zero angles: every variational rotation is the identity.
    pub fn zeros(n_layers: usize, n_qubits: usize) -> Self {
        CircuitParameters {
            rotations: vec![vec![[0.0; 3]; n_qubits]; n_layers],
        }
    }

    /// Angles drawn uniformly from [0, 2π), an untrained starting point.
    pub fn random<R: Rng>(n_layers: usize, n_qubits: usize, rng: &mut R) -> Self {
        let rotations = (0..n_layers)
            .map(|_| {
                (0..n_qubits)
                    .map(|_| {
                        [
                            rng.gen_range(0.0..2.0 * PI),
                            rng.gen_range(0.0..2.0 * PI),
                            rng.gen_range(0.0..2.0 * PI),
                        ]
                    })
                    .collect()
            })
            .collect();
        CircuitParameters { rotations }
    }

    fn check_shape(rotations: &[Vec<[f64; 3]>]) -> Result<(), ArtifactError> {
        if rotations.is_empty() {
            return Err(ArtifactError::CircuitShape("no layers".to_string()));
        }
        let n_qubits = rotations[0].len();
        if n_qubits == 0 {
            return Err(ArtifactError::CircuitShape("no qubits".to_string()));
        }
        for (layer, angles) in rotations.iter().enumerate() {
            if angles.len() != n_qubits {
                return Err(ArtifactError::CircuitShape(format!(
                    "layer {} has {} qubits, layer 0 has {}",
                    layer,
                    angles.len(),
                    n_qubits
                )));
            }
        }
        Ok(())
    }

    /// Re-validate after deserialization, optionally pinning the expected
    /// (n_layers, n_qubits) shape.
    pub fn validate(&self, expected: Option<(usize, usize)>) -> Result<(), ArtifactError> {
        Self::check_shape(&self.rotations)?;
        if let Some((layers, qubits)) = expected {
            if self.layer_count() != layers || self.qubit_count() != qubits {
                return Err(ArtifactError::CircuitShape(format!(
                    "expected ({}, {}, 3), got ({}, {}, 3)",
                    layers,
                    qubits,
                    self.layer_count(),
                    self.qubit_count()
                )));
            }
        }
        Ok(())
    }

    pub fn layer_count(&self) -> usize {
        self.rotations.len()
    }

    pub fn qubit_count(&self) -> usize {
        self.rotations[0].len()
    }

    /// The `[rx, ry, rz]` angles for one layer and qubit.
    pub fn angles(&self, layer: usize, qubit: usize) -> [f64; 3] {
        self.rotations[layer][qubit]
    }
}

/// The quantum feature layer: angle embedding, variational rotations with a
/// CNOT entangling ring per layer, and exact Pauli-Z readout.
#[derive(Debug, Clone)]
pub struct QuantumFeatureMap {
    params: CircuitParameters,
}

impl QuantumFeatureMap {
    pub fn new(params: CircuitParameters) -> Self {
        QuantumFeatureMap { params }
    }

    /// Width of the produced embedding (= number of qubits).
    pub fn output_dim(&self) -> usize {
        self.params.qubit_count()
    }

    pub fn params(&self) -> &CircuitParameters {
        &self.params
    }

    /// Simulate the circuit for one normalized feature vector and return the
    /// per-qubit Pauli-Z expectation values, each in [-1, 1].
    ///
    /// Only the first `n_qubits` entries of the input are encoded; the
    /// embedding layer has fixed width and any extra features are unused.
    pub fn evaluate(&self, features: &Array1<f64>) -> Result<Array1<f64>, InferenceError> {
        let n_qubits = self.params.qubit_count();
        if features.len() < n_qubits {
            return Err(InferenceError::ShapeMismatch {
                expected: format!("at least {} features", n_qubits),
                got: format!("{} features", features.len()),
            });
        }

        let mut state = StateVector::zero_state(n_qubits);

        // Angle embedding: one RX per qubit, parameterized by the input.
        for qubit in 0..n_qubits {
            state.apply_single_qubit(qubit, &gates::rx(features[qubit]))?;
        }

        // Variational layers: RX/RY/RZ per qubit, then the entangling ring.
        // Ring order matters; gates are applied in increasing qubit order.
        for layer in 0..self.params.layer_count() {
            for qubit in 0..n_qubits {
                let [theta_x, theta_y, theta_z] = self.params.angles(layer, qubit);
                state.apply_single_qubit(qubit, &gates::rx(theta_x))?;
                state.apply_single_qubit(qubit, &gates::ry(theta_y))?;
                state.apply_single_qubit(qubit, &gates::rz(theta_z))?;
            }
            if n_qubits > 1 {
                for qubit in 0..n_qubits {
                    state.apply_cnot(qubit, (qubit + 1) % n_qubits)?;
                }
            }
        }

        state.check_integrity()?;

        let mut expectations = Array1::zeros(n_qubits);
        for qubit in 0..n_qubits {
            expectations[qubit] = state.expectation_z(qubit)?;
        }
        Ok(expectations)
    }
}
