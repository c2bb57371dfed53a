//! Exact state-vector simulation of the embedding circuit
//!
//! The feature embedding is produced by an 8-qubit, 2-layer variational
//! circuit: an RX angle-embedding layer, then per-qubit RX/RY/RZ rotations
//! and a CNOT entangling ring per layer, read out as per-qubit Pauli-Z
//! expectation values.

pub mod embedding;
pub mod gates;
pub mod state;

pub use embedding::{CircuitParameters, QuantumFeatureMap, DEFAULT_LAYERS, DEFAULT_QUBITS};
pub use state::StateVector;
