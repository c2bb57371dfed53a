//! Pure-state amplitude vector and in-place gate application
//!
//! A state of n qubits is a complex amplitude vector of length 2^n. Qubit
//! indexing is big-endian: qubit 0 corresponds to the most significant bit
//! of a computational-basis index.

use ndarray::Array1;
use num_complex::Complex64;

use crate::error::InferenceError;
use crate::quantum::gates::Gate1;

/// Tolerance for the unit-norm invariant of a simulated state.
pub const NORM_TOLERANCE: f64 = 1e-6;

/// State vector representation of an n-qubit pure state.
#[derive(Debug, Clone)]
pub struct StateVector {
    qubit_count: usize,
    amplitudes: Array1<Complex64>,
}

impl StateVector {
    /// Create the zero state |00...0⟩ on `qubit_count` qubits.
    pub fn zero_state(qubit_count: usize) -> Self {
        let dim = 1 << qubit_count;
        let mut amplitudes = Array1::zeros(dim);
        amplitudes[0] = Complex64::new(1.0, 0.0);
        StateVector {
            qubit_count,
            amplitudes,
        }
    }

    pub fn qubit_count(&self) -> usize {
        self.qubit_count
    }

    /// Dimension of the underlying Hilbert space (2^n).
    pub fn dimension(&self) -> usize {
        1 << self.qubit_count
    }

    /// Amplitudes in computational-basis order.
    pub fn amplitudes(&self) -> &Array1<Complex64> {
        &self.amplitudes
    }

    /// Probability of measuring the given basis state.
    pub fn probability(&self, basis_index: usize) -> f64 {
        self.amplitudes[basis_index].norm_sqr()
    }

    /// Total probability: the sum of squared amplitude magnitudes.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|amp| amp.norm_sqr()).sum()
    }

    /// Bit mask selecting the given qubit in a basis index (big-endian).
    fn qubit_mask(&self, qubit: usize) -> usize {
        1 << (self.qubit_count - 1 - qubit)
    }

    fn check_qubit(&self, qubit: usize) -> Result<(), InferenceError> {
        if qubit >= self.qubit_count {
            return Err(InferenceError::ShapeMismatch {
                expected: format!("qubit index < {}", self.qubit_count),
                got: format!("qubit index {}", qubit),
            });
        }
        Ok(())
    }

    /// Apply a single-qubit gate to the given qubit, in place.
    ///
    /// Walks the basis indices pairwise: for each index with the target bit
    /// clear, the gate mixes that amplitude with its bit-flipped partner.
    pub fn apply_single_qubit(&mut self, qubit: usize, gate: &Gate1) -> Result<(), InferenceError> {
        self.check_qubit(qubit)?;
        let mask = self.qubit_mask(qubit);
        let dim = self.dimension();

        for i in 0..dim {
            if i & mask != 0 {
                continue;
            }
            let j = i | mask;
            let a = self.amplitudes[i];
            let b = self.amplitudes[j];
            self.amplitudes[i] = gate[0][0] * a + gate[0][1] * b;
            self.amplitudes[j] = gate[1][0] * a + gate[1][1] * b;
        }
        Ok(())
    }

    /// Apply a CNOT with the given control and target qubits, in place.
    ///
    /// Swaps the amplitude pairs where the control bit is set, flipping the
    /// target bit.
    pub fn apply_cnot(&mut self, control: usize, target: usize) -> Result<(), InferenceError> {
        self.check_qubit(control)?;
        self.check_qubit(target)?;
        if control == target {
            return Err(InferenceError::ShapeMismatch {
                expected: "distinct control and target qubits".to_string(),
                got: format!("both {}", control),
            });
        }

        let control_mask = self.qubit_mask(control);
        let target_mask = self.qubit_mask(target);
        let dim = self.dimension();

        for i in 0..dim {
            if i & control_mask != 0 && i & target_mask == 0 {
                self.amplitudes.swap(i, i | target_mask);
            }
        }
        Ok(())
    }

    /// Exact Pauli-Z expectation on one qubit: P(measure 0) − P(measure 1),
    /// computed by summing squared amplitude magnitudes over the basis
    /// subsets. Deterministic, never sampled.
    pub fn expectation_z(&self, qubit: usize) -> Result<f64, InferenceError> {
        self.check_qubit(qubit)?;
        let mask = self.qubit_mask(qubit);

        let mut expectation = 0.0;
        for (i, amp) in self.amplitudes.iter().enumerate() {
            let prob = amp.norm_sqr();
            if i & mask == 0 {
                expectation += prob;
            } else {
                expectation -= prob;
            }
        }
        Ok(expectation)
    }

    /// Verify the state is still a unit vector with finite amplitudes.
    ///
    /// A violation is an internal simulator defect, surfaced as
    /// [`InferenceError::NumericDivergence`] rather than clamped.
    pub fn check_integrity(&self) -> Result<(), InferenceError> {
        if self.amplitudes.iter().any(|amp| !amp.is_finite()) {
            return Err(InferenceError::NumericDivergence(
                "non-finite amplitude in state vector".to_string(),
            ));
        }
        let norm_sqr = self.norm_sqr();
        if (norm_sqr - 1.0).abs() > NORM_TOLERANCE {
            return Err(InferenceError::NumericDivergence(format!(
                "state norm² drifted to {}",
                norm_sqr
            )));
        }
        Ok(())
    }
}
