use num_complex::Complex64;
use std::f64::consts::PI;

use cardioq::quantum::gates;
use cardioq::quantum::StateVector;

/// Helper function for comparing complex numbers with tolerance
fn complex_approx_eq(a: Complex64, b: Complex64, epsilon: f64) -> bool {
    (a - b).norm() < epsilon
}

/// Helper function for comparing f64 with tolerance
fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

#[test]
fn test_zero_state() {
    let state = StateVector::zero_state(3);
    assert_eq!(state.qubit_count(), 3);
    assert_eq!(state.dimension(), 8);
    assert!(approx_eq(state.probability(0), 1.0, 1e-12));
    for i in 1..8 {
        assert!(approx_eq(state.probability(i), 0.0, 1e-12));
    }
}

#[test]
fn test_rx_on_zero_state() {
    // RX(θ)|0⟩ = cos(θ/2)|0⟩ - i·sin(θ/2)|1⟩
    let theta = 1.234;
    let mut state = StateVector::zero_state(1);
    state.apply_single_qubit(0, &gates::rx(theta)).unwrap();

    let amps = state.amplitudes();
    assert!(complex_approx_eq(
        amps[0],
        Complex64::new((theta / 2.0).cos(), 0.0),
        1e-12
    ));
    assert!(complex_approx_eq(
        amps[1],
        Complex64::new(0.0, -(theta / 2.0).sin()),
        1e-12
    ));
}

#[test]
fn test_ry_on_zero_state() {
    // RY(θ)|0⟩ = cos(θ/2)|0⟩ + sin(θ/2)|1⟩, purely real
    let theta = 0.7;
    let mut state = StateVector::zero_state(1);
    state.apply_single_qubit(0, &gates::ry(theta)).unwrap();

    let amps = state.amplitudes();
    assert!(complex_approx_eq(
        amps[0],
        Complex64::new((theta / 2.0).cos(), 0.0),
        1e-12
    ));
    assert!(complex_approx_eq(
        amps[1],
        Complex64::new((theta / 2.0).sin(), 0.0),
        1e-12
    ));
}

#[test]
fn test_rz_is_phase_only() {
    // RZ leaves measurement probabilities unchanged
    let theta = 2.1;
    let mut state = StateVector::zero_state(1);
    state.apply_single_qubit(0, &gates::ry(0.9)).unwrap();
    let p0_before = state.probability(0);
    let p1_before = state.probability(1);

    state.apply_single_qubit(0, &gates::rz(theta)).unwrap();
    assert!(approx_eq(state.probability(0), p0_before, 1e-12));
    assert!(approx_eq(state.probability(1), p1_before, 1e-12));
}

#[test]
fn test_rx_full_turn_flips() {
    // RX(π)|0⟩ = -i|1⟩: measuring gives 1 with certainty
    let mut state = StateVector::zero_state(1);
    state.apply_single_qubit(0, &gates::rx(PI)).unwrap();
    assert!(approx_eq(state.probability(0), 0.0, 1e-12));
    assert!(approx_eq(state.probability(1), 1.0, 1e-12));
}

#[test]
fn test_cnot_truth_table() {
    // |00⟩ → |00⟩: control clear, target untouched
    let mut state = StateVector::zero_state(2);
    state.apply_cnot(0, 1).unwrap();
    assert!(approx_eq(state.probability(0b00), 1.0, 1e-12));

    // |10⟩ → |11⟩: control set (qubit 0 is the high bit)
    let mut state = StateVector::zero_state(2);
    state.apply_single_qubit(0, &gates::rx(PI)).unwrap();
    state.apply_cnot(0, 1).unwrap();
    assert!(approx_eq(state.probability(0b11), 1.0, 1e-12));

    // |01⟩ → |01⟩: target set but control clear
    let mut state = StateVector::zero_state(2);
    state.apply_single_qubit(1, &gates::rx(PI)).unwrap();
    state.apply_cnot(0, 1).unwrap();
    assert!(approx_eq(state.probability(0b01), 1.0, 1e-12));
}

#[test]
fn test_cnot_entangles_superposition() {
    // RX(θ) on the control then CNOT yields cos(θ/2)|00⟩ - i·sin(θ/2)|11⟩
    let theta = 0.8;
    let mut state = StateVector::zero_state(2);
    state.apply_single_qubit(0, &gates::rx(theta)).unwrap();
    state.apply_cnot(0, 1).unwrap();

    let amps = state.amplitudes();
    assert!(complex_approx_eq(
        amps[0b00],
        Complex64::new((theta / 2.0).cos(), 0.0),
        1e-12
    ));
    assert!(complex_approx_eq(
        amps[0b11],
        Complex64::new(0.0, -(theta / 2.0).sin()),
        1e-12
    ));
    assert!(approx_eq(amps[0b01].norm_sqr(), 0.0, 1e-12));
    assert!(approx_eq(amps[0b10].norm_sqr(), 0.0, 1e-12));
}

#[test]
fn test_expectation_z() {
    // ⟨Z⟩ after RX(θ) is cos(θ)
    let theta = 1.1;
    let mut state = StateVector::zero_state(2);
    state.apply_single_qubit(0, &gates::rx(theta)).unwrap();

    assert!(approx_eq(state.expectation_z(0).unwrap(), theta.cos(), 1e-12));
    // Untouched qubit stays at ⟨Z⟩ = 1
    assert!(approx_eq(state.expectation_z(1).unwrap(), 1.0, 1e-12));
}

#[test]
fn test_norm_preserved_under_gate_sequence() {
    let mut state = StateVector::zero_state(4);
    let angles = [0.3, -1.7, 2.9, 0.05, 4.2, -0.6];
    for (i, &theta) in angles.iter().enumerate() {
        let qubit = i % 4;
        state.apply_single_qubit(qubit, &gates::rx(theta)).unwrap();
        state.apply_single_qubit(qubit, &gates::ry(theta * 0.5)).unwrap();
        state.apply_single_qubit(qubit, &gates::rz(theta * 2.0)).unwrap();
        state.apply_cnot(qubit, (qubit + 1) % 4).unwrap();
    }
    assert!(approx_eq(state.norm_sqr(), 1.0, 1e-10));
    state.check_integrity().unwrap();
}

#[test]
fn test_qubit_index_out_of_range() {
    let mut state = StateVector::zero_state(2);
    assert!(state.apply_single_qubit(2, &gates::rx(0.1)).is_err());
    assert!(state.apply_cnot(0, 2).is_err());
    assert!(state.apply_cnot(1, 1).is_err());
    assert!(state.expectation_z(5).is_err());
}
