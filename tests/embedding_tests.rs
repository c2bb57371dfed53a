use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use cardioq::quantum::{CircuitParameters, QuantumFeatureMap, DEFAULT_LAYERS, DEFAULT_QUBITS};

/// Helper function for comparing f64 with tolerance
fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

fn default_feature_map(seed: u64) -> QuantumFeatureMap {
    let mut rng = StdRng::seed_from_u64(seed);
    QuantumFeatureMap::new(CircuitParameters::random(
        DEFAULT_LAYERS,
        DEFAULT_QUBITS,
        &mut rng,
    ))
}

fn random_features(len: usize, seed: u64) -> Array1<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    Array1::from((0..len).map(|_| rng.gen_range(-3.0..3.0)).collect::<Vec<_>>())
}

#[test]
fn test_embedding_dimensions() {
    let map = default_feature_map(1);
    assert_eq!(map.output_dim(), DEFAULT_QUBITS);

    let features = random_features(11, 2);
    let embedding = map.evaluate(&features).unwrap();
    assert_eq!(embedding.len(), DEFAULT_QUBITS);
}

#[test]
fn test_short_input_rejected() {
    let map = default_feature_map(3);
    let features = random_features(DEFAULT_QUBITS - 1, 4);
    assert!(map.evaluate(&features).is_err());
}

#[test]
fn test_extra_features_unused() {
    // The embedding only encodes the first n_qubits entries; trailing
    // entries must not affect the output.
    let map = default_feature_map(5);
    let mut features = random_features(11, 6);
    let embedding_a = map.evaluate(&features).unwrap();

    features[8] += 10.0;
    features[9] -= 4.0;
    features[10] = 0.0;
    let embedding_b = map.evaluate(&features).unwrap();

    assert_eq!(embedding_a, embedding_b);
}

#[test]
fn test_determinism() {
    let map = default_feature_map(7);
    let features = random_features(11, 8);

    let first = map.evaluate(&features).unwrap();
    let second = map.evaluate(&features).unwrap();
    // Identical inputs and parameters give bit-identical outputs.
    assert_eq!(first, second);
}

#[test]
fn test_expectation_range() {
    for seed in 0..10 {
        let map = default_feature_map(seed);
        let features = random_features(11, 100 + seed);
        let embedding = map.evaluate(&features).unwrap();
        for &value in embedding.iter() {
            assert!((-1.0..=1.0).contains(&value), "out of range: {}", value);
        }
    }
}

#[test]
fn test_zero_angles_zero_features_fixture() {
    // With all-zero rotation angles and all-zero inputs the state never
    // leaves |0...0⟩: every CNOT sees a clear control, so every qubit reads
    // ⟨Z⟩ = 1 exactly.
    let map = QuantumFeatureMap::new(CircuitParameters::zeros(DEFAULT_LAYERS, DEFAULT_QUBITS));
    let embedding = map.evaluate(&Array1::zeros(11)).unwrap();
    for &value in embedding.iter() {
        assert!(approx_eq(value, 1.0, 1e-12));
    }
}

#[test]
fn test_pure_angle_embedding_law_single_qubit() {
    // One qubit has no entangling ring, so with zero variational angles the
    // map reduces to the pure angle embedding: ⟨Z⟩ = cos(x).
    let map = QuantumFeatureMap::new(CircuitParameters::zeros(DEFAULT_LAYERS, 1));
    for &x in &[0.0, 0.4, -1.3, 2.8] {
        let embedding = map.evaluate(&Array1::from(vec![x])).unwrap();
        assert!(approx_eq(embedding[0], x.cos(), 1e-12));
    }
}

#[test]
fn test_two_qubit_ring_regression() {
    // Analytic fixture: two qubits, zero variational angles, input [x, 0].
    // After the embedding the state is cos(x/2)|00⟩ - i·sin(x/2)|10⟩; two
    // layers of the CNOT ring shuttle the excited component through |01⟩
    // back to |11⟩, so both qubits read ⟨Z⟩ = cos(x).
    let map = QuantumFeatureMap::new(CircuitParameters::zeros(2, 2));
    let x = 0.9;
    let embedding = map.evaluate(&Array1::from(vec![x, 0.0])).unwrap();
    assert!(approx_eq(embedding[0], x.cos(), 1e-12));
    assert!(approx_eq(embedding[1], x.cos(), 1e-12));
}

#[test]
fn test_parameter_shape_validation() {
    // Ragged layers are rejected
    let ragged = vec![vec![[0.0; 3]; 8], vec![[0.0; 3]; 7]];
    assert!(CircuitParameters::new(ragged).is_err());

    // Empty tensors are rejected
    assert!(CircuitParameters::new(Vec::new()).is_err());
    assert!(CircuitParameters::new(vec![Vec::new()]).is_err());

    // The expected-shape pin catches mismatched trained artifacts
    let params = CircuitParameters::zeros(2, 8);
    assert!(params.validate(Some((2, 8))).is_ok());
    assert!(params.validate(Some((3, 8))).is_err());
    assert!(params.validate(Some((2, 4))).is_err());
}

#[test]
fn test_circuit_parameters_serde_round_trip() {
    let mut rng = StdRng::seed_from_u64(11);
    let params = CircuitParameters::random(DEFAULT_LAYERS, DEFAULT_QUBITS, &mut rng);
    let json = serde_json::to_string(&params).unwrap();
    let back: CircuitParameters = serde_json::from_str(&json).unwrap();
    assert_eq!(params, back);
}
