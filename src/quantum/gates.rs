//! Single-qubit rotation gate matrices
//!
//! Standard rotation matrices parameterized by an angle θ in radians, with
//! the conventional θ/2 half-angle form. Each is unitary for any real θ.

use num_complex::Complex64;

/// A 2×2 complex matrix in row-major order.
pub type Gate1 = [[Complex64; 2]; 2];

/// Rotation about the X axis:
/// `[[cos(θ/2), -i·sin(θ/2)], [-i·sin(θ/2), cos(θ/2)]]`.
pub fn rx(theta: f64) -> Gate1 {
    let cos = (theta / 2.0).cos();
    let sin = (theta / 2.0).sin();
    [
        [Complex64::new(cos, 0.0), Complex64::new(0.0, -sin)],
        [Complex64::new(0.0, -sin), Complex64::new(cos, 0.0)],
    ]
}

/// Rotation about the Y axis:
/// `[[cos(θ/2), -sin(θ/2)], [sin(θ/2), cos(θ/2)]]`.
pub fn ry(theta: f64) -> Gate1 {
    let cos = (theta / 2.0).cos();
    let sin = (theta / 2.0).sin();
    [
        [Complex64::new(cos, 0.0), Complex64::new(-sin, 0.0)],
        [Complex64::new(sin, 0.0), Complex64::new(cos, 0.0)],
    ]
}

/// Rotation about the Z axis: `diag(e^{-iθ/2}, e^{+iθ/2})`.
pub fn rz(theta: f64) -> Gate1 {
    let phase_neg = Complex64::new(0.0, -theta / 2.0).exp();
    let phase_pos = Complex64::new(0.0, theta / 2.0).exp();
    let zero = Complex64::new(0.0, 0.0);
    [[phase_neg, zero], [zero, phase_pos]]
}
