//! Clinical feature vector construction
//!
//! Builds the fixed-order 11-field feature vector from an untyped request
//! payload. Field order is load-bearing: it determines alignment with the
//! scaler statistics and the circuit's angle embedding.

use ndarray::Array1;
use serde_json::{Map, Value};

use crate::error::InferenceError;

/// Number of clinical input features.
pub const FEATURE_COUNT: usize = 11;

/// The request payload keys, in the canonical feature order.
pub const FIELD_NAMES: [&str; FEATURE_COUNT] = [
    "age",
    "sex",
    "chestPainType",
    "restingBP",
    "cholesterol",
    "fastingBS",
    "restingECG",
    "maxHR",
    "exerciseAngina",
    "oldpeak",
    "stSlope",
];

/// A validated, ordered encoding of the eleven clinical input fields.
///
/// Values are accepted as-is after type coercion; out-of-range clinical
/// values pass through unchanged (domain validation is out of scope).
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    pub age: f64,
    pub sex: i64,
    pub chest_pain_type: i64,
    pub resting_bp: f64,
    pub cholesterol: f64,
    pub fasting_bs: i64,
    pub resting_ecg: i64,
    pub max_hr: f64,
    pub exercise_angina: i64,
    pub oldpeak: f64,
    pub st_slope: i64,
}

impl FeatureVector {
    /// Build a feature vector from an untyped JSON object.
    ///
    /// Each field must be present and coercible to its declared numeric
    /// type. JSON numbers and numeric strings are both accepted; integer
    /// fields additionally accept integral-valued floats.
    pub fn from_payload(payload: &Map<String, Value>) -> Result<Self, InferenceError> {
        Ok(FeatureVector {
            age: coerce_real(payload, "age")?,
            sex: coerce_integer(payload, "sex")?,
            chest_pain_type: coerce_integer(payload, "chestPainType")?,
            resting_bp: coerce_real(payload, "restingBP")?,
            cholesterol: coerce_real(payload, "cholesterol")?,
            fasting_bs: coerce_integer(payload, "fastingBS")?,
            resting_ecg: coerce_integer(payload, "restingECG")?,
            max_hr: coerce_real(payload, "maxHR")?,
            exercise_angina: coerce_integer(payload, "exerciseAngina")?,
            oldpeak: coerce_real(payload, "oldpeak")?,
            st_slope: coerce_integer(payload, "stSlope")?,
        })
    }

    /// Flatten into the fixed-order real array consumed by the scaler.
    pub fn to_array(&self) -> Array1<f64> {
        Array1::from(vec![
            self.age,
            self.sex as f64,
            self.chest_pain_type as f64,
            self.resting_bp,
            self.cholesterol,
            self.fasting_bs as f64,
            self.resting_ecg as f64,
            self.max_hr,
            self.exercise_angina as f64,
            self.oldpeak,
            self.st_slope as f64,
        ])
    }
}

fn lookup<'a>(
    payload: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a Value, InferenceError> {
    payload.get(field).ok_or(InferenceError::MissingField(field))
}

fn coercion_error(field: &'static str, expected: &'static str, value: &Value) -> InferenceError {
    InferenceError::TypeCoercion {
        field,
        expected,
        value: value.to_string(),
    }
}

fn coerce_real(payload: &Map<String, Value>, field: &'static str) -> Result<f64, InferenceError> {
    let value = lookup(payload, field)?;
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| coercion_error(field, "number", value)),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| coercion_error(field, "number", value)),
        _ => Err(coercion_error(field, "number", value)),
    }
}

fn coerce_integer(payload: &Map<String, Value>, field: &'static str) -> Result<i64, InferenceError> {
    let value = lookup(payload, field)?;
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            // Integral floats (e.g. 1.0) coerce; fractional values do not.
            match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f.is_finite() => Ok(f as i64),
                _ => Err(coercion_error(field, "integer", value)),
            }
        }
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| coercion_error(field, "integer", value)),
        _ => Err(coercion_error(field, "integer", value)),
    }
}
