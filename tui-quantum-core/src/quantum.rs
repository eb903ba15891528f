//! Value quantization: rounding a raw value to the nearest multiple of a
//! quantum and clamping it into bounds
//!
//! Every function here is total. Invalid inputs are either normalized
//! (swapped bounds) or fall back to plain clamping (non-positive quantum).
//! Use [`Bounds::new`] and [`Quantum::new`] when you want invalid inputs
//! rejected up front instead.

use serde::{Deserialize, Serialize};

use crate::error::QuantumError;

/// Fractional digits kept after quantization, suppresses float drift
/// such as `0.30000000000000004`
pub const FLOATING_PRECISION: usize = 7;

/// Inclusive `[min, max]` range of a slider
///
/// `max` may be `f64::INFINITY` for an unbounded slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    /// Create bounds, rejecting `min > max` and non-finite `min`
    pub fn new(min: f64, max: f64) -> Result<Self, QuantumError> {
        if !min.is_finite() || max.is_nan() || min > max {
            return Err(QuantumError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// Create bounds, swapping the ends when they are reversed
    pub fn normalized(a: f64, b: f64) -> Self {
        let (min, max) = ordered(a, b);
        Self { min, max }
    }

    /// Distance between the ends
    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    /// Check if a value is inside the bounds
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp a value into the bounds
    pub fn clamp(&self, value: f64) -> f64 {
        clamp(value, self.min, self.max)
    }
}

/// A validated, strictly positive step size
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Quantum(f64);

impl Quantum {
    /// Create a quantum, rejecting zero, negative and non-finite values
    pub fn new(value: f64) -> Result<Self, QuantumError> {
        if value > 0.0 && value.is_finite() {
            Ok(Self(value))
        } else {
            Err(QuantumError::InvalidQuantum(value))
        }
    }

    /// The raw step size
    pub fn get(self) -> f64 {
        self.0
    }

    /// Fractional digits implied by this quantum
    pub fn precision(self) -> usize {
        fraction_digits(self.0)
    }
}

impl Default for Quantum {
    fn default() -> Self {
        Self(1.0)
    }
}

impl<'de> Deserialize<'de> for Quantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = f64::deserialize(deserializer)?;
        Quantum::new(raw).map_err(serde::de::Error::custom)
    }
}

/// Clamp `value` into `[min, max]`
///
/// Unlike [`f64::clamp`] this never panics: reversed bounds are swapped and a
/// NaN value collapses to `min`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    let (min, max) = ordered(min, max);
    if value.is_nan() || value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Round `value` to `precision` fractional digits, half away from zero
pub fn round(value: f64, precision: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(precision as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Round `value` to the nearest multiple of `quantum`, then clamp into
/// `[min, max]`
///
/// Ties round half away from zero. A value at or beyond a bound returns that
/// bound, so a bound that is not itself a multiple stays reachable and the
/// result is a fixed point: quantizing it again returns it unchanged. A
/// quantum that is not strictly positive (or not finite) disables rounding
/// and the value is only clamped. Reversed bounds are swapped.
///
/// ```
/// use tui_quantum_core::quantize;
///
/// assert_eq!(quantize(7.0, -10.0, 10.0, 5.0), 5.0);
/// assert_eq!(quantize(-7.0, -10.0, 10.0, 5.0), -5.0);
/// assert_eq!(quantize(5.0, 1.0, 10.0, 3.0), 6.0);
/// assert_eq!(quantize(0.1 + 0.2, 0.0, 1.0, 0.1), 0.3);
/// ```
pub fn quantize(value: f64, min: f64, max: f64, quantum: f64) -> f64 {
    if !(quantum > 0.0 && quantum.is_finite()) {
        tracing::trace!(value, quantum, "quantum disabled, clamping only");
        return clamp(value, min, max);
    }

    let (min, max) = ordered(min, max);
    if value.is_nan() || value <= min {
        return min;
    }
    if value >= max {
        return max;
    }
    let snapped = (value / quantum).round() * quantum;
    clamp(round(snapped, FLOATING_PRECISION), min, max)
}

/// Number of significant fractional digits of a quantum
///
/// `0.25 -> 2`, `1 -> 0`, `0.1 -> 1`. Capped at [`FLOATING_PRECISION`].
pub fn fraction_digits(quantum: f64) -> usize {
    if !quantum.is_finite() {
        return 0;
    }
    // Display for f64 never uses exponent notation and prints the shortest
    // representation that round-trips.
    let text = round(quantum.abs(), FLOATING_PRECISION).to_string();
    text
        .split_once('.')
        .map(|(_, fraction)| fraction.trim_end_matches('0').len())
        .unwrap_or(0)
        .min(FLOATING_PRECISION)
}

/// Format a value with the precision implied by `quantum`
pub fn format_value(value: f64, quantum: f64) -> String {
    format!("{:.*}", fraction_digits(quantum), value)
}

fn ordered(min: f64, max: f64) -> (f64, f64) {
    if max < min {
        tracing::warn!(min, max, "reversed bounds, swapping");
        (max, min)
    } else {
        (min, max)
    }
}
