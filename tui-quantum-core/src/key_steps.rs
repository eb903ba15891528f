//! Key steps: sparse `(percentage, value)` breakpoints for non-linear sliders
//!
//! A slider with key steps `[(50, 1000)]` over `0..=10000` spends the first
//! half of its track on `0..=1000` and the second half on `1000..=10000`.
//! The table always starts at `(0, min)` and ends at `(100, max)`.

use serde::{Deserialize, Serialize};

use crate::error::QuantumError;
use crate::quantum::clamp;

/// A single `(percentage, value)` breakpoint
///
/// Serialized as a two-element array: `[50, 1000]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct KeyStep {
    /// Track position, `0..=100`
    pub percentage: f64,
    /// Value at that position
    pub value: f64,
}

impl KeyStep {
    pub const fn new(percentage: f64, value: f64) -> Self {
        Self { percentage, value }
    }
}

impl From<(f64, f64)> for KeyStep {
    fn from((percentage, value): (f64, f64)) -> Self {
        Self { percentage, value }
    }
}

impl From<KeyStep> for (f64, f64) {
    fn from(step: KeyStep) -> Self {
        (step.percentage, step.value)
    }
}

/// Ordered breakpoint table anchored at `(0, min)` and `(100, max)`
///
/// Only produced by [`build_key_steps`], so it always has at least two
/// entries.
#[derive(Debug, Clone, PartialEq)]
pub struct KeySteps(Vec<KeyStep>);

/// Build the breakpoint table for a slider
///
/// Prepends `(0, min)` and appends `(100, max)`. The intermediate steps are
/// kept exactly as given: no sorting, deduplication or validation.
///
/// ```
/// use tui_quantum_core::{build_key_steps, KeyStep};
///
/// let table = build_key_steps(&[KeyStep::new(50.0, 1000.0)], 0.0, 2000.0);
/// assert_eq!(
///     table.as_slice(),
///     &[
///         KeyStep::new(0.0, 0.0),
///         KeyStep::new(50.0, 1000.0),
///         KeyStep::new(100.0, 2000.0),
///     ]
/// );
/// ```
pub fn build_key_steps(intermediate: &[KeyStep], min: f64, max: f64) -> KeySteps {
    let mut steps = Vec::with_capacity(intermediate.len() + 2);
    steps.push(KeyStep::new(0.0, min));
    steps.extend_from_slice(intermediate);
    steps.push(KeyStep::new(100.0, max));
    KeySteps(steps)
}

/// Check that every percentage is finite and inside `0..=100`
pub fn validate_key_steps(steps: &[KeyStep]) -> Result<(), QuantumError> {
    match steps
        .iter()
        .find(|step| !(0.0..=100.0).contains(&step.percentage))
    {
        Some(step) => Err(QuantumError::InvalidKeyStep(step.percentage)),
        None => Ok(()),
    }
}

impl KeySteps {
    /// All breakpoints, anchors included
    pub fn as_slice(&self) -> &[KeyStep] {
        &self.0
    }

    /// Number of breakpoints, anchors included
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false, the anchors are always present
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The `(0, min)` anchor
    pub fn first(&self) -> KeyStep {
        self.0[0]
    }

    /// The `(100, max)` anchor
    pub fn last(&self) -> KeyStep {
        self.0[self.0.len() - 1]
    }

    /// Interpolate the value at a track percentage
    ///
    /// The percentage is clamped into `0..=100`.
    pub fn percentage_to_value(&self, percentage: f64) -> f64 {
        let percentage = clamp(percentage, 0.0, 100.0);
        let steps = &self.0;

        let right = steps
            .iter()
            .position(|step| step.percentage >= percentage)
            .unwrap_or(steps.len() - 1);
        let left = right.saturating_sub(1);
        let (lower, upper) = (steps[left], steps[right]);

        let ratio = (percentage - lower.percentage) / (upper.percentage - lower.percentage);
        if !ratio.is_finite() || ratio <= 0.0 {
            return lower.value;
        }
        if ratio >= 1.0 {
            return upper.value;
        }
        lower.value + (upper.value - lower.value) * ratio
    }

    /// Track percentage of a value, the inverse of
    /// [`percentage_to_value`](Self::percentage_to_value)
    ///
    /// Values below the first anchor map to `0`, above the last to `100`.
    pub fn value_to_percentage(&self, value: f64) -> f64 {
        let steps = &self.0;
        if value.is_nan() || value <= steps[0].value {
            return steps[0].percentage;
        }

        let Some(upper) = steps
            .iter()
            .skip(1)
            .position(|step| step.value >= value)
            .map(|i| i + 1)
        else {
            return self.last().percentage;
        };
        let (lower, upper) = (steps[upper - 1], steps[upper]);

        let span = upper.value - lower.value;
        if span == 0.0 || !span.is_finite() {
            return lower.percentage;
        }
        (value - lower.value) / span * (upper.percentage - lower.percentage) + lower.percentage
    }
}
