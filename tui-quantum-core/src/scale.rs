//! Scale: the numeric model shared by single and two-thumb sliders
//!
//! A [`Scale`] bundles bounds, quantum, explicit steps, segments and key
//! steps, and keeps the [`KeySteps`] table memoized per instance. The table is
//! rebuilt only when the bounds or the intermediate breakpoints change.

use crate::error::QuantumError;
use crate::key_steps::{build_key_steps, validate_key_steps, KeyStep, KeySteps};
use crate::quantum::{clamp, format_value, quantize, Bounds, Quantum};
use crate::steps::{segment_ticks, segmented, step_count, step_size};

/// Numeric model of a slider
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    bounds: Bounds,
    quantum: Option<Quantum>,
    steps: u32,
    segments: u32,
    intermediate: Vec<KeyStep>,
    table: KeySteps,
}

impl Scale {
    /// Create a scale with a quantum of `1` and no key steps
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            quantum: Some(Quantum::default()),
            steps: 0,
            segments: 0,
            intermediate: Vec::new(),
            table: build_key_steps(&[], bounds.min, bounds.max),
        }
    }

    /// Set the quantum, `None` disables rounding
    pub fn with_quantum(mut self, quantum: Option<Quantum>) -> Self {
        self.quantum = quantum;
        self
    }

    /// Set an explicit step count, `0` derives it from the quantum
    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }

    /// Set the number of tick segments, `0` hides ticks
    pub fn with_segments(mut self, segments: u32) -> Self {
        self.segments = segments;
        self
    }

    /// Set intermediate key steps
    pub fn with_key_steps(mut self, steps: Vec<KeyStep>) -> Result<Self, QuantumError> {
        self.set_key_steps(steps)?;
        Ok(self)
    }

    /// Replace the bounds and rebuild the key-step table
    pub fn set_bounds(&mut self, bounds: Bounds) {
        if bounds != self.bounds {
            self.bounds = bounds;
            self.rebuild();
        }
    }

    /// Replace the intermediate key steps and rebuild the table
    pub fn set_key_steps(&mut self, steps: Vec<KeyStep>) -> Result<(), QuantumError> {
        validate_key_steps(&steps)?;
        if steps != self.intermediate {
            self.intermediate = steps;
            self.rebuild();
        }
        Ok(())
    }

    fn rebuild(&mut self) {
        tracing::trace!(
            min = self.bounds.min,
            max = self.bounds.max,
            breakpoints = self.intermediate.len(),
            "rebuilding key steps"
        );
        self.table = build_key_steps(&self.intermediate, self.bounds.min, self.bounds.max);
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn min(&self) -> f64 {
        self.bounds.min
    }

    pub fn max(&self) -> f64 {
        self.bounds.max
    }

    pub fn quantum(&self) -> Option<Quantum> {
        self.quantum
    }

    pub fn segments(&self) -> u32 {
        self.segments
    }

    /// Distance between min and max
    pub fn length(&self) -> f64 {
        self.bounds.length()
    }

    /// Whether tick segments are drawn
    pub fn segmented(&self) -> bool {
        segmented(self.segments)
    }

    /// Percent positions of the segment ticks
    pub fn ticks(&self) -> Vec<f64> {
        segment_ticks(self.segments)
    }

    /// The memoized key-step table
    pub fn key_steps(&self) -> &KeySteps {
        &self.table
    }

    fn raw_quantum(&self) -> f64 {
        self.quantum.map(Quantum::get).unwrap_or(0.0)
    }

    /// Discrete steps between min and max
    pub fn step_count(&self) -> f64 {
        step_count(f64::from(self.steps), self.min(), self.max(), self.raw_quantum())
    }

    /// Distance of a single keyboard step
    pub fn step(&self) -> f64 {
        step_size(f64::from(self.steps), self.min(), self.max(), self.raw_quantum())
    }

    /// Distance of one keyboard step
    ///
    /// Same as [`Scale::step`], falling back to a hundredth of the length when
    /// the scale has no quantum and no explicit steps.
    pub fn key_step(&self) -> f64 {
        let step = self.step();
        if step > 0.0 {
            return step;
        }
        let length = self.length();
        if length.is_finite() && length > 0.0 {
            length / 100.0
        } else {
            0.0
        }
    }

    /// Quantize and clamp a raw value
    pub fn guard(&self, value: f64) -> f64 {
        match self.quantum {
            Some(quantum) => quantize(value, self.min(), self.max(), quantum.get()),
            None => clamp(value, self.min(), self.max()),
        }
    }

    /// Track percentage of a value, honouring key steps
    pub fn percentage_of(&self, value: f64) -> f64 {
        self.table.value_to_percentage(value)
    }

    /// Guarded value at a track percentage, honouring key steps
    pub fn value_at(&self, percentage: f64) -> f64 {
        self.guard(self.table.percentage_to_value(percentage))
    }

    /// Fractional digits used when displaying values
    pub fn precision(&self) -> usize {
        self.quantum.map(Quantum::precision).unwrap_or(0)
    }

    /// Format a value for display
    pub fn format(&self, value: f64) -> String {
        format_value(value, self.raw_quantum())
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::new(Bounds { min: 0.0, max: 100.0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale(min: f64, max: f64, quantum: f64) -> Scale {
        Scale::new(Bounds::new(min, max).unwrap())
            .with_quantum(Some(Quantum::new(quantum).unwrap()))
    }

    #[test]
    fn test_guard_quantizes() {
        let s = scale(-10.0, 10.0, 5.0);
        assert_eq!(s.guard(7.0), 5.0);
        assert_eq!(s.guard(-7.0), -5.0);
        assert_eq!(s.guard(100.0), 10.0);
    }

    #[test]
    fn test_guard_without_quantum_clamps() {
        let s = scale(0.0, 10.0, 1.0).with_quantum(None);
        assert_eq!(s.guard(3.33), 3.33);
        assert_eq!(s.guard(-1.0), 0.0);
        assert_eq!(s.step_count(), 0.0);
        assert_eq!(s.step(), 0.0);
        assert_eq!(s.key_step(), 0.1);

        let unbounded = Scale::new(Bounds::new(0.0, f64::INFINITY).unwrap()).with_quantum(None);
        assert_eq!(unbounded.key_step(), 0.0);
    }

    #[test]
    fn test_steps() {
        let s = scale(0.0, 10.0, 1.0);
        assert_eq!(s.step_count(), 10.0);
        assert_eq!(s.step(), 1.0);

        assert_eq!(s.key_step(), 1.0);

        let s = s.with_steps(5);
        assert_eq!(s.step_count(), 5.0);
        assert_eq!(s.step(), 2.0);
        assert_eq!(s.key_step(), 2.0);
    }

    #[test]
    fn test_key_steps_rebuilt_on_change() {
        let mut s = scale(0.0, 2000.0, 1.0)
            .with_key_steps(vec![KeyStep::new(50.0, 1000.0)])
            .unwrap();
        assert_eq!(s.key_steps().len(), 3);
        assert_eq!(s.key_steps().last(), KeyStep::new(100.0, 2000.0));

        s.set_bounds(Bounds::new(0.0, 4000.0).unwrap());
        assert_eq!(s.key_steps().last(), KeyStep::new(100.0, 4000.0));

        s.set_key_steps(Vec::new()).unwrap();
        assert_eq!(s.key_steps().len(), 2);
    }

    #[test]
    fn test_rejects_bad_key_steps() {
        let result = scale(0.0, 10.0, 1.0).with_key_steps(vec![KeyStep::new(-5.0, 1.0)]);
        assert_eq!(result, Err(QuantumError::InvalidKeyStep(-5.0)));
    }

    #[test]
    fn test_value_at_is_guarded() {
        let s = scale(0.0, 10000.0, 100.0)
            .with_key_steps(vec![KeyStep::new(50.0, 1000.0)])
            .unwrap();
        assert_eq!(s.value_at(25.0), 500.0);
        assert_eq!(s.value_at(60.0), 2800.0);
        assert_eq!(s.value_at(61.0), 3000.0);
        assert_eq!(s.percentage_of(5500.0), 75.0);
    }

    #[test]
    fn test_format() {
        assert_eq!(scale(0.0, 1.0, 0.05).format(0.5), "0.50");
        assert_eq!(scale(0.0, 100.0, 1.0).format(42.0), "42");
        assert_eq!(scale(0.0, 1.0, 0.05).precision(), 2);
    }

    #[test]
    fn test_ticks() {
        let s = scale(0.0, 10.0, 1.0).with_segments(2);
        assert!(s.segmented());
        assert_eq!(s.ticks(), vec![0.0, 50.0, 100.0]);
        assert!(!Scale::default().segmented());
    }
}
