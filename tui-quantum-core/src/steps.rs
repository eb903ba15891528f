//! Step counting for keyboard and tick movement

/// Number of discrete steps between `min` and `max`
///
/// An explicit step count wins when positive. Otherwise the count is derived
/// from the quantum. A non-positive quantum with no explicit count yields `0`
/// (no movement possible).
///
/// ```
/// use tui_quantum_core::step_count;
///
/// assert_eq!(step_count(0.0, 0.0, 10.0, 1.0), 10.0);
/// assert_eq!(step_count(5.0, 0.0, 10.0, 1.0), 5.0);
/// ```
pub fn step_count(explicit_steps: f64, min: f64, max: f64, quantum: f64) -> f64 {
    if explicit_steps > 0.0 {
        return explicit_steps;
    }
    if !(quantum > 0.0 && quantum.is_finite()) {
        return 0.0;
    }
    (max - min) / quantum
}

/// Distance covered by a single step
///
/// Guarded against `NaN` and infinity: an empty range (`max == min`) or a
/// zero step count gives `0`, and an unbounded range falls back to the
/// quantum itself.
pub fn step_size(explicit_steps: f64, min: f64, max: f64, quantum: f64) -> f64 {
    let length = max - min;
    let count = step_count(explicit_steps, min, max, quantum);

    if count == 0.0 || length == 0.0 {
        return 0.0;
    }
    if length.is_infinite() {
        return if quantum > 0.0 && quantum.is_finite() {
            quantum
        } else {
            0.0
        };
    }

    let size = length / count;
    if size.is_finite() {
        size
    } else {
        0.0
    }
}

/// Whether tick segments are drawn
pub fn segmented(segments: u32) -> bool {
    segments > 0
}

/// Percent positions of segment ticks, both ends included
///
/// `3` segments give `[0, 33.3.., 66.6.., 100]`. No segments give no ticks.
pub fn segment_ticks(segments: u32) -> Vec<f64> {
    if !segmented(segments) {
        return Vec::new();
    }
    (0..=segments)
        .map(|i| f64::from(i) * 100.0 / f64::from(segments))
        .collect()
}
