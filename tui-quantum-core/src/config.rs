//! Slider configuration loaded from JSON

use serde::{Deserialize, Serialize};

use crate::error::QuantumError;
use crate::key_steps::KeyStep;
use crate::keybindings::{SliderBindings, SliderKeymap};
use crate::quantum::{Bounds, Quantum};
use crate::scale::Scale;

/// User-facing slider configuration
///
/// Every field is optional in the source document:
///
/// ```json
/// {
///   "min": 0,
///   "max": 10000,
///   "quantum": 100,
///   "segments": 4,
///   "key_steps": [[50, 1000]],
///   "keymap": { "increment": ["right", "+"] }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub min: f64,
    /// Upper bound, absent means unbounded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Rounding step, `0` disables rounding
    pub quantum: f64,
    /// Explicit step count, `0` derives it from the quantum
    pub steps: u32,
    /// Tick segments, `0` hides ticks
    pub segments: u32,
    /// Intermediate `[percentage, value]` breakpoints
    pub key_steps: Vec<KeyStep>,
    pub keymap: SliderKeymap,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: None,
            quantum: 1.0,
            steps: 0,
            segments: 0,
            key_steps: Vec::new(),
            keymap: SliderKeymap::default(),
        }
    }
}

impl SliderConfig {
    /// Parse a JSON document
    pub fn from_json(text: &str) -> Result<Self, QuantumError> {
        serde_json::from_str(text).map_err(|err| {
            tracing::warn!(error = %err, "failed to parse slider config");
            QuantumError::from(err)
        })
    }

    /// Validate and turn the config into a [`Scale`]
    pub fn build(&self) -> Result<Scale, QuantumError> {
        self.try_build().inspect_err(|err| {
            tracing::warn!(error = %err, "rejected slider config");
        })
    }

    /// Parse the keymap into bindings for the components
    pub fn bindings(&self) -> Result<SliderBindings, QuantumError> {
        self.keymap.compile().inspect_err(|err| {
            tracing::warn!(error = %err, "rejected slider keymap");
        })
    }

    fn try_build(&self) -> Result<Scale, QuantumError> {
        let bounds = Bounds::new(self.min, self.max.unwrap_or(f64::INFINITY))?;
        let quantum = if self.quantum == 0.0 {
            None
        } else {
            Some(Quantum::new(self.quantum)?)
        };
        self.keymap.validate()?;

        Scale::new(bounds)
            .with_quantum(quantum)
            .with_steps(self.steps)
            .with_segments(self.segments)
            .with_key_steps(self.key_steps.clone())
    }
}
