//! tui-quantum: Quantized value controls for Rust TUI apps
//!
//! Sliders, ranges and previews whose values always land on a quantum grid
//! inside their bounds. The numeric model is pure and lives in
//! `tui-quantum-core`; the ratatui components live in `tui-quantum-components`.
//!
//! # Example
//! ```ignore
//! use tui_quantum::prelude::*;
//!
//! #[derive(Clone, Debug)]
//! enum AppAction {
//!     SetVolume(f64),
//! }
//!
//! let scale = SliderConfig::from_json(r#"{"max": 100, "quantum": 5}"#)?.build()?;
//! let mut slider = Slider::new();
//! let actions = slider.handle_event(&event, SliderProps {
//!     scale: &scale,
//!     value: state.volume,
//!     keymap: &SliderBindings::default(),
//!     is_focused: true,
//!     show_border: true,
//!     label: Some("Volume"),
//!     on_change: AppAction::SetVolume,
//! });
//! ```

// Re-export everything from core
pub use tui_quantum_core::*;

// Re-export components
pub use tui_quantum_components::{
    PhoneInput, PhoneInputProps, Preview, PreviewProps, RangeSlider, RangeSliderProps, Slider,
    SliderProps,
};

/// Prelude for convenient imports
pub mod prelude {
    // Traits
    pub use tui_quantum_core::{Action, Component};

    // Events
    pub use tui_quantum_core::EventKind;

    // Numeric model
    pub use tui_quantum_core::{
        build_key_steps, quantize, step_count, step_size, Bounds, KeyStep, KeySteps,
        PreviewTransform, Quantum, RangeSide, Scale, ZoomState,
    };

    // Config and keybindings
    pub use tui_quantum_core::{
        parse_key_string, QuantumError, SliderBindings, SliderConfig, SliderKeymap,
    };

    // Components
    pub use tui_quantum_components::prelude::*;

    // Ratatui re-exports
    pub use tui_quantum_core::{Color, Frame, Line, Modifier, Rect, Span, Style, Text};
}
