//! Core numeric model and traits for tui-quantum
//!
//! This crate holds everything a slider-style control needs that is not
//! drawing: quantizing raw values, counting steps, mapping track percentages
//! through key steps, guarding two-thumb ranges, clamping zoom and pan, and
//! masking phone numbers. All of it is pure and synchronous.
//!
//! # Core Concepts
//!
//! - **Quantizer**: [`quantize`] snaps a value to the nearest quantum and clamps it
//! - **Step counter**: [`step_count`] / [`step_size`] for keyboard movement
//! - **Key steps**: [`build_key_steps`] anchors breakpoints at `0%` and `100%`
//! - **Scale**: [`Scale`] bundles all of the above per slider instance
//! - **Component**: Props-driven UI elements that emit actions
//!
//! # Example
//!
//! ```
//! use tui_quantum_core::{build_key_steps, quantize, step_count, KeyStep};
//!
//! assert_eq!(quantize(7.0, -10.0, 10.0, 5.0), 5.0);
//! assert_eq!(step_count(0.0, 0.0, 10.0, 1.0), 10.0);
//!
//! let table = build_key_steps(&[KeyStep::new(50.0, 1000.0)], 0.0, 2000.0);
//! assert_eq!(table.first(), KeyStep::new(0.0, 0.0));
//! assert_eq!(table.last(), KeyStep::new(100.0, 2000.0));
//! ```

pub mod action;
pub mod component;
pub mod config;
pub mod error;
pub mod event;
pub mod key_steps;
pub mod keybindings;
pub mod phone;
pub mod quantum;
pub mod range;
pub mod scale;
pub mod steps;
pub mod testing;
pub mod zoom;

// Core trait exports
pub use action::Action;
pub use component::Component;
pub use error::QuantumError;
pub use event::EventKind;

// Numeric exports
pub use key_steps::{build_key_steps, validate_key_steps, KeyStep, KeySteps};
pub use quantum::{
    clamp, format_value, fraction_digits, quantize, round, Bounds, Quantum, FLOATING_PRECISION,
};
pub use range::{changed_side, guard_range, nearest_side, step_range, RangeSide};
pub use scale::Scale;
pub use steps::{segment_ticks, segmented, step_count, step_size};
pub use zoom::{PreviewTransform, Size, ZoomState, MAX_ZOOM};

// Config exports
pub use config::SliderConfig;
pub use keybindings::{key_matches, parse_key_string, SliderBindings, SliderCommand, SliderKeymap};

// Re-export ratatui types for convenience
pub use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    Frame,
};

// Testing exports
pub use testing::{
    buffer_rect_to_string_plain, buffer_to_string_plain, char_key, click, drag, key, key_event,
    release, scroll, RenderHarness, TestHarness,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::action::Action;
    pub use crate::component::Component;
    pub use crate::config::SliderConfig;
    pub use crate::error::QuantumError;
    pub use crate::event::EventKind;
    pub use crate::key_steps::{build_key_steps, KeyStep, KeySteps};
    pub use crate::keybindings::{SliderBindings, SliderCommand, SliderKeymap};
    pub use crate::quantum::{quantize, Bounds, Quantum};
    pub use crate::range::RangeSide;
    pub use crate::scale::Scale;
    pub use crate::steps::{step_count, step_size};
    pub use crate::zoom::{PreviewTransform, ZoomState};

    // Re-export ratatui types
    pub use ratatui::{
        layout::Rect,
        style::{Color, Modifier, Style},
        text::{Line, Span, Text},
        Frame,
    };
}
