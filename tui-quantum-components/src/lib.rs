//! Pre-built UI components for tui-quantum
//!
//! Components implement the `Component<A>` trait and emit actions via callback
//! functions passed through Props. Values they emit are already guarded by the
//! [`Scale`](tui_quantum_core::Scale) they were given.
//!
//! # Components
//!
//! - [`Slider`] - Single value on a track, keyboard and mouse
//! - [`RangeSlider`] - Two thumbs that never cross
//! - [`Preview`] - Zoom, pan and rotate content
//! - [`PhoneInput`] - Masked phone number with a fixed country code
//!
//! # Example
//!
//! ```ignore
//! use tui_quantum_components::{Slider, SliderProps};
//!
//! // In your render function:
//! let mut slider = Slider::default();
//! slider.render(frame, area, SliderProps {
//!     scale: &state.scale,
//!     value: state.volume,
//!     keymap: &state.keymap,
//!     is_focused: state.focus == Focus::Volume,
//!     show_border: true,
//!     label: Some("Volume"),
//!     on_change: Action::SetVolume,
//! });
//! ```

mod phone_input;
mod preview;
mod range_slider;
mod slider;
mod track;

pub use phone_input::{PhoneInput, PhoneInputProps};
pub use preview::{Preview, PreviewProps, PAN_STEP, ZOOM_STEP};
pub use range_slider::{RangeSlider, RangeSliderProps};
pub use slider::{Slider, SliderProps};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        PhoneInput, PhoneInputProps, Preview, PreviewProps, RangeSlider, RangeSliderProps, Slider,
        SliderProps,
    };
}
