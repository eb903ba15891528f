//! Zoom, pan and rotation state of a content preview
//!
//! Zoom is clamped between a content-dependent minimum and [`MAX_ZOOM`]; the
//! pan offset is clamped so zoomed content never slides past its own edges.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::quantum::{clamp, round};

/// Upper zoom limit
pub const MAX_ZOOM: f64 = 2.0;
/// Share of the viewport large content is shrunk to on refresh
pub const INITIAL_SCALE_COEF: f64 = 0.8;
/// Degrees turned by a single rotation
pub const ROTATION_ANGLE: i32 = 90;

/// Width and height, in whatever unit the caller measures
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Resulting transform of the previewed content
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreviewTransform {
    /// Pan offset
    pub translate: (f64, f64),
    /// Zoom factor
    pub scale: f64,
    /// Rotation in degrees, always in `(-360, 0]`
    pub rotation: i32,
}

impl fmt::Display for PreviewTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate({}px, {}px) scale({}) rotate({}deg)",
            self.translate.0, self.translate.1, self.scale, self.rotation
        )
    }
}

/// Zoom/pan/rotation state of a preview
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomState {
    min_zoom: f64,
    zoom: f64,
    rotation: i32,
    coordinates: (f64, f64),
    content: Size,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self {
            min_zoom: 1.0,
            zoom: 1.0,
            rotation: 0,
            coordinates: (0.0, 0.0),
            content: Size::default(),
        }
    }
}

impl ZoomState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    pub fn rotation(&self) -> i32 {
        self.rotation
    }

    pub fn coordinates(&self) -> (f64, f64) {
        self.coordinates
    }

    pub fn content(&self) -> Size {
        self.content
    }

    /// Current transform
    pub fn transform(&self) -> PreviewTransform {
        PreviewTransform {
            translate: self.coordinates,
            scale: self.zoom,
            rotation: self.rotation,
        }
    }

    /// Adopt new content and viewport sizes
    ///
    /// Content larger than [`INITIAL_SCALE_COEF`] of the viewport gets a
    /// minimum zoom that fits it; zoom, pan and rotation are reset.
    pub fn refresh(&mut self, content: Size, viewport: Size) {
        self.content = content;
        self.min_zoom = min_zoom_for(content, viewport);
        self.zoom = self.min_zoom;
        self.coordinates = (0.0, 0.0);
        self.rotation = 0;
        tracing::trace!(min_zoom = self.min_zoom, "preview refreshed");
    }

    /// Back to minimum zoom and no pan, rotation is kept
    pub fn reset(&mut self) {
        self.zoom = self.min_zoom;
        self.coordinates = (0.0, 0.0);
    }

    /// Turn counterclockwise by [`ROTATION_ANGLE`]
    pub fn rotate(&mut self) {
        self.rotation = (self.rotation - ROTATION_ANGLE) % 360;
    }

    /// Pan by a delta, clamped to the current offsets
    pub fn pan(&mut self, (dx, dy): (f64, f64)) -> bool {
        let next = self.guarded(self.coordinates.0 + dx, self.coordinates.1 + dy);
        let changed = next != self.coordinates;
        self.coordinates = next;
        changed
    }

    /// Zoom by `delta`, keeping `point` (in viewport coordinates) in place
    pub fn zoom_at(&mut self, point: (f64, f64), delta: f64, viewport: Size) -> bool {
        let old_scale = self.zoom;
        let new_scale = clamp(old_scale + delta, self.min_zoom, MAX_ZOOM);
        if new_scale == old_scale {
            return false;
        }

        let (x, y) = self.coordinates;
        let center = (
            (point.0 - x - viewport.width / 2.0) / old_scale,
            (point.1 - y - viewport.height / 2.0) / old_scale,
        );
        let move_x = center.0 * old_scale - center.0 * new_scale;
        let move_y = center.1 * old_scale - center.1 * new_scale;

        self.zoom = new_scale;
        self.coordinates = self.guarded(x + move_x, y + move_y);
        true
    }

    /// Maximum pan distance from the center on each axis
    pub fn offsets(&self) -> (f64, f64) {
        let extra = self.zoom - self.min_zoom;
        (
            extra * self.content.width / 2.0,
            extra * self.content.height / 2.0,
        )
    }

    fn guarded(&self, x: f64, y: f64) -> (f64, f64) {
        let (offset_x, offset_y) = self.offsets();
        (
            clamp(x, -offset_x, offset_x),
            clamp(y, -offset_y, offset_y),
        )
    }
}

fn min_zoom_for(content: Size, viewport: Size) -> f64 {
    if content.width <= 0.0 || content.height <= 0.0 {
        return 1.0;
    }

    let big = content.height > viewport.height * INITIAL_SCALE_COEF
        || content.width > viewport.width * INITIAL_SCALE_COEF;
    if !big {
        return 1.0;
    }

    round(
        (viewport.height * INITIAL_SCALE_COEF / content.height)
            .min(viewport.width * INITIAL_SCALE_COEF / content.width),
        2,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(content: Size, viewport: Size) -> ZoomState {
        let mut state = ZoomState::new();
        state.refresh(content, viewport);
        state
    }

    #[test]
    fn test_refresh_small_content() {
        let s = state(Size::new(100.0, 100.0), Size::new(400.0, 400.0));
        assert_eq!(s.min_zoom(), 1.0);
        assert_eq!(s.zoom(), 1.0);
    }

    #[test]
    fn test_refresh_large_content_fits() {
        let s = state(Size::new(1000.0, 500.0), Size::new(400.0, 400.0));
        assert_eq!(s.min_zoom(), 0.32);
        assert_eq!(s.zoom(), 0.32);
    }

    #[test]
    fn test_refresh_resets_everything() {
        let viewport = Size::new(100.0, 100.0);
        let mut s = state(Size::new(50.0, 50.0), viewport);
        s.zoom_at((50.0, 50.0), 0.5, viewport);
        s.rotate();
        s.refresh(Size::new(60.0, 60.0), viewport);
        assert_eq!(s.transform().scale, 1.0);
        assert_eq!(s.transform().translate, (0.0, 0.0));
        assert_eq!(s.rotation(), 0);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let viewport = Size::new(100.0, 100.0);
        let mut s = state(Size::new(50.0, 50.0), viewport);

        assert!(s.zoom_at((50.0, 50.0), 5.0, viewport));
        assert_eq!(s.zoom(), MAX_ZOOM);
        assert!(!s.zoom_at((50.0, 50.0), 0.5, viewport));

        assert!(s.zoom_at((50.0, 50.0), -5.0, viewport));
        assert_eq!(s.zoom(), 1.0);
    }

    #[test]
    fn test_zoom_keeps_point_under_cursor() {
        let viewport = Size::new(100.0, 100.0);
        let mut s = state(Size::new(100.0, 100.0), viewport);

        s.zoom_at((100.0, 50.0), 1.0, viewport);
        assert_eq!(s.coordinates(), (-50.0, 0.0));
    }

    #[test]
    fn test_pan_is_clamped_to_offsets() {
        let viewport = Size::new(100.0, 100.0);
        let mut s = state(Size::new(100.0, 100.0), viewport);

        // Nothing to pan at minimum zoom
        assert!(!s.pan((10.0, 10.0)));

        s.zoom_at((50.0, 50.0), 0.5, viewport);
        assert_eq!(s.offsets(), (25.0, 25.0));
        assert!(s.pan((1000.0, -3.0)));
        assert_eq!(s.coordinates(), (25.0, -3.0));
    }

    #[test]
    fn test_rotate_and_reset() {
        let viewport = Size::new(100.0, 100.0);
        let mut s = state(Size::new(50.0, 50.0), viewport);
        for expected in [-90, -180, -270, 0] {
            s.rotate();
            assert_eq!(s.rotation(), expected);
        }

        s.zoom_at((0.0, 0.0), 0.5, viewport);
        s.reset();
        assert_eq!(s.zoom(), 1.0);
        assert_eq!(s.coordinates(), (0.0, 0.0));
    }

    #[test]
    fn test_transform_display() {
        let transform = PreviewTransform {
            translate: (10.0, -5.0),
            scale: 1.5,
            rotation: -90,
        };
        assert_eq!(
            transform.to_string(),
            "translate(10px, -5px) scale(1.5) rotate(-90deg)"
        );
    }
}
