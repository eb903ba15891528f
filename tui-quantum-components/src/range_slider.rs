//! Two-thumb range slider component

use crossterm::event::{MouseButton, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_quantum_core::{
    guard_range, nearest_side, step_range, Component, EventKind, RangeSide, Scale, SliderBindings,
    SliderCommand,
};

use crate::slider::command_target;
use crate::track::{track_line, Thumb, Track};

/// Props for RangeSlider component
pub struct RangeSliderProps<'a, A> {
    /// Numeric model shared by both thumbs
    pub scale: &'a Scale,
    /// Current `(left, right)` values
    pub value: (f64, f64),
    pub keymap: &'a SliderBindings,
    /// Whether this component has focus
    pub is_focused: bool,
    pub show_border: bool,
    /// Border title
    pub label: Option<&'a str>,
    /// Callback when either end changes
    pub on_change: fn((f64, f64)) -> A,
}

/// A slider with a left and a right thumb
///
/// `Tab` switches the active thumb, the other keys move it. A thumb never
/// crosses the other one. Mouse presses grab the nearest thumb.
#[derive(Default)]
pub struct RangeSlider {
    active: RangeSide,
    track: Track,
    dragging: bool,
}

impl RangeSlider {
    /// Create a new RangeSlider with the left thumb active
    pub fn new() -> Self {
        Self::default()
    }

    /// The thumb keyboard input moves
    pub fn active(&self) -> RangeSide {
        self.active
    }

    fn emit<A>(&self, props: &RangeSliderProps<'_, A>, next: (f64, f64)) -> Option<A> {
        if next == props.value {
            return None;
        }
        tracing::debug!(
            left = next.0,
            right = next.1,
            side = ?self.active,
            "range changed"
        );
        Some((props.on_change)(next))
    }

    fn handle_command<A>(
        &mut self,
        props: &RangeSliderProps<'_, A>,
        command: SliderCommand,
    ) -> Option<A> {
        match command {
            SliderCommand::SwitchSide => {
                self.active = self.active.toggle();
                None
            }
            SliderCommand::Increment | SliderCommand::Decrement => {
                let increment = command == SliderCommand::Increment;
                step_range(props.scale, props.value, self.active, increment)
                    .and_then(|next| self.emit(props, next))
            }
            _ => {
                let current = match self.active {
                    RangeSide::Left => props.value.0,
                    RangeSide::Right => props.value.1,
                };
                command_target(props.scale, command, current)
                    .and_then(|target| self.emit(props, self.move_thumb(props, target)))
            }
        }
    }

    /// Move the active thumb towards `target` without crossing the other thumb
    fn move_thumb<A>(&self, props: &RangeSliderProps<'_, A>, target: f64) -> (f64, f64) {
        let (left, right) = guard_range(props.scale, props.value);
        let target = props.scale.guard(target);
        match self.active {
            RangeSide::Left => (target.min(right), right),
            RangeSide::Right => (left, target.max(left)),
        }
    }

    fn value_at_column<A>(&self, props: &RangeSliderProps<'_, A>, column: u16) -> Option<f64> {
        if !props.scale.length().is_finite() {
            return None;
        }
        Some(props.scale.value_at(self.track.percentage_at(column)))
    }
}

impl<A> Component<A> for RangeSlider {
    type Props<'a> = RangeSliderProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        // A release ends the drag even after focus moved away
        if let EventKind::Mouse(mouse) = event {
            if mouse.kind == MouseEventKind::Up(MouseButton::Left) {
                self.dragging = false;
            }
        }
        if !props.is_focused {
            return None;
        }

        match event {
            EventKind::Key(key) => match props.keymap.command(*key) {
                Some(command) => self.handle_command(&props, command),
                None => None,
            },
            EventKind::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    if !self.track.contains(mouse.column, mouse.row) {
                        return None;
                    }
                    let Some(target) = self.value_at_column(&props, mouse.column) else {
                        return None;
                    };
                    self.active = nearest_side(props.value, target);
                    self.dragging = true;
                    self.emit(&props, self.move_thumb(&props, target))
                }
                MouseEventKind::Drag(MouseButton::Left) if self.dragging => self
                    .value_at_column(&props, mouse.column)
                    .and_then(|target| self.emit(&props, self.move_thumb(&props, target))),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let mut block = Block::default();
        if props.show_border {
            block = block
                .borders(Borders::ALL)
                .border_style(if props.is_focused {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::DarkGray)
                });
            if let Some(label) = props.label {
                block = block.title(label);
            }
        }
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.width == 0 || inner.height == 0 {
            self.track = Track::default();
            return;
        }

        let (left, right) = props.value;
        let text = format!(
            "{}–{}",
            props.scale.format(left),
            props.scale.format(right)
        );
        let text_width = u16::try_from(text.chars().count() + 1).unwrap_or(u16::MAX);
        let track_area = Rect {
            width: inner.width.saturating_sub(text_width),
            height: 1,
            ..inner
        };
        self.track = Track::new(track_area);

        let left_cell = self.track.offset_of(props.scale.percentage_of(left));
        let right_cell = self.track.offset_of(props.scale.percentage_of(right));
        let line = track_line(
            &self.track,
            (left_cell, right_cell),
            &props.scale.ticks(),
            &[
                Thumb {
                    offset: left_cell,
                    active: self.active == RangeSide::Left,
                },
                Thumb {
                    offset: right_cell,
                    active: self.active == RangeSide::Right,
                },
            ],
            props.is_focused,
        );
        frame.render_widget(Paragraph::new(line), track_area);

        let text_area = Rect {
            x: track_area.right() + 1,
            width: inner.right().saturating_sub(track_area.right() + 1),
            height: 1,
            ..inner
        };
        frame.render_widget(Paragraph::new(Line::raw(text)), text_area);
    }
}
