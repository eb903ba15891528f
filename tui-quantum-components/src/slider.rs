//! Single-value slider component

use crossterm::event::{MouseButton, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_quantum_core::{Component, EventKind, Scale, SliderBindings, SliderCommand};

use crate::track::{track_line, Thumb, Track};

/// Props for Slider component
pub struct SliderProps<'a, A> {
    /// Numeric model: bounds, quantum, steps, key steps
    pub scale: &'a Scale,
    /// Current value
    pub value: f64,
    /// Key bindings
    pub keymap: &'a SliderBindings,
    /// Whether this component has focus
    pub is_focused: bool,
    /// Whether to show border
    pub show_border: bool,
    /// Border title
    pub label: Option<&'a str>,
    /// Callback when the value changes
    pub on_change: fn(f64) -> A,
}

/// A horizontal slider over a [`Scale`]
///
/// Keyboard moves by one step (a tenth of the steps with page keys), mouse
/// clicks and drags pick the value under the cursor through the key steps.
/// Every emitted value is already quantized and clamped.
#[derive(Default)]
pub struct Slider {
    /// Track area from the last render
    track: Track,
    /// Left button held after a press on the track
    dragging: bool,
}

impl Slider {
    /// Create a new Slider
    pub fn new() -> Self {
        Self::default()
    }
}

/// Distance of a page step: a tenth of the steps, at least one step
pub(crate) fn page_step(scale: &Scale) -> f64 {
    let count = (scale.step_count() / 10.0).ceil();
    let count = if count.is_finite() && count >= 1.0 {
        count
    } else {
        1.0
    };
    scale.key_step() * count
}

/// Target of a keyboard command before guarding, `None` when it does not move values
pub(crate) fn command_target(scale: &Scale, command: SliderCommand, value: f64) -> Option<f64> {
    let target = match command {
        SliderCommand::Increment => value + scale.key_step(),
        SliderCommand::Decrement => value - scale.key_step(),
        SliderCommand::PageUp => value + page_step(scale),
        SliderCommand::PageDown => value - page_step(scale),
        SliderCommand::Home => scale.min(),
        SliderCommand::End => scale.max(),
        SliderCommand::SwitchSide => return None,
    };
    target.is_finite().then_some(target)
}

impl Slider {
    fn emit<A>(&self, props: &SliderProps<'_, A>, target: f64) -> Option<A> {
        let next = props.scale.guard(target);
        if next == props.value || !next.is_finite() {
            return None;
        }
        tracing::debug!(value = next, "slider changed");
        Some((props.on_change)(next))
    }

    fn value_at_column<A>(&self, props: &SliderProps<'_, A>, column: u16) -> Option<f64> {
        if !props.scale.length().is_finite() {
            return None;
        }
        Some(props.scale.value_at(self.track.percentage_at(column)))
    }
}

impl<A> Component<A> for Slider {
    type Props<'a> = SliderProps<'a, A>;

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
            EventKind::Key(key) => props
                .keymap
                .command(*key)
                .and_then(|command| command_target(props.scale, command, props.value))
                .and_then(|target| self.emit(&props, target)),
            EventKind::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    if !self.track.contains(mouse.column, mouse.row) {
                        return None;
                    }
                    self.dragging = true;
                    self.value_at_column(&props, mouse.column)
                        .and_then(|target| self.emit(&props, target))
                }
                MouseEventKind::Drag(MouseButton::Left) if self.dragging => self
                    .value_at_column(&props, mouse.column)
                    .and_then(|target| self.emit(&props, target)),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = props.show_border.then(|| {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(if props.is_focused {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::DarkGray)
                });
            match props.label {
                Some(label) => block.title(label),
                None => block,
            }
        });
        let inner = match &block {
            Some(block) => block.inner(area),
            None => area,
        };
        if let Some(block) = block {
            frame.render_widget(block, area);
        }
        if inner.width == 0 || inner.height == 0 {
            self.track = Track::default();
            return;
        }

        let text = props.scale.format(props.value);
        let text_width = u16::try_from(text.chars().count() + 1).unwrap_or(u16::MAX);
        let track_area = Rect {
            width: inner.width.saturating_sub(text_width),
            height: 1,
            ..inner
        };
        self.track = Track::new(track_area);

        let thumb = self.track.offset_of(props.scale.percentage_of(props.value));
        let line = track_line(
            &self.track,
            (0, thumb),
            &props.scale.ticks(),
            &[Thumb {
                offset: thumb,
                active: true,
            }],
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

#[cfg(test)]
mod tests {
    use super::*;
    use tui_quantum_core::testing::{click, drag, key, release, RenderHarness};
    use tui_quantum_core::{Bounds, KeyStep, Quantum};

    #[derive(Debug, Clone, PartialEq)]
    enum TestAction {
        Change(f64),
    }

    fn scale() -> Scale {
        Scale::new(Bounds::new(0.0, 100.0).unwrap())
            .with_quantum(Some(Quantum::new(5.0).unwrap()))
    }

    fn handle(slider: &mut Slider, scale: &Scale, value: f64, event: EventKind) -> Vec<TestAction> {
        let keymap = SliderBindings::default();
        let props = SliderProps {
            scale,
            value,
            keymap: &keymap,
            is_focused: true,
            show_border: false,
            label: None,
            on_change: TestAction::Change,
        };
        slider.handle_event(&event, props).into_iter().collect()
    }

    fn render(slider: &mut Slider, scale: &Scale, value: f64) -> String {
        let keymap = SliderBindings::default();
        let mut render = RenderHarness::new(30, 3);
        render.render_to_string_plain(|frame| {
            let props = SliderProps {
                scale,
                value,
                keymap: &keymap,
                is_focused: true,
                show_border: true,
                label: Some("Volume"),
                on_change: |_| (),
            };
            slider.render(frame, frame.area(), props);
        })
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut slider = Slider::new();
        let s = scale();

        let actions = handle(&mut slider, &s, 50.0, EventKind::Key(key("right")));
        assert_eq!(actions, vec![TestAction::Change(55.0)]);

        let actions = handle(&mut slider, &s, 50.0, EventKind::Key(key("j")));
        assert_eq!(actions, vec![TestAction::Change(45.0)]);
    }

    #[test]
    fn test_no_action_at_bound() {
        let mut slider = Slider::new();
        let s = scale();

        let actions = handle(&mut slider, &s, 100.0, EventKind::Key(key("right")));
        assert!(actions.is_empty());
        let actions = handle(&mut slider, &s, 0.0, EventKind::Key(key("home")));
        assert!(actions.is_empty());
    }

    #[test]
    fn test_page_keys() {
        let mut slider = Slider::new();
        let s = scale();

        // 20 steps, a page is 2 of them
        let actions = handle(&mut slider, &s, 50.0, EventKind::Key(key("pageup")));
        assert_eq!(actions, vec![TestAction::Change(60.0)]);
        let actions = handle(&mut slider, &s, 50.0, EventKind::Key(key("end")));
        assert_eq!(actions, vec![TestAction::Change(100.0)]);
    }

    #[test]
    fn test_off_grid_value_is_snapped() {
        let mut slider = Slider::new();
        let s = scale();

        let actions = handle(&mut slider, &s, 51.0, EventKind::Key(key("right")));
        assert_eq!(actions, vec![TestAction::Change(55.0)]);
    }

    #[test]
    fn test_end_on_unbounded_scale_is_ignored() {
        let mut slider = Slider::new();
        let s = Scale::new(Bounds::new(0.0, f64::INFINITY).unwrap());

        assert!(handle(&mut slider, &s, 3.0, EventKind::Key(key("end"))).is_empty());
        let actions = handle(&mut slider, &s, 3.0, EventKind::Key(key("right")));
        assert_eq!(actions, vec![TestAction::Change(4.0)]);
    }

    #[test]
    fn test_unfocused_ignores() {
        let mut slider = Slider::new();
        let s = scale();
        let keymap = SliderBindings::default();
        let props = SliderProps {
            scale: &s,
            value: 50.0,
            keymap: &keymap,
            is_focused: false,
            show_border: false,
            label: None,
            on_change: TestAction::Change,
        };

        let actions: Vec<_> = slider
            .handle_event(&EventKind::Key(key("right")), props)
            .into_iter()
            .collect();
        assert!(actions.is_empty());
    }

    #[test]
    fn test_click_and_drag() {
        let mut slider = Slider::new();
        let s = scale();
        render(&mut slider, &s, 0.0);

        // Track spans columns 1..=26 inside the border
        let actions = handle(&mut slider, &s, 0.0, click(13, 1));
        assert_eq!(actions, vec![TestAction::Change(50.0)]);

        let actions = handle(&mut slider, &s, 50.0, drag(26, 1));
        assert_eq!(actions, vec![TestAction::Change(100.0)]);

        let actions = handle(&mut slider, &s, 100.0, drag(0, 1));
        assert_eq!(actions, vec![TestAction::Change(0.0)]);
    }

    #[test]
    fn test_drag_without_press_is_ignored() {
        let mut slider = Slider::new();
        let s = scale();
        render(&mut slider, &s, 0.0);

        assert!(handle(&mut slider, &s, 0.0, drag(13, 1)).is_empty());
        assert!(handle(&mut slider, &s, 0.0, click(13, 2)).is_empty());
    }

    #[test]
    fn test_release_ends_drag_after_focus_moved() {
        let mut slider = Slider::new();
        let s = scale();
        render(&mut slider, &s, 0.0);
        handle(&mut slider, &s, 0.0, click(13, 1));

        let keymap = SliderBindings::default();
        let props = SliderProps {
            scale: &s,
            value: 50.0,
            keymap: &keymap,
            is_focused: false,
            show_border: false,
            label: None,
            on_change: TestAction::Change,
        };
        assert!(slider
            .handle_event(&release(13, 1), props)
            .into_iter()
            .next()
            .is_none());

        // Focus is back, but the button is no longer held
        assert!(handle(&mut slider, &s, 50.0, drag(26, 1)).is_empty());
    }

    #[test]
    fn test_click_follows_key_steps() {
        let mut slider = Slider::new();
        let s = Scale::new(Bounds::new(0.0, 2000.0).unwrap())
            .with_key_steps(vec![KeyStep::new(40.0, 1000.0)])
            .unwrap();
        render(&mut slider, &s, 0.0);

        // 20% of the track is halfway to the first breakpoint
        let actions = handle(&mut slider, &s, 0.0, click(6, 1));
        assert_eq!(actions, vec![TestAction::Change(500.0)]);
    }

    #[test]
    fn test_render_value_and_label() {
        let mut slider = Slider::new();
        let output = render(&mut slider, &scale(), 50.0);

        assert!(output.contains("Volume"));
        assert!(output.contains("50"));
        assert!(output.contains('●'));
    }

    #[test]
    fn test_render_ticks() {
        let mut slider = Slider::new();
        let s = scale().with_segments(2);
        let output = render(&mut slider, &s, 0.0);

        assert!(output.contains('┼'));
    }
}
