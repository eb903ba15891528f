//! Zoomable, pannable content preview

use crossterm::event::{KeyCode, MouseButton, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_quantum_core::{Component, EventKind, PreviewTransform, Size, ZoomState};

/// Zoom change per key press or scroll notch
pub const ZOOM_STEP: f64 = 0.1;
/// Pan distance per key press, in cells
pub const PAN_STEP: f64 = 1.0;

/// Props for Preview component
pub struct PreviewProps<'a, A> {
    /// Lines of content to show
    pub content: &'a [String],
    /// Border title
    pub title: Option<&'a str>,
    /// Whether this component has focus
    pub is_focused: bool,
    /// Allow `+`/`-` and the scroll wheel to zoom
    pub zoomable: bool,
    /// Allow `r` to rotate
    pub rotatable: bool,
    /// Callback after zoom, pan or rotation changed
    pub on_transform: fn(PreviewTransform) -> A,
}

/// Content preview with zoom, pan and rotation
///
/// The terminal cannot scale glyphs, so zoom widens the pan limits and is
/// reported on the status line; pan moves the content inside the viewport.
#[derive(Default)]
pub struct Preview {
    state: ZoomState,
    /// Content area from the last render
    area: Rect,
    /// Last mouse cell while dragging
    grab: Option<(u16, u16)>,
}

impl Preview {
    /// Create a new Preview
    pub fn new() -> Self {
        Self::default()
    }

    /// Current zoom state
    pub fn state(&self) -> &ZoomState {
        &self.state
    }

    fn viewport(&self) -> Size {
        Size::new(f64::from(self.area.width), f64::from(self.area.height))
    }

    /// Refresh the zoom state when content or viewport size changed
    fn sync(&mut self, content: Size, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        if content != self.state.content() || area != self.area {
            self.area = area;
            self.state.refresh(content, self.viewport());
        }
    }

    fn zoom(&mut self, point: (f64, f64), delta: f64) -> bool {
        let viewport = self.viewport();
        self.state.zoom_at(point, delta, viewport)
    }

    fn center(&self) -> (f64, f64) {
        let viewport = self.viewport();
        (viewport.width / 2.0, viewport.height / 2.0)
    }

    fn handle_key<A>(&mut self, code: KeyCode, props: &PreviewProps<'_, A>) -> bool {
        match code {
            KeyCode::Char('+') | KeyCode::Char('=') if props.zoomable => {
                self.zoom(self.center(), ZOOM_STEP)
            }
            KeyCode::Char('-') if props.zoomable => self.zoom(self.center(), -ZOOM_STEP),
            KeyCode::Left | KeyCode::Char('h') => self.state.pan((-PAN_STEP, 0.0)),
            KeyCode::Right | KeyCode::Char('l') => self.state.pan((PAN_STEP, 0.0)),
            KeyCode::Up | KeyCode::Char('k') => self.state.pan((0.0, -PAN_STEP)),
            KeyCode::Down | KeyCode::Char('j') => self.state.pan((0.0, PAN_STEP)),
            KeyCode::Char('r') if props.rotatable => {
                self.state.rotate();
                true
            }
            KeyCode::Char('0') => {
                let before = self.state.transform();
                self.state.reset();
                before != self.state.transform()
            }
            _ => false,
        }
    }

    fn handle_mouse<A>(&mut self, event: &EventKind, props: &PreviewProps<'_, A>) -> bool {
        match event {
            EventKind::Scroll { column, row, delta } if props.zoomable => {
                if !self.area.contains((*column, *row).into()) {
                    return false;
                }
                let point = (
                    f64::from(column - self.area.x),
                    f64::from(row - self.area.y),
                );
                self.zoom(point, -(*delta as f64) * ZOOM_STEP)
            }
            EventKind::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left)
                    if self.area.contains((mouse.column, mouse.row).into()) =>
                {
                    self.grab = Some((mouse.column, mouse.row));
                    false
                }
                MouseEventKind::Drag(MouseButton::Left) => {
                    let Some((x, y)) = self.grab else {
                        return false;
                    };
                    self.grab = Some((mouse.column, mouse.row));
                    let dx = f64::from(mouse.column) - f64::from(x);
                    let dy = f64::from(mouse.row) - f64::from(y);
                    self.state.pan((dx, dy))
                }
                _ => false,
            },
            _ => false,
        }
    }
}

fn content_size(content: &[String]) -> Size {
    let width = content
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    Size::new(width as f64, content.len() as f64)
}

impl<A> Component<A> for Preview {
    type Props<'a> = PreviewProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        // A release ends the drag even after focus moved away
        if let EventKind::Mouse(mouse) = event {
            if mouse.kind == MouseEventKind::Up(MouseButton::Left) {
                self.grab = None;
            }
        }
        if !props.is_focused {
            return None;
        }

        let changed = match event {
            EventKind::Key(key) => self.handle_key(key.code, &props),
            _ => self.handle_mouse(event, &props),
        };
        if !changed {
            return None;
        }

        let transform = self.state.transform();
        tracing::debug!(%transform, "preview transformed");
        Some((props.on_transform)(transform))
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(if props.is_focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            });
        if let Some(title) = props.title {
            block = block.title(title);
        }
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height == 0 {
            return;
        }

        // Bottom row is the status line
        let content_area = Rect {
            height: inner.height - 1,
            ..inner
        };
        let status_area = Rect {
            y: inner.bottom() - 1,
            height: 1,
            ..inner
        };

        let size = content_size(props.content);
        self.sync(size, content_area);

        let (tx, ty) = self.state.coordinates();
        let origin_x = ((f64::from(content_area.width) - size.width) / 2.0 + tx).round() as i64;
        let origin_y = ((f64::from(content_area.height) - size.height) / 2.0 + ty).round() as i64;

        let buf = frame.buffer_mut();
        for (row, line) in props.content.iter().enumerate() {
            let y = origin_y + row as i64;
            if y < 0 || y >= i64::from(content_area.height) {
                continue;
            }
            for (col, ch) in line.chars().enumerate() {
                let x = origin_x + col as i64;
                if x < 0 || x >= i64::from(content_area.width) {
                    continue;
                }
                buf[(content_area.x + x as u16, content_area.y + y as u16)].set_char(ch);
            }
        }

        let status = format!(
            "{:.0}%  {}°",
            self.state.zoom() * 100.0,
            self.state.rotation()
        );
        frame.render_widget(
            Paragraph::new(Line::raw(status)).style(Style::default().fg(Color::DarkGray)),
            status_area,
        );
    }
}
