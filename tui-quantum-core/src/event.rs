//! Event types delivered to components

use crossterm::event::{Event as CrosstermEvent, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};

/// The event payload a component receives
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    /// Keyboard event
    Key(KeyEvent),
    /// Mouse click/drag event
    Mouse(MouseEvent),
    /// Scroll event with position and delta (positive = down)
    Scroll { column: u16, row: u16, delta: isize },
    /// Bracketed paste
    Paste(String),
}

impl EventKind {
    /// Convert a raw terminal event
    ///
    /// Scroll wheel mouse events become [`EventKind::Scroll`]. Key releases,
    /// focus changes and resizes are dropped; components lay out again on the
    /// next render.
    pub fn from_terminal(event: CrosstermEvent) -> Option<Self> {
        match event {
            CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => {
                Some(EventKind::Key(key))
            }
            CrosstermEvent::Key(_) => None,
            CrosstermEvent::Mouse(mouse) => Some(match mouse.kind {
                MouseEventKind::ScrollDown => EventKind::Scroll {
                    column: mouse.column,
                    row: mouse.row,
                    delta: 1,
                },
                MouseEventKind::ScrollUp => EventKind::Scroll {
                    column: mouse.column,
                    row: mouse.row,
                    delta: -1,
                },
                _ => EventKind::Mouse(mouse),
            }),
            CrosstermEvent::Paste(text) => Some(EventKind::Paste(text)),
            CrosstermEvent::Resize(..)
            | CrosstermEvent::FocusGained
            | CrosstermEvent::FocusLost => None,
        }
    }
}
