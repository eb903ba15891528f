//! Test utilities for tui-quantum components
//!
//! - [`key`]: Create `KeyEvent` from string (e.g., `key("ctrl+p")`)
//! - [`click`], [`drag`], [`release`], [`scroll`]: Mouse events at a cell
//! - [`RenderHarness`]: Render into an in-memory terminal and read it back
//! - [`TestHarness`]: Value under test plus an action channel
//! - Assertion macros for verifying emitted actions
//!
//! # Example
//!
//! ```ignore
//! use tui_quantum::testing::{key, TestHarness};
//!
//! let mut harness = TestHarness::<f64, Action>::new(5.0);
//! harness.emit_all(slider.handle_event(&EventKind::Key(key("right")), props));
//!
//! let emitted = harness.drain_emitted();
//! assert_emitted!(emitted, Action::SetVolume(v) if *v == 6.0);
//! ```

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Frame, Terminal};
use tokio::sync::mpsc;

use crate::event::EventKind;
use crate::keybindings::parse_key_string;
use crate::Action;

/// Create a `KeyEvent` from a key string.
///
/// This is a convenience wrapper around [`parse_key_string`] that panics
/// if the key string is invalid, making it suitable for use in tests.
///
/// # Examples
///
/// ```
/// use tui_quantum_core::testing::key;
/// use crossterm::event::{KeyCode, KeyModifiers};
///
/// let k = key("q");
/// assert_eq!(k.code, KeyCode::Char('q'));
///
/// let k = key("ctrl+p");
/// assert_eq!(k.code, KeyCode::Char('p'));
/// assert!(k.modifiers.contains(KeyModifiers::CONTROL));
/// ```
///
/// # Panics
///
/// Panics if the key string cannot be parsed.
pub fn key(s: &str) -> KeyEvent {
    parse_key_string(s).unwrap_or_else(|| panic!("Invalid key string: {:?}", s))
}

/// Create a `KeyEvent` for a character with no modifiers.
///
/// Unlike [`key`], the character keeps its case.
pub fn char_key(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Key event wrapped as an [`EventKind`]
pub fn key_event(s: &str) -> EventKind {
    EventKind::Key(key(s))
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> EventKind {
    EventKind::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

/// Left button press at a cell
pub fn click(column: u16, row: u16) -> EventKind {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

/// Left button drag to a cell
pub fn drag(column: u16, row: u16) -> EventKind {
    mouse(MouseEventKind::Drag(MouseButton::Left), column, row)
}

/// Left button release at a cell
pub fn release(column: u16, row: u16) -> EventKind {
    mouse(MouseEventKind::Up(MouseButton::Left), column, row)
}

/// Scroll wheel at a cell, positive delta scrolls down
pub fn scroll(column: u16, row: u16, delta: isize) -> EventKind {
    EventKind::Scroll { column, row, delta }
}

/// Render components into an in-memory terminal.
///
/// # Example
///
/// ```ignore
/// let mut render = RenderHarness::new(30, 3);
/// let output = render.render_to_string_plain(|frame| {
///     slider.render(frame, frame.area(), props);
/// });
/// assert!(output.contains("42"));
/// ```
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    /// Create a harness with a terminal of the given size.
    ///
    /// # Panics
    ///
    /// Panics if the test terminal cannot be created.
    pub fn new(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .unwrap_or_else(|err| panic!("failed to create test terminal: {err}"));
        Self { terminal }
    }

    /// Render a frame and return the resulting buffer.
    pub fn render<F>(&mut self, render: F) -> &Buffer
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal
            .draw(render)
            .unwrap_or_else(|err| panic!("failed to draw test frame: {err}"));
        self.terminal.backend().buffer()
    }

    /// Render a frame and return its text, one line per row, without styles.
    pub fn render_to_string_plain<F>(&mut self, render: F) -> String
    where
        F: FnOnce(&mut Frame),
    {
        buffer_to_string_plain(self.render(render))
    }
}

/// Text content of a buffer, one line per row, without styles
pub fn buffer_to_string_plain(buffer: &Buffer) -> String {
    buffer_rect_to_string_plain(buffer, buffer.area)
}

/// Text content of one region of a buffer
pub fn buffer_rect_to_string_plain(buffer: &Buffer, rect: Rect) -> String {
    let area = rect.intersection(buffer.area);
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

/// Generic test harness for tui-quantum components.
///
/// Provides:
/// - State management with a simple `state` field
/// - Action channel for capturing emitted actions
/// - Helper methods for emitting and draining actions
pub struct TestHarness<S, A: Action> {
    /// The application state under test
    pub state: S,
    /// Sender for emitting actions
    tx: mpsc::UnboundedSender<A>,
    /// Receiver for draining emitted actions
    rx: mpsc::UnboundedReceiver<A>,
}

impl<S, A: Action> TestHarness<S, A> {
    /// Create a new test harness with the given initial state.
    pub fn new(state: S) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { state, tx, rx }
    }

    /// Emit an action (simulates what a handler would do).
    pub fn emit(&self, action: A) {
        let _ = self.tx.send(action);
    }

    /// Emit everything a component returned from `handle_event`.
    pub fn emit_all(&self, actions: impl IntoIterator<Item = A>) {
        for action in actions {
            self.emit(action);
        }
    }

    /// Drain all emitted actions from the channel.
    pub fn drain_emitted(&mut self) -> Vec<A> {
        let mut actions = Vec::new();
        while let Ok(action) = self.rx.try_recv() {
            actions.push(action);
        }
        actions
    }

    /// Drain emitted actions and apply each to the state with a reducer.
    ///
    /// Returns how many actions changed the state.
    pub fn apply(&mut self, reducer: fn(&mut S, A) -> bool) -> usize {
        let mut changed = 0;
        for action in self.drain_emitted() {
            tracing::debug!(action = %action.name(), "applying action");
            if reducer(&mut self.state, action) {
                changed += 1;
            }
        }
        changed
    }

    /// Check if any actions were emitted.
    pub fn has_emitted(&mut self) -> bool {
        !self.drain_emitted().is_empty()
    }
}

impl<S: Default, A: Action> Default for TestHarness<S, A> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

/// Assert that a specific action was emitted.
///
/// ```ignore
/// assert_emitted!(actions, Action::SetValue(v) if *v == 42.0);
/// ```
#[macro_export]
macro_rules! assert_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            $actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` to be emitted, but got: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Assert that a specific action was NOT emitted.
#[macro_export]
macro_rules! assert_not_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            !$actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` NOT to be emitted, but it was: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Count how many actions match a pattern.
#[macro_export]
macro_rules! count_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        $actions.iter().filter(|a| matches!(a, $pattern $(if $guard)?)).count()
    };
}
