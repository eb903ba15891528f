//! Masked phone number input

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_quantum_core::phone::{clean_phone, format_phone, max_phone_length};
use tui_quantum_core::{Component, EventKind};

/// Props for PhoneInput component
pub struct PhoneInputProps<'a, A> {
    /// Raw value: country code followed by digits, or empty
    pub value: &'a str,
    /// Country code, e.g. `"+7"`
    pub country_code: &'a str,
    /// Mask after the country code, `#` is a digit slot
    pub mask: &'a str,
    /// Placeholder text when empty and unfocused
    pub placeholder: &'a str,
    /// Whether this component has focus
    pub is_focused: bool,
    /// Callback when the raw value changes
    pub on_change: fn(String) -> A,
    /// Callback when user submits (Enter)
    pub on_submit: fn(String) -> A,
}

/// A phone number input that always keeps its country code
///
/// Only digits are accepted. Removing the last digit after the country code
/// clears the value. Pasted text is cleaned of mask symbols and national
/// prefixes.
#[derive(Default)]
pub struct PhoneInput;

impl PhoneInput {
    /// Create a new PhoneInput
    pub fn new() -> Self {
        Self
    }

    fn push_digit<A>(props: &PhoneInputProps<'_, A>, digit: char) -> Option<String> {
        let base = if props.value.is_empty() {
            props.country_code
        } else {
            props.value
        };
        if base.chars().count() >= max_phone_length(props.country_code, props.mask) {
            return None;
        }
        Some(format!("{base}{digit}"))
    }

    fn pop_digit<A>(props: &PhoneInputProps<'_, A>) -> Option<String> {
        let code_len = props.country_code.chars().count();
        if props.value.chars().count() <= code_len {
            return None;
        }
        let mut next = props.value.to_string();
        next.pop();
        if next == props.country_code {
            next.clear();
        }
        Some(next)
    }

    fn change<A>(props: &PhoneInputProps<'_, A>, next: Option<String>) -> Option<A> {
        let next = next.filter(|next| next != props.value)?;
        tracing::debug!(value = %next, "phone changed");
        Some((props.on_change)(next))
    }

    /// Text shown in the field and whether it is placeholder text
    fn display_text<A>(props: &PhoneInputProps<'_, A>) -> (String, bool) {
        if !props.value.is_empty() {
            return (
                format_phone(props.value, props.country_code, props.mask),
                false,
            );
        }
        if props.is_focused {
            (format!("{} ", props.country_code), false)
        } else {
            (props.placeholder.to_string(), true)
        }
    }
}

impl<A> Component<A> for PhoneInput {
    type Props<'a> = PhoneInputProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        if !props.is_focused {
            return None;
        }

        match event {
            EventKind::Key(key) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    // Ctrl+U: clear
                    return match key.code {
                        KeyCode::Char('u') => Self::change(&props, Some(String::new())),
                        _ => None,
                    };
                }

                match key.code {
                    KeyCode::Char(c) if c.is_ascii_digit() => {
                        Self::change(&props, Self::push_digit(&props, c))
                    }
                    KeyCode::Backspace => Self::change(&props, Self::pop_digit(&props)),
                    KeyCode::Enter => Some((props.on_submit)(props.value.to_string())),
                    _ => None,
                }
            }
            EventKind::Paste(text) => {
                let cleaned = clean_phone(props.value, text, props.country_code, props.mask);
                let next = if cleaned == props.country_code {
                    String::new()
                } else {
                    cleaned
                };
                Self::change(&props, Some(next))
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let (text, is_placeholder) = Self::display_text(&props);
        let style = if is_placeholder {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if props.is_focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            });
        let inner = block.inner(area);
        let cursor = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);

        frame.render_widget(Paragraph::new(text).style(style).block(block), area);

        if props.is_focused && inner.width > 0 && inner.height > 0 {
            let cursor_x = inner.x.saturating_add(cursor);
            if cursor_x < inner.right() {
                frame.set_cursor_position((cursor_x, inner.y));
            }
        }
    }
}
