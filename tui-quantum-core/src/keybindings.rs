//! Key parsing and the configurable slider keymap

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

use crate::error::QuantumError;

/// Commands a slider understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliderCommand {
    /// One step up
    Increment,
    /// One step down
    Decrement,
    /// A tenth of the steps up
    PageUp,
    /// A tenth of the steps down
    PageDown,
    /// Jump to min
    Home,
    /// Jump to max
    End,
    /// Switch the active thumb of a range
    SwitchSide,
}

/// Key strings bound to each [`SliderCommand`]
///
/// Keys use the same syntax as [`parse_key_string`]: `"right"`, `"l"`,
/// `"ctrl+e"`. Missing fields in a config file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderKeymap {
    pub increment: Vec<String>,
    pub decrement: Vec<String>,
    pub page_up: Vec<String>,
    pub page_down: Vec<String>,
    pub home: Vec<String>,
    pub end: Vec<String>,
    pub switch_side: Vec<String>,
}

fn keys(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl Default for SliderKeymap {
    fn default() -> Self {
        Self {
            increment: keys(&["right", "up", "l", "k"]),
            decrement: keys(&["left", "down", "h", "j"]),
            page_up: keys(&["pageup"]),
            page_down: keys(&["pagedown"]),
            home: keys(&["home"]),
            end: keys(&["end"]),
            switch_side: keys(&["tab"]),
        }
    }
}

impl SliderKeymap {
    fn bindings(&self) -> [(SliderCommand, &[String]); 7] {
        [
            (SliderCommand::Increment, self.increment.as_slice()),
            (SliderCommand::Decrement, self.decrement.as_slice()),
            (SliderCommand::PageUp, self.page_up.as_slice()),
            (SliderCommand::PageDown, self.page_down.as_slice()),
            (SliderCommand::Home, self.home.as_slice()),
            (SliderCommand::End, self.end.as_slice()),
            (SliderCommand::SwitchSide, self.switch_side.as_slice()),
        ]
    }

    fn entries(&self) -> impl Iterator<Item = (SliderCommand, &str)> + '_ {
        self.bindings()
            .into_iter()
            .flat_map(|(command, keys)| keys.iter().map(move |key| (command, key.as_str())))
    }

    /// Parse every key string once
    ///
    /// Fails on the first key string that does not parse.
    pub fn compile(&self) -> Result<SliderBindings, QuantumError> {
        let bindings = self
            .entries()
            .map(|(command, key)| {
                parse_key_string(key)
                    .map(|event| (event, command))
                    .ok_or_else(|| QuantumError::InvalidKey(key.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SliderBindings { bindings })
    }

    /// Check that every key string parses
    pub fn validate(&self) -> Result<(), QuantumError> {
        self.compile().map(|_| ())
    }
}

/// Parsed [`SliderKeymap`], what components match key events against
#[derive(Debug, Clone, PartialEq)]
pub struct SliderBindings {
    bindings: Vec<(KeyEvent, SliderCommand)>,
}

impl SliderBindings {
    /// Command bound to a key event, if any
    ///
    /// Commands are tried in declaration order, so a key bound twice resolves
    /// to the earlier command.
    pub fn command(&self, key: KeyEvent) -> Option<SliderCommand> {
        self.bindings
            .iter()
            .find(|(bound, _)| key_matches(bound, &key))
            .map(|(_, command)| *command)
    }
}

impl Default for SliderBindings {
    fn default() -> Self {
        let bindings = SliderKeymap::default()
            .entries()
            .filter_map(|(command, key)| parse_key_string(key).map(|event| (event, command)))
            .collect();
        Self { bindings }
    }
}

/// Compare code and modifiers, ignoring kind and state
///
/// Character keys compare case-insensitively and ignore SHIFT, which
/// terminals report for `+`, `?` and uppercase letters.
pub fn key_matches(bound: &KeyEvent, key: &KeyEvent) -> bool {
    match (&bound.code, &key.code) {
        (KeyCode::Char(c1), KeyCode::Char(c2)) => {
            c1.to_lowercase().eq(c2.to_lowercase())
                && bound.modifiers.difference(KeyModifiers::SHIFT)
                    == key.modifiers.difference(KeyModifiers::SHIFT)
        }
        _ => bound.code == key.code && bound.modifiers == key.modifiers,
    }
}

/// Parse a key string like "q", "esc", "ctrl+p", "shift+tab" into a KeyEvent
pub fn parse_key_string(key_str: &str) -> Option<KeyEvent> {
    let key_str = key_str.trim().to_lowercase();

    if key_str.is_empty() {
        return None;
    }

    // Special case: shift+tab should be BackTab
    if key_str == "shift+tab" || key_str == "backtab" {
        return Some(KeyEvent {
            code: KeyCode::BackTab,
            modifiers: KeyModifiers::SHIFT,
            kind: crossterm::event::KeyEventKind::Press,
            state: crossterm::event::KeyEventState::empty(),
        });
    }

    // A lone "+" is the plus key, not a modifier separator
    let (modifier_part, key_part) = match key_str.rsplit_once('+') {
        Some((mods, "")) => (mods.strip_suffix('+').unwrap_or(""), "+"),
        Some((mods, key)) => (mods, key),
        None => ("", key_str.as_str()),
    };

    let mut modifiers = KeyModifiers::empty();
    for part in modifier_part.split('+').filter(|p| !p.is_empty()) {
        match part.trim() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => return None,
        }
    }

    let code = match key_part.trim() {
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "space" => KeyCode::Char(' '),
        f if f.len() > 1 && f.starts_with('f') => {
            let n: u8 = f[1..].parse().ok()?;
            if !(1..=12).contains(&n) {
                return None;
            }
            KeyCode::F(n)
        }
        // Single character
        c if c.chars().count() == 1 => KeyCode::Char(c.chars().next()?),
        _ => return None,
    };

    Some(KeyEvent {
        code,
        modifiers,
        kind: crossterm::event::KeyEventKind::Press,
        state: crossterm::event::KeyEventState::empty(),
    })
}
