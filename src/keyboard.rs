//! Keyboard bindings for the day grid

use crate::focus::{MoveBy, MoveDir};
use crate::props::Direction;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Keys the grid reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    PageUp,
    PageDown,
    Home,
    End,
    Enter,
    Space,
}

impl FromStr for Key {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "arrowleft" | "left" => Ok(Key::ArrowLeft),
            "arrowright" | "right" => Ok(Key::ArrowRight),
            "arrowup" | "up" => Ok(Key::ArrowUp),
            "arrowdown" | "down" => Ok(Key::ArrowDown),
            "pageup" => Ok(Key::PageUp),
            "pagedown" => Ok(Key::PageDown),
            "home" => Ok(Key::Home),
            "end" => Ok(Key::End),
            "enter" => Ok(Key::Enter),
            "space" | " " => Ok(Key::Space),
            other => Err(crate::Error::Other(format!("Unknown key: {}", other))),
        }
    }
}

/// A key press with the shift modifier state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub shift: bool,
}

impl KeyPress {
    pub fn new(key: Key) -> Self {
        Self { key, shift: false }
    }

    pub fn shifted(key: Key) -> Self {
        Self { key, shift: true }
    }
}

/// What a key press does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Move(MoveBy, MoveDir),
    Select,
}

/// Map a key press to its grid action
///
/// Horizontal arrows move by day, or by month with shift, and are mirrored
/// for right-to-left text. Vertical arrows move by week, or by year with
/// shift. Page keys move by month, or by year with shift.
pub fn key_action(press: KeyPress, dir: Direction) -> KeyAction {
    let (before, after) = match dir {
        Direction::Rtl => (MoveDir::After, MoveDir::Before),
        Direction::Ltr => (MoveDir::Before, MoveDir::After),
    };
    let sideways = if press.shift { MoveBy::Month } else { MoveBy::Day };
    let vertical = if press.shift { MoveBy::Year } else { MoveBy::Week };
    let paged = if press.shift { MoveBy::Year } else { MoveBy::Month };
    match press.key {
        Key::ArrowLeft => KeyAction::Move(sideways, before),
        Key::ArrowRight => KeyAction::Move(sideways, after),
        Key::ArrowDown => KeyAction::Move(vertical, MoveDir::After),
        Key::ArrowUp => KeyAction::Move(vertical, MoveDir::Before),
        Key::PageUp => KeyAction::Move(paged, MoveDir::Before),
        Key::PageDown => KeyAction::Move(paged, MoveDir::After),
        Key::Home => KeyAction::Move(MoveBy::StartOfWeek, MoveDir::Before),
        Key::End => KeyAction::Move(MoveBy::EndOfWeek, MoveDir::After),
        Key::Enter | Key::Space => KeyAction::Select,
    }
}
