//! Click intent flags
//!
//! Derived from the input event that confirmed a suggestion and forwarded
//! untouched to whoever performs the navigation.

use ratatui::crossterm::event::{KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use serde::Serialize;

/// Flags describing how a suggestion was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ClickIntent {
    /// Secondary action requested (Ctrl/Alt/Meta held, or middle button)
    pub secondary: bool,
    /// Shift key held
    pub shift: bool,
}

impl ClickIntent {
    pub fn new(secondary: bool, shift: bool) -> Self {
        Self { secondary, shift }
    }

    pub fn from_key(key: &KeyEvent) -> Self {
        Self {
            secondary: is_secondary_modifier(key.modifiers),
            shift: key.modifiers.contains(KeyModifiers::SHIFT),
        }
    }

    pub fn from_mouse(mouse: &MouseEvent) -> Self {
        let middle = matches!(mouse.kind, MouseEventKind::Down(MouseButton::Middle));
        Self {
            secondary: middle || is_secondary_modifier(mouse.modifiers),
            shift: mouse.modifiers.contains(KeyModifiers::SHIFT),
        }
    }
}

fn is_secondary_modifier(modifiers: KeyModifiers) -> bool {
    modifiers.intersects(
        KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER | KeyModifiers::META,
    )
}

#[cfg(test)]
#[path = "intent_tests.rs"]
mod intent_tests;
