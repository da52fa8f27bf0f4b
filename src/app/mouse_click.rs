//! Mouse click handling
//!
//! Item clicks are consumed by the panel. Anything else reaches the
//! document listener, which dismisses a visible panel.

use ratatui::crossterm::event::MouseEvent;

use super::state::App;
use crate::intent::ClickIntent;

/// Handle a left or middle button press
pub fn handle_click(app: &mut App, mouse: MouseEvent) {
    let intent = ClickIntent::from_mouse(&mouse);
    if app
        .panel
        .click_at(mouse.column, mouse.row, intent, &mut app.actions)
    {
        return;
    }

    dispatch_document_click(app);
}

fn dispatch_document_click(app: &mut App) {
    if app.panel.is_subscribed() {
        app.panel.blur(&mut app.actions);
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
