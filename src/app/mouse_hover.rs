//! Mouse hover handling
//!
//! Hovering a panel item makes it the highlighted suggestion.

use ratatui::crossterm::event::MouseEvent;

use super::state::App;

/// Handle pointer movement
pub fn handle_hover(app: &mut App, mouse: MouseEvent) {
    if !app.panel.should_render() {
        return;
    }
    app.panel.hover(mouse.column, mouse.row, &mut app.actions);
}

#[cfg(test)]
#[path = "mouse_hover_tests.rs"]
mod mouse_hover_tests;
