use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::io;

use super::mouse_click;
use super::mouse_hover;
use super::state::App;
use crate::intent::ClickIntent;

impl App {
    /// Handle events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            Event::Mouse(mouse_event) => {
                self.handle_mouse_event(mouse_event);
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle a key press, then apply the resulting actions
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        self.handle_key(key);
        self.apply_actions();
    }

    /// Handle a mouse event, then apply the resulting actions
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved => mouse_hover::handle_hover(self, mouse),
            MouseEventKind::Down(MouseButton::Left | MouseButton::Middle) => {
                mouse_click::handle_click(self, mouse)
            }
            _ => {}
        }
        self.apply_actions();
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl+C: Exit application
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => {
                if self.panel.should_render() {
                    self.panel.blur(&mut self.actions);
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::Enter => self.confirm(ClickIntent::from_key(&key)),
            KeyCode::Down => self.panel.navigate_next(&mut self.actions),
            KeyCode::Up => self.panel.navigate_previous(&mut self.actions),
            KeyCode::Tab if self.location_suffix.is_some() => self.accept_suffix(),
            _ => {
                let before = self.input().to_string();
                self.url_bar.input(key);
                if self.input() != before {
                    self.refresh_suggestions();
                }
            }
        }
    }

    fn confirm(&mut self, intent: ClickIntent) {
        if self.panel.should_render() {
            self.panel.click_selected(intent, &mut self.actions);
            return;
        }

        let typed = self.input().trim();
        if !typed.is_empty() {
            self.navigation.navigate(typed, intent);
        }
    }

    /// Move the inline completion into the URL bar text
    fn accept_suffix(&mut self) {
        if let Some(suffix) = self.location_suffix.take() {
            let text = format!("{}{}", self.input(), suffix);
            self.set_input(&text);
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
