pub mod test_helpers {
    use std::rc::Rc;

    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };

    use crate::app::App;
    use crate::config::Config;
    use crate::intent::ClickIntent;
    use crate::panel::SelectionSink;
    use crate::suggestion::{Suggestion, SuggestionList, SuggestionType};

    pub fn suggestion(suggestion_type: SuggestionType, location: &str) -> Suggestion {
        Suggestion::new(suggestion_type, location)
    }

    pub fn titled(suggestion_type: SuggestionType, title: &str, location: &str) -> Suggestion {
        Suggestion::new(suggestion_type, location).with_title(title)
    }

    pub fn list(suggestions: Vec<Suggestion>) -> SuggestionList {
        Rc::from(suggestions)
    }

    /// History×2 followed by one search entry
    pub fn mixed_list() -> SuggestionList {
        list(vec![
            titled(SuggestionType::History, "Example", "https://example.com"),
            titled(SuggestionType::Search, "rust", "rust"),
            titled(SuggestionType::History, "Docs", "https://docs.rs"),
        ])
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum SinkCall {
        SetSelection {
            len: Option<usize>,
            index: Option<usize>,
        },
        Confirm(ClickIntent),
    }

    /// Sink that records every call for assertions
    #[derive(Debug, Default)]
    pub struct RecordingSink {
        pub calls: Vec<SinkCall>,
    }

    impl RecordingSink {
        pub fn last(&self) -> Option<&SinkCall> {
            self.calls.last()
        }
    }

    impl SelectionSink for RecordingSink {
        fn set_selection(&mut self, list: Option<SuggestionList>, index: Option<usize>) {
            self.calls.push(SinkCall::SetSelection {
                len: list.map(|l| l.len()),
                index,
            });
        }

        fn confirm_selection(&mut self, intent: ClickIntent) {
            self.calls.push(SinkCall::Confirm(intent));
        }
    }

    pub const TEST_SUGGESTIONS: &str = r#"[
        {"type": "history", "title": "Example Domain", "location": "https://example.com"},
        {"type": "bookmark", "title": "The Rust Book", "location": "https://doc.rust-lang.org/book/"},
        {"type": "tab", "title": "docs.rs", "location": "https://docs.rs"},
        {"type": "search", "title": "rust ratatui", "location": "rust ratatui"},
        {"type": "top_site", "location": "https://crates.io"}
    ]"#;

    pub fn test_app(json: &str) -> App {
        let candidates = crate::suggestion::parse_suggestions(json).unwrap();
        App::new(candidates, Config::default())
    }

    /// Draw the whole app into a test terminal and return the buffer text
    pub fn render_app(app: &mut App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal.backend().to_string()
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn mouse_moved(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Moved,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub fn mouse_down(button: MouseButton, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(button),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }
}
