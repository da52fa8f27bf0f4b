use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::{CursorMove, TextArea};

use super::actions::{ActionQueue, WindowAction};
use super::source::{Navigation, Outcome, SuggestionSource};
use crate::config::Config;
use crate::intent::ClickIntent;
use crate::panel::{DocumentListeners, PanelProps, SuggestionPanel};
use crate::suggestion::Suggestion;

/// Application state
pub struct App {
    pub url_bar: TextArea<'static>,
    pub source: SuggestionSource,
    pub navigation: Navigation,
    pub panel: SuggestionPanel,
    pub listeners: DocumentListeners,
    pub actions: ActionQueue,
    pub config: Config,
    pub menubar_visible: bool,
    /// Inline completion shown after the typed text
    pub location_suffix: Option<String>,
    pub config_warning: Option<String>,
    pub outcome: Option<Outcome>,
    pub should_quit: bool,
}

impl App {
    /// Create a new App instance over the given candidates
    pub fn new(candidates: Vec<Suggestion>, config: Config) -> Self {
        let navigation = Navigation::default();
        let source = SuggestionSource::new(candidates, &navigation);

        let mut app = Self {
            url_bar: new_url_bar(Vec::new()),
            source,
            navigation,
            panel: SuggestionPanel::new(),
            listeners: DocumentListeners::new(),
            actions: ActionQueue::new(),
            config,
            menubar_visible: false,
            location_suffix: None,
            config_warning: None,
            outcome: None,
            should_quit: false,
        };
        app.refresh_suggestions();
        app
    }

    pub fn with_menubar(mut self, visible: bool) -> Self {
        self.menubar_visible = visible;
        self.refresh_suggestions();
        self
    }

    pub fn with_config_warning(mut self, warning: Option<String>) -> Self {
        self.config_warning = warning;
        self
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Current URL bar text
    pub fn input(&self) -> &str {
        self.url_bar.lines().first().map(String::as_str).unwrap_or("")
    }

    /// Replace the URL bar text and re-run the suggestion source
    pub fn set_input(&mut self, text: &str) {
        self.url_bar = new_url_bar(vec![text.to_string()]);
        self.url_bar.move_cursor(CursorMove::End);
        self.refresh_suggestions();
    }

    /// Ask the source for a fresh list for the current input
    pub fn refresh_suggestions(&mut self) {
        let result = self.source.suggest(self.input());
        self.location_suffix = result.location_suffix;
        self.panel.set_props(PanelProps {
            has_location_value_suffix: self.location_suffix.is_some(),
            suggestion_list: result.list,
            selected_index: None,
            menubar_visible: self.menubar_visible,
        });
    }

    /// Apply everything the panel reported since the last call
    pub fn apply_actions(&mut self) {
        for action in self.actions.drain() {
            match action {
                WindowAction::SetSuggestions {
                    list,
                    selected_index,
                } => {
                    if list.is_none() {
                        self.location_suffix = None;
                    }
                    self.panel.set_props(PanelProps {
                        has_location_value_suffix: list.is_some() && self.location_suffix.is_some(),
                        suggestion_list: list,
                        selected_index,
                        menubar_visible: self.menubar_visible,
                    });
                }
                WindowAction::ActiveSuggestionClicked(intent) => self.confirm_active(intent),
            }
        }

        if let Some(outcome) = self.navigation.take() {
            self.outcome = Some(outcome);
            self.should_quit = true;
        }
    }

    /// Navigate to the active suggestion, or to the typed text when none is active
    fn confirm_active(&mut self, intent: ClickIntent) {
        match self.panel.active_suggestion() {
            Some(suggestion) => match &suggestion.on_click {
                Some(handler) => handler(intent),
                None => self.navigation.navigate(&suggestion.location, intent),
            },
            None => {
                let typed = self.input().trim();
                if !typed.is_empty() {
                    self.navigation.navigate(typed, intent);
                }
            }
        }
    }
}

fn new_url_bar(lines: Vec<String>) -> TextArea<'static> {
    let mut textarea = if lines.is_empty() {
        TextArea::default()
    } else {
        TextArea::new(lines)
    };

    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(" URL ")
            .border_style(Style::default().fg(Color::Cyan)),
    );

    // Remove default underline from cursor line
    textarea.set_cursor_line_style(Style::default());
    textarea
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
