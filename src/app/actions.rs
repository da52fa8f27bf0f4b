//! Window action queue
//!
//! Plays the role of the browser's action dispatch bus: the panel reports
//! into the queue and the app applies the actions after each event.

use crate::intent::ClickIntent;
use crate::panel::SelectionSink;
use crate::suggestion::SuggestionList;

#[derive(Debug, Clone)]
pub enum WindowAction {
    SetSuggestions {
        list: Option<SuggestionList>,
        selected_index: Option<usize>,
    },
    ActiveSuggestionClicked(ClickIntent),
}

#[derive(Debug, Default)]
pub struct ActionQueue {
    pending: Vec<WindowAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn drain(&mut self) -> Vec<WindowAction> {
        std::mem::take(&mut self.pending)
    }
}

impl SelectionSink for ActionQueue {
    fn set_selection(&mut self, list: Option<SuggestionList>, selected_index: Option<usize>) {
        self.pending.push(WindowAction::SetSuggestions {
            list,
            selected_index,
        });
    }

    fn confirm_selection(&mut self, intent: ClickIntent) {
        self.pending
            .push(WindowAction::ActiveSuggestionClicked(intent));
    }
}
