//! Suggestion panel state machine
//!
//! Holds the current props, the dismissal subscription and the geometry of
//! the last render. Every outgoing effect goes through a [`SelectionSink`].

use std::rc::Rc;

use super::grouping;
use super::layout::PanelLayout;
use super::listeners::{DocumentListeners, Subscription};
use super::scroll::ScrollState;
use super::selection::{self, Selection};
use super::sink::SelectionSink;
use crate::intent::ClickIntent;
use crate::suggestion::{Suggestion, SuggestionList};

/// Inputs supplied by the host on every update
#[derive(Debug, Clone, Default)]
pub struct PanelProps {
    pub suggestion_list: Option<SuggestionList>,
    pub selected_index: Option<usize>,
    /// The URL bar shows an inline completion of the first row
    pub has_location_value_suffix: bool,
    pub menubar_visible: bool,
}

impl PanelProps {
    pub fn with_suggestions(list: SuggestionList) -> Self {
        Self {
            suggestion_list: Some(list),
            ..Self::default()
        }
    }
}

#[derive(Debug, Default)]
pub struct SuggestionPanel {
    props: PanelProps,
    /// List seen by the last visible render
    cached_list: Option<SuggestionList>,
    subscription: Option<Subscription>,
    pub(super) scroll: ScrollState,
    pub(super) layout: Option<PanelLayout>,
}

impl SuggestionPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn props(&self) -> &PanelProps {
        &self.props
    }

    pub fn should_render(&self) -> bool {
        self.props
            .suggestion_list
            .as_ref()
            .is_some_and(|list| !list.is_empty())
    }

    pub fn selection(&self) -> Selection {
        Selection::from_props(
            self.props.selected_index,
            self.props.has_location_value_suffix,
        )
    }

    /// Explicit selection, only meaningful while a list is present
    pub fn active_index(&self) -> Option<usize> {
        self.props.suggestion_list.as_ref()?;
        self.props.selected_index
    }

    /// Suggestion under the current highlight, in grouped order
    pub fn active_suggestion(&self) -> Option<&Suggestion> {
        let list = self.props.suggestion_list.as_ref()?;
        grouping::suggestion_at(list, self.selection().index()?)
    }

    pub fn layout(&self) -> Option<&PanelLayout> {
        self.layout.as_ref()
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll.offset
    }

    /// Apply new props from the host
    ///
    /// The newly selected item is scrolled into view against the mounted
    /// layout before the next render.
    pub fn set_props(&mut self, props: PanelProps) {
        let selected =
            Selection::from_props(props.selected_index, props.has_location_value_suffix).index();
        if let (Some(index), Some(layout)) = (selected, &self.layout) {
            if let Some(row) = layout.row_of(index) {
                self.scroll.ensure_visible(row);
            }
        }

        if props.suggestion_list.is_none() {
            self.scroll.reset();
        }
        self.props = props;
    }

    /// Release the dismissal listener, then re-attach it if the panel is visible
    ///
    /// Returns whether the panel is visible.
    pub fn refresh_subscription(&mut self, listeners: &DocumentListeners) -> bool {
        self.subscription = None;

        if !self.should_render() {
            self.cached_list = None;
            self.layout = None;
            return false;
        }

        self.subscription = Some(listeners.subscribe());
        self.cached_list = self.props.suggestion_list.clone();
        true
    }

    /// Request a new highlighted row
    ///
    /// Works on the current list, or on the one last rendered when the host
    /// has already cleared it. Silently ignored when neither exists.
    pub fn update_suggestions(&self, new_index: usize, sink: &mut dyn SelectionSink) {
        let Some(list) = self
            .props
            .suggestion_list
            .as_ref()
            .or(self.cached_list.as_ref())
        else {
            return;
        };

        let index = selection::normalize_index(new_index, list.len());
        log::debug!("Selection update {} -> {:?}", new_index, index);
        sink.set_selection(Some(Rc::clone(list)), index);
    }

    pub fn navigate_next(&self, sink: &mut dyn SelectionSink) {
        self.navigate(sink, selection::next_index);
    }

    pub fn navigate_previous(&self, sink: &mut dyn SelectionSink) {
        self.navigate(sink, selection::previous_index);
    }

    fn navigate(
        &self,
        sink: &mut dyn SelectionSink,
        step: fn(Option<usize>, usize) -> Option<usize>,
    ) {
        let Some(list) = self
            .props
            .suggestion_list
            .as_ref()
            .filter(|list| !list.is_empty())
        else {
            return;
        };

        let index = step(self.selection().index(), list.len());
        sink.set_selection(Some(Rc::clone(list)), index);
    }

    /// Pointer moved over the panel
    ///
    /// Returns true when the pointer is over an item.
    pub fn hover(&self, column: u16, row: u16, sink: &mut dyn SelectionSink) -> bool {
        let Some(index) = self
            .layout
            .as_ref()
            .and_then(|layout| layout.item_at(column, row))
        else {
            return false;
        };

        self.update_suggestions(index, sink);
        true
    }

    /// Click at a screen position
    ///
    /// Returns true when an item consumed the click. A consumed click must
    /// not propagate to the document dismissal listener.
    pub fn click_at(
        &self,
        column: u16,
        row: u16,
        intent: ClickIntent,
        sink: &mut dyn SelectionSink,
    ) -> bool {
        let Some(index) = self
            .layout
            .as_ref()
            .and_then(|layout| layout.item_at(column, row))
        else {
            return false;
        };
        let Some(list) = self.props.suggestion_list.as_ref() else {
            return false;
        };
        let Some(suggestion) = grouping::suggestion_at(list, index) else {
            return false;
        };

        match &suggestion.on_click {
            Some(handler) => handler(intent),
            None => {
                sink.set_selection(Some(Rc::clone(list)), Some(index));
                sink.confirm_selection(intent);
            }
        }
        true
    }

    /// Confirm the active suggestion
    pub fn click_selected(&self, intent: ClickIntent, sink: &mut dyn SelectionSink) {
        log::debug!("Confirming selection {:?} with {:?}", self.active_index(), intent);
        sink.confirm_selection(intent);
    }

    /// Dismiss the panel
    pub fn blur(&mut self, sink: &mut dyn SelectionSink) {
        self.subscription = None;
        self.cached_list = None;
        log::debug!("Suggestion panel dismissed");
        sink.set_selection(None, None);
    }
}

#[cfg(test)]
#[path = "panel_state_tests.rs"]
mod panel_state_tests;
