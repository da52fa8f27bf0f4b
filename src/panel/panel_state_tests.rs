//! Tests for the suggestion panel state machine

use std::cell::Cell;
use std::rc::Rc;

use ratatui::layout::Rect;

use super::*;
use crate::suggestion::SuggestionType;
use crate::test_utils::test_helpers::{RecordingSink, SinkCall, list, mixed_list, suggestion};

fn visible_panel(props: PanelProps) -> (SuggestionPanel, DocumentListeners) {
    let listeners = DocumentListeners::new();
    let mut panel = SuggestionPanel::new();
    panel.set_props(props);
    panel.refresh_subscription(&listeners);
    (panel, listeners)
}

/// Layout for `mixed_list()`: History header, h0, h1, Search header, s2
fn mixed_layout() -> PanelLayout {
    PanelLayout {
        area: Rect::new(0, 3, 40, 7),
        inner: Rect::new(1, 4, 38, 5),
        scroll_offset: 0,
        rows: vec![None, Some(0), Some(1), None, Some(2)],
        keys: Vec::new(),
    }
}

mod visibility_tests {
    use super::*;

    #[test]
    fn test_absent_list_does_not_render() {
        let (panel, listeners) = visible_panel(PanelProps::default());
        assert!(!panel.should_render());
        assert!(!panel.is_subscribed());
        assert!(!listeners.is_listening());
    }

    #[test]
    fn test_empty_list_does_not_render() {
        let (panel, listeners) = visible_panel(PanelProps::with_suggestions(list(vec![])));
        assert!(!panel.should_render());
        assert_eq!(listeners.active_count(), 0);
    }

    #[test]
    fn test_visible_panel_holds_one_listener() {
        let (panel, listeners) = visible_panel(PanelProps::with_suggestions(mixed_list()));
        assert!(panel.is_subscribed());
        assert_eq!(listeners.active_count(), 1);
    }

    #[test]
    fn test_repeated_refresh_keeps_single_listener() {
        let (mut panel, listeners) = visible_panel(PanelProps::with_suggestions(mixed_list()));
        for _ in 0..5 {
            panel.refresh_subscription(&listeners);
        }
        assert_eq!(listeners.active_count(), 1);
    }

    #[test]
    fn test_hiding_releases_listener() {
        let (mut panel, listeners) = visible_panel(PanelProps::with_suggestions(mixed_list()));
        panel.set_props(PanelProps::default());
        panel.refresh_subscription(&listeners);
        assert!(!listeners.is_listening());
    }

    #[test]
    fn test_dropping_panel_releases_listener() {
        let (panel, listeners) = visible_panel(PanelProps::with_suggestions(mixed_list()));
        drop(panel);
        assert!(!listeners.is_listening());
    }
}

mod selection_tests {
    use super::*;

    #[test]
    fn test_suffix_selects_first_history_item() {
        let props = PanelProps {
            has_location_value_suffix: true,
            ..PanelProps::with_suggestions(mixed_list())
        };
        let (panel, _listeners) = visible_panel(props);

        assert_eq!(panel.selection(), Selection::ImplicitFirst);
        assert_eq!(
            panel.active_suggestion().map(|s| s.location.as_str()),
            Some("https://example.com")
        );
    }

    #[test]
    fn test_explicit_index_selects_search_item() {
        let props = PanelProps {
            selected_index: Some(2),
            has_location_value_suffix: true,
            ..PanelProps::with_suggestions(mixed_list())
        };
        let (panel, _listeners) = visible_panel(props);

        assert!(panel.selection().is_selected(2));
        assert!(!panel.selection().is_selected(0));
        assert_eq!(
            panel.active_suggestion().map(|s| s.suggestion_type),
            Some(SuggestionType::Search)
        );
    }

    #[test]
    fn test_active_index_requires_list() {
        let mut panel = SuggestionPanel::new();
        panel.set_props(PanelProps {
            selected_index: Some(1),
            ..PanelProps::default()
        });
        assert_eq!(panel.active_index(), None);
    }
}

mod update_suggestions_tests {
    use super::*;

    #[test]
    fn test_no_list_is_noop() {
        let panel = SuggestionPanel::new();
        let mut sink = RecordingSink::default();
        panel.update_suggestions(1, &mut sink);
        assert!(sink.calls.is_empty());
    }

    #[test]
    fn test_zero_reports_none() {
        let (panel, _l) = visible_panel(PanelProps::with_suggestions(mixed_list()));
        let mut sink = RecordingSink::default();
        panel.update_suggestions(0, &mut sink);
        assert_eq!(
            sink.last(),
            Some(&SinkCall::SetSelection {
                len: Some(3),
                index: None
            })
        );
    }

    #[test]
    fn test_in_range_reports_index() {
        let (panel, _l) = visible_panel(PanelProps::with_suggestions(mixed_list()));
        let mut sink = RecordingSink::default();
        panel.update_suggestions(2, &mut sink);
        assert_eq!(
            sink.last(),
            Some(&SinkCall::SetSelection {
                len: Some(3),
                index: Some(2)
            })
        );
    }

    #[test]
    fn test_past_end_reports_none() {
        let (panel, _l) = visible_panel(PanelProps::with_suggestions(mixed_list()));
        let mut sink = RecordingSink::default();
        panel.update_suggestions(4, &mut sink);
        assert_eq!(
            sink.last(),
            Some(&SinkCall::SetSelection {
                len: Some(3),
                index: None
            })
        );
    }

    #[test]
    fn test_uses_props_before_first_render() {
        let mut panel = SuggestionPanel::new();
        panel.set_props(PanelProps::with_suggestions(mixed_list()));
        let mut sink = RecordingSink::default();
        panel.update_suggestions(1, &mut sink);
        assert_eq!(sink.calls.len(), 1);
    }

    #[test]
    fn test_new_props_take_precedence_over_rendered_list() {
        let rendered = list(vec![
            suggestion(SuggestionType::History, "https://a.example"),
            suggestion(SuggestionType::History, "https://b.example"),
            suggestion(SuggestionType::Bookmark, "https://c.example"),
            suggestion(SuggestionType::Tab, "https://d.example"),
            suggestion(SuggestionType::TopSite, "https://e.example"),
        ]);
        let (mut panel, _l) = visible_panel(PanelProps::with_suggestions(rendered));
        panel.set_props(PanelProps::with_suggestions(list(vec![
            suggestion(SuggestionType::History, "https://f.example"),
            suggestion(SuggestionType::Search, "rust"),
        ])));
        let mut sink = RecordingSink::default();

        panel.update_suggestions(4, &mut sink);

        assert_eq!(
            sink.calls,
            vec![SinkCall::SetSelection {
                len: Some(2),
                index: None
            }]
        );
    }

    #[test]
    fn test_falls_back_to_rendered_list_when_props_cleared() {
        let (mut panel, _l) = visible_panel(PanelProps::with_suggestions(mixed_list()));
        panel.set_props(PanelProps::default());
        let mut sink = RecordingSink::default();

        panel.update_suggestions(1, &mut sink);

        assert_eq!(
            sink.last(),
            Some(&SinkCall::SetSelection {
                len: Some(3),
                index: Some(1)
            })
        );
    }
}

mod navigation_tests {
    use super::*;

    #[test]
    fn test_next_from_implicit_first_moves_to_second() {
        let props = PanelProps {
            has_location_value_suffix: true,
            ..PanelProps::with_suggestions(mixed_list())
        };
        let (panel, _l) = visible_panel(props);
        let mut sink = RecordingSink::default();
        panel.navigate_next(&mut sink);
        assert_eq!(
            sink.last(),
            Some(&SinkCall::SetSelection {
                len: Some(3),
                index: Some(1)
            })
        );
    }

    #[test]
    fn test_previous_without_selection_wraps_to_last() {
        let (panel, _l) = visible_panel(PanelProps::with_suggestions(mixed_list()));
        let mut sink = RecordingSink::default();
        panel.navigate_previous(&mut sink);
        assert_eq!(
            sink.last(),
            Some(&SinkCall::SetSelection {
                len: Some(3),
                index: Some(2)
            })
        );
    }

    #[test]
    fn test_navigation_without_list_is_noop() {
        let panel = SuggestionPanel::new();
        let mut sink = RecordingSink::default();
        panel.navigate_next(&mut sink);
        assert!(sink.calls.is_empty());
    }
}

mod pointer_tests {
    use super::*;

    #[test]
    fn test_hover_over_item_updates_selection() {
        let (mut panel, _l) = visible_panel(PanelProps::with_suggestions(mixed_list()));
        panel.layout = Some(mixed_layout());
        let mut sink = RecordingSink::default();

        assert!(panel.hover(5, 6, &mut sink));
        assert_eq!(
            sink.last(),
            Some(&SinkCall::SetSelection {
                len: Some(3),
                index: Some(1)
            })
        );
    }

    #[test]
    fn test_hover_over_header_does_nothing() {
        let (mut panel, _l) = visible_panel(PanelProps::with_suggestions(mixed_list()));
        panel.layout = Some(mixed_layout());
        let mut sink = RecordingSink::default();

        assert!(!panel.hover(5, 4, &mut sink));
        assert!(sink.calls.is_empty());
    }

    #[test]
    fn test_hover_supersedes_previous_hover() {
        let (mut panel, _l) = visible_panel(PanelProps::with_suggestions(mixed_list()));
        panel.layout = Some(mixed_layout());
        let mut sink = RecordingSink::default();

        panel.hover(5, 6, &mut sink);
        panel.hover(5, 8, &mut sink);
        assert_eq!(sink.calls.len(), 2);
        assert_eq!(
            sink.last(),
            Some(&SinkCall::SetSelection {
                len: Some(3),
                index: Some(2)
            })
        );
    }

    #[test]
    fn test_click_invokes_suggestion_handler() {
        let clicked = Rc::new(Cell::new(None));
        let seen = Rc::clone(&clicked);
        let suggestions = list(vec![
            suggestion(SuggestionType::History, "https://a.example"),
            suggestion(SuggestionType::History, "https://b.example")
                .with_on_click(move |intent| seen.set(Some(intent))),
        ]);
        let (mut panel, _l) = visible_panel(PanelProps::with_suggestions(suggestions));
        panel.layout = Some(PanelLayout {
            area: Rect::new(0, 3, 40, 5),
            inner: Rect::new(1, 4, 38, 3),
            scroll_offset: 0,
            rows: vec![None, Some(0), Some(1)],
            keys: Vec::new(),
        });
        let mut sink = RecordingSink::default();

        let consumed = panel.click_at(5, 6, ClickIntent::new(false, true), &mut sink);

        assert!(consumed);
        assert_eq!(clicked.get(), Some(ClickIntent::new(false, true)));
        assert!(sink.calls.is_empty());
    }

    #[test]
    fn test_click_without_handler_selects_then_confirms() {
        let (mut panel, _l) = visible_panel(PanelProps::with_suggestions(mixed_list()));
        panel.layout = Some(mixed_layout());
        let mut sink = RecordingSink::default();

        assert!(panel.click_at(5, 5, ClickIntent::default(), &mut sink));
        assert_eq!(
            sink.calls,
            vec![
                SinkCall::SetSelection {
                    len: Some(3),
                    index: Some(0)
                },
                SinkCall::Confirm(ClickIntent::default()),
            ]
        );
    }

    #[test]
    fn test_click_outside_items_is_not_consumed() {
        let (mut panel, _l) = visible_panel(PanelProps::with_suggestions(mixed_list()));
        panel.layout = Some(mixed_layout());
        let mut sink = RecordingSink::default();

        assert!(!panel.click_at(5, 20, ClickIntent::default(), &mut sink));
        assert!(!panel.click_at(5, 4, ClickIntent::default(), &mut sink));
        assert!(sink.calls.is_empty());
    }
}

mod confirm_and_blur_tests {
    use super::*;

    #[test]
    fn test_click_selected_forwards_intent() {
        let (panel, _l) = visible_panel(PanelProps::with_suggestions(mixed_list()));
        let mut sink = RecordingSink::default();
        panel.click_selected(ClickIntent::new(true, true), &mut sink);
        assert_eq!(
            sink.last(),
            Some(&SinkCall::Confirm(ClickIntent::new(true, true)))
        );
    }

    #[test]
    fn test_blur_clears_selection_and_listener() {
        let (mut panel, listeners) = visible_panel(PanelProps::with_suggestions(mixed_list()));
        let mut sink = RecordingSink::default();

        panel.blur(&mut sink);

        assert_eq!(
            sink.last(),
            Some(&SinkCall::SetSelection {
                len: None,
                index: None
            })
        );
        assert!(!listeners.is_listening());
        assert!(!panel.is_subscribed());
    }

    #[test]
    fn test_update_after_blur_and_clear_is_noop() {
        let (mut panel, _l) = visible_panel(PanelProps::with_suggestions(mixed_list()));
        let mut sink = RecordingSink::default();
        panel.blur(&mut sink);
        panel.set_props(PanelProps::default());

        panel.update_suggestions(1, &mut sink);
        assert_eq!(sink.calls.len(), 1);
    }
}

mod scroll_tests {
    use super::*;

    #[test]
    fn test_set_props_scrolls_selected_row_into_view() {
        let (mut panel, _l) = visible_panel(PanelProps::with_suggestions(mixed_list()));
        panel.layout = Some(mixed_layout());
        panel.scroll.update_bounds(5, 2);

        panel.set_props(PanelProps {
            selected_index: Some(2),
            ..PanelProps::with_suggestions(mixed_list())
        });

        assert_eq!(panel.scroll_offset(), 3);
    }

    #[test]
    fn test_clearing_list_resets_scroll() {
        let (mut panel, _l) = visible_panel(PanelProps::with_suggestions(mixed_list()));
        panel.scroll.update_bounds(5, 2);
        panel.scroll.offset = 2;

        panel.set_props(PanelProps::default());

        assert_eq!(panel.scroll_offset(), 0);
    }
}
