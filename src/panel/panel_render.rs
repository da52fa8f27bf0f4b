//! Suggestion panel rendering
//!
//! Draws the grouped list below the URL bar and records where each row
//! landed so pointer events can be mapped back to global indices.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use super::grouping::{PanelRow, flatten, group_suggestions};
use super::labels::{self, Translate};
use super::layout::{self, BORDER_HEIGHT, PanelLayout};
use super::listeners::DocumentListeners;
use super::panel_state::SuggestionPanel;
use super::selection::Selection;
use crate::suggestion::Suggestion;
use crate::widgets::popup;

const TITLE_LOCATION_SPACING: usize = 2;
const SELECTED_MARKER: &str = "► ";
const UNSELECTED_MARKER: &str = "  ";

/// Host-provided inputs for a render pass
pub struct RenderContext<'a> {
    pub listeners: &'a DocumentListeners,
    pub labels: &'a dyn Translate,
    /// Height of the navigation bar from the active theme
    pub navbar_height: u16,
    pub show_icons: bool,
}

impl SuggestionPanel {
    /// Render the panel below `anchor`
    pub fn render(&mut self, frame: &mut Frame, anchor: Rect, ctx: &RenderContext) {
        if !self.refresh_subscription(ctx.listeners) {
            return;
        }
        let Some(list) = self.props().suggestion_list.clone() else {
            return;
        };

        let sections = group_suggestions(&list);
        let rows = flatten(&sections);
        let selection = self.selection();

        let frame_area = frame.area();
        let max_height = layout::max_height(
            frame_area.height,
            ctx.navbar_height,
            self.props().menubar_visible,
        );
        let content_height = rows.len().min(u16::MAX as usize) as u16;
        let height = content_height.saturating_add(BORDER_HEIGHT).min(max_height);
        let area = popup::popup_below_anchor(anchor, anchor.width, height, frame_area);

        if area.height <= BORDER_HEIGHT || area.width <= 2 {
            self.layout = None;
            return;
        }

        let inner = popup::inset_rect(area, 1, 1);
        self.scroll.update_bounds(rows.len(), inner.height);
        let offset = self.scroll.offset as usize;

        let items: Vec<ListItem> = rows
            .iter()
            .skip(offset)
            .take(inner.height as usize)
            .map(|row| ListItem::new(row_line(row, selection, ctx, inner.width as usize)))
            .collect();

        // Clear the background area to prevent transparency
        popup::clear_area(frame, area);

        let list_widget = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        );
        frame.render_widget(list_widget, area);

        self.layout = Some(PanelLayout {
            area,
            inner,
            scroll_offset: self.scroll.offset,
            rows: rows.iter().map(PanelRow::global_index).collect(),
            keys: rows.iter().map(PanelRow::key).collect(),
        });
    }

    /// Plain-text projection of the grouped rows
    ///
    /// Headers are written as `[Label]`, items as `<marker><index> <text>`.
    pub fn render_plain(&self, labels: &dyn Translate) -> String {
        let Some(list) = self.props().suggestion_list.as_ref() else {
            return String::new();
        };
        let selection = self.selection();

        flatten(&group_suggestions(list))
            .iter()
            .map(|row| match row {
                PanelRow::Header(category) => {
                    format!("[{}]", labels.translation(labels::label_key(*category)))
                }
                PanelRow::Item {
                    global_index,
                    suggestion,
                } => {
                    let marker = if selection.is_selected(*global_index) {
                        "> "
                    } else {
                        "  "
                    };
                    format!("{}{} {}", marker, global_index, plain_text(suggestion))
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn plain_text(suggestion: &Suggestion) -> String {
    match (suggestion.display_title(), suggestion.display_location()) {
        (Some(title), Some(location)) => format!("{} | {}", title, location),
        (Some(text), None) | (None, Some(text)) => text.to_string(),
        (None, None) => String::new(),
    }
}

fn row_line(row: &PanelRow, selection: Selection, ctx: &RenderContext, width: usize) -> Line<'static> {
    match row {
        PanelRow::Header(category) => {
            let label = ctx.labels.translation(labels::label_key(*category));
            let text = match labels::icon(*category) {
                Some(icon) if ctx.show_icons => format!("{} {}", icon, label),
                _ => label,
            };
            Line::from(Span::styled(
                text,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            ))
        }
        PanelRow::Item {
            global_index,
            suggestion,
        } => item_line(suggestion, selection.is_selected(*global_index), width),
    }
}

fn item_line(suggestion: &Suggestion, selected: bool, width: usize) -> Line<'static> {
    let (marker, title_style, location_style) = if selected {
        (
            SELECTED_MARKER,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        )
    } else {
        (
            UNSELECTED_MARKER,
            Style::default().fg(Color::White).bg(Color::Black),
            Style::default().fg(Color::Blue).bg(Color::Black),
        )
    };

    let mut spans = vec![Span::styled(marker, location_style)];
    let mut used = marker.width();

    let title = suggestion.display_title();
    if let Some(title) = title {
        spans.push(Span::styled(title.to_string(), title_style));
        used += title.width();
    }
    if let Some(location) = suggestion.display_location() {
        if title.is_some() {
            spans.push(Span::styled(
                " ".repeat(TITLE_LOCATION_SPACING),
                location_style,
            ));
            used += TITLE_LOCATION_SPACING;
        }
        spans.push(Span::styled(location.to_string(), location_style));
        used += location.width();
    }

    // Pad so the highlight spans the whole row
    if selected && used < width {
        spans.push(Span::styled(" ".repeat(width - used), location_style));
    }

    Line::from(spans)
}

#[cfg(test)]
#[path = "panel_render_tests.rs"]
mod panel_render_tests;
