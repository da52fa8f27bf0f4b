use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use super::state::App;
use crate::panel::{MENUBAR_HEIGHT, RenderContext};

const MENU_ITEMS: &str = " File  Edit  View  History  Bookmarks  Help";
const KEY_HINTS: &str = " ↑↓ select  Enter open  Ctrl+Enter secondary  Tab complete  Esc close";

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let menubar_height = if self.menubar_visible { MENUBAR_HEIGHT } else { 0 };
        let layout = Layout::vertical([
            Constraint::Length(menubar_height),
            Constraint::Length(self.config.layout.navbar_height),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

        if self.menubar_visible {
            self.render_menubar(frame, layout[0]);
        }
        self.render_url_bar(frame, layout[1]);
        self.render_page(frame, layout[2]);
        self.render_status(frame, layout[3]);

        // Panel is drawn last so it overlays the page
        let ctx = RenderContext {
            listeners: &self.listeners,
            labels: &self.config.labels,
            navbar_height: self.config.layout.navbar_height,
            show_icons: self.config.panel.icons,
        };
        self.panel.render(frame, layout[1], &ctx);
    }

    fn render_menubar(&self, frame: &mut Frame, area: Rect) {
        let menubar = Paragraph::new(MENU_ITEMS)
            .style(Style::default().add_modifier(Modifier::REVERSED));
        frame.render_widget(menubar, area);
    }

    /// Render the URL bar with its inline completion
    fn render_url_bar(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(&self.url_bar, area);

        let Some(suffix) = &self.location_suffix else {
            return;
        };
        if self.url_bar.cursor().1 < self.input().chars().count() {
            return;
        }

        let x = area.x + 1 + self.input().width() as u16;
        let right = area.x.saturating_add(area.width).saturating_sub(1);
        if x >= right || area.height < 3 {
            return;
        }

        let suffix_area = Rect {
            x,
            y: area.y + 1,
            width: right - x,
            height: 1,
        };
        let completion = Paragraph::new(Span::styled(
            suffix.as_str(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
        frame.render_widget(completion, suffix_area);
    }

    fn render_page(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![Line::from(Span::styled(
            " Start typing to search history, bookmarks, tabs and more.",
            Style::default().fg(Color::DarkGray),
        ))];

        if let Some(warning) = &self.config_warning {
            lines.push(Line::from(Span::styled(
                format!(" Config: {}", warning),
                Style::default().fg(Color::Yellow),
            )));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let status = Paragraph::new(KEY_HINTS).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(status, area);
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
