//! Panel geometry: height limit and row hit testing

use ratatui::layout::Rect;

/// Rows kept free below the panel
pub const PANEL_MARGIN: u16 = 2;
/// Height of the menu bar when it is shown
pub const MENUBAR_HEIGHT: u16 = 1;
/// Top and bottom border rows
pub const BORDER_HEIGHT: u16 = 2;

/// Tallest the panel may grow within the host viewport
pub fn max_height(viewport_height: u16, navbar_height: u16, menubar_visible: bool) -> u16 {
    let menu_height = if menubar_visible { MENUBAR_HEIGHT } else { 0 };
    viewport_height
        .saturating_sub(navbar_height)
        .saturating_sub(PANEL_MARGIN)
        .saturating_sub(menu_height)
}

/// Where the last render placed each row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelLayout {
    pub area: Rect,
    pub inner: Rect,
    pub scroll_offset: u16,
    /// Global index per rendered row, `None` for section headers
    pub rows: Vec<Option<usize>>,
    /// Key per rendered row, parallel to `rows`
    pub keys: Vec<String>,
}

impl PanelLayout {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.area.x
            && column < self.area.x.saturating_add(self.area.width)
            && row >= self.area.y
            && row < self.area.y.saturating_add(self.area.height)
    }

    /// Global index of the item under a screen position
    pub fn item_at(&self, column: u16, row: u16) -> Option<usize> {
        let inner = self.inner;
        if column < inner.x
            || column >= inner.x.saturating_add(inner.width)
            || row < inner.y
            || row >= inner.y.saturating_add(inner.height)
        {
            return None;
        }

        let line = (row - inner.y) as usize + self.scroll_offset as usize;
        self.rows.get(line).copied().flatten()
    }

    /// Key of a mounted item
    pub fn key_of(&self, global_index: usize) -> Option<&str> {
        self.row_of(global_index)
            .and_then(|row| self.keys.get(row))
            .map(String::as_str)
    }

    /// Row holding a global index, if that item is mounted
    pub fn row_of(&self, global_index: usize) -> Option<usize> {
        self.rows.iter().position(|row| *row == Some(global_index))
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod layout_tests;
