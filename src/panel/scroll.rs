/// Vertical scroll position of the panel list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub offset: u16,
    pub max_offset: u16,
    pub viewport_height: u16,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_bounds(&mut self, content_lines: usize, viewport_height: u16) {
        self.viewport_height = viewport_height;

        // Clamp to u16::MAX for ratatui compatibility
        self.max_offset = content_lines
            .saturating_sub(viewport_height as usize)
            .min(u16::MAX as usize) as u16;

        self.offset = self.offset.min(self.max_offset);
    }

    /// Scroll the least amount that brings `line` into the viewport
    pub fn ensure_visible(&mut self, line: usize) {
        if self.viewport_height == 0 {
            return;
        }

        let line = line.min(u16::MAX as usize) as u16;
        if line < self.offset {
            self.offset = line;
        } else if line >= self.offset.saturating_add(self.viewport_height) {
            self.offset = line
                .saturating_add(1)
                .saturating_sub(self.viewport_height)
                .min(self.max_offset);
        }
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }
}
