use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Area directly below `anchor`, clipped to `bounds`
pub fn popup_below_anchor(anchor: Rect, width: u16, height: u16, bounds: Rect) -> Rect {
    let popup_y = anchor.y.saturating_add(anchor.height);
    let bottom = bounds.y.saturating_add(bounds.height);

    Rect {
        x: anchor.x,
        y: popup_y,
        width: width.min(anchor.width),
        height: height.min(bottom.saturating_sub(popup_y)),
    }
}

pub fn inset_rect(area: Rect, horizontal_margin: u16, vertical_margin: u16) -> Rect {
    Rect {
        x: area.x + horizontal_margin,
        y: area.y + vertical_margin,
        width: area.width.saturating_sub(horizontal_margin * 2),
        height: area.height.saturating_sub(vertical_margin * 2),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
