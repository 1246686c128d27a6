use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub input: Rect,
    /// Zero-height when the result panel is hidden.
    pub result: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect, result_visible: bool) -> Regions {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));

    let result_constraint = if result_visible {
        Constraint::Percentage(45)
    } else {
        Constraint::Length(0)
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(0),
            result_constraint,
            Constraint::Length(footer_height),
        ])
        .split(area);

    Regions {
        header: rows[0],
        input: rows[1],
        result: rows[2],
        footer: rows[3],
    }
}

/// A `width` x `height` rect centred in `area`, clamped to fit.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
