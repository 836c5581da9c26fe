//! Layout helpers shared by the TUI views.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// A rectangle of `percent_x` by `percent_y` of `r`, centred within it.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Terminal column for a text cursor inside a bordered input box, kept off the right border.
pub fn cursor_column(area: Rect, cursor: usize) -> u16 {
    let offset = u16::try_from(cursor).unwrap_or(u16::MAX);
    let last = area.x.saturating_add(area.width.saturating_sub(2));
    area.x.saturating_add(1).saturating_add(offset).min(last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_stays_inside() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(50, 50, outer);
        assert_eq!(inner.width, 50);
        assert_eq!(inner.height, 20);
        assert_eq!(inner.x, 25);
        assert_eq!(inner.y, 10);
    }

    #[test]
    fn test_cursor_column_clamps_to_box() {
        let area = Rect::new(10, 5, 20, 3);
        assert_eq!(cursor_column(area, 0), 11);
        assert_eq!(cursor_column(area, 4), 15);
        assert_eq!(cursor_column(area, 18), 28);
        assert_eq!(cursor_column(area, 500), 28);
    }
}
