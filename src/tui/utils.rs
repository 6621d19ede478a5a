//! Layout helpers for the terminal user interface.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// A rectangle of `percent_x` by `percent_y` centered inside `r`.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
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
        .split(vertical[1])[1]
}

/// Screen column for a text cursor `cursor` characters past `offset` in `area`.
///
/// The column never reaches the right border, so long input keeps the cursor
/// on the last inner cell.
pub fn cursor_column(area: Rect, offset: u16, cursor: usize) -> u16 {
    let max = area.width.saturating_sub(offset.saturating_add(2));
    area.x + offset + u16::try_from(cursor).unwrap_or(u16::MAX).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 40, outer);
        assert_eq!(inner.width, 60);
        assert_eq!(inner.height, 20);
        assert_eq!(inner.x, 20);
        assert_eq!(inner.y, 15);
    }

    #[test]
    fn test_cursor_column_stays_inside_border() {
        let area = Rect::new(5, 0, 20, 3);
        assert_eq!(cursor_column(area, 1, 0), 6);
        assert_eq!(cursor_column(area, 1, 4), 10);
        // Last inner column is x + width - 2.
        assert_eq!(cursor_column(area, 1, 1000), 23);
        assert_eq!(cursor_column(area, 3, 70_000), 23);
        assert_eq!(cursor_column(area, 1, usize::MAX), 23);
    }
}
