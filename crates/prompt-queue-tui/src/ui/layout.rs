// Centralized layout constants and utilities for consistent UI
// All layout-related values should be defined here for maintainability

use ratatui::layout::Rect;

// =============================================================================
// PADDING CONSTANTS
// =============================================================================

/// Standard horizontal padding inside the card
pub const CONTENT_PADDING_H: u16 = 2;

/// The card never grows wider than this, it is centered instead
pub const MAX_CONTENT_WIDTH: u16 = 72;

// =============================================================================
// CHROME CONSTANTS - Header/footer heights
// =============================================================================

/// Title + subtitle + blank line
pub const HEADER_HEIGHT: u16 = 3;

/// Bordered single-line input box
pub const INPUT_HEIGHT: u16 = 3;

/// Count label + key hints
pub const FOOTER_HEIGHT: u16 = 2;

/// Status bar height (single line at very bottom of app)
pub const STATUSBAR_HEIGHT: u16 = 1;

// =============================================================================
// LAYOUT HELPER FUNCTIONS
// =============================================================================

/// Apply horizontal padding to a Rect (reduces width and shifts x)
#[inline]
pub fn with_horizontal_padding(area: Rect, padding: u16) -> Rect {
    Rect {
        x: area.x + padding,
        y: area.y,
        width: area.width.saturating_sub(padding * 2),
        height: area.height,
    }
}

/// Apply content padding to a Rect (uses CONTENT_PADDING_H)
#[inline]
pub fn with_content_padding(area: Rect) -> Rect {
    with_horizontal_padding(area, CONTENT_PADDING_H)
}

/// Center a column of at most `max_width` inside `area`
pub fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

/// First row index to draw so that `selected` stays inside `visible` rows
pub fn scroll_offset(selected: usize, visible: usize) -> usize {
    if visible == 0 {
        return 0;
    }
    selected.saturating_sub(visible - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_column_narrow_area() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(centered_column(area, 72), area);
    }

    #[test]
    fn test_centered_column_wide_area() {
        let area = Rect::new(0, 0, 100, 10);
        let column = centered_column(area, 72);
        assert_eq!(column.width, 72);
        assert_eq!(column.x, 14);
    }

    #[test]
    fn test_scroll_offset() {
        assert_eq!(scroll_offset(0, 5), 0);
        assert_eq!(scroll_offset(4, 5), 0);
        assert_eq!(scroll_offset(7, 5), 3);
        assert_eq!(scroll_offset(3, 0), 0);
    }
}
