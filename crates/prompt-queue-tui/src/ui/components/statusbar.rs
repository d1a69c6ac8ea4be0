// Global status bar displayed at the very bottom of the app
// Shows the current toast on the left and the deletion mode on the right

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::notifications::{Notification, NotificationLevel};
use crate::ui::theme;

pub(crate) fn deletion_mode_label(animated_deletion_enabled: bool) -> &'static str {
    if animated_deletion_enabled {
        "Animated deletion: on "
    } else {
        "Animated deletion: off "
    }
}

/// Render the status bar. The right column is sized to its label so a long
/// toast is truncated instead of pushing it off screen.
pub fn render_statusbar(
    f: &mut Frame,
    area: Rect,
    current_notification: Option<&Notification>,
    animated_deletion_enabled: bool,
) {
    let mode_label = deletion_mode_label(animated_deletion_enabled);
    let mode_width = (mode_label.width() + 1) as u16;

    let chunks = Layout::horizontal([Constraint::Min(0), Constraint::Length(mode_width)]).split(area);
    let notification_area = chunks[0];
    let mode_area = chunks[1];

    let notification_paragraph = if let Some(notification) = current_notification {
        let color = match notification.level {
            NotificationLevel::Info => theme::ACCENT_INFO,
            NotificationLevel::Warning => theme::ACCENT_WARNING,
            NotificationLevel::Error => theme::ACCENT_ERROR,
        };
        let icon = notification.level.icon();

        // " icon " = icon + 2 spaces
        let available = (notification_area.width as usize).saturating_sub(icon.width() + 2);
        let message = truncate_with_ellipsis(&notification.message, available);

        let spans = vec![
            Span::styled(format!(" {} ", icon), Style::default().fg(color)),
            Span::styled(message, Style::default().fg(color)),
        ];
        Paragraph::new(Line::from(spans)).style(Style::default().bg(theme::BG_STATUSBAR))
    } else {
        Paragraph::new("").style(Style::default().bg(theme::BG_STATUSBAR))
    };
    f.render_widget(notification_paragraph, notification_area);

    let mode_color = if animated_deletion_enabled {
        theme::ACCENT_SUCCESS
    } else {
        theme::TEXT_MUTED
    };
    let padding = (mode_area.width as usize).saturating_sub(mode_label.width());
    let mode_paragraph = Paragraph::new(format!("{}{}", " ".repeat(padding), mode_label))
        .style(Style::default().fg(mode_color).bg(theme::BG_STATUSBAR));
    f.render_widget(mode_paragraph, mode_area);
}

/// Truncate to at most `max_width` display columns, ending with "…" if cut
pub(crate) fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        // Leave one column for the ellipsis
        if width + w > max_width - 1 {
            break;
        }
        result.push(c);
        width += w;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate_with_ellipsis("hello", 10), "hello");
        assert_eq!(truncate_with_ellipsis("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate_with_ellipsis("hello world", 6), "hello…");
        assert_eq!(truncate_with_ellipsis("hello", 0), "");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each CJK char is two columns wide
        assert_eq!(truncate_with_ellipsis("日本語テキスト", 5), "日本…");
    }

    #[test]
    fn test_deletion_mode_label() {
        assert_eq!(deletion_mode_label(true), "Animated deletion: on ");
        assert_eq!(deletion_mode_label(false), "Animated deletion: off ");
    }
}
