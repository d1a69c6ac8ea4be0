use prompt_queue_core::{Clock, Item, KeyValueStore, Snapshot};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::components::statusbar::truncate_with_ellipsis;
use crate::ui::layout;
use crate::ui::{theme, App, InputMode};

const TITLE: &str = "Prompt Queue";
const SUBTITLE: &str = "Add your prompts and watch them disappear";
const PLACEHOLDER: &str = "Add a new prompt…";
const EMPTY_MESSAGE: &str = "No prompts yet. Add one to get started!";
const COPIED_LABEL: &str = "Copied!";
const QUIT_WARNING: &str = "Press Ctrl+C again to quit";
const SELECTED_MARKER: &str = "▸ ";
const UNSELECTED_MARKER: &str = "  ";

/// Render the queue card: header, input, list and footer
pub fn render_queue<S: KeyValueStore, C: Clock>(f: &mut Frame, app: &App<S, C>, area: Rect) {
    let card_area = layout::centered_column(area, layout::MAX_CONTENT_WIDTH);
    f.render_widget(
        Block::default().style(Style::default().bg(theme::BG_CARD)),
        card_area,
    );
    let content = layout::with_content_padding(card_area);

    let chunks = Layout::vertical([
        Constraint::Length(layout::HEADER_HEIGHT),
        Constraint::Length(layout::INPUT_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(layout::FOOTER_HEIGHT),
    ])
    .split(content);

    let snapshot = app.snapshot();
    render_header(f, chunks[0]);
    render_input(f, app, chunks[1]);
    render_list(f, app, &snapshot, chunks[2]);
    render_footer(f, app.input_mode, app.pending_quit, &snapshot, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(TITLE, theme::title())).centered(),
        Line::from(Span::styled(SUBTITLE, theme::text_muted())).centered(),
    ]);
    f.render_widget(header, area);
}

fn render_input<S: KeyValueStore, C: Clock>(f: &mut Frame, app: &App<S, C>, area: Rect) {
    let editing = app.input_mode == InputMode::Editing;
    let border_style = if editing {
        theme::border_focused()
    } else {
        theme::border_inactive()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(Style::default().bg(theme::BG_INPUT));
    let inner = block.inner(area);

    let paragraph = if app.editor.is_empty() {
        Paragraph::new(Span::styled(PLACEHOLDER, theme::input_placeholder()))
    } else {
        // Keep the cursor visible on long input by scrolling horizontally
        let cursor_col = app.editor.cursor_column() as u16;
        let scroll = cursor_col.saturating_sub(inner.width.saturating_sub(1));
        Paragraph::new(Span::styled(app.editor.text.as_str(), theme::input_active()))
            .scroll((0, scroll))
    };
    f.render_widget(paragraph.block(block), area);

    if editing {
        let cursor_col = app.editor.cursor_column() as u16;
        let visible_col = cursor_col.min(inner.width.saturating_sub(1));
        f.set_cursor_position((inner.x + visible_col, inner.y));
    }
}

fn render_list<S: KeyValueStore, C: Clock>(
    f: &mut Frame,
    app: &App<S, C>,
    snapshot: &Snapshot,
    area: Rect,
) {
    if snapshot.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(EMPTY_MESSAGE, theme::text_muted())).centered(),
        ]);
        f.render_widget(empty, area);
        return;
    }

    let visible = area.height as usize;
    let offset = layout::scroll_offset(app.selected_index(), visible);
    let show_selection = app.input_mode == InputMode::Normal;

    let lines: Vec<Line> = snapshot
        .items
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(index, item)| {
            let selected = show_selection && index == app.selected_index();
            row_line(item, snapshot, selected, app.pulse_on(), area.width as usize)
        })
        .collect();

    f.render_widget(Paragraph::new(lines), area);
}

/// Right-hand label of a row: countdown, "Copied!", or nothing
fn status_label(item: &Item, snapshot: &Snapshot, pulse_on: bool) -> Option<(String, Style)> {
    if let Some(label) = item.countdown_label() {
        return Some((label, theme::countdown_label(pulse_on)));
    }
    if snapshot.is_copied(&item.id) {
        return Some((COPIED_LABEL.to_string(), theme::copied_label()));
    }
    None
}

fn row_style(item: &Item, snapshot: &Snapshot, selected: bool) -> Style {
    let bg = if item.is_pending_deletion() {
        theme::BG_PENDING
    } else if selected {
        theme::BG_SELECTED
    } else if snapshot.is_newly_added(&item.id) {
        theme::BG_NEW_ITEM
    } else {
        theme::BG_ROW
    };
    Style::default().bg(bg)
}

/// One list row, padded to `width` so the background fills the line
pub(crate) fn row_line(
    item: &Item,
    snapshot: &Snapshot,
    selected: bool,
    pulse_on: bool,
    width: usize,
) -> Line<'static> {
    let marker = if selected { SELECTED_MARKER } else { UNSELECTED_MARKER };
    let label = status_label(item, snapshot, pulse_on);
    let label_width = label.as_ref().map(|(text, _)| text.width() + 1).unwrap_or(0);

    let text_width = width.saturating_sub(marker.width() + label_width);
    let text = truncate_with_ellipsis(item.text(), text_width);

    let text_style = if item.is_pending_deletion() {
        theme::pending_text()
    } else if snapshot.is_newly_added(&item.id) {
        Style::default()
            .fg(theme::ACCENT_WARNING)
            .add_modifier(Modifier::BOLD)
    } else {
        theme::text_primary()
    };

    let gap = width.saturating_sub(marker.width() + text.width() + label_width);
    let mut spans = vec![
        Span::styled(marker, Style::default().fg(theme::ACCENT_PRIMARY)),
        Span::styled(text, text_style),
        Span::raw(" ".repeat(gap)),
    ];
    if let Some((label, style)) = label {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(label, style));
    }

    Line::from(spans).style(row_style(item, snapshot, selected))
}

fn render_footer(
    f: &mut Frame,
    mode: InputMode,
    pending_quit: bool,
    snapshot: &Snapshot,
    area: Rect,
) {
    let count = Line::from(Span::styled(snapshot.count_label(), theme::text_muted())).centered();
    if pending_quit {
        let warning = Line::from(Span::styled(
            QUIT_WARNING,
            Style::default().fg(theme::ACCENT_ERROR),
        ))
        .centered();
        f.render_widget(Paragraph::new(vec![count, warning]), area);
        return;
    }

    let hints: &[(&str, &str)] = match mode {
        InputMode::Editing => &[("enter", "add"), ("esc", "navigate")],
        InputMode::Normal => &[
            ("y", "copy"),
            ("d", "complete"),
            ("u", "cancel"),
            ("s", "deletion mode"),
            ("i", "edit"),
            ("q", "quit"),
        ],
    };

    let mut hint_spans = Vec::with_capacity(hints.len() * 3);
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            hint_spans.push(Span::styled(" · ", theme::text_dim()));
        }
        hint_spans.push(Span::styled(*key, theme::action_hint()));
        hint_spans.push(Span::styled(format!(" {}", action), theme::text_dim()));
    }

    let footer = Paragraph::new(vec![count, Line::from(hint_spans).centered()]);
    f.render_widget(footer, area);
}
