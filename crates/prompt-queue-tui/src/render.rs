use prompt_queue_core::{Clock, KeyValueStore};
use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::ui;
use crate::ui::components::render_statusbar;
use crate::ui::layout;
use crate::ui::App;

pub(crate) fn render<S: KeyValueStore, C: Clock>(f: &mut Frame, app: &App<S, C>) {
    let bg_block = Block::default().style(Style::default().bg(ui::theme::BG_APP));
    f.render_widget(bg_block, f.area());

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(layout::STATUSBAR_HEIGHT),
    ])
    .split(f.area());

    ui::views::render_queue(f, app, chunks[1]);

    render_statusbar(
        f,
        chunks[2],
        app.current_notification(),
        app.snapshot().settings.animated_deletion_enabled,
    );
}
