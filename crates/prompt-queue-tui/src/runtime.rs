use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use prompt_queue_core::{Clock, KeyValueStore};
use std::time::Duration;

use crate::input::handle_key;
use crate::render::render;
use crate::ui::{App, InputMode, Tui};

/// Frame interval; also drives countdown and hint deadlines
const TICK_INTERVAL: Duration = Duration::from_millis(50);

pub(crate) async fn run_app<S: KeyValueStore, C: Clock>(
    terminal: &mut Tui,
    app: &mut App<S, C>,
) -> Result<()> {
    let mut event_stream = EventStream::new();
    let mut tick_interval = tokio::time::interval(TICK_INTERVAL);

    while app.running {
        terminal.draw(|f| render(f, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => handle_terminal_event(app, event),
                    Some(Err(e)) => {
                        tracing::error!("terminal event stream error: {}", e);
                        app.quit();
                    }
                    None => app.quit(),
                }
            }
            _ = tick_interval.tick() => {
                app.tick();
            }
        }
    }

    Ok(())
}

fn handle_terminal_event<S: KeyValueStore, C: Clock>(app: &mut App<S, C>, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_press(app, key),
        Event::Paste(text) => {
            app.pending_quit = false;
            if app.input_mode == InputMode::Editing {
                app.editor.handle_paste(&text);
            }
        }
        _ => {}
    }
}

fn handle_key_press<S: KeyValueStore, C: Clock>(app: &mut App<S, C>, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        if app.pending_quit {
            app.quit();
        } else {
            // First Ctrl+C arms quit; the footer shows a warning
            app.pending_quit = true;
        }
        return;
    }

    app.pending_quit = false;
    handle_key(app, key);
}
