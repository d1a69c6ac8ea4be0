use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use prompt_queue_core::{Clock, KeyValueStore};

use crate::ui::{App, InputMode};

/// Dispatch a key press to the handler for the current input mode.
/// Ctrl+C is handled by the runtime before this is called.
pub(crate) fn handle_key<S: KeyValueStore, C: Clock>(app: &mut App<S, C>, key: KeyEvent) {
    match app.input_mode {
        InputMode::Editing => handle_editing_key(app, key),
        InputMode::Normal => handle_normal_key(app, key),
    }
}

fn handle_editing_key<S: KeyValueStore, C: Clock>(app: &mut App<S, C>, key: KeyEvent) {
    let has_ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let has_alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Enter => app.submit_input(),
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            if app.selected_item().is_none() {
                app.select_last();
            }
        }
        // Readline-style bindings
        KeyCode::Char('a') if has_ctrl => app.editor.move_to_line_start(),
        KeyCode::Char('e') if has_ctrl => app.editor.move_to_line_end(),
        KeyCode::Char('k') if has_ctrl => app.editor.kill_to_line_end(),
        KeyCode::Char('u') if has_ctrl => app.editor.kill_to_line_start(),
        KeyCode::Char('w') if has_ctrl => app.editor.delete_word_backward(),
        KeyCode::Backspace if has_alt => app.editor.delete_word_backward(),
        KeyCode::Char(c) if !has_ctrl => app.editor.insert_char(c),
        KeyCode::Backspace => app.editor.delete_char_before(),
        KeyCode::Delete => app.editor.delete_char_at(),
        KeyCode::Left => app.editor.move_left(),
        KeyCode::Right => app.editor.move_right(),
        KeyCode::Home => app.editor.move_to_line_start(),
        KeyCode::End => app.editor.move_to_line_end(),
        _ => {}
    }
}

fn handle_normal_key<S: KeyValueStore, C: Clock>(app: &mut App<S, C>, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return;
    }

    match key.code {
        KeyCode::Char('i') | KeyCode::Char('a') => app.input_mode = InputMode::Editing,
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),
        KeyCode::Char('g') | KeyCode::Home => app.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.select_last(),
        KeyCode::Char('y') | KeyCode::Char('c') => app.copy_selected(),
        KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Enter => app.complete_selected(),
        KeyCode::Char('u') => app.cancel_selected(),
        KeyCode::Char('s') => app.toggle_animated_deletion(),
        KeyCode::Esc => app.dismiss_notification(),
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prompt_queue_core::clipboard::MemoryClipboard;
    use prompt_queue_core::{CoreConfig, LifecycleController, ManualClock, MemoryStore};
    use std::time::Duration;

    fn app() -> (App<MemoryStore, ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let controller = LifecycleController::initialize(
            MemoryStore::new(),
            clock.clone(),
            CoreConfig::new("/unused"),
        );
        (App::new(controller, Box::new(MemoryClipboard::new())), clock)
    }

    fn press(app: &mut App<MemoryStore, ManualClock>, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App<MemoryStore, ManualClock>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_and_enter_adds_item() {
        let (mut app, _clock) = app();
        type_text(&mut app, "Review PR");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.items().len(), 1);
        assert_eq!(app.items()[0].text(), "Review PR");
        assert_eq!(app.input_mode, InputMode::Editing);
    }

    #[test]
    fn test_action_letters_are_text_while_editing() {
        let (mut app, _clock) = app();
        type_text(&mut app, "dq");
        assert_eq!(app.editor.text, "dq");
        assert!(app.running);
    }

    #[test]
    fn test_ctrl_u_clears_to_line_start() {
        let (mut app, _clock) = app();
        type_text(&mut app, "hello");
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert!(app.editor.is_empty());
    }

    #[test]
    fn test_normal_mode_complete_runs_countdown() {
        let (mut app, clock) = app();
        type_text(&mut app, "a");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Normal);

        press(&mut app, KeyCode::Char('d'));
        assert!(app.selected_item().unwrap().is_pending_deletion());

        for _ in 0..3 {
            clock.advance(Duration::from_secs(1));
            app.tick();
        }
        assert!(app.items().is_empty());
    }

    #[test]
    fn test_normal_mode_cancel() {
        let (mut app, _clock) = app();
        type_text(&mut app, "a");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);

        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Char('u'));

        assert!(app.selected_item().unwrap().is_active());
    }

    #[test]
    fn test_normal_mode_copy() {
        let (mut app, _clock) = app();
        type_text(&mut app, "a");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);

        press(&mut app, KeyCode::Char('y'));

        let id = app.items()[0].id.clone();
        assert!(app.snapshot().is_copied(&id));
    }

    #[test]
    fn test_toggle_and_quit() {
        let (mut app, _clock) = app();
        press(&mut app, KeyCode::Esc);

        press(&mut app, KeyCode::Char('s'));
        assert!(!app.snapshot().settings.animated_deletion_enabled);

        press(&mut app, KeyCode::Char('i'));
        assert_eq!(app.input_mode, InputMode::Editing);

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }
}
