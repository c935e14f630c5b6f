//! Event handling for the TUI.

use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, InputMode};

/// Handle keyboard events.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Global shortcuts (work in all modes)
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('q') if app.input_mode == InputMode::Normal => {
            app.should_quit = true;
            return;
        }
        _ => {}
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::FileDialog => handle_file_dialog_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('d') => {
            app.input_mode = InputMode::FileDialog;
            app.input_buffer.clear();
            app.set_status("Enter CSV file path to load...");
        }
        KeyCode::Char('c' | 'C') if !app.has_data() => {
            app.set_status("No data loaded. Press 'd' to load a CSV file.");
        }
        KeyCode::Char('c') => app.next_country(),
        KeyCode::Char('C') => app.previous_country(),
        KeyCode::Char('m') => app.next_metric(),
        KeyCode::Up => app.increase_horizon(),
        KeyCode::Down => app.decrease_horizon(),
        _ => {}
    }
}

fn handle_file_dialog_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.set_status("File loading cancelled.");
        }
        KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
            let path = PathBuf::from(app.input_buffer.trim());
            app.input_buffer.clear();
            if !path.as_os_str().is_empty() {
                app.load_path(&path);
            }
        }
        KeyCode::Backspace => {
            app.input_buffer.pop();
        }
        KeyCode::Char(ch) => app.input_buffer.push(ch),
        _ => {}
    }
}

/// Poll for events with a timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use electrify_facade::{Dashboard, DashboardConfig};

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn app() -> App {
        App::new(Dashboard::new(DashboardConfig::default()).unwrap())
    }

    #[test]
    fn test_q_quits_only_in_normal_mode() {
        let mut app = app();
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.input_mode, InputMode::FileDialog);

        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.input_buffer, "q");

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_prompt() {
        let mut app = app();
        press(&mut app, KeyCode::Char('d'));
        handle_key_event(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_prompt_editing() {
        let mut app = app();
        press(&mut app, KeyCode::Char('d'));
        for ch in "ab".chars() {
            press(&mut app, KeyCode::Char(ch));
        }
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "a");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(app.input_buffer.is_empty());
        assert!(!app.has_data());
    }

    #[test]
    fn test_horizon_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Up);
        assert_eq!(app.horizon, 6);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.horizon, 4);
    }
}
