use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::app::{App, PromptKind};

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Release/repeat events would double-fire actions on some terminals
    if key.kind != KeyEventKind::Press {
        return;
    }

    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    // If a prompt is open, it captures all input
    if app.prompt.is_some() {
        handle_prompt_input(app, key);
        return;
    }

    match key.code {
        // Quit
        KeyCode::Char('q') => app.quit(),

        // Operator actions
        KeyCode::Char('g') => app.open_prompt(PromptKind::Generate),
        KeyCode::Char('l') => app.open_prompt(PromptKind::LinearTarget),
        KeyCode::Char('s') => app.start_bubble(),
        KeyCode::Char('b') => app.open_prompt(PromptKind::BinaryTarget),

        // Help
        KeyCode::Char('?') => app.toggle_help(),

        _ => {}
    }
}

/// Handle key input while a prompt is open
fn handle_prompt_input(app: &mut App, key: KeyEvent) {
    match key.code {
        // Submit
        KeyCode::Enter => app.submit_prompt(),

        // Cancel without acting
        KeyCode::Esc => app.cancel_prompt(),

        // Backspace
        KeyCode::Backspace => app.prompt_pop(),

        // Numeric input only; the parser reports anything malformed
        KeyCode::Char(c) if c.is_ascii_digit() || c == ' ' => app.prompt_push(c),

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ArrayState;
    use crate::ui::Theme;

    fn app_with(values: Vec<u32>) -> App {
        App::new(ArrayState::from_values(values), Theme::dark())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_s_starts_bubble_sort() {
        let mut app = app_with(vec![3, 1, 2]);
        handle_key_event(&mut app, press(KeyCode::Char('s')));
        assert_eq!(app.run_label(), Some("bubble sort"));
    }

    #[test]
    fn test_prompt_collects_digits_and_submits() {
        let mut app = app_with(vec![1, 2, 3]);
        handle_key_event(&mut app, press(KeyCode::Char('l')));
        assert!(app.prompt.is_some());

        handle_key_event(&mut app, press(KeyCode::Char('2')));
        handle_key_event(&mut app, press(KeyCode::Char('x')));
        assert_eq!(app.prompt.as_ref().unwrap().buffer, "2");

        handle_key_event(&mut app, press(KeyCode::Enter));
        assert!(app.prompt.is_none());
        assert_eq!(app.run_label(), Some("linear search"));
    }

    #[test]
    fn test_escape_cancels_prompt() {
        let mut app = app_with(vec![1, 2, 3]);
        handle_key_event(&mut app, press(KeyCode::Char('b')));
        handle_key_event(&mut app, press(KeyCode::Char('9')));
        handle_key_event(&mut app, press(KeyCode::Esc));

        assert!(app.prompt.is_none());
        assert!(!app.busy());
    }

    #[test]
    fn test_any_key_closes_help() {
        let mut app = app_with(vec![1, 2, 3]);
        handle_key_event(&mut app, press(KeyCode::Char('?')));
        assert!(app.show_help);

        handle_key_event(&mut app, press(KeyCode::Char('s')));
        assert!(!app.show_help);
        // The keystroke only closed the overlay, it did not start a run.
        assert!(!app.busy());
    }
}
