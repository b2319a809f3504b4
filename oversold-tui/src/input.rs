//! Keyboard handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::AppState;

pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Left | KeyCode::Char('h') => app.prev_symbol(),
        KeyCode::Right | KeyCode::Char('l') => app.next_symbol(),
        KeyCode::Home | KeyCode::Char('g') => app.first_symbol(),
        KeyCode::End | KeyCode::Char('G') => app.last_symbol(),
        _ => {}
    }
}
