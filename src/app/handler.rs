//! Input handling — maps key/mouse events to state mutations.
//!
//! Handlers only ever move the *real* scroll offset.  The rendered position
//! is owned by the frame loop's damper update and is never written here.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

use super::state::AppState;

/// Process a key event.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Key releases arrive on some terminals; only act on presses.
    if key.kind == KeyEventKind::Release {
        return;
    }

    // Ctrl+c always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    let page = f64::from(state.viewport_height);
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.should_quit = true,

        KeyCode::Down | KeyCode::Char('j') => state.scroll_by(1.0),
        KeyCode::Up | KeyCode::Char('k') => state.scroll_by(-1.0),

        KeyCode::PageDown | KeyCode::Char(' ') => state.scroll_by(page),
        KeyCode::PageUp => state.scroll_by(-page),

        KeyCode::Home | KeyCode::Char('g') => state.scroll_to(0.0),
        KeyCode::End | KeyCode::Char('G') => {
            let max = state.max_scroll();
            state.scroll_to(max);
        }

        _ => {}
    }
}

/// Process a mouse event.  Only the wheel matters here.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollDown => state.scroll_by(state.config.wheel_step),
        MouseEventKind::ScrollUp => state.scroll_by(-state.config.wheel_step),
        _ => {}
    }
}
