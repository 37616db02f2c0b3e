//! Event handling for the TUI.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::app::{App, Tab};

/// Handle keyboard events.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Global shortcuts (work on every screen)
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        _ => {}
    }

    if app.is_halted() {
        if key.code == KeyCode::Esc {
            app.should_quit = true;
        }
        return;
    }

    match key.code {
        // Page navigation
        KeyCode::Tab => app.next_tab(),
        KeyCode::BackTab => app.previous_tab(),
        KeyCode::Char('1') => app.goto_tab(1),
        KeyCode::Char('2') => app.goto_tab(2),
        KeyCode::Char('3') => app.goto_tab(3),

        // Page-specific actions
        _ => match app.current_tab {
            Tab::Overview => handle_overview_keys(app, key),
            Tab::Visualizations => handle_visualization_keys(app, key),
            Tab::Prediction => handle_prediction_keys(app, key),
        },
    }
}

fn handle_overview_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Right | KeyCode::Char('l') => app.scroll_columns_right(),
        KeyCode::Left | KeyCode::Char('h') => app.scroll_columns_left(),
        _ => {}
    }
}

fn handle_visualization_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.select_next_chart(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_chart(),
        _ => {}
    }
}

fn handle_prediction_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('p') | KeyCode::Enter => app.run_prediction(),
        KeyCode::Down | KeyCode::Char('j') => app.focus_next_field(),
        KeyCode::Up | KeyCode::Char('k') => app.focus_previous_field(),
        KeyCode::Right | KeyCode::Char('l') => app.adjust_focused_field(true),
        KeyCode::Left | KeyCode::Char('h') => app.adjust_focused_field(false),
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
