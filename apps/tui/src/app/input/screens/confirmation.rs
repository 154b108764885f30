use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_confirmation_input(app: &mut App, key: KeyCode) {
    match key {
        // Back to a fresh entry form; the old controller is discarded.
        KeyCode::Esc | KeyCode::Enter => app.reset_entry(),
        KeyCode::Char('q' | 'Q') => app.running = false,
        _ => {}
    }
}
