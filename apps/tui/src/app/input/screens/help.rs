use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_help_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc | KeyCode::F(1) => {
            app.show_help = false;
        }
        KeyCode::Char('q') => {
            app.running = false;
        }
        _ => {}
    }
}
