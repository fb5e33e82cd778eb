use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_chart_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::F(1) | KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Esc => {
            app.clear_hover();
        }
        KeyCode::Left => {
            app.hover_step(-1);
        }
        KeyCode::Right | KeyCode::Tab => {
            app.hover_step(1);
        }
        KeyCode::Char('d') | KeyCode::Delete | KeyCode::Enter => {
            app.request_delete_hovered();
        }
        _ => {}
    }
}
