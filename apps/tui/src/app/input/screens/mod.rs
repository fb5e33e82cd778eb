mod chart;
mod help;

use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn dispatch_key(app: &mut App, key: KeyCode) {
    if app.show_help {
        help::handle_help_input(app, key);
    } else {
        chart::handle_chart_input(app, key);
    }
}
