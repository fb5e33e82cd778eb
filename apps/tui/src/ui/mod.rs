// UI module: all rendering, dispatched per screen.

pub mod screens;
pub mod widgets;

use crate::app::App;
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    if app.show_help {
        screens::help::render_help(f, f.area());
    } else {
        screens::chart::render_chart(app, f);
    }
}
