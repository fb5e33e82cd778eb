pub mod screens;

use crate::app::state::App;
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};

pub fn handle_key(app: &mut App, key: KeyCode) {
    screens::dispatch_key(app, key);
}

/// Pointer handling: movement re-resolves the hovered slice, a left click
/// turns the hover into a delete request.
pub fn handle_mouse(app: &mut App, event: &MouseEvent) {
    if app.show_help {
        return;
    }

    match event.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            app.hover_at(event.column, event.row);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            app.hover_at(event.column, event.row);
            app.request_delete_hovered();
        }
        _ => {}
    }
}
