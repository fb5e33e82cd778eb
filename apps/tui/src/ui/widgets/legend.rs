use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;

/// One row per distinct name currently present, swatch first. Exiting
/// slices have already left the data and get no row.
pub fn render_legend(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Legend")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let hovered_name = app.hovered_arc().map(|arc| arc.name.clone());

    let mut names: Vec<&str> = Vec::new();
    for arc in &app.arcs {
        if arc.phase.is_present() && !names.contains(&arc.name.as_str()) {
            names.push(&arc.name);
        }
    }

    let lines: Vec<TextLine<'_>> = names
        .iter()
        .map(|name| {
            let swatch = app.palette.peek(name).unwrap_or(Color::Gray);
            let name_style = if hovered_name.as_deref() == Some(*name) {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            TextLine::from(vec![
                Span::styled("● ", Style::default().fg(swatch)),
                Span::styled((*name).to_string(), name_style),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(Text::from(lines)).block(block);
    f.render_widget(paragraph, area);
}
