use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::ui::widgets::popup::{anchored_rect, ClearWidget};

const TOOLTIP_HEIGHT: u16 = 5;

/// Card next to the pointer with the hovered record's name, cost and the
/// delete hint. Keyboard hovers anchor at the slice itself.
pub fn render_tooltip(app: &App, f: &mut Frame<'_>) {
    let Some(arc) = app.hovered_arc() else {
        return;
    };
    if !arc.phase.is_present() {
        return;
    }

    let anchor = app.pointer.or_else(|| {
        app.geometry.map(|geometry| {
            let mid_radius = (geometry.inner_radius + geometry.outer_radius) / 2.0;
            geometry.cell_at(arc.interval.midpoint(), mid_radius)
        })
    });
    let Some(anchor) = anchor else {
        return;
    };

    let cost_line = format!("{:.2}", arc.cost);
    let width = (arc.name.len().max(cost_line.len()).max(20) as u16).saturating_add(4);
    let area = anchored_rect(anchor, width, TOOLTIP_HEIGHT, f.area());

    let swatch = app.palette.peek(&arc.name).unwrap_or(Color::Gray);
    let lines = vec![
        TextLine::from(Span::styled(
            arc.name.clone(),
            Style::default().fg(swatch).add_modifier(Modifier::BOLD),
        )),
        TextLine::from(Span::styled(
            cost_line,
            Style::default().fg(Color::White),
        )),
        TextLine::from(Span::styled(
            "click slice to delete",
            Style::default().fg(Color::Gray),
        )),
    ];

    f.render_widget(ClearWidget, area);
    let paragraph = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(paragraph, area);
}
