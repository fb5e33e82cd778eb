use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine, Points};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::chart::palette::HIGHLIGHT;

/// Radial sampling density of the filled wedges.
const FILL_RINGS: u32 = 14;

pub fn render_pie(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Expenses")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.arcs.is_empty() {
        let paragraph = Paragraph::new("No expenses yet")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, inner);
        return;
    }

    let Some(geometry) = app.geometry else {
        return;
    };

    f.render_widget(
        Canvas::default()
            .paint(|ctx| {
                for arc in &app.arcs {
                    if arc.interval.is_empty() {
                        continue;
                    }

                    let hovered = app.hovered.as_deref() == Some(arc.id.as_str());
                    let fill = if hovered {
                        HIGHLIGHT
                    } else {
                        app.palette.peek(&arc.name).unwrap_or(Color::Gray)
                    };

                    // Fill the wedge ring by ring; denser along longer arcs.
                    let span = arc.interval.span();
                    for ring in 0..=FILL_RINGS {
                        let radius = (geometry.outer_radius - geometry.inner_radius)
                            .mul_add(f64::from(ring) / f64::from(FILL_RINGS), geometry.inner_radius);
                        let steps = ((radius * span * 2.2).ceil() as usize).max(3);
                        let coords: Vec<(f64, f64)> = (0..=steps)
                            .map(|step| {
                                let angle = span.mul_add(step as f64 / steps as f64, arc.interval.start);
                                geometry.point_at(angle, radius)
                            })
                            .collect();
                        ctx.draw(&Points {
                            coords: &coords,
                            color: fill,
                        });
                    }

                    // White radial edges separate adjacent slices.
                    for angle in [arc.interval.start, arc.interval.end] {
                        let (x1, y1) = geometry.point_at(angle, geometry.inner_radius);
                        let (x2, y2) = geometry.point_at(angle, geometry.outer_radius);
                        ctx.draw(&CanvasLine {
                            x1,
                            y1,
                            x2,
                            y2,
                            color: Color::White,
                        });
                    }
                }
            })
            .x_bounds(geometry.x_bounds())
            .y_bounds(geometry.y_bounds()),
        geometry.square,
    );
}
