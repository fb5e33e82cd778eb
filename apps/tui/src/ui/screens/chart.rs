use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::chart::ChartGeometry;
use crate::ui::widgets::{legend, pie, tooltip};

/// Frame layout of the chart screen. The event loop computes the same
/// layout before drawing so pointer hit-testing and painting agree.
#[derive(Debug, Clone, Copy)]
pub struct ChartLayout {
    pub title: Rect,
    pub chart: Rect,
    pub legend: Rect,
    pub status: Rect,
    pub hints: Rect,
    pub geometry: Option<ChartGeometry>,
}

impl ChartLayout {
    pub fn new(area: Rect) -> Self {
        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title area
                Constraint::Min(5),    // Chart and legend
                Constraint::Length(3), // Status area
                Constraint::Length(1), // Shortcuts hint
            ])
            .split(area.inner(Margin::new(2, 1)));

        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(26)])
            .split(main_layout[1]);

        let chart = content[0];
        let geometry = ChartGeometry::for_area(chart.inner(Margin::new(1, 1)));

        Self {
            title: main_layout[0],
            chart,
            legend: content[1],
            status: main_layout[2],
            hints: main_layout[3],
            geometry,
        }
    }
}

pub fn render_chart(app: &App, f: &mut Frame<'_>) {
    let layout = ChartLayout::new(f.area());

    render_title(app, f, layout.title);
    pie::render_pie(app, f, layout.chart);
    legend::render_legend(app, f, layout.legend);
    render_status(app, f, layout.status);
    render_hints(f, layout.hints);

    // Drawn last so it floats above the chart.
    tooltip::render_tooltip(app, f);
}

fn render_title(app: &App, f: &mut Frame<'_>, area: Rect) {
    let title_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = title_block.inner(area);
    f.render_widget(title_block, area);

    // Blinking dot standing in for the feed heartbeat.
    let live = if (app.animation_counter * 2.0).sin() > 0.0 {
        Span::styled("● live", Style::default().fg(Color::Green))
    } else {
        Span::styled("● live", Style::default().fg(Color::DarkGray))
    };

    let summary = format!(
        "  {} records · total {:.2}",
        app.store.len(),
        app.store.total_cost()
    );

    let line = TextLine::from(vec![
        Span::styled(
            "Spendwheel ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "expense tracker",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(summary, Style::default().fg(Color::Gray)),
        Span::raw("  "),
        live,
    ]);

    f.render_widget(Paragraph::new(line).alignment(Alignment::Left), inner);
}

fn render_status(app: &App, f: &mut Frame<'_>, area: Rect) {
    let status_block = Block::default()
        .title(" Status ")
        .title_style(Style::default().fg(Color::Yellow))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let status_text = if app.status_message.is_empty() {
        Text::from("")
    } else {
        let style = if app.status_message.starts_with("Error") {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        };
        Text::from(Span::styled(&app.status_message, style))
    };

    let paragraph = Paragraph::new(status_text)
        .block(status_block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_hints(f: &mut Frame<'_>, area: Rect) {
    let key = |label: &'static str| {
        Span::styled(
            label,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    };
    let hint = |label: &'static str| Span::styled(label, Style::default().fg(Color::Gray));

    let shortcuts = TextLine::from(vec![
        key("←/→"),
        hint(": Select slice | "),
        key("d"),
        hint(": Delete | "),
        key("Esc"),
        hint(": Clear | "),
        key("F1"),
        hint(": Help | "),
        key("q"),
        hint(": Quit"),
    ]);

    f.render_widget(Paragraph::new(shortcuts).alignment(Alignment::Center), area);
}
