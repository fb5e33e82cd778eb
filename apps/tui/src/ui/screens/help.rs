use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_help(f: &mut Frame<'_>, area: Rect) {
    let help_block = Block::default()
        .title("== Help & Keyboard Shortcuts ==")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let shortcut = |key: &'static str, what: &'static str| {
        TextLine::from(vec![
            Span::styled(
                format!("  {key}"),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" - {what}"), Style::default()),
        ])
    };

    let help_text = vec![
        TextLine::from(vec![Span::styled(
            "Spendwheel",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )]),
        TextLine::from(""),
        TextLine::from(
            "A live pie chart of the shared expense ledger. Slices grow, shrink and \
             disappear as other processes write to the ledger.",
        ),
        TextLine::from(""),
        TextLine::from(vec![Span::styled(
            "Keyboard Shortcuts:",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        shortcut("F1", "Toggle this help screen"),
        shortcut("←/→", "Move the selection between slices"),
        shortcut("d / Del / Enter", "Ask the ledger to delete the selected expense"),
        shortcut("Esc", "Clear the selection / close help"),
        shortcut("q", "Quit"),
        TextLine::from(""),
        TextLine::from(vec![Span::styled(
            "Mouse:",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        TextLine::from("  Move over a slice to see its name and cost; left-click to delete it."),
        TextLine::from(""),
        TextLine::from(
            "Deletes are requests against the ledger, not local edits: the slice stays \
             until its removal comes back through the change feed.",
        ),
        TextLine::from(""),
        TextLine::from(vec![Span::styled(
            "Press Esc to close this help screen",
            Style::default().fg(Color::Yellow),
        )]),
    ];

    let help_paragraph = Paragraph::new(Text::from(help_text))
        .block(help_block)
        .wrap(Wrap { trim: true });

    f.render_widget(help_paragraph, area);
}
