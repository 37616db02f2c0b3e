//! Full-screen error shown when startup artifacts cannot be loaded.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn draw_startup_error(frame: &mut Frame, area: Rect, error: &str) {
    let text = vec![
        Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "The dashboard cannot start. Press [q] to exit.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let panel = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(" Startup failed "),
        );

    frame.render_widget(panel, area);
}
