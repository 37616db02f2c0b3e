//! Footer bar widget with keyboard shortcuts.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Tab};

/// Draw the footer bar with context-sensitive help.
pub fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let tab_help = match app.current_tab {
        Tab::Overview => "[←→] Scroll columns",
        Tab::Visualizations => "[↑↓] Choose chart",
        Tab::Prediction => "[↑↓] Field  [←→] Adjust  [Enter/p] Predict",
    };
    let help_text = format!("{tab_help}  |  [1-3] Page  [Tab] Next page  [q] Quit");

    // Add status message if present
    let display_text = if let Some((status, _)) = &app.status_message {
        format!("{} | {}", status, help_text)
    } else {
        help_text
    };

    let footer = Paragraph::new(display_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));

    frame.render_widget(footer, area);
}
