//! Project Overview page.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Row, Table, Wrap},
};

use crate::app::{App, PREVIEW_ROWS};
use crate::services::Artifacts;

const DESCRIPTION: &str = "With growing demands and cut-throat competition in the market, \
a survey was taken and analysis was done to understand regions and cities which are costing \
the organization. This app explores a sales dataset, with comprehensive visuals to aid \
decision making and a sales predicting model.";

/// Widest a preview column is allowed to grow.
const MAX_COLUMN_WIDTH: usize = 24;

/// Draw the Project Overview page.
pub fn draw_overview_tab(frame: &mut Frame, area: Rect, app: &App, artifacts: &Artifacts) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10),                        // Description
            Constraint::Length(PREVIEW_ROWS as u16 + 4),  // Preview table
            Constraint::Min(0),
        ])
        .split(area);

    draw_description(frame, chunks[0]);
    draw_preview(frame, chunks[1], app, artifacts);
}

fn draw_description(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(DESCRIPTION),
        Line::from(""),
        Line::from("Using a trained regression model, you can:"),
        Line::from("  - View saved visualizations"),
        Line::from("  - Try out the model with your own inputs"),
    ];

    let description = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Project Overview "),
        );

    frame.render_widget(description, area);
}

fn draw_preview(frame: &mut Frame, area: Rect, app: &App, artifacts: &Artifacts) {
    let dataset = &artifacts.dataset;
    let offset = app
        .overview
        .column_offset
        .min(dataset.column_count().saturating_sub(1));
    let columns: Vec<usize> = (offset..dataset.column_count()).collect();
    let preview = dataset.head(PREVIEW_ROWS);

    let widths: Vec<Constraint> = columns
        .iter()
        .map(|&c| {
            let widest = (0..preview.len())
                .map(|r| dataset.cell(r, c).chars().count())
                .chain(std::iter::once(dataset.headers[c].chars().count()))
                .max()
                .unwrap_or(0);
            Constraint::Length(widest.min(MAX_COLUMN_WIDTH) as u16)
        })
        .collect();

    let header = Row::new(columns.iter().map(|&c| dataset.headers[c].clone()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    let rows: Vec<Row> = (0..preview.len())
        .map(|r| Row::new(columns.iter().map(|&c| dataset.cell(r, c).to_string())))
        .collect();

    let title = format!(
        " Here is a preview of the data ({} rows x {} columns, from column {}) ",
        dataset.row_count(),
        dataset.column_count(),
        offset + 1
    );

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(2)
        .block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(table, area);
}
