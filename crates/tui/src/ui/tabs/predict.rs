//! Sales Prediction page.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Row, Table},
};

use crate::app::{App, FormField};
use crate::services::Artifacts;

/// Characters in a slider track.
const TRACK_WIDTH: usize = 20;

/// Draw the Sales Prediction page.
pub fn draw_prediction_tab(frame: &mut Frame, area: Rect, app: &App, artifacts: &Artifacts) {
    let model = &artifacts.model;
    let title = match model.description() {
        Some(description) => format!(" Predicting Sales with {} ({description}) ", model.name()),
        None => format!(" Predicting Sales with {} ", model.name()),
    };
    let outer = Block::default().borders(Borders::ALL).title(title);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(15),   // Inputs + encoded row
            Constraint::Length(3), // Result
        ])
        .split(inner);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[0]);

    draw_inputs(frame, columns[0], app, artifacts);
    draw_encoded_row(frame, columns[1], app, artifacts);
    draw_result(frame, chunks[1], app);
}

fn draw_inputs(frame: &mut Frame, area: Rect, app: &App, artifacts: &Artifacts) {
    let form = &app.form;
    let focused = form.focused();
    let mut lines = Vec::with_capacity(form.field_count());

    for (i, (field, slider)) in form.sliders.iter().enumerate() {
        let filled = (slider.ratio() * TRACK_WIDTH as f64).round() as usize;
        let track = format!(
            "{}{}",
            "█".repeat(filled),
            "░".repeat(TRACK_WIDTH - filled.min(TRACK_WIDTH))
        );
        let spec = slider.spec();
        let text = format!(
            "{:<14} {} {:>6}  [{} - {}]",
            field.label(),
            track,
            slider.display(),
            spec.format(spec.min),
            spec.format(spec.max)
        );
        lines.push(field_line(text, focused == FormField::Slider(i)));
    }

    for (i, dropdown) in form.dropdowns.iter().enumerate() {
        let options = artifacts.encodings.values(dropdown.feature).len();
        let text = format!(
            "{:<14} < {} >  ({}/{})",
            dropdown.feature.key(),
            dropdown.value(&artifacts.encodings),
            (dropdown.selected + 1).min(options),
            options
        );
        lines.push(field_line(text, focused == FormField::Dropdown(i)));
    }

    let inputs = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Inputs "));
    frame.render_widget(inputs, area);
}

fn field_line(text: String, focused: bool) -> Line<'static> {
    if focused {
        Line::from(Span::styled(
            format!("> {text}"),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(format!("  {text}"))
    }
}

fn draw_encoded_row(frame: &mut Frame, area: Rect, app: &App, artifacts: &Artifacts) {
    let features = app.form.feature_vector(&artifacts.encodings);
    let rows: Vec<Row> = features
        .named()
        .map(|(name, value)| {
            let style = if value < 0.0 && name.ends_with("_encoded") {
                Style::default().fg(Color::Red)
            } else {
                Style::default()
            };
            Row::new(vec![name.to_string(), value.to_string()]).style(style)
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(22), Constraint::Min(8)])
        .header(
            Row::new(vec!["Feature", "Value"]).style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(Block::default().borders(Borders::ALL).title(" Model Input "));

    frame.render_widget(table, area);
}

fn draw_result(frame: &mut Frame, area: Rect, app: &App) {
    let (text, style) = match &app.form.outcome {
        Some(outcome) if outcome.is_success() => (
            outcome.message(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Some(outcome) => (outcome.message(), Style::default().fg(Color::Red)),
        None => (
            "Press [Enter] or [p] to predict".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    };

    let result = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Result "));

    frame.render_widget(result, area);
}
