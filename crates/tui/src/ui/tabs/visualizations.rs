//! Visualizations page: a chart selector and the chosen image.

use data_facade::CHART_CHOICES;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::app::{App, ChartView};
use crate::widgets::HalfBlockImage;

/// Draw the Visualizations page.
pub fn draw_visualizations_tab(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CHART_CHOICES.len() as u16 + 2), // Selector
            Constraint::Min(5),                                 // Chart
        ])
        .split(area);

    draw_selector(frame, chunks[0], app);

    // An unmapped label leaves the chart area blank.
    if let Some(view) = &app.charts.view {
        draw_chart(frame, chunks[1], view);
    }
}

fn draw_selector(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = CHART_CHOICES
        .iter()
        .enumerate()
        .map(|(i, label)| {
            if i == app.charts.selected {
                ListItem::new(format!("> {label}")).style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ListItem::new(format!("  {label}"))
            }
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Choose a chart to display "),
    );

    frame.render_widget(list, area);
}

fn draw_chart(frame: &mut Frame, area: Rect, view: &ChartView) {
    match &view.image {
        Ok(image) => {
            let block = Block::default()
                .borders(Borders::ALL)
                .title(" Exploration with Visuals ");
            let inner = block.inner(area);
            frame.render_widget(block, area);

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(inner);

            frame.render_widget(HalfBlockImage::new(image, &view.scaled), chunks[0]);
            let caption = Paragraph::new(view.label.as_str())
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(caption, chunks[1]);
        }
        Err(error) => {
            let text = vec![
                Line::from(Span::styled(
                    format!("Could not display chart '{}'", view.label),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::from(format!("{}: {error}", view.path.display())),
            ];
            let message = Paragraph::new(text)
                .wrap(Wrap { trim: false })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Red))
                        .title(" Exploration with Visuals "),
                );
            frame.render_widget(message, area);
        }
    }
}
