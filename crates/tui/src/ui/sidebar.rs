//! Navigation sidebar: one radio option per page.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem},
};

use crate::app::{App, Tab};

pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = Tab::all()
        .iter()
        .map(|tab| {
            let (marker, style) = if *tab == app.current_tab {
                (
                    "(•)",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("( )", Style::default().fg(Color::White))
            };
            ListItem::new(format!("{marker} {} {}", tab.index() + 1, tab.name())).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Navigation "),
    );

    frame.render_widget(list, area);
}
