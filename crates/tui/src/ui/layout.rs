//! Main layout for the TUI.

use ratatui::prelude::*;

use super::footer::draw_footer;
use super::header::draw_header;
use super::sidebar::draw_sidebar;
use super::startup::draw_startup_error;
use super::tabs::{draw_overview_tab, draw_prediction_tab, draw_visualizations_tab};
use crate::app::{App, Startup, Tab};

/// Width of the navigation sidebar.
const SIDEBAR_WIDTH: u16 = 26;

/// Draw the main UI layout.
pub fn draw_ui(frame: &mut Frame, app: &App) {
    let size = frame.area();

    // A failed startup replaces every page.
    let artifacts = match &app.startup {
        Startup::Ready(artifacts) => artifacts,
        Startup::Failed(error) => {
            draw_startup_error(frame, size, error);
            return;
        }
    };

    // Create main layout: header, body, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(10),   // Body
            Constraint::Length(2), // Footer
        ])
        .split(size);

    draw_header(frame, chunks[0], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
        .split(chunks[1]);

    draw_sidebar(frame, body[0], app);

    // Draw content based on current page
    let content_area = body[1];
    match app.current_tab {
        Tab::Overview => draw_overview_tab(frame, content_area, app, artifacts),
        Tab::Visualizations => draw_visualizations_tab(frame, content_area, app),
        Tab::Prediction => draw_prediction_tab(frame, content_area, app, artifacts),
    }

    draw_footer(frame, chunks[2], app);
}
