//! superstore-dashboard - terminal dashboard for Superstore sales analysis and prediction.

mod app;
mod config;
mod event;
mod logging;
mod services;
mod ui;
mod widgets;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use app::App;
use config::Config;
use event::{handle_key_event, poll_event};
use services::load_artifacts;
use ui::draw_ui;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::parse();
    logging::init_tracing(&config.log_file)?;

    // Load artifacts before touching the terminal
    let mut app = match load_artifacts(&config) {
        Ok(artifacts) => {
            tracing::info!(?artifacts, "dashboard ready");
            App::new(Arc::new(artifacts))
        }
        Err(err) => {
            tracing::error!(error = %err, "startup halted");
            App::failed(err.to_string())
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }

    if let app::Startup::Failed(error) = &app.startup {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> anyhow::Result<()> {
    let tick_rate = Duration::from_millis(100);

    loop {
        terminal.draw(|frame| draw_ui(frame, app))?;

        // Clear expired status messages
        app.clear_expired_status();

        if let Some(event) = poll_event(tick_rate)? {
            match event {
                Event::Key(key) => handle_key_event(app, key),
                Event::Resize(_, _) => {} // Terminal will redraw automatically
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
