//! electrify-tui - terminal dashboard for electrification access data.

mod app;
mod event;
mod services;
mod ui;
mod widgets;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use electrify_facade::{load_config_or_default, DashboardBuilder};
use ratatui::prelude::*;

use app::App;
use event::{handle_key_event, poll_event};
use ui::draw_ui;

#[derive(Parser)]
#[command(name = "electrify-tui")]
#[command(author, version, about = "Electrification forecasting dashboard in the terminal")]
struct Args {
    /// CSV file to load on startup
    file: Option<PathBuf>,

    /// JSON dashboard configuration
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Fail on bad configuration before touching the terminal
    let config = load_config_or_default(args.config.as_deref())?;
    let dashboard = DashboardBuilder::new().config(config).build()?;

    let mut app = App::new(dashboard);
    if let Some(path) = &args.file {
        app.load_path(path);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> anyhow::Result<()> {
    let tick_rate = Duration::from_millis(100);

    loop {
        terminal.draw(|frame| draw_ui(frame, app))?;

        app.clear_expired_status();

        if let Some(event) = poll_event(tick_rate)? {
            if let Event::Key(key) = event {
                handle_key_event(app, key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
