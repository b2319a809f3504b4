//! Oversold TUI — run the screen, then browse the survivors.
//!
//! The pipeline runs up front on the plain terminal (progress on stdout),
//! then the alternate screen opens with two stacked panels: candlesticks on
//! top, RSI below, one symbol at a time. Left/Right steps the selector;
//! closing the viewer ends the process.

mod app;
mod input;
mod panels;
mod theme;
mod ui;

use std::io::{self, stdout};
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use oversold_core::chart::Figure;
use oversold_core::data::{StdoutProgress, UniverseSource, YahooProvider};
use oversold_core::domain::ScreenParams;
use oversold_core::screen::run_screen;

use crate::app::AppState;

const PARAMS_FILE: &str = "oversold.toml";

fn main() -> Result<()> {
    // Optional parameter file; defaults otherwise.
    let params = load_params(Path::new(PARAMS_FILE));

    // Fail-soft: a dead constituents endpoint means an empty screen.
    let universe = UniverseSource::default().fetch_or_empty();

    let provider = YahooProvider::new();
    let report = run_screen(&provider, &universe, &params, &StdoutProgress);

    println!("Passed: {:?}", report.passed_symbols());

    let figure = Figure::build(&report.passed);
    let mut app = AppState::new(figure, params);

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn load_params(path: &Path) -> ScreenParams {
    if !path.exists() {
        return ScreenParams::default();
    }
    match ScreenParams::from_file(path) {
        Ok(params) => params,
        Err(e) => {
            eprintln!("warning: {e}; using defaults");
            ScreenParams::default()
        }
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        if !app.running {
            break;
        }
    }
    Ok(())
}
