//! TUI entry point and terminal setup.

use std::io;

use chrono::Utc;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::CrosstermBackend, Terminal};
use tracing::info;

use crate::{store::TaskStore, task::Project, tui::app::App, view::ViewQuery};

/// Leave raw mode and the alternate screen before the previous panic hook runs,
/// so the panic message lands on a usable shell.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

/// Initialise and run the board until the user quits.
///
/// The terminal is restored before any error from the event loop is returned.
pub fn run_tui(store: TaskStore, query: ViewQuery, projects: Vec<Project>) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    install_panic_hook();

    let mut app = App::new(store, query, projects, Utc::now());
    info!(tasks = app.store().len(), "starting board");
    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    info!(tasks = app.store().len(), "board closed");
    result
}
