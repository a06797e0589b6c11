mod app;
mod handlers;
mod rendering;
mod types;

pub use app::App;
pub use types::{Focus, LogBuffer};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::stdout;

use crate::{persistence::KeyValueStore, session::GameSession};

/// Entry point for running the UI.
pub fn run_ui<S: KeyValueStore>(store: S, reset: bool) -> Result<()> {
    let logs = LogBuffer::new();

    let mut session = GameSession::open(store);
    if reset {
        session.reset()?;
    }

    let mut app = App::new(session, logs);

    let mut stdout = stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
