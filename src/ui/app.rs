use std::{fmt::Display, io::Stdout};

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::{persistence::KeyValueStore, session::GameSession};

use super::types::{Focus, LogBuffer};

/// Main application state container.
pub struct App<S> {
    pub(in crate::ui) session: GameSession<S>,
    pub(in crate::ui) cursor: usize,
    pub(in crate::ui) focus: Focus,
    pub(in crate::ui) history_selected: usize,
    pub(in crate::ui) logs: LogBuffer,
}

impl<S: KeyValueStore> App<S> {
    pub fn new(session: GameSession<S>, logs: LogBuffer) -> Self {
        let history_selected = session.state().current_step();

        Self {
            session,
            cursor: 4,
            focus: Focus::Board,
            history_selected,
            logs,
        }
    }

    pub fn session(&self) -> &GameSession<S> {
        &self.session
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        info!("UI started");
        self.log(format!(
            "Resumed at step {} | {}",
            self.session.state().current_step(),
            self.session.state().status()
        ));

        loop {
            terminal.draw(|f| self.draw(f))?;

            if let Event::Key(key) = event::read()? {
                if super::handlers::InputHandler::new(self).handle_key(key) {
                    return Ok(());
                }
            }
        }
    }

    pub(in crate::ui) fn log(&self, msg: impl Into<String> + Display) {
        tracing::info!("{}", &msg);
        self.logs.push(msg.into());
    }
}
