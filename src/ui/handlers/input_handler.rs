//! Keyboard dispatch.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::persistence::KeyValueStore;

use super::super::{app::App, types::Focus};
use super::{GameHandler, HistoryHandler};

/// Helper struct for routing key presses to the right handler.
pub struct InputHandler<'a, S> {
    app: &'a mut App<S>,
}

impl<'a, S: KeyValueStore> InputHandler<'a, S> {
    pub fn new(app: &'a mut App<S>) -> Self {
        Self { app }
    }

    /// Returns `true` when the user asked to exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('q' | 'Q'), KeyModifiers::CONTROL) => {
                self.app.log("Exit requested");
                return true;
            }
            (KeyCode::Char('r' | 'R'), KeyModifiers::CONTROL) => {
                GameHandler::new(self.app).reset();
                return false;
            }
            _ => {}
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.app.log("Exit requested");
                return true;
            }
            KeyCode::Char('r') => GameHandler::new(self.app).reset(),
            KeyCode::Tab | KeyCode::BackTab => {
                self.app.focus = self.app.focus.toggle();
                if self.app.focus == Focus::History {
                    self.app.history_selected = self.app.session.state().current_step();
                }
            }
            KeyCode::Char('[') => HistoryHandler::new(self.app).step_back(),
            KeyCode::Char(']') => HistoryHandler::new(self.app).step_forward(),
            KeyCode::Char(c @ '1'..='9') => {
                let cell = c as usize - '1' as usize;
                GameHandler::new(self.app).place(cell);
            }
            _ => match self.app.focus {
                Focus::Board => self.handle_board_key(key.code),
                Focus::History => self.handle_history_key(key.code),
            },
        }
        false
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        let mut game = GameHandler::new(self.app);
        match code {
            KeyCode::Up | KeyCode::Char('k') => game.move_cursor(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => game.move_cursor(1, 0),
            KeyCode::Left | KeyCode::Char('h') => game.move_cursor(0, -1),
            KeyCode::Right | KeyCode::Char('l') => game.move_cursor(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => game.place_at_cursor(),
            _ => {}
        }
    }

    fn handle_history_key(&mut self, code: KeyCode) {
        let mut history = HistoryHandler::new(self.app);
        match code {
            KeyCode::Up | KeyCode::Char('k') => history.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => history.select_next(),
            KeyCode::Home => history.select_first(),
            KeyCode::End => history.select_last(),
            KeyCode::Enter | KeyCode::Char(' ') => history.jump_to_selected(),
            _ => {}
        }
    }
}
