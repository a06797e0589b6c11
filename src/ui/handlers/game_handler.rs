//! Board moves, cursor movement and reset.

use crate::{board::CELL_COUNT, game::MoveOutcome, persistence::KeyValueStore};

use super::super::app::App;

/// Helper struct for board interactions.
pub struct GameHandler<'a, S> {
    app: &'a mut App<S>,
}

impl<'a, S: KeyValueStore> GameHandler<'a, S> {
    pub fn new(app: &'a mut App<S>) -> Self {
        Self { app }
    }

    pub fn place_at_cursor(&mut self) {
        let cell = self.app.cursor;
        self.place(cell);
    }

    pub fn place(&mut self, cell: usize) {
        self.app.cursor = cell.min(CELL_COUNT - 1);

        match self.app.session.apply_move(cell) {
            Ok(MoveOutcome::Applied { mark, step }) => {
                self.app.history_selected = step;
                self.app.log(format!("{} took cell {} (move #{})", mark, cell + 1, step));
                if let Some(winner) = self.app.session.state().winner() {
                    self.app.log(format!("{} wins!", winner));
                }
            }
            Ok(MoveOutcome::GameOver(winner)) => {
                self.app
                    .log(format!("Game over: {} already won. Jump back or reset", winner));
            }
            Ok(MoveOutcome::Occupied) => {
                self.app.log(format!("Cell {} is taken", cell + 1));
            }
            Ok(MoveOutcome::OutOfRange) => {}
            Err(e) => {
                self.app.log(format!("Error: {:#}", e));
            }
        }
    }

    /// Moves the cursor by whole rows/columns, stopping at the edges.
    pub fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let row = (self.app.cursor / 3) as isize;
        let col = (self.app.cursor % 3) as isize;

        let row = (row + d_row).clamp(0, 2) as usize;
        let col = (col + d_col).clamp(0, 2) as usize;

        self.app.cursor = row * 3 + col;
    }

    pub fn reset(&mut self) {
        match self.app.session.reset() {
            Ok(()) => self.app.log("New game"),
            Err(e) => self.app.log(format!("Error: {:#}", e)),
        }
        self.app.history_selected = 0;
        self.app.cursor = 4;
    }
}
