//! Turn and history state machine.

use std::fmt;

use crate::board::{Board, CELL_COUNT, Mark, compute_winner};

/// Result of attempting a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was recorded and `step` is the new current step.
    Applied { mark: Mark, step: usize },
    /// The displayed board already has a winner.
    GameOver(Mark),
    /// The target cell is taken.
    Occupied,
    /// The cell index is not on the board.
    OutOfRange,
}

impl MoveOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }
}

/// Status line shown above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    NextPlayer(Mark),
    Winner(Mark),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::NextPlayer(mark) => write!(f, "Next Player: {}", mark),
            Status::Winner(mark) => write!(f, "Winner {}", mark),
        }
    }
}

/// One row of the history panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub step: usize,
    pub is_current: bool,
}

impl HistoryEntry {
    pub fn label(&self) -> String {
        let mut label = if self.step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", self.step)
        };
        if self.is_current {
            label.push_str("(current)");
        }
        label
    }
}

/// Ordered board snapshots plus a pointer to the displayed one.
///
/// Always holds at least one board and `current_step < history.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    history: Vec<Board>,
    current_step: usize,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            history: vec![Board::empty()],
            current_step: 0,
        }
    }

    /// Builds a state from stored parts, rejecting inconsistent input.
    pub fn from_parts(history: Vec<Board>, current_step: usize) -> Option<Self> {
        if history.is_empty() || current_step >= history.len() {
            return None;
        }
        Some(Self {
            history,
            current_step,
        })
    }

    pub fn history(&self) -> &[Board] {
        &self.history
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn current_board(&self) -> &Board {
        &self.history[self.current_step]
    }

    pub fn winner(&self) -> Option<Mark> {
        compute_winner(self.current_board())
    }

    /// X moves on even steps, O on odd steps.
    pub fn next_player(&self) -> Mark {
        if self.current_step % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// The mark whose move produced the displayed board.
    pub fn last_mover(&self) -> Mark {
        self.next_player().opponent()
    }

    pub fn status(&self) -> Status {
        match self.winner() {
            Some(_) => Status::Winner(self.last_mover()),
            None => Status::NextPlayer(self.next_player()),
        }
    }

    pub fn history_entries(&self) -> Vec<HistoryEntry> {
        (0..self.history.len())
            .map(|step| HistoryEntry {
                step,
                is_current: step == self.current_step,
            })
            .collect()
    }

    pub fn is_latest(&self) -> bool {
        self.current_step + 1 == self.history.len()
    }

    /// Places the next player's mark on `cell`.
    ///
    /// Any boards after the current step are discarded before the new board
    /// is appended.
    pub fn apply_move(&mut self, cell: usize) -> MoveOutcome {
        if cell >= CELL_COUNT {
            return MoveOutcome::OutOfRange;
        }
        if let Some(winner) = self.winner() {
            return MoveOutcome::GameOver(winner);
        }

        let board = self.current_board();
        if board.is_occupied(cell) {
            return MoveOutcome::Occupied;
        }

        let mark = self.next_player();
        let next_board = board.with_mark(cell, mark);

        self.current_step += 1;
        self.history.truncate(self.current_step);
        self.history.push(next_board);

        MoveOutcome::Applied {
            mark,
            step: self.current_step,
        }
    }

    /// Moves the pointer to `step`. Returns `false` if no such step exists.
    pub fn jump_to(&mut self, step: usize) -> bool {
        if step >= self.history.len() {
            return false;
        }
        self.current_step = step;
        true
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(state: &mut GameState, cells: &[usize]) {
        for &cell in cells {
            assert!(state.apply_move(cell).is_applied(), "move {} rejected", cell);
        }
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new();
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.current_step(), 0);
        assert_eq!(*state.current_board(), Board::empty());
        assert_eq!(state.next_player(), Mark::X);
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn test_apply_move_sets_mark_and_advances() {
        let mut state = GameState::new();
        let before = *state.current_board();

        let outcome = state.apply_move(4);

        assert_eq!(
            outcome,
            MoveOutcome::Applied {
                mark: Mark::X,
                step: 1
            }
        );
        assert_eq!(state.current_step(), 1);
        assert_eq!(*state.current_board(), before.with_mark(4, Mark::X));
        assert_eq!(state.next_player(), Mark::O);
    }

    #[test]
    fn test_occupied_cell_is_noop() {
        let mut state = GameState::new();
        play(&mut state, &[0]);
        let snapshot = state.clone();

        assert_eq!(state.apply_move(0), MoveOutcome::Occupied);
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_move_after_win_is_noop() {
        let mut state = GameState::new();
        play(&mut state, &[0, 3, 1, 4, 2]);
        let snapshot = state.clone();

        assert_eq!(state.apply_move(8), MoveOutcome::GameOver(Mark::X));
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_out_of_range_cell_is_noop() {
        let mut state = GameState::new();
        assert_eq!(state.apply_move(9), MoveOutcome::OutOfRange);
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn test_move_from_earlier_step_truncates_future() {
        let mut state = GameState::new();
        play(&mut state, &[0, 1, 2, 3]);
        assert_eq!(state.history().len(), 5);

        assert!(state.jump_to(1));
        assert!(!state.is_latest());

        let outcome = state.apply_move(8);
        assert_eq!(
            outcome,
            MoveOutcome::Applied {
                mark: Mark::O,
                step: 2
            }
        );
        assert_eq!(state.history().len(), 3);
        assert!(state.is_latest());

        let board = state.current_board();
        assert_eq!(board.get(0), Some(Mark::X));
        assert_eq!(board.get(1), None);
        assert_eq!(board.get(8), Some(Mark::O));
    }

    #[test]
    fn test_jump_changes_turn_and_winner() {
        let mut state = GameState::new();
        play(&mut state, &[0, 3, 1, 4, 2]);
        assert_eq!(state.winner(), Some(Mark::X));

        assert!(state.jump_to(4));
        assert_eq!(state.winner(), None);
        assert_eq!(state.next_player(), Mark::X);
        assert_eq!(state.history().len(), 6);
    }

    #[test]
    fn test_jump_out_of_range_is_ignored() {
        let mut state = GameState::new();
        play(&mut state, &[0]);

        assert!(!state.jump_to(2));
        assert_eq!(state.current_step(), 1);
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut state = GameState::new();
        play(&mut state, &[0, 1, 2]);
        state.jump_to(1);

        state.reset();

        assert_eq!(state, GameState::new());
        assert_eq!(state.next_player(), Mark::X);
    }

    #[test]
    fn test_left_column_scenario() {
        let mut state = GameState::new();
        play(&mut state, &[0, 1, 3, 4, 6]);

        let x = Some(Mark::X);
        let o = Some(Mark::O);
        assert_eq!(state.current_step(), 5);
        assert_eq!(
            *state.current_board(),
            Board::from_cells([x, o, None, x, o, None, x, None, None])
        );
        assert_eq!(state.winner(), Some(Mark::X));
        assert_eq!(state.status(), Status::Winner(Mark::X));
        assert_eq!(state.status().to_string(), "Winner X");
    }

    #[test]
    fn test_status_text() {
        let mut state = GameState::new();
        assert_eq!(state.status().to_string(), "Next Player: X");
        play(&mut state, &[0]);
        assert_eq!(state.status().to_string(), "Next Player: O");
    }

    #[test]
    fn test_last_mover_parity() {
        let mut state = GameState::new();
        assert_eq!(state.last_mover(), Mark::O);
        play(&mut state, &[0]);
        assert_eq!(state.last_mover(), Mark::X);
    }

    #[test]
    fn test_history_entries_labels() {
        let mut state = GameState::new();
        play(&mut state, &[0, 1]);
        state.jump_to(1);

        let labels: Vec<String> = state.history_entries().iter().map(|e| e.label()).collect();

        assert_eq!(
            labels,
            vec![
                "Go to game start".to_string(),
                "Go to move #1(current)".to_string(),
                "Go to move #2".to_string(),
            ]
        );
    }

    #[test]
    fn test_from_parts_validates() {
        assert!(GameState::from_parts(vec![], 0).is_none());
        assert!(GameState::from_parts(vec![Board::empty()], 1).is_none());

        let state = GameState::from_parts(vec![Board::empty(), Board::empty()], 1);
        assert_eq!(state.map(|s| s.current_step()), Some(1));
    }
}
