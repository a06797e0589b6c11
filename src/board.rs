//! Board representation and win detection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// All winning triples in row-major cell indices.
pub const WIN_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Mark::X => "X",
            Mark::O => "O",
        };
        write!(f, "{}", s)
    }
}

/// A 3x3 board stored in row-major order.
///
/// Serializes as a JSON array of nine entries, `null` for an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board([Option<Mark>; CELL_COUNT]);

impl Board {
    pub fn empty() -> Self {
        Self([None; CELL_COUNT])
    }

    pub fn from_cells(cells: [Option<Mark>; CELL_COUNT]) -> Self {
        Self(cells)
    }

    /// Returns the mark at `cell`, or `None` when empty or out of range.
    pub fn get(&self, cell: usize) -> Option<Mark> {
        self.0.get(cell).copied().flatten()
    }

    pub fn is_occupied(&self, cell: usize) -> bool {
        self.get(cell).is_some()
    }

    /// Returns a copy of this board with `cell` set to `mark`.
    pub fn with_mark(&self, cell: usize, mark: Mark) -> Self {
        let mut next = *self;
        next.0[cell] = Some(mark);
        next
    }

    pub fn cells(&self) -> &[Option<Mark>; CELL_COUNT] {
        &self.0
    }

    pub fn filled_count(&self) -> usize {
        self.0.iter().filter(|c| c.is_some()).count()
    }
}

/// Returns the first winning triple on the board, if any.
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    WIN_LINES.into_iter().find(|&[a, b, c]| {
        let first = board.get(a);
        first.is_some() && first == board.get(b) && first == board.get(c)
    })
}

/// Returns the mark holding three in a row, if any.
pub fn compute_winner(board: &Board) -> Option<Mark> {
    winning_line(board).and_then(|[a, _, _]| board.get(a))
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Option<Mark> = Some(Mark::X);
    const O: Option<Mark> = Some(Mark::O);
    const E: Option<Mark> = None;

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(compute_winner(&Board::empty()), None);
    }

    #[test]
    fn test_top_row_wins_for_x() {
        let board = Board::from_cells([X, X, X, E, E, E, E, E, E]);
        assert_eq!(compute_winner(&board), Some(Mark::X));
        assert_eq!(winning_line(&board), Some([0, 1, 2]));
    }

    #[test]
    fn test_two_marks_is_not_a_win() {
        let board = Board::from_cells([X, O, E, E, E, E, E, E, E]);
        assert_eq!(compute_winner(&board), None);
    }

    #[test]
    fn test_anti_diagonal_wins_for_o() {
        let board = Board::from_cells([E, E, O, E, O, E, O, E, E]);
        assert_eq!(compute_winner(&board), Some(Mark::O));
        assert_eq!(winning_line(&board), Some([2, 4, 6]));
    }

    #[test]
    fn test_pair_next_to_empty_cell_is_not_a_win() {
        // Two equal marks with the third cell of the line empty.
        let board = Board::from_cells([X, X, E, O, O, E, E, E, E]);
        assert_eq!(compute_winner(&board), None);
    }

    #[test]
    fn test_full_board_without_line() {
        let board = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        assert_eq!(compute_winner(&board), None);
        assert_eq!(board.filled_count(), 9);
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::empty();
        let next = board.with_mark(4, Mark::O);

        assert!(!board.is_occupied(4));
        assert_eq!(next.get(4), Some(Mark::O));
        assert_eq!(next.filled_count(), 1);
    }

    #[test]
    fn test_get_out_of_range_is_none() {
        assert_eq!(Board::empty().get(9), None);
        assert!(!Board::empty().is_occupied(42));
    }

    #[test]
    fn test_serializes_like_storage_format() {
        let board = Board::from_cells([X, O, E, E, E, E, E, E, E]);
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, r#"["X","O",null,null,null,null,null,null,null]"#);
    }

    #[test]
    fn test_rejects_wrong_cell_count() {
        let result: Result<Board, _> = serde_json::from_str(r#"["X","O",null]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }
}
