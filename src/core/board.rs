//! The 3x3 board, winning lines, and one-ply lookahead.
//!
//! Cells are stored in row-major order: `index = row * 3 + col`.
//!
//! ```text
//!  0 | 1 | 2
//! ---+---+---
//!  3 | 4 | 5
//! ---+---+---
//!  6 | 7 | 8
//! ```
//!
//! `Board` is `Copy`. Lookahead probes a copy, so the board being
//! evaluated is never touched.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::{Cell, Player};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Every line whose uniform occupancy wins the game.
pub const WINNING_LINES: [[usize; 3]; 8] = [
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

/// Indices of empty cells in ascending order.
///
/// SmallVec holds the full board inline; no heap allocation.
pub type EmptyCells = SmallVec<[usize; CELL_COUNT]>;

/// A 3x3 tic-tac-toe board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Build a board from nine cells in row-major order.
    ///
    /// ```
    /// use ttt_engine::core::{Board, Cell, Player};
    ///
    /// let x = Cell::Occupied(Player::X);
    /// let e = Cell::Empty;
    /// let board = Board::from_cells([x, x, x, e, e, e, e, e, e]);
    /// assert!(board.check_win(Player::X));
    /// ```
    #[must_use]
    pub const fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Get the cell at `index`, or `None` when out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Check if the cell at `index` exists and is empty.
    #[must_use]
    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Claim a cell. Callers validate the index and occupancy first.
    pub(crate) fn place(&mut self, index: usize, player: Player) {
        debug_assert!(self.is_empty_at(index), "cell {index} is not empty");
        self.cells[index] = Cell::Occupied(player);
    }

    /// Indices of all empty cells, ascending.
    #[must_use]
    pub fn empty_cells(&self) -> EmptyCells {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Check if every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Check if `player` occupies all three cells of any winning line.
    #[must_use]
    pub fn check_win(&self, player: Player) -> bool {
        let mark = Cell::Occupied(player);
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&i| self.cells[i] == mark))
    }

    /// Get the player holding a winning line, if any.
    ///
    /// X is checked first; legal play never produces two winners.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        Player::ALL.into_iter().find(|&p| self.check_win(p))
    }

    /// Find the lowest empty index where `player` would win immediately.
    ///
    /// Each empty cell is probed on a copy of the board, in ascending order.
    /// Returns `None` if no single move completes a line for `player`.
    #[must_use]
    pub fn find_winning_move(&self, player: Player) -> Option<usize> {
        self.empty_cells().into_iter().find(|&index| {
            let mut probe = *self;
            probe.cells[index] = Cell::Occupied(player);
            probe.check_win(player)
        })
    }
}

impl std::fmt::Display for Board {
    /// Renders the grid with empty cells shown as their index.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            let base = row * 3;
            let symbols: Vec<String> = (base..base + 3)
                .map(|i| match self.cells[i] {
                    Cell::Empty => i.to_string(),
                    Cell::Occupied(p) => p.to_string(),
                })
                .collect();
            write!(f, " {} ", symbols.join(" | "))?;
            if row < 2 {
                write!(f, "\n---+---+---\n")?;
            }
        }
        Ok(())
    }
}
