//! Player marks and board cells.
//!
//! ## Player
//!
//! The two marks on the board. X is always the human and always moves
//! first; O is always the computer.
//!
//! ## Cell
//!
//! One of the nine board positions: empty or occupied by a player.

use serde::{Deserialize, Serialize};

/// A player mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The human player. Moves first.
    X,
    /// The computer player.
    O,
}

impl Player {
    /// The human player's mark.
    pub const HUMAN: Player = Player::X;

    /// The computer player's mark.
    pub const COMPUTER: Player = Player::O;

    /// Both marks in turn order.
    pub const ALL: [Player; 2] = [Player::X, Player::O];

    /// Get the other player.
    ///
    /// ```
    /// use ttt_engine::core::Player;
    ///
    /// assert_eq!(Player::X.opponent(), Player::O);
    /// assert_eq!(Player::O.opponent(), Player::X);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Single-character symbol for rendering.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Contents of a single board position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Claimed by a player.
    Occupied(Player),
}

impl Cell {
    /// Check if the cell is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Get the occupying player, if any.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(p) => Some(p),
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Cell::Occupied(player)
    }
}
