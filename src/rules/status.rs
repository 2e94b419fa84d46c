//! Game outcome derived from the board.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Player};

/// Status of a game.
///
/// Always derived from the board via `GameStatus::evaluate`; never tracked
/// separately.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves remain and nobody has a line.
    #[default]
    InProgress,
    /// X completed a line.
    XWins,
    /// O completed a line.
    OWins,
    /// Board full, no line.
    Draw,
}

impl GameStatus {
    /// Derive the status of a board.
    ///
    /// A completed line takes precedence over a full board, so a ninth move
    /// that wins is a win, not a draw.
    #[must_use]
    pub fn evaluate(board: &Board) -> Self {
        match board.winner() {
            Some(player) => Self::won_by(player),
            None if board.is_full() => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// The winning status for `player`.
    #[must_use]
    pub const fn won_by(player: Player) -> Self {
        match player {
            Player::X => GameStatus::XWins,
            Player::O => GameStatus::OWins,
        }
    }

    /// Check if the game is over.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Get the winner, if the game was won.
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            GameStatus::XWins => Some(Player::X),
            GameStatus::OWins => Some(Player::O),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    /// Status line for the UI, given the player to move.
    ///
    /// ```
    /// use ttt_engine::core::Player;
    /// use ttt_engine::rules::GameStatus;
    ///
    /// assert_eq!(GameStatus::InProgress.message(Player::X), "Player X's turn");
    /// assert_eq!(GameStatus::OWins.message(Player::X), "O wins!");
    /// assert_eq!(GameStatus::Draw.message(Player::O), "It's a tie!");
    /// ```
    #[must_use]
    pub fn message(self, turn: Player) -> String {
        match self {
            GameStatus::InProgress => format!("Player {turn}'s turn"),
            GameStatus::XWins => format!("{} wins!", Player::X),
            GameStatus::OWins => format!("{} wins!", Player::O),
            GameStatus::Draw => "It's a tie!".to_string(),
        }
    }
}
