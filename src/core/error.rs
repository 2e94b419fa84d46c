//! Error types.

use derive_more::{Display, Error};

use super::player::Player;
use crate::rules::GameStatus;

/// A rejected move. The engine state is unchanged when one is returned.
///
/// Variants are listed in the order the checks run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum InvalidMove {
    /// No game has been started, or the game was restarted.
    #[display("no game in progress")]
    NotStarted,
    /// The game already reached a terminal outcome.
    #[display("game is already over ({status:?})")]
    GameOver { status: GameStatus },
    /// Index outside 0-8.
    #[display("cell {index} is out of range (must be 0-8)")]
    OutOfRange { index: usize },
    /// The wrong player tried to move.
    #[display("it is {expected}'s turn, not {got}'s")]
    OutOfTurn { expected: Player, got: Player },
    /// The cell already holds a mark.
    #[display("cell {index} is already occupied")]
    Occupied { index: usize },
}

/// Unrecognised difficulty name.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
#[display("unknown difficulty {input:?} (expected easy, medium or hard)")]
pub struct ParseDifficultyError {
    /// The rejected input.
    pub input: String,
}
