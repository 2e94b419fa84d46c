//! Move selection policies for the computer player.
//!
//! Policies are trait-based so a difficulty tier maps to a strategy:
//! - `RandomMove`: uniform over empty cells (Easy)
//! - `BlockingMove`: win, else block, else random (Medium)
//! - `BestMove`: currently identical to `BlockingMove` (Hard)

use tracing::debug;

use crate::core::{Board, Difficulty, GameRng, Player};

/// Policy for choosing a cell for a player.
pub trait MovePolicy: Send + Sync {
    /// Choose an empty cell for `player` on `board`.
    ///
    /// Returns `None` only if the board has no empty cells.
    fn choose_move(&self, board: &Board, player: Player, rng: &mut GameRng) -> Option<usize>;
}

/// Uniform random policy.
#[derive(Clone, Debug, Default)]
pub struct RandomMove;

impl MovePolicy for RandomMove {
    fn choose_move(&self, board: &Board, _player: Player, rng: &mut GameRng) -> Option<usize> {
        let empty = board.empty_cells();
        let index = rng.choose(&empty).copied();
        debug!(?index, candidates = empty.len(), "random move");
        index
    }
}

/// One-ply lookahead policy.
///
/// Takes an immediate win for `player` if one exists, otherwise blocks the
/// opponent's immediate win, otherwise falls back to `RandomMove`. Ties go
/// to the lowest index, so the first two steps are deterministic.
#[derive(Clone, Debug, Default)]
pub struct BlockingMove;

impl MovePolicy for BlockingMove {
    fn choose_move(&self, board: &Board, player: Player, rng: &mut GameRng) -> Option<usize> {
        if let Some(index) = board.find_winning_move(player) {
            debug!(index, %player, "winning move");
            return Some(index);
        }
        if let Some(index) = board.find_winning_move(player.opponent()) {
            debug!(index, %player, "blocking move");
            return Some(index);
        }
        RandomMove.choose_move(board, player, rng)
    }
}

/// Policy for the hardest tier.
///
/// Known limitation: this is the same one-ply win/block/random strategy as
/// `BlockingMove`, not a minimax search, and it can lose to forks.
#[derive(Clone, Debug, Default)]
pub struct BestMove;

impl MovePolicy for BestMove {
    fn choose_move(&self, board: &Board, player: Player, rng: &mut GameRng) -> Option<usize> {
        BlockingMove.choose_move(board, player, rng)
    }
}

/// The policy used for a difficulty tier.
#[must_use]
pub fn policy_for(difficulty: Difficulty) -> &'static dyn MovePolicy {
    match difficulty {
        Difficulty::Easy => &RandomMove,
        Difficulty::Medium => &BlockingMove,
        Difficulty::Hard => &BestMove,
    }
}
