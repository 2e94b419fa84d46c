//! # ttt-engine
//!
//! Tic-tac-toe game engine: a human (X) against a computer (O) with three
//! difficulty tiers.
//!
//! ## Design Principles
//!
//! 1. **Owned State**: The engine is a plain value owned by the caller. No
//!    globals, no interior mutability, no I/O.
//!
//! 2. **Derived Outcomes**: `GameStatus` is recomputed from the board after
//!    every move, never set independently.
//!
//! 3. **Reproducible AI**: The computer draws randomness from a seeded
//!    `GameRng`, and lookahead ties go to the lowest index.
//!
//! ## Difficulty
//!
//! - **Easy**: uniform random empty cell
//! - **Medium**: win if possible, else block, else random
//! - **Hard**: same as Medium (one-ply only, not minimax)
//!
//! ## Modules
//!
//! - `core`: Players, cells, board, RNG, configuration, errors
//! - `rules`: Game status and the `GameEngine`
//! - `ai`: Move selection policies

pub mod core;
pub mod rules;
pub mod ai;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, Player, CELL_COUNT, WINNING_LINES,
    GameRng, GameRngState,
    Difficulty, EngineConfig,
    InvalidMove, ParseDifficultyError,
};

pub use crate::rules::{EngineSnapshot, GameEngine, GameStatus};

pub use crate::ai::{policy_for, BestMove, BlockingMove, MovePolicy, RandomMove};
