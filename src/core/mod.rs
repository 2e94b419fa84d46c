//! Core types: players, cells, the board, RNG, configuration, errors.
//!
//! Everything here is plain data with no notion of turns or game phases;
//! `rules` builds the game on top.

pub mod player;
pub mod board;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{Cell, Player};
pub use board::{Board, EmptyCells, CELL_COUNT, WINNING_LINES};
pub use rng::{GameRng, GameRngState};
pub use config::{Difficulty, EngineConfig};
pub use error::{InvalidMove, ParseDifficultyError};
