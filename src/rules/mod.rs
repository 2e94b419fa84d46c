//! Game rules: outcome detection and the engine that enforces turns.
//!
//! - `GameStatus`: in progress, won by X or O, or drawn
//! - `GameEngine`: move validation, computer turns, lifecycle

pub mod engine;
pub mod status;

pub use engine::{EngineSnapshot, GameEngine};
pub use status::GameStatus;
