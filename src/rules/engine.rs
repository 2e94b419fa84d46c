//! The game engine: one human (X) versus the computer (O).
//!
//! `GameEngine` owns the board, the turn, the status, and the computer's
//! RNG. All mutation goes through its methods; a presentation layer reads
//! the accessors and forwards clicks to `apply_move`.
//!
//! ## Lifecycle
//!
//! ```text
//! Idle --start_game--> InProgress --moves--> XWins | OWins | Draw
//!  ^                                                   |
//!  +------------------- restart_game ------------------+
//! ```
//!
//! `start_game` is accepted in any phase and always begins a fresh game.
//!
//! ## Example
//!
//! ```
//! use ttt_engine::core::{Difficulty, EngineConfig, Player};
//! use ttt_engine::rules::{GameEngine, GameStatus};
//!
//! let mut engine = GameEngine::new(EngineConfig::default().with_seed(7));
//! engine.start_game(Difficulty::Medium);
//!
//! engine.apply_move(4, Player::X).unwrap();
//! let reply = engine.play_computer_turn().unwrap();
//! assert!(reply.is_some());
//! assert_eq!(engine.status(), GameStatus::InProgress);
//! assert_eq!(engine.turn(), Player::X);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::ai::policy_for;
use crate::core::{Board, Difficulty, EngineConfig, GameRng, GameRngState, InvalidMove, Player, CELL_COUNT};

use super::status::GameStatus;

/// Tic-tac-toe engine for a single human-versus-computer table.
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: EngineConfig,
    /// Source of per-game RNG streams.
    rng_source: GameRng,
    /// Stream for the current game.
    rng: GameRng,
    board: Board,
    turn: Player,
    status: GameStatus,
    /// `None` while idle.
    difficulty: Option<Difficulty>,
}

impl GameEngine {
    /// Create an idle engine.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let mut rng_source = GameRng::new(config.seed);
        let rng = rng_source.fork();
        Self {
            config,
            rng_source,
            rng,
            board: Board::new(),
            turn: Player::HUMAN,
            status: GameStatus::InProgress,
            difficulty: None,
        }
    }

    // === Lifecycle ===

    /// Begin a new game at the given difficulty.
    ///
    /// Clears the board, gives X the first move, and forks a fresh RNG
    /// stream for the computer.
    #[instrument(level = "debug", skip(self))]
    pub fn start_game(&mut self, difficulty: Difficulty) {
        self.rng = self.rng_source.fork();
        self.board = Board::new();
        self.turn = Player::HUMAN;
        self.status = GameStatus::InProgress;
        self.difficulty = Some(difficulty);
        info!(%difficulty, seed = self.rng.seed(), "game started");
    }

    /// Begin a new game at the configured default difficulty.
    pub fn start_default_game(&mut self) {
        self.start_game(self.config.default_difficulty);
    }

    /// Abandon the current game and return to the idle pre-game state.
    #[instrument(level = "debug", skip(self))]
    pub fn restart_game(&mut self) {
        self.board = Board::new();
        self.turn = Player::HUMAN;
        self.status = GameStatus::InProgress;
        self.difficulty = None;
        info!("game reset");
    }

    // === Moves ===

    /// Place `player`'s mark at `index`.
    ///
    /// Returns the status after the move. On error nothing changes; callers
    /// that want to silently ignore bad clicks can drop the error.
    #[instrument(level = "debug", skip(self))]
    pub fn apply_move(&mut self, index: usize, player: Player) -> Result<GameStatus, InvalidMove> {
        if let Err(err) = self.validate_move(index, player) {
            debug!(%err, "move rejected");
            return Err(err);
        }

        self.board.place(index, player);

        self.status = if self.board.check_win(player) {
            GameStatus::won_by(player)
        } else if self.board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        };

        if self.status.is_terminal() {
            info!(status = ?self.status, "game over");
        } else {
            self.turn = player.opponent();
        }

        debug!(index, %player, status = ?self.status, "move applied");
        Ok(self.status)
    }

    /// Check a move against the rules without applying it.
    pub fn validate_move(&self, index: usize, player: Player) -> Result<(), InvalidMove> {
        if self.difficulty.is_none() {
            return Err(InvalidMove::NotStarted);
        }
        if self.status.is_terminal() {
            return Err(InvalidMove::GameOver { status: self.status });
        }
        if index >= CELL_COUNT {
            return Err(InvalidMove::OutOfRange { index });
        }
        if player != self.turn {
            return Err(InvalidMove::OutOfTurn {
                expected: self.turn,
                got: player,
            });
        }
        if !self.board.is_empty_at(index) {
            return Err(InvalidMove::Occupied { index });
        }
        Ok(())
    }

    /// Choose a cell for the computer on the current board.
    ///
    /// Intended for O's turn in a running game; the engine state is not
    /// checked. Returns `None` only when the board is full. Easy draws from
    /// the game's RNG stream; Medium and Hard only do when neither side has
    /// an immediate win.
    #[instrument(level = "debug", skip(self))]
    pub fn select_computer_move(&mut self, difficulty: Difficulty) -> Option<usize> {
        let index = policy_for(difficulty).choose_move(&self.board, Player::COMPUTER, &mut self.rng);
        debug!(?index, "computer selected");
        index
    }

    /// Let the computer take its turn.
    ///
    /// Selects a move at the game's difficulty and applies it. Returns the
    /// chosen index, or `Ok(None)` if the game already ended.
    #[instrument(level = "debug", skip(self))]
    pub fn play_computer_turn(&mut self) -> Result<Option<usize>, InvalidMove> {
        let difficulty = self.difficulty.ok_or(InvalidMove::NotStarted)?;

        if self.status.is_terminal() {
            return Ok(None);
        }
        if self.turn != Player::COMPUTER {
            return Err(InvalidMove::OutOfTurn {
                expected: self.turn,
                got: Player::COMPUTER,
            });
        }

        // An in-progress board always has an empty cell.
        let Some(index) = self.select_computer_move(difficulty) else {
            return Ok(None);
        };
        self.apply_move(index, Player::COMPUTER)?;
        Ok(Some(index))
    }

    // === Queries ===

    /// Check if `player` holds a complete line.
    #[must_use]
    pub fn check_win(&self, player: Player) -> bool {
        self.board.check_win(player)
    }

    /// Lowest empty index where `player` would win immediately.
    #[must_use]
    pub fn find_winning_move(&self, player: Player) -> Option<usize> {
        self.board.find_winning_move(player)
    }

    /// Get the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get the player to move.
    #[must_use]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Get the current status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Get the current game's difficulty, or `None` while idle.
    #[must_use]
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    /// Check if a game is running and accepting moves.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.difficulty.is_some() && !self.status.is_terminal()
    }

    /// Status line for the UI.
    #[must_use]
    pub fn status_message(&self) -> String {
        self.status.message(self.turn)
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // === Snapshots ===

    /// Capture the full engine state.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            board: self.board,
            turn: self.turn,
            status: self.status,
            difficulty: self.difficulty,
            rng_source: self.rng_source.state(),
            rng: self.rng.state(),
        }
    }

    /// Rebuild an engine from a snapshot taken by `snapshot`.
    #[must_use]
    pub fn from_snapshot(config: EngineConfig, snapshot: &EngineSnapshot) -> Self {
        Self {
            config,
            rng_source: GameRng::from_state(&snapshot.rng_source),
            rng: GameRng::from_state(&snapshot.rng),
            board: snapshot.board,
            turn: snapshot.turn,
            status: snapshot.status,
            difficulty: snapshot.difficulty,
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

/// Serializable engine state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub board: Board,
    pub turn: Player,
    pub status: GameStatus,
    /// `None` while idle.
    pub difficulty: Option<Difficulty>,
    pub rng_source: GameRngState,
    pub rng: GameRngState,
}
