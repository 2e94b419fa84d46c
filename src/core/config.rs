//! Engine configuration.
//!
//! - `Difficulty`: how hard the computer plays, chosen per game
//! - `EngineConfig`: seed, default difficulty, and UI pacing

use serde::{Deserialize, Serialize};

use super::error::ParseDifficultyError;

/// Computer difficulty tier.
///
/// Medium and Hard share the same one-ply strategy; see
/// `ai::BestMove` for details.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniformly random empty cell.
    Easy,
    /// Win if possible, else block, else random.
    #[default]
    Medium,
    /// Same as Medium.
    Hard,
}

impl Difficulty {
    /// All tiers, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Lowercase name, as accepted by `FromStr`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = ParseDifficultyError;

    /// Parses `easy`, `medium` or `hard`, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseDifficultyError {
                input: s.to_string(),
            })
    }
}

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seed for the computer's random choices.
    /// Same seed and same inputs produce the same games.
    pub seed: u64,

    /// Difficulty used by `GameEngine::start_default_game`.
    pub default_difficulty: Difficulty,

    /// Pause the UI should insert before the computer moves, in milliseconds.
    /// The engine itself never waits.
    pub computer_delay_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            default_difficulty: Difficulty::Medium,
            computer_delay_ms: 500,
        }
    }
}

impl EngineConfig {
    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with custom default difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.default_difficulty = difficulty;
        self
    }

    /// Create a new config with custom computer delay.
    pub fn with_computer_delay_ms(mut self, delay_ms: u64) -> Self {
        self.computer_delay_ms = delay_ms;
        self
    }

    /// The computer delay as a `Duration`.
    #[must_use]
    pub fn computer_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.computer_delay_ms)
    }
}
