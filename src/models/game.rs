use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Attempt;

/// One play-through of the guessing game.
///
/// A game is created the moment a player gives a non-empty name and lives
/// forever as a replayable record. The secret number is stored in
/// plaintext, matching every earlier storage backend of this game; anyone
/// who can read the store can read the secret mid-game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: i64,
    pub player_name: String,
    /// Three distinct decimal digits, first digit never `0`.
    pub secret_number: String,
    /// `None` while the game is still in progress.
    pub outcome: Option<Outcome>,
    pub created_at: DateTime<Utc>,
}

impl Game {
    /// A game is finished once its outcome has been recorded.
    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }
}

/// Terminal result of a game. Unset while playing; the only defined value
/// is `Won`, recorded the instant a guess matches the secret exactly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Won,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Won => "won",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "won" => Some(Self::Won),
            _ => None,
        }
    }
}

/// Input for starting a new game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGameInput {
    pub player_name: String,
}

/// A game with its attempts in submission order, used for replay responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameWithAttempts {
    #[serde(flatten)]
    pub game: Game,
    pub attempts: Vec<Attempt>,
}
