//! Persistence for games and attempts.
//!
//! The game core talks to a single [`GameStore`] trait; backends are
//! interchangeable. [`Database`] persists to SQLite, [`MemoryStore`] keeps
//! everything in process memory (tests, throwaway games).

mod memory;
mod schema;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::Database;

use anyhow::Result;

use crate::engine::{Guess, Secret};
use crate::models::{Attempt, Game, Outcome};

/// Append-oriented storage contract consumed by the game core.
///
/// Implementations must provide per-game append atomicity: an attempt
/// write and an outcome write for the same game never interleave
/// partially. No other locking discipline is assumed.
pub trait GameStore: Send + Sync {
    /// Persist a new game and return its id.
    fn create_game(&self, player_name: &str, secret: &Secret) -> Result<i64>;

    /// Set the terminal outcome of a game.
    fn record_outcome(&self, game_id: i64, outcome: Outcome) -> Result<()>;

    /// Append one accepted guess with its sorted hints (tokens joined by a
    /// single space).
    fn append_attempt(
        &self,
        game_id: i64,
        attempt_number: u32,
        guess: &Guess,
        hints: &str,
    ) -> Result<()>;

    /// All games, newest first.
    fn list_games(&self) -> Result<Vec<Game>>;

    /// One game by id, or `None` if unknown.
    fn get_game(&self, game_id: i64) -> Result<Option<Game>>;

    /// All attempts of a game, ascending by attempt number.
    fn list_attempts(&self, game_id: i64) -> Result<Vec<Attempt>>;
}
