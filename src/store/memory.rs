use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::Result;
use chrono::Utc;

use crate::engine::{Guess, Secret};
use crate::models::{Attempt, Game, Outcome};

use super::GameStore;

/// In-memory game store. Nothing survives the process; useful for tests
/// and for playing without touching the file system.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    next_game_id: i64,
    next_attempt_id: i64,
    games: Vec<Game>,
    attempts: HashMap<i64, Vec<Attempt>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameStore for MemoryStore {
    fn create_game(&self, player_name: &str, secret: &Secret) -> Result<i64> {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        inner.next_game_id += 1;
        let id = inner.next_game_id;

        inner.games.push(Game {
            id,
            player_name: player_name.to_string(),
            secret_number: secret.as_str().to_string(),
            outcome: None,
            created_at: Utc::now(),
        });

        Ok(id)
    }

    fn record_outcome(&self, game_id: i64, outcome: Outcome) -> Result<()> {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        let game = inner
            .games
            .iter_mut()
            .find(|g| g.id == game_id)
            .ok_or_else(|| anyhow::anyhow!("Game not found"))?;

        game.outcome = Some(outcome);
        Ok(())
    }

    fn append_attempt(
        &self,
        game_id: i64,
        attempt_number: u32,
        guess: &Guess,
        hints: &str,
    ) -> Result<()> {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        if !inner.games.iter().any(|g| g.id == game_id) {
            anyhow::bail!("Game not found");
        }

        inner.next_attempt_id += 1;
        let attempt = Attempt {
            id: inner.next_attempt_id,
            game_id,
            attempt_number,
            guess: guess.as_str().to_string(),
            hints: hints.to_string(),
        };
        inner.attempts.entry(game_id).or_default().push(attempt);

        Ok(())
    }

    fn list_games(&self) -> Result<Vec<Game>> {
        let inner = self.inner.lock().expect("store lock poisoned");
        // Ids are monotonic, so reverse insertion order is newest first
        let mut games = inner.games.clone();
        games.reverse();
        Ok(games)
    }

    fn get_game(&self, game_id: i64) -> Result<Option<Game>> {
        let inner = self.inner.lock().expect("store lock poisoned");
        Ok(inner.games.iter().find(|g| g.id == game_id).cloned())
    }

    fn list_attempts(&self, game_id: i64) -> Result<Vec<Attempt>> {
        let inner = self.inner.lock().expect("store lock poisoned");
        // Attempts are appended in ordinal order already
        Ok(inner.attempts.get(&game_id).cloned().unwrap_or_default())
    }
}
