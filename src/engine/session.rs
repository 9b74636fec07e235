use anyhow::Result;
use serde::Serialize;

use crate::models::{Hint, Outcome};
use crate::store::GameStore;

use super::{classify, is_win, sort_hints, Guess, Secret};

/// The result of submitting one raw guess to a session.
///
/// `accepted` is false when the input was not three decimal digits; in
/// that case nothing was recorded and the remaining fields are absent.
#[derive(Debug, Clone, Serialize)]
pub struct GuessReport {
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempt_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hints: Option<[Hint; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub won: Option<bool>,
}

impl GuessReport {
    fn rejected() -> Self {
        Self {
            accepted: false,
            attempt_number: None,
            hints: None,
            won: None,
        }
    }
}

/// One player's game, from naming to victory.
///
/// Drives the `InProgress -> Won` half of the game's life cycle: a session
/// only exists once a non-empty player name has produced a secret and a
/// persisted game record. Every accepted guess is appended to the store
/// before the result is reported; a winning guess additionally records the
/// outcome. Once won, the session accepts no further guesses.
pub struct GameSession<'a> {
    store: &'a dyn GameStore,
    game_id: i64,
    secret: Secret,
    attempts: u32,
    won: bool,
}

impl<'a> GameSession<'a> {
    /// Start a new game: generate a secret and persist the game record.
    /// Fails if the player name is empty.
    pub fn start(store: &'a dyn GameStore, player_name: &str) -> Result<Self> {
        Self::start_with_secret(store, player_name, Secret::generate())
    }

    /// Start a new game with a caller-provided secret. Used by tests that
    /// need a known secret; production callers go through [`Self::start`].
    pub fn start_with_secret(
        store: &'a dyn GameStore,
        player_name: &str,
        secret: Secret,
    ) -> Result<Self> {
        if player_name.is_empty() {
            anyhow::bail!("Player name cannot be empty");
        }

        let game_id = store.create_game(player_name, &secret)?;
        tracing::debug!(game_id, player_name, "started new game");

        Ok(Self {
            store,
            game_id,
            secret,
            attempts: 0,
            won: false,
        })
    }

    /// Resume a persisted game, e.g. to serve a guess submitted over HTTP.
    /// Returns `Ok(None)` when no game with that id exists.
    pub fn resume(store: &'a dyn GameStore, game_id: i64) -> Result<Option<Self>> {
        let Some(game) = store.get_game(game_id)? else {
            return Ok(None);
        };

        let secret = Secret::parse(&game.secret_number).ok_or_else(|| {
            anyhow::anyhow!("Stored secret for game {} is corrupt", game_id)
        })?;
        let attempts = store.list_attempts(game_id)?.len() as u32;

        Ok(Some(Self {
            store,
            game_id,
            secret,
            attempts,
            won: game.is_finished(),
        }))
    }

    pub fn game_id(&self) -> i64 {
        self.game_id
    }

    /// Number of accepted guesses so far.
    pub fn attempt_count(&self) -> u32 {
        self.attempts
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Submit raw player input.
    ///
    /// Malformed input is rejected without touching the attempt counter or
    /// the store. A valid guess is classified, its sorted hints are
    /// durably appended as the next attempt, and on an exact match the
    /// outcome is recorded immediately after.
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessReport> {
        if self.won {
            anyhow::bail!("Game is already finished");
        }

        let Ok(guess) = Guess::parse(raw) else {
            return Ok(GuessReport::rejected());
        };

        self.attempts += 1;
        let hints = sort_hints(classify(&self.secret, &guess));

        self.store.append_attempt(
            self.game_id,
            self.attempts,
            &guess,
            &Hint::join(&hints),
        )?;

        let won = is_win(&self.secret, &guess);
        if won {
            self.store.record_outcome(self.game_id, Outcome::Won)?;
            self.won = true;
            tracing::info!(
                game_id = self.game_id,
                attempts = self.attempts,
                "game won"
            );
        }

        Ok(GuessReport {
            accepted: true,
            attempt_number: Some(self.attempts),
            hints: Some(hints),
            won: Some(won),
        })
    }
}
