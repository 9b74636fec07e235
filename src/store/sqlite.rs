use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use chrono::Utc;
use rusqlite::Connection;

use crate::engine::{Guess, Secret};
use crate::models::{Attempt, Game, Outcome};

use super::{schema, GameStore};

/// SQLite-backed game store.
///
/// The connection is shared behind a mutex, so every store operation is a
/// single critical section; attempt and outcome writes for a game can
/// never interleave partially.
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn open(path: PathBuf) -> Result<Self> {
        let parent = path
            .parent()
            .ok_or_else(|| anyhow::anyhow!("Database path has no parent directory"))?;
        std::fs::create_dir_all(parent)?;
        let conn = Connection::open(&path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_default() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "cold-hot")
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        let db_path = dirs.data_dir().join("cold-hot.db");
        Self::open(db_path)
    }

    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn migrate(&self) -> Result<()> {
        let conn = self.conn.lock().expect("database lock poisoned");
        schema::run_migrations(&conn)
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self {
            conn: self.conn.clone(),
        }
    }
}

impl GameStore for Database {
    fn create_game(&self, player_name: &str, secret: &Secret) -> Result<i64> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let now = Utc::now();

        conn.execute(
            "INSERT INTO games (player_name, secret_number, created_at)
             VALUES (?, ?, ?)",
            (player_name, secret.as_str(), now.to_rfc3339()),
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn record_outcome(&self, game_id: i64, outcome: Outcome) -> Result<()> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let rows = conn.execute(
            "UPDATE games SET outcome = ? WHERE id = ?",
            (outcome.as_str(), game_id),
        )?;

        if rows == 0 {
            anyhow::bail!("Game not found");
        }
        Ok(())
    }

    fn append_attempt(
        &self,
        game_id: i64,
        attempt_number: u32,
        guess: &Guess,
        hints: &str,
    ) -> Result<()> {
        let conn = self.conn.lock().expect("database lock poisoned");
        conn.execute(
            "INSERT INTO attempts (game_id, attempt_number, guess, hints)
             VALUES (?, ?, ?, ?)",
            (game_id, attempt_number, guess.as_str(), hints),
        )?;
        Ok(())
    }

    fn list_games(&self) -> Result<Vec<Game>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let mut stmt = conn.prepare(
            "SELECT id, player_name, secret_number, outcome, created_at
             FROM games ORDER BY created_at DESC, id DESC",
        )?;

        let games = stmt
            .query_map([], |row| {
                Ok(Game {
                    id: row.get(0)?,
                    player_name: row.get(1)?,
                    secret_number: row.get(2)?,
                    outcome: row
                        .get::<_, Option<String>>(3)?
                        .as_deref()
                        .and_then(Outcome::from_str),
                    created_at: parse_datetime(row.get::<_, String>(4)?),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(games)
    }

    fn get_game(&self, game_id: i64) -> Result<Option<Game>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let mut stmt = conn.prepare(
            "SELECT id, player_name, secret_number, outcome, created_at
             FROM games WHERE id = ?",
        )?;

        let mut rows = stmt.query([game_id])?;
        if let Some(row) = rows.next()? {
            Ok(Some(Game {
                id: row.get(0)?,
                player_name: row.get(1)?,
                secret_number: row.get(2)?,
                outcome: row
                    .get::<_, Option<String>>(3)?
                    .as_deref()
                    .and_then(Outcome::from_str),
                created_at: parse_datetime(row.get::<_, String>(4)?),
            }))
        } else {
            Ok(None)
        }
    }

    fn list_attempts(&self, game_id: i64) -> Result<Vec<Attempt>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let mut stmt = conn.prepare(
            "SELECT id, game_id, attempt_number, guess, hints
             FROM attempts WHERE game_id = ? ORDER BY attempt_number ASC",
        )?;

        let attempts = stmt
            .query_map([game_id], |row| {
                Ok(Attempt {
                    id: row.get(0)?,
                    game_id: row.get(1)?,
                    attempt_number: row.get(2)?,
                    guess: row.get(3)?,
                    hints: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(attempts)
    }
}

fn parse_datetime(s: String) -> chrono::DateTime<Utc> {
    chrono::DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}
