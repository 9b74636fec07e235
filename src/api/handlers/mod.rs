use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::engine::{GameSession, GuessReport};
use crate::models::{Attempt, CreateGameInput, Game, GameWithAttempts};
use crate::store::GameStore;

type Store = Arc<dyn GameStore>;

// ============================================================
// Error Handling
// ============================================================

/// Log an internal error and return a sanitized response to the client.
/// The full error is logged server-side for debugging, but clients only
/// see a generic message to avoid leaking internal details.
///
/// Some errors are validation errors that should be exposed to the client
/// (e.g., "Player name cannot be empty"). These are returned as-is with a
/// BAD_REQUEST status.
fn internal_error(e: impl std::fmt::Display) -> (StatusCode, String) {
    let msg = e.to_string();

    if msg.contains("cannot be empty") {
        tracing::warn!("Validation error: {}", msg);
        return (StatusCode::BAD_REQUEST, msg);
    }
    if msg.contains("not found") {
        tracing::warn!("Validation error: {}", msg);
        return (StatusCode::NOT_FOUND, msg);
    }

    tracing::error!("Internal error: {}", msg);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
    )
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Games
// ============================================================

pub async fn list_games(
    State(store): State<Store>,
) -> Result<Json<Vec<Game>>, (StatusCode, String)> {
    store.list_games().map(Json).map_err(internal_error)
}

pub async fn get_game(
    State(store): State<Store>,
    Path(id): Path<i64>,
) -> Result<Json<GameWithAttempts>, (StatusCode, String)> {
    let game = store
        .get_game(id)
        .map_err(internal_error)?
        .ok_or((StatusCode::NOT_FOUND, "Game not found".to_string()))?;

    let attempts = store.list_attempts(id).map_err(internal_error)?;

    Ok(Json(GameWithAttempts { game, attempts }))
}

pub async fn create_game(
    State(store): State<Store>,
    Json(input): Json<CreateGameInput>,
) -> Result<(StatusCode, Json<Game>), (StatusCode, String)> {
    let session = GameSession::start(store.as_ref(), &input.player_name)
        .map_err(internal_error)?;

    // Echo back the persisted record, including the generated secret. The
    // game has always stored and exposed the secret in plaintext; clients
    // that want a fair game simply refrain from peeking.
    let game = store
        .get_game(session.game_id())
        .map_err(internal_error)?
        .ok_or_else(|| internal_error("Created game vanished from the store"))?;

    Ok((StatusCode::CREATED, Json(game)))
}

pub async fn list_attempts(
    State(store): State<Store>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Attempt>>, (StatusCode, String)> {
    // First verify the game exists
    store
        .get_game(id)
        .map_err(internal_error)?
        .ok_or((StatusCode::NOT_FOUND, "Game not found".to_string()))?;

    store.list_attempts(id).map(Json).map_err(internal_error)
}

// ============================================================
// Guesses
// ============================================================

/// Body for submitting a guess.
#[derive(Debug, Deserialize)]
pub struct SubmitGuessInput {
    pub guess: String,
}

pub async fn submit_guess(
    State(store): State<Store>,
    Path(id): Path<i64>,
    Json(input): Json<SubmitGuessInput>,
) -> Result<Json<GuessReport>, (StatusCode, String)> {
    let mut session = GameSession::resume(store.as_ref(), id)
        .map_err(internal_error)?
        .ok_or((StatusCode::NOT_FOUND, "Game not found".to_string()))?;

    if session.is_won() {
        return Err((
            StatusCode::CONFLICT,
            "Game is already finished".to_string(),
        ));
    }

    session
        .submit_guess(&input.guess)
        .map(Json)
        .map_err(internal_error)
}
