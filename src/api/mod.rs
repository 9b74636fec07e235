mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::store::GameStore;

/// Build the HTTP API over any game store backend.
pub fn create_router(store: Arc<dyn GameStore>) -> Router {
    let api = Router::new()
        // Games
        .route("/games", get(handlers::list_games))
        .route("/games", post(handlers::create_game))
        .route("/games/{id}", get(handlers::get_game))
        .route("/games/{id}/attempts", get(handlers::list_attempts))
        .route("/games/{id}/guesses", post(handlers::submit_guess))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(store)
}
