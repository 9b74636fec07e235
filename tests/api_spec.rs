use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use cold_hot::api::create_router;
use cold_hot::models::{CreateGameInput, Game};
use cold_hot::store::Database;
use serde_json::{json, Value};

fn setup() -> TestServer {
    let db = Database::open_memory().expect("Failed to create database");
    db.migrate().expect("Failed to migrate");
    let app = create_router(Arc::new(db));
    TestServer::new(app).expect("Failed to create test server")
}

async fn create_test_game(server: &TestServer) -> Game {
    server
        .post("/api/v1/games")
        .json(&CreateGameInput {
            player_name: "Анна".to_string(),
        })
        .await
        .json::<Game>()
}

/// Pick a guess guaranteed not to match the game's secret.
fn losing_guess(game: &Game) -> String {
    if game.secret_number == "123" {
        "456".to_string()
    } else {
        "123".to_string()
    }
}

mod health {
    use super::*;

    #[tokio::test]
    async fn reports_ok() {
        let server = setup();

        let response = server.get("/api/v1/health").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
    }
}

mod create_game {
    use super::*;

    #[tokio::test]
    async fn returns_created_with_a_valid_secret() {
        let server = setup();

        let response = server
            .post("/api/v1/games")
            .json(&json!({ "player_name": "Анна" }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let game: Game = response.json();
        assert_eq!(game.player_name, "Анна");
        assert!(game.outcome.is_none());

        let b = game.secret_number.as_bytes();
        assert_eq!(b.len(), 3);
        assert!(b.iter().all(|c| c.is_ascii_digit()));
        assert_ne!(b[0], b'0');
        assert!(b[0] != b[1] && b[0] != b[2] && b[1] != b[2]);
    }

    #[tokio::test]
    async fn rejects_an_empty_player_name() {
        let server = setup();

        let response = server
            .post("/api/v1/games")
            .json(&json!({ "player_name": "" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}

mod list_games {
    use super::*;

    #[tokio::test]
    async fn returns_empty_list_when_no_games_exist() {
        let server = setup();

        let response = server.get("/api/v1/games").await;

        response.assert_status_ok();
        let games: Vec<Game> = response.json();
        assert!(games.is_empty());
    }

    #[tokio::test]
    async fn returns_games_newest_first() {
        let server = setup();
        let first = create_test_game(&server).await;
        let second = create_test_game(&server).await;

        let response = server.get("/api/v1/games").await;

        response.assert_status_ok();
        let games: Vec<Game> = response.json();
        assert_eq!(games.len(), 2);
        assert_eq!(games[0].id, second.id);
        assert_eq!(games[1].id, first.id);
    }
}

mod get_game {
    use super::*;

    #[tokio::test]
    async fn returns_not_found_for_unknown_id() {
        let server = setup();

        let response = server.get("/api/v1/games/42").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn returns_the_game_with_its_attempts() {
        let server = setup();
        let game = create_test_game(&server).await;

        server
            .post(&format!("/api/v1/games/{}/guesses", game.id))
            .json(&json!({ "guess": losing_guess(&game) }))
            .await
            .assert_status_ok();

        let response = server.get(&format!("/api/v1/games/{}", game.id)).await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["id"], game.id);
        assert_eq!(body["player_name"], "Анна");
        let attempts = body["attempts"].as_array().expect("attempts missing");
        assert_eq!(attempts.len(), 1);
        assert_eq!(attempts[0]["attempt_number"], 1);
    }
}

mod list_attempts {
    use super::*;

    #[tokio::test]
    async fn returns_not_found_for_unknown_game() {
        let server = setup();

        let response = server.get("/api/v1/games/42/attempts").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn returns_attempts_in_submission_order() {
        let server = setup();
        let game = create_test_game(&server).await;
        let guess = losing_guess(&game);

        for _ in 0..2 {
            server
                .post(&format!("/api/v1/games/{}/guesses", game.id))
                .json(&json!({ "guess": &guess }))
                .await
                .assert_status_ok();
        }

        let response = server
            .get(&format!("/api/v1/games/{}/attempts", game.id))
            .await;

        response.assert_status_ok();
        let attempts: Vec<Value> = response.json();
        assert_eq!(attempts.len(), 2);
        assert_eq!(attempts[0]["attempt_number"], 1);
        assert_eq!(attempts[1]["attempt_number"], 2);
    }
}

mod submit_guess {
    use super::*;

    #[tokio::test]
    async fn returns_not_found_for_unknown_game() {
        let server = setup();

        let response = server
            .post("/api/v1/games/42/guesses")
            .json(&json!({ "guess": "123" }))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn rejects_malformed_input_without_recording_an_attempt() {
        let server = setup();
        let game = create_test_game(&server).await;

        let response = server
            .post(&format!("/api/v1/games/{}/guesses", game.id))
            .json(&json!({ "guess": "12" }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["accepted"], false);
        assert!(body.get("hints").is_none());
        assert!(body.get("won").is_none());

        let attempts: Vec<Value> = server
            .get(&format!("/api/v1/games/{}/attempts", game.id))
            .await
            .json();
        assert!(attempts.is_empty());
    }

    #[tokio::test]
    async fn returns_three_sorted_hint_tokens_for_a_valid_guess() {
        let server = setup();
        let game = create_test_game(&server).await;

        let response = server
            .post(&format!("/api/v1/games/{}/guesses", game.id))
            .json(&json!({ "guess": losing_guess(&game) }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["accepted"], true);
        assert_eq!(body["attempt_number"], 1);
        assert_eq!(body["won"], false);

        let hints = body["hints"].as_array().expect("hints missing");
        assert_eq!(hints.len(), 3);
        for hint in hints {
            let token = hint.as_str().expect("hint must be a string");
            assert!(
                matches!(token, "Горячо" | "Тепло" | "Холодно"),
                "unexpected hint token: {token}"
            );
        }
    }

    #[tokio::test]
    async fn winning_guess_records_the_outcome() {
        let server = setup();
        let game = create_test_game(&server).await;

        // The store exposes the secret in plaintext, so a client can
        // always "win" by reading it back first
        let response = server
            .post(&format!("/api/v1/games/{}/guesses", game.id))
            .json(&json!({ "guess": game.secret_number }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["won"], true);
        assert_eq!(
            body["hints"],
            json!(["Горячо", "Горячо", "Горячо"])
        );

        let stored: Value = server
            .get(&format!("/api/v1/games/{}", game.id))
            .await
            .json();
        assert_eq!(stored["outcome"], "won");
    }

    #[tokio::test]
    async fn refuses_guesses_on_a_finished_game() {
        let server = setup();
        let game = create_test_game(&server).await;

        server
            .post(&format!("/api/v1/games/{}/guesses", game.id))
            .json(&json!({ "guess": game.secret_number }))
            .await
            .assert_status_ok();

        let response = server
            .post(&format!("/api/v1/games/{}/guesses", game.id))
            .json(&json!({ "guess": "123" }))
            .await;

        response.assert_status(StatusCode::CONFLICT);
    }
}
