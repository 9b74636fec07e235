//! Cold-hot: a "guess the three-digit number" parlor game.
//!
//! The computer picks a secret three-digit number with no repeated digits
//! and a non-zero leading digit. After every guess the player receives one
//! hint per digit: Горячо (right digit, right position), Тепло (digit
//! present elsewhere), Холодно (digit absent). The game is driven either
//! from the console ([`cli`]) or over HTTP ([`api`]); both record every
//! game and attempt through an abstract [`store::GameStore`].

pub mod api;
pub mod cli;
pub mod engine;
pub mod models;
pub mod store;
