//! Domain models for cold-hot.
//!
//! # Core Concepts
//!
//! - [`Game`]: one play-through owned by a single player. Holds the secret
//!   number, the player's display name, and a terminal [`Outcome`] that
//!   stays unset until the number is guessed.
//! - [`Attempt`]: append-only record of one accepted guess and its sorted
//!   hints, keyed by an increasing ordinal starting at 1. Attempts are
//!   never mutated except as part of whole-game deletion.
//! - [`Hint`]: per-position feedback for a guess digit. Hints serialize to
//!   the fixed display tokens `Горячо` / `Тепло` / `Холодно`, which are
//!   also the storage representation (joined by a single space).

mod attempt;
mod game;
mod hint;

pub use attempt::*;
pub use game::*;
pub use hint::*;
