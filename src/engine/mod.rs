//! The game core: secret generation, guess validation, hint
//! classification, and the per-game session state machine.
//!
//! Everything here is pure and synchronous except [`GameSession`], which
//! delegates persistence to a [`GameStore`](crate::store::GameStore).

mod guess;
mod secret;
mod session;

pub use guess::{Guess, InvalidGuessFormat};
pub use secret::Secret;
pub use session::{GameSession, GuessReport};

use crate::models::Hint;

/// Classify each guess digit against the secret.
///
/// Per position: a positional match is `Hot`; otherwise a digit contained
/// anywhere in the secret is `Warm`; otherwise `Cold`. The rule is
/// deliberately "contains anywhere", not multiset consumption — with the
/// secret's distinct-digit invariant the two never disagree, and the
/// simpler rule is the documented contract.
///
/// Output is in guess-position order; sorting is a separate step
/// ([`sort_hints`]). Both arguments are guaranteed well-formed by their
/// types, so this is total.
pub fn classify(secret: &Secret, guess: &Guess) -> [Hint; 3] {
    let s = secret.as_str().as_bytes();
    let g = guess.as_str().as_bytes();

    let mut hints = [Hint::Cold; 3];
    for i in 0..3 {
        hints[i] = if g[i] == s[i] {
            Hint::Hot
        } else if s.contains(&g[i]) {
            Hint::Warm
        } else {
            Hint::Cold
        };
    }
    hints
}

/// Reorder hints ascending by rank: Hot, then Warm, then Cold.
///
/// Uses a stable sort; with only three indistinguishable rank buckets the
/// stability is unobservable, but it keeps the operation deterministic.
pub fn sort_hints(mut hints: [Hint; 3]) -> [Hint; 3] {
    hints.sort();
    hints
}

/// True iff the guess matches the secret character for character.
pub fn is_win(secret: &Secret, guess: &Guess) -> bool {
    secret.as_str() == guess.as_str()
}
