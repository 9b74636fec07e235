use rand::seq::SliceRandom;
use rand::Rng;

/// The hidden three-digit target of one game.
///
/// Invariants: exactly three ASCII decimal digits, all pairwise distinct,
/// first digit in `1..=9`. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    /// Generate a fresh secret using the thread-local RNG.
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::rng())
    }

    /// Generate a fresh secret from the given RNG.
    ///
    /// The first digit is drawn uniformly from `1..=9`; the remaining two
    /// are a uniform ordered 2-permutation of the other nine digits, taken
    /// as the prefix of a Fisher-Yates shuffle. Each of the 9*8*7 = 504
    /// valid secrets is equiprobable.
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let first: u8 = rng.random_range(1..=9);

        let mut rest: Vec<u8> = (0..=9).filter(|d| *d != first).collect();
        rest.shuffle(rng);

        Self(format!("{}{}{}", first, rest[0], rest[1]))
    }

    /// Reconstruct a secret loaded from the store. Returns `None` if the
    /// stored value violates the secret invariants.
    pub fn parse(s: &str) -> Option<Self> {
        let b = s.as_bytes();
        let well_formed = b.len() == 3
            && b[0].is_ascii_digit()
            && b[0] != b'0'
            && b[1].is_ascii_digit()
            && b[2].is_ascii_digit();
        let distinct = well_formed && b[0] != b[1] && b[0] != b[2] && b[1] != b[2];

        distinct.then(|| Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
