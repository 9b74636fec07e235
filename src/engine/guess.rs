use thiserror::Error;

/// Raised when player input is not exactly three decimal digits.
///
/// This is the only recoverable error in the game core: the caller
/// re-prompts and the attempt counter is untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("guess must be exactly three decimal digits")]
pub struct InvalidGuessFormat;

/// A validated player guess: exactly three ASCII decimal digits.
/// Unlike [`Secret`](super::Secret), repeated digits are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess(String);

impl Guess {
    /// Validate raw player input and wrap it as a guess.
    pub fn parse(input: &str) -> Result<Self, InvalidGuessFormat> {
        if Self::is_valid(input) {
            Ok(Self(input.to_string()))
        } else {
            Err(InvalidGuessFormat)
        }
    }

    /// True iff the input is exactly three ASCII decimal digits. Any other
    /// length, whitespace, signs, or non-ASCII digits fail.
    pub fn is_valid(input: &str) -> bool {
        let b = input.as_bytes();
        b.len() == 3 && b.iter().all(|c| c.is_ascii_digit())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
