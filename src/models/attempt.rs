use serde::{Deserialize, Serialize};

/// One accepted guess and the hints it earned.
///
/// Attempts are append-only: `attempt_number` starts at 1 and increases by
/// one per accepted guess. Rejected (malformed) guesses are never recorded
/// and never consume an ordinal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attempt {
    pub id: i64,
    pub game_id: i64,
    pub attempt_number: u32,
    pub guess: String,
    /// Sorted hint tokens joined by a single space,
    /// e.g. `"Горячо Тепло Холодно"`.
    pub hints: String,
}
