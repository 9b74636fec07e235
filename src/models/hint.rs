use serde::{Deserialize, Serialize};

/// Per-position feedback for one guessed digit.
///
/// The variant order defines the display rank: `Hot < Warm < Cold`. Sorted
/// hint sequences are always non-decreasing in that rank, so the derived
/// `Ord` doubles as the sort key.
///
/// The serialized form is fixed for compatibility with existing saved
/// games: `Горячо` (Hot), `Тепло` (Warm), `Холодно` (Cold).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Hint {
    /// Digit is correct and in the correct position.
    #[serde(rename = "Горячо")]
    Hot,
    /// Digit is present in the secret, but at another position.
    #[serde(rename = "Тепло")]
    Warm,
    /// Digit does not occur in the secret at all.
    #[serde(rename = "Холодно")]
    Cold,
}

impl Hint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hot => "Горячо",
            Self::Warm => "Тепло",
            Self::Cold => "Холодно",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Горячо" => Some(Self::Hot),
            "Тепло" => Some(Self::Warm),
            "Холодно" => Some(Self::Cold),
            _ => None,
        }
    }

    /// Join three hints into the single-field storage form,
    /// e.g. `"Горячо Тепло Холодно"`.
    pub fn join(hints: &[Hint; 3]) -> String {
        hints.map(|h| h.as_str()).join(" ")
    }
}

impl std::fmt::Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
