use std::fmt;

use serde::{Deserialize, Serialize};

/// Current app mode, persisted with the game snapshot.
///
/// The original record format also stored a transient `ROUND_INPUT` mode;
/// snapshots carrying it deserialize as [`Mode::Game`] so a restored session
/// always lands on the score table rather than mid-entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mode {
    Setup,
    #[serde(alias = "ROUND_INPUT")]
    Game,
}

impl Mode {
    /// Returns `true` while still collecting player names.
    pub fn is_setup(&self) -> bool {
        matches!(self, Mode::Setup)
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Setup
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Setup => write!(f, "setup"),
            Mode::Game => write!(f, "game"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_uses_screaming_case() {
        assert_eq!(serde_json::to_string(&Mode::Setup).unwrap(), "\"SETUP\"");
        assert_eq!(serde_json::to_string(&Mode::Game).unwrap(), "\"GAME\"");
    }

    #[test]
    fn legacy_round_input_normalizes_to_game() {
        let mode: Mode = serde_json::from_str("\"ROUND_INPUT\"").unwrap();
        assert_eq!(mode, Mode::Game);
    }

    #[test]
    fn default_is_setup() {
        assert!(Mode::default().is_setup());
    }
}
