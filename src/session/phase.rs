//! Session phase state machine positions.

use serde::{Deserialize, Serialize};

/// Stage of the game session.
///
/// Phases only ever advance `Lobby → Setup → Betting → (Fight → Betting)*`.
/// `Lobby` is initial and `Setup` transient; `Betting` and `Fight` alternate
/// until the round cap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Players joining.
    Lobby,
    /// Engine selecting the judge and monsters.
    Setup,
    /// Players choosing monsters to bet on.
    Betting,
    /// Players casting spell cards.
    Fight,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Lobby => "lobby",
            Phase::Setup => "setup",
            Phase::Betting => "betting",
            Phase::Fight => "fight",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Phase::Lobby.to_string(), "lobby");
        assert_eq!(Phase::Fight.to_string(), "fight");
    }

    #[test]
    fn test_serde() {
        assert_eq!(serde_json::to_string(&Phase::Betting).unwrap(), "\"betting\"");
    }
}
