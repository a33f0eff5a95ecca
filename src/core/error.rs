//! Engine error types.
//!
//! Two kinds of failure leave the engine:
//!
//! - [`GameError`] — a violation of a game rule (wrong phase, bad bet
//!   cardinality, unknown monster id, missing card, unresolvable effect
//!   names). Always recoverable: the offending command is rejected and the
//!   session stays valid. Serialized for the transport as
//!   `{"kind": "violation", "message": ...}`.
//! - [`ContractError`] — a malformed request that no well-behaved caller
//!   produces, such as a string id where an integer is required. Signals a
//!   protocol bug; fatal to the single offending command only.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// A violation of a game rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameError {
    message: String,
}

impl GameError {
    /// Create a new rule violation with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The human-readable reason for the rejection.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GameError: {}", self.message)
    }
}

impl std::error::Error for GameError {}

impl Serialize for GameError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("GameError", 2)?;
        s.serialize_field("kind", "violation")?;
        s.serialize_field("message", &self.message)?;
        s.end()
    }
}

/// A caller/protocol bug, e.g. a target id of the wrong type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractError {
    message: String,
}

impl ContractError {
    /// Create a new contract violation with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The human-readable description of the protocol bug.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ContractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ContractError: {}", self.message)
    }
}

impl std::error::Error for ContractError {}

/// Union of the two failure kinds for operations that can produce either.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// Recoverable rule violation; report back to the caller.
    Rule(GameError),
    /// Protocol bug in the request; drop the command.
    Contract(ContractError),
}

impl EngineError {
    /// Get the inner rule violation, if that is what this is.
    #[must_use]
    pub fn as_rule(&self) -> Option<&GameError> {
        match self {
            EngineError::Rule(err) => Some(err),
            EngineError::Contract(_) => None,
        }
    }
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::Rule(err) => err.fmt(f),
            EngineError::Contract(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Rule(err) => Some(err),
            EngineError::Contract(err) => Some(err),
        }
    }
}

impl From<GameError> for EngineError {
    fn from(err: GameError) -> Self {
        EngineError::Rule(err)
    }
}

impl From<ContractError> for EngineError {
    fn from(err: ContractError) -> Self {
        EngineError::Contract(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_error_display() {
        let err = GameError::new("invalid phase");
        assert_eq!(err.to_string(), "GameError: invalid phase");
        assert_eq!(err.message(), "invalid phase");
    }

    #[test]
    fn test_game_error_payload_shape() {
        let err = GameError::new("bet must name 1 to 3 monsters");
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["kind"], "violation");
        assert_eq!(json["message"], "bet must name 1 to 3 monsters");
    }

    #[test]
    fn test_engine_error_as_rule() {
        let rule: EngineError = GameError::new("nope").into();
        assert!(rule.as_rule().is_some());

        let contract: EngineError = ContractError::new("bad id type").into();
        assert!(contract.as_rule().is_none());
    }
}
