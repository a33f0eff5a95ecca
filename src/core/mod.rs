//! Core types: errors and deterministic randomness.

mod error;
mod rng;

pub use error::{ContractError, EngineError, GameError};
pub use rng::GameRng;
