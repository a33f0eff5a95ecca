//! # Sorcerer
//!
//! A session engine for a turn-based multiplayer card game. Players join a
//! session, bet money on monsters, and cast spell cards that attach effects
//! to monsters; a judge restricts which kinds of spell are legal. Rounds
//! alternate between a betting phase and a fight phase, with attached
//! effects resolving at the end of each round.
//!
//! The crate is transport-agnostic: it owns the rules, state, and a
//! JSON-friendly command boundary, and leaves sockets to the embedder.
//!
//! ## Layout
//!
//! - [`core`]: errors and the deterministic RNG.
//! - [`catalog`]: static monster, judge, and deck definitions.
//! - [`cards`]: card definitions and dealt card instances.
//! - [`effects`]: the effect registry and its cast/round-end hooks.
//! - [`session`]: the game session state machine, commands, and views.
//!
//! ## Quick start
//!
//! ```
//! use sorcerer::session::{Command, GameSession};
//!
//! let mut session = GameSession::with_seed("demo", 42);
//! let leader = session.create_new_player(true)?;
//! session.create_new_player(false)?;
//!
//! session.handle_command(leader, Command::Begin)?;
//! assert!(session.is_betting_phase());
//! # Ok::<(), sorcerer::core::EngineError>(())
//! ```

pub mod cards;
pub mod catalog;
pub mod core;
pub mod effects;
pub mod session;

pub use cards::{CardDefinition, CardId, CardInstance, SpellKind};
pub use core::{ContractError, EngineError, GameError};
pub use session::{Command, CommandOutcome, GameSession, PlayerId, SessionRegistry};
