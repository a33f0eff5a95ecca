//! Game sessions: state machine, players, betting, casting, and views.
//!
//! The heart of the crate. [`GameSession`] owns all state for one running
//! game and exposes the operations clients drive through [`Command`];
//! [`SessionRegistry`] keys live sessions by join key for a hosting
//! transport.

pub mod command;
pub mod dealing;
pub mod entities;
pub mod game_session;
pub mod moves;
pub mod phase;
pub mod player;
pub mod registry;
pub mod target;
pub mod view;

pub use command::{Command, CommandOutcome};
pub use entities::{JudgeInstance, MonsterInstance};
pub use game_session::GameSession;
pub use moves::Move;
pub use phase::Phase;
pub use player::{PlayerId, PlayerSession};
pub use registry::{SessionRegistry, SharedSession};
pub use target::{ResolvedEntity, Target, TargetId, TargetKind, TargetRef};
pub use view::{GameView, MonsterView, PlayerView};
