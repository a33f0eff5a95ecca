//! Static content catalogs: monsters, judges, and the standard deck.
//!
//! The engine treats everything here as read-only seed data. Mutable
//! per-session entities are instantiated fresh from these templates; the
//! catalogs themselves are never modified, not even while sampling.

pub mod deck;
pub mod judges;
pub mod monsters;

pub use judges::JudgeTemplate;
pub use monsters::MonsterTemplate;

/// Monsters drawn into each session at setup.
pub const MONSTERS_PER_SESSION: usize = 5;

/// Maximum number of fight rounds in a session.
pub const MAX_ROUNDS: i32 = 3;

/// Money each player starts with.
pub const START_MONEY: i64 = 2;
