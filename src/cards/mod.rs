//! Spell cards: templates, per-session instances, and the inert effect
//! definitions they carry.

mod definition;
mod effect_def;
mod instance;

pub use definition::{CardDefinition, SpellKind};
pub use effect_def::{ArgValue, EffectDef};
pub use instance::{CardId, CardInstance};
