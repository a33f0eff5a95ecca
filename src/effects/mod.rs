//! The effect system.
//!
//! Cards declare inert [`EffectDef`](crate::cards::EffectDef)s; at dispatch
//! time the registry resolves each name to an [`EffectKind`], instantiates
//! it with the stored arguments, and invokes the requested lifecycle hook.

mod context;
mod dispatcher;
mod effect;
mod registry;

pub use context::EffectContext;
pub use dispatcher::{on_cast, on_round_end};
pub use effect::Effect;
pub use registry::{resolve_effects, EffectKind};
