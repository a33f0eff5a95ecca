//! Per-cast effect context.
//!
//! Constructed once per cast and never persisted. Bundles everything an
//! effect hook may touch: the session, the spell card that declared the
//! effect, the target descriptor, the resolved target key, and the caster.

use crate::cards::CardInstance;
use crate::session::entities::MonsterInstance;
use crate::session::player::PlayerId;
use crate::session::target::{Target, TargetRef};
use crate::session::GameSession;

/// Mutable state handed to effect lifecycle hooks.
///
/// The resolved target is carried as an owned [`TargetRef`] key rather than
/// a borrow, so hooks can re-borrow the entity mutably through the session.
pub struct EffectContext<'a> {
    /// The session being mutated.
    pub session: &'a mut GameSession,

    /// The spell card whose effects are being dispatched.
    pub spell_card: CardInstance,

    /// Targeting information as the caster supplied it.
    pub target: Option<Target>,

    /// Key of the resolved target entity.
    pub resolved: Option<TargetRef>,

    /// The player that cast the spell card.
    pub caster: PlayerId,
}

impl<'a> EffectContext<'a> {
    /// Build a context for one cast.
    pub fn new(
        session: &'a mut GameSession,
        spell_card: CardInstance,
        target: Option<Target>,
        resolved: Option<TargetRef>,
        caster: PlayerId,
    ) -> Self {
        Self {
            session,
            spell_card,
            target,
            resolved,
            caster,
        }
    }

    /// The targeted monster's id, when the target resolved to a monster.
    #[must_use]
    pub fn target_monster_id(&self) -> Option<&str> {
        match &self.resolved {
            Some(TargetRef::Monster(id)) => Some(id),
            _ => None,
        }
    }

    /// Mutable borrow of the targeted monster, when there is one.
    pub fn target_monster_mut(&mut self) -> Option<&mut MonsterInstance> {
        match &self.resolved {
            Some(TargetRef::Monster(id)) => {
                let id = id.clone();
                self.session.find_monster_mut(&id)
            }
            _ => None,
        }
    }
}
