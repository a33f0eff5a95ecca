//! Per-player server-side state.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardId, CardInstance};

/// Player identifier, assigned sequentially within a session and never
/// reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player id.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player-{}", self.0)
    }
}

/// Server-side state for one joined player.
///
/// Sensitive: the hand and bets must not be shown to other players as-is.
/// Other players only ever see counts, via the redacted view.
#[derive(Clone, Debug, Serialize)]
pub struct PlayerSession {
    /// Unique, stable id within the session.
    pub player_id: PlayerId,

    /// Current money.
    pub money: i64,

    /// Exactly one player per session leads (began the session).
    pub is_leader: bool,

    /// Hand; mutated only by dealing and casting.
    pub cards: Vec<CardInstance>,

    /// Monster ids bet on this betting phase. Overwritten per bet, cleared
    /// when the round ends; never merged across rounds.
    pub monster_bets: SmallVec<[String; 3]>,
}

impl PlayerSession {
    /// Create a fresh player with an empty hand and no bets.
    #[must_use]
    pub fn new(player_id: PlayerId, money: i64, is_leader: bool) -> Self {
        Self {
            player_id,
            money,
            is_leader,
            cards: Vec::new(),
            monster_bets: SmallVec::new(),
        }
    }

    /// Number of cards in hand.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Whether the player has placed at least one bet this betting phase.
    #[must_use]
    pub fn has_bet(&self) -> bool {
        !self.monster_bets.is_empty()
    }

    /// Find a card in the hand by id.
    #[must_use]
    pub fn find_card(&self, card_id: CardId) -> Option<&CardInstance> {
        self.cards.iter().find(|c| c.card_id == card_id)
    }

    /// Remove and return a card from the hand.
    #[must_use]
    pub fn take_card(&mut self, card_id: CardId) -> Option<CardInstance> {
        let pos = self.cards.iter().position(|c| c.card_id == card_id)?;
        Some(self.cards.remove(pos))
    }
}
