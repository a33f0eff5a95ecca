//! Per-player session views.
//!
//! A [`GameView`] is the serialized snapshot a client receives after every
//! state change. It is built for one player: that player's hand and bets
//! appear in full, while every other player is reduced to counts. The join
//! key only appears when the caller asks for it, which happens exactly once
//! when the session is created.

use serde::Serialize;
use smallvec::SmallVec;

use crate::cards::{CardInstance, SpellKind};

use super::entities::{JudgeInstance, MonsterInstance};
use super::phase::Phase;
use super::player::PlayerId;

/// What one player is allowed to see of another.
#[derive(Clone, Debug, Serialize)]
pub struct PlayerView {
    pub player_id: PlayerId,
    pub card_count: usize,
    pub bet_count: usize,
}

/// Public snapshot of a monster, including spells attached to it.
#[derive(Clone, Debug, Serialize)]
pub struct MonsterView {
    pub monster_id: String,
    pub name: String,
    pub prize: i64,
    pub power: i64,
    pub health: i64,
    pub cards: Vec<CardInstance>,
}

impl From<&MonsterInstance> for MonsterView {
    fn from(monster: &MonsterInstance) -> Self {
        Self {
            monster_id: monster.monster_id.clone(),
            name: monster.name.clone(),
            prize: monster.prize,
            power: monster.power,
            health: monster.health,
            cards: monster.cards.clone(),
        }
    }
}

/// Snapshot of a session from one player's seat.
#[derive(Clone, Debug, Serialize)]
pub struct GameView {
    pub player_id: PlayerId,
    pub player_count: usize,
    pub game_phase: Phase,
    pub round: i32,
    pub turn: i32,
    /// Every other player, reduced to counts.
    pub others: Vec<PlayerView>,
    /// The viewing player's hand.
    pub cards: Vec<CardInstance>,
    /// The viewing player's current bets.
    pub bets: Vec<String>,
    pub monsters: Vec<MonsterView>,
    pub judge: Option<JudgeInstance>,
    pub spell_count: usize,
    pub discard_count: usize,
    pub created_at_unix: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_key: Option<String>,
}

impl GameView {
    /// Whether the view shows any card of the given kind in hand.
    #[must_use]
    pub fn holds_kind(&self, kind: SpellKind) -> bool {
        self.cards.iter().any(|c| c.spell_kind == kind)
    }

    /// Names of monsters currently bet on, deduplicated.
    #[must_use]
    pub fn bet_monsters(&self) -> SmallVec<[&str; 3]> {
        let mut seen: SmallVec<[&str; 3]> = SmallVec::new();
        for bet in &self.bets {
            if !seen.contains(&bet.as_str()) {
                seen.push(bet.as_str());
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::GameSession;

    #[test]
    fn test_view_redacts_other_hands() {
        let mut session = GameSession::with_seed("****", 11);
        let leader = session.create_new_player(true).unwrap();
        let other = session.create_new_player(false).unwrap();
        session.begin_game().unwrap();

        let view = session.get_view(leader, false);

        assert_eq!(view.player_id, leader);
        assert_eq!(view.player_count, 2);
        assert_eq!(view.cards.len(), 8);
        assert_eq!(view.others.len(), 1);
        assert_eq!(view.others[0].player_id, other);
        assert_eq!(view.others[0].card_count, 8);
        assert!(view.join_key.is_none());
    }

    #[test]
    fn test_view_join_key_opt_in() {
        let mut session = GameSession::with_seed("secret-key", 11);
        let leader = session.create_new_player(true).unwrap();

        let view = session.get_view(leader, true);
        assert_eq!(view.join_key.as_deref(), Some("secret-key"));

        let json = serde_json::to_value(&session.get_view(leader, false)).unwrap();
        assert!(json.get("join_key").is_none());
    }

    #[test]
    fn test_holds_kind_reads_own_hand() {
        use crate::cards::{CardDefinition, CardId, CardInstance};

        let mut session = GameSession::with_seed("****", 4);
        let leader = session.create_new_player(true).unwrap();
        session.begin_game().unwrap();

        let player = session.find_player_mut(leader).unwrap();
        player.cards.clear();
        let def = CardDefinition::new("Zap", SpellKind::Direct);
        player.cards.push(CardInstance::from_definition(CardId(1000), &def));

        let view = session.get_view(leader, false);
        assert!(view.holds_kind(SpellKind::Direct));
        assert!(!view.holds_kind(SpellKind::Support));
        assert!(!view.holds_kind(SpellKind::Enchant));
    }

    #[test]
    fn test_bet_monsters_dedup() {
        let mut session = GameSession::with_seed("****", 3);
        let leader = session.create_new_player(true).unwrap();
        session.begin_game().unwrap();

        let monster_id = session.monsters[0].monster_id.clone();
        session
            .place_player_bets(leader, &[monster_id.as_str(), monster_id.as_str()])
            .unwrap();

        let view = session.get_view(leader, false);
        assert_eq!(view.bet_monsters().len(), 1);
    }
}
