//! The game session state machine.
//!
//! One [`GameSession`] owns everything about one running game: players,
//! monsters, the judge, the deck and discard, the move log, and the RNG.
//! The session performs no internal synchronization — all mutating calls on
//! one session must be serialized by the caller (see
//! [`SessionRegistry`](super::SessionRegistry), which wraps each session in
//! a mutex).
//!
//! Phases only ever advance `Lobby → Setup → Betting → (Fight → Betting)*`.
//! Every operation validates before it mutates, so a rejected command
//! leaves the session exactly as it found it.

use std::time::SystemTime;

use log::warn;
use smallvec::SmallVec;

use crate::cards::{CardId, CardInstance};
use crate::catalog::{self, deck, judges, monsters};
use crate::core::{EngineError, GameError, GameRng};
use crate::effects::{self, EffectContext};

use super::dealing::{deal_cards, determine_hand_size};
use super::entities::{JudgeInstance, MonsterInstance};
use super::moves::Move;
use super::phase::Phase;
use super::player::{PlayerId, PlayerSession};
use super::target::{ResolvedEntity, Target, TargetKind, TargetRef};
use super::view::{GameView, MonsterView, PlayerView};

/// State for a single game session.
pub struct GameSession {
    join_key: String,

    /// Current phase of the state machine.
    pub phase: Phase,

    /// Fight round counter; -1 outside the fight phases.
    pub round: i32,

    /// Id of the player whose turn it is; -1 outside the fight phases.
    pub turn: i32,

    /// Money each joining player starts with.
    pub start_money: i64,

    /// Players in join order. Append-only during the lobby.
    pub players: Vec<PlayerSession>,

    /// Monsters chosen at setup; instantiated fresh for this session.
    pub monsters: Vec<MonsterInstance>,

    /// The judge chosen at setup.
    pub judge: Option<JudgeInstance>,

    /// Undealt remainder of the deck. Top of the deck is the end.
    pub spells: Vec<CardInstance>,

    /// Spells resolved or spent; disjoint from the deck.
    pub discarded_spells: Vec<CardInstance>,

    /// When the session was created.
    pub created_at: SystemTime,

    moves: Vec<Move>,
    counter: u64,
    player_counter: u32,
    card_counter: u32,
    rng: GameRng,
}

impl GameSession {
    /// Create a session seeded from OS entropy.
    #[must_use]
    pub fn new(join_key: impl Into<String>) -> Self {
        Self::with_rng(join_key, GameRng::from_entropy())
    }

    /// Create a session with a fixed seed, for deterministic replays.
    #[must_use]
    pub fn with_seed(join_key: impl Into<String>, seed: u64) -> Self {
        Self::with_rng(join_key, GameRng::new(seed))
    }

    fn with_rng(join_key: impl Into<String>, rng: GameRng) -> Self {
        Self {
            join_key: join_key.into(),
            phase: Phase::Lobby,
            round: -1,
            turn: -1,
            start_money: catalog::START_MONEY,
            players: Vec::new(),
            monsters: Vec::new(),
            judge: None,
            spells: Vec::new(),
            discarded_spells: Vec::new(),
            created_at: SystemTime::now(),
            moves: Vec::new(),
            counter: 0,
            player_counter: 0,
            card_counter: 0,
            rng,
        }
    }

    /// The key players use to join this session. Sensitive.
    #[must_use]
    pub fn join_key(&self) -> &str {
        &self.join_key
    }

    /// Whether players may still join.
    #[must_use]
    pub fn is_lobby_phase(&self) -> bool {
        self.phase == Phase::Lobby
    }

    /// Whether bets are currently legal.
    #[must_use]
    pub fn is_betting_phase(&self) -> bool {
        self.phase == Phase::Betting
    }

    /// Whether card casts are currently legal.
    #[must_use]
    pub fn is_fight_phase(&self) -> bool {
        self.phase == Phase::Fight
    }

    // === Players ===

    /// Add a player with the next sequential id.
    ///
    /// Joins are only legal during the lobby, and a session has exactly one
    /// leader.
    pub fn create_new_player(&mut self, is_leader: bool) -> Result<PlayerId, GameError> {
        if self.phase != Phase::Lobby {
            return Err(GameError::new("Game has already started"));
        }
        if is_leader && self.players.iter().any(|p| p.is_leader) {
            return Err(GameError::new("Session already has a leader"));
        }

        let player_id = PlayerId(self.player_counter);
        self.player_counter += 1;

        self.players
            .push(PlayerSession::new(player_id, self.start_money, is_leader));

        self.push_move(
            Move::new("player_join")
                .with_kwarg("player_id", player_id.0)
                .with_kwarg("is_leader", is_leader),
        );

        Ok(player_id)
    }

    /// Find a player by id.
    #[must_use]
    pub fn find_player(&self, player_id: PlayerId) -> Option<&PlayerSession> {
        self.players.iter().find(|p| p.player_id == player_id)
    }

    /// Find a player by id, mutably.
    pub fn find_player_mut(&mut self, player_id: PlayerId) -> Option<&mut PlayerSession> {
        self.players.iter_mut().find(|p| p.player_id == player_id)
    }

    /// Find a card in a player's hand.
    #[must_use]
    pub fn find_player_card(&self, player_id: PlayerId, card_id: CardId) -> Option<&CardInstance> {
        self.find_player(player_id)?.find_card(card_id)
    }

    // === Monsters ===

    /// Find a chosen monster by its string id.
    #[must_use]
    pub fn find_monster(&self, monster_id: &str) -> Option<&MonsterInstance> {
        self.monsters.iter().find(|m| m.monster_id == monster_id)
    }

    /// Find a chosen monster by its string id, mutably.
    pub fn find_monster_mut(&mut self, monster_id: &str) -> Option<&mut MonsterInstance> {
        self.monsters.iter_mut().find(|m| m.monster_id == monster_id)
    }

    // === State machine ===

    /// Start the game: `Lobby → Setup → Betting`.
    ///
    /// Selects one judge and a sample of distinct monsters uniformly at
    /// random, builds and shuffles a fresh standard deck, and deals each
    /// player a hand sized by the player count.
    pub fn begin_game(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::Lobby {
            return Err(GameError::new("invalid phase"));
        }
        self.phase = Phase::Setup;

        // 1. Choose the judge
        let judge_idx = self.rng.gen_range(0..judges::JUDGES.len());
        let judge = JudgeInstance::spawn(&judges::JUDGES[judge_idx]);
        let judge_id = judge.judge_id.clone();
        self.judge = Some(judge);

        // 2. Choose monsters, sampling the catalog by index
        let picks = self
            .rng
            .sample_indices(monsters::MONSTERS.len(), catalog::MONSTERS_PER_SESSION);
        self.monsters = picks
            .into_iter()
            .map(|i| MonsterInstance::spawn(&monsters::MONSTERS[i]))
            .collect();

        // 3. Build and shuffle a fresh deck
        let mut cards = Vec::with_capacity(deck::DECK_SIZE);
        for definition in deck::standard_deck() {
            let card_id = self.alloc_card_id();
            cards.push(CardInstance::from_definition(card_id, &definition));
        }
        self.rng.shuffle(&mut cards);
        self.spells = cards;

        // 4. Deal
        let hand_size = determine_hand_size(self.players.len());
        deal_cards(&mut self.spells, &mut self.players, hand_size);

        self.phase = Phase::Betting;
        self.push_move(
            Move::new("begin_game")
                .with_kwarg("judge_id", judge_id)
                .with_kwarg("hand_size", hand_size as i64),
        );
        Ok(())
    }

    /// Start fight round `round`: `Betting → Fight`.
    ///
    /// Every player must have placed at least one bet. A uniformly random
    /// player starts; `turn` is set to their id.
    pub fn begin_round(&mut self, round: i32) -> Result<(), GameError> {
        if !matches!(self.phase, Phase::Betting | Phase::Fight) {
            return Err(GameError::new("invalid phase"));
        }
        if self.players.is_empty() {
            return Err(GameError::new("Session has no players"));
        }
        if let Some(player) = self.players.iter().find(|p| !p.has_bet()) {
            return Err(GameError::new(format!(
                "{} has not placed a bet",
                player.player_id
            )));
        }
        if round >= catalog::MAX_ROUNDS {
            // The end-game path does not exist yet.
            return Err(GameError::new("round cap reached"));
        }

        let starter_idx = self.rng.gen_range(0..self.players.len());
        let starter = self.players[starter_idx].player_id;

        self.round = round;
        self.turn = starter.0 as i32;
        self.phase = Phase::Fight;

        self.push_move(
            Move::new("begin_round")
                .with_arg(round as i64)
                .with_kwarg("turn", starter.0),
        );
        Ok(())
    }

    /// Start the next round and top every hand back up.
    ///
    /// Draws continue from the existing deck order; the deck is never
    /// reshuffled after `begin_game`.
    pub fn next_round(&mut self) -> Result<(), GameError> {
        self.begin_round(self.round + 1)?;

        let hand_size = determine_hand_size(self.players.len());
        deal_cards(&mut self.spells, &mut self.players, hand_size);
        Ok(())
    }

    /// End the current fight round: `Fight → Betting`.
    ///
    /// Dispatches the round-end hook for every spell attached to a monster
    /// (in cast order), moves resolved spells to the discard, and clears
    /// all bets for the next betting phase.
    pub fn end_round(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::Fight {
            return Err(GameError::new("invalid phase"));
        }

        // Detach, dispatch, and discard one card at a time, so a failed
        // hook cannot strand cards outside every zone: the failing card is
        // already in the discard, undispatched cards are still attached.
        let monster_ids: Vec<String> = self
            .monsters
            .iter()
            .map(|m| m.monster_id.clone())
            .collect();
        for monster_id in monster_ids {
            loop {
                let card = match self.find_monster_mut(&monster_id) {
                    Some(monster) if !monster.cards.is_empty() => monster.cards.remove(0),
                    _ => break,
                };

                let caster = card.owner.unwrap_or(PlayerId(0));
                let target = Some(Target::monster(monster_id.clone()));
                let resolved = Some(TargetRef::Monster(monster_id.clone()));

                let mut ctx = EffectContext::new(self, card, target, resolved, caster);
                let outcome = effects::on_round_end(&mut ctx);

                let card = ctx.spell_card;
                self.discarded_spells.push(card);
                outcome?;
            }
        }

        for player in &mut self.players {
            player.monster_bets.clear();
        }

        let round = self.round;
        self.phase = Phase::Betting;
        self.push_move(Move::new("end_round").with_arg(round as i64));
        Ok(())
    }

    // === Betting ===

    /// Place a player's bets for this betting phase.
    ///
    /// A bet names 1 to 3 monsters chosen for this session. Re-betting
    /// overwrites the previous bet set; bets are never merged.
    pub fn place_player_bets<S: AsRef<str>>(
        &mut self,
        player_id: PlayerId,
        monster_ids: &[S],
    ) -> Result<(), GameError> {
        if self.find_player(player_id).is_none() {
            return Err(GameError::new(format!("{player_id} does not exist")));
        }
        if self.phase != Phase::Betting {
            warn!("{player_id} placed a bet outside of the betting phase");
            return Err(GameError::new(
                "Bets are only valid during the betting phase",
            ));
        }
        if monster_ids.is_empty() || monster_ids.len() > 3 {
            return Err(GameError::new("Bet must name between 1 and 3 monsters"));
        }
        for id in monster_ids {
            let id = id.as_ref();
            if self.find_monster(id).is_none() {
                return Err(GameError::new(format!("No such monster: {id}")));
            }
        }

        let bets: SmallVec<[String; 3]> = monster_ids
            .iter()
            .map(|id| id.as_ref().to_string())
            .collect();
        let count = bets.len();

        if let Some(player) = self.find_player_mut(player_id) {
            player.monster_bets = bets;
        }

        self.push_move(
            Move::new("place_bets")
                .with_kwarg("player_id", player_id.0)
                .with_kwarg("count", count as i64),
        );
        Ok(())
    }

    // === Casting ===

    /// Cast a card from a player's hand.
    ///
    /// Validates everything — phase, target, judge restrictions, effect
    /// names — before mutating, so a rejected cast leaves the session
    /// untouched. On success the card leaves the hand and its cast hooks
    /// run; a card that did not attach itself anywhere goes straight to the
    /// discard.
    pub fn cast_card(
        &mut self,
        player_id: PlayerId,
        card_id: CardId,
        target: Option<Target>,
    ) -> Result<(), EngineError> {
        if self.phase != Phase::Fight {
            return Err(GameError::new("invalid phase").into());
        }
        if self.find_player(player_id).is_none() {
            return Err(GameError::new(format!("{player_id} does not exist")).into());
        }

        let resolved = match &target {
            Some(t) => Some(self.resolve_target(t, player_id)?.to_ref()),
            None => None,
        };

        let card = self
            .find_player_card(player_id, card_id)
            .cloned()
            .ok_or_else(|| {
                GameError::new(format!("{player_id} does not have card {card_id}"))
            })?;

        if let Some(judge) = &self.judge {
            judge.allows(&card)?;
        }
        effects::resolve_effects(&card.effects)?;

        // Validation done; mutate.
        let card = self
            .find_player_mut(player_id)
            .and_then(|p| p.take_card(card_id))
            .ok_or_else(|| {
                GameError::new(format!("{player_id} does not have card {card_id}"))
            })?;

        self.push_move(
            Move::new("spell_cast")
                .with_kwarg("player_id", player_id.0)
                .with_kwarg("card_id", card_id.0),
        );

        let mut ctx = EffectContext::new(self, card, target, resolved, player_id);
        effects::on_cast(&mut ctx)?;

        let card = ctx.spell_card;
        if !self.card_attached(card.card_id) {
            self.discarded_spells.push(card);
        }
        Ok(())
    }

    fn card_attached(&self, card_id: CardId) -> bool {
        let on_monster = self
            .monsters
            .iter()
            .any(|m| m.cards.iter().any(|c| c.card_id == card_id));
        let on_judge = self
            .judge
            .as_ref()
            .is_some_and(|j| j.cards.iter().any(|c| c.card_id == card_id));
        on_monster || on_judge
    }

    // === Target resolution ===

    /// Map an abstract target descriptor to the concrete in-session entity.
    ///
    /// A wrong id type is a contract violation; an id of the right type
    /// that names nothing is a rule violation. Spell targets are searched
    /// in every card holder's attachments (monsters in roster order, then
    /// the judge) and finally the caster's own hand.
    pub fn resolve_target(
        &self,
        target: &Target,
        caster: PlayerId,
    ) -> Result<ResolvedEntity<'_>, EngineError> {
        match target.kind {
            TargetKind::Monster => {
                let id = target.id.as_str(TargetKind::Monster)?;
                self.find_monster(id)
                    .map(ResolvedEntity::Monster)
                    .ok_or_else(|| GameError::new(format!("No such monster: {id}")).into())
            }
            TargetKind::Judge => {
                let _ = target.id.as_int(TargetKind::Judge)?;
                self.judge
                    .as_ref()
                    .map(ResolvedEntity::Judge)
                    .ok_or_else(|| GameError::new("No judge has been chosen").into())
            }
            TargetKind::Player => {
                let id = target.id.as_int(TargetKind::Player)?;
                let player_id = u32::try_from(id).ok().map(PlayerId);
                player_id
                    .and_then(|p| self.find_player(p))
                    .map(ResolvedEntity::Player)
                    .ok_or_else(|| GameError::new(format!("No such player: {id}")).into())
            }
            TargetKind::Spell => {
                let id = target.id.as_int(TargetKind::Spell)?;
                let card_id = u32::try_from(id).ok().map(CardId);
                card_id
                    .and_then(|c| self.find_spell(c, caster))
                    .map(ResolvedEntity::Spell)
                    .ok_or_else(|| {
                        GameError::new(format!("No such spell in play or hand: {id}")).into()
                    })
            }
        }
    }

    fn find_spell(&self, card_id: CardId, caster: PlayerId) -> Option<&CardInstance> {
        for monster in &self.monsters {
            if let Some(card) = monster.cards.iter().find(|c| c.card_id == card_id) {
                return Some(card);
            }
        }
        if let Some(judge) = &self.judge {
            if let Some(card) = judge.cards.iter().find(|c| c.card_id == card_id) {
                return Some(card);
            }
        }
        self.find_player(caster)?.find_card(card_id)
    }

    // === Move log ===

    /// Append a record to the audit log. The single write path for moves.
    pub(crate) fn push_move(&mut self, record: Move) {
        self.moves.push(record);
    }

    /// The append-only audit log.
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    // === Misc ===

    /// Increment the diagnostics counter. Test command from the transport.
    pub fn incr(&mut self) -> u64 {
        self.counter += 1;
        self.counter
    }

    fn alloc_card_id(&mut self) -> CardId {
        let id = CardId(self.card_counter);
        self.card_counter += 1;
        id
    }

    // === Views ===

    /// Create a redacted view of the session for one player.
    ///
    /// The view carries the requesting player's own hand and bets, but only
    /// counts for everyone else. The join key is included only when
    /// explicitly requested (once, at session creation, to hand the key to
    /// the leader).
    #[must_use]
    pub fn get_view(&self, player_id: PlayerId, include_join_key: bool) -> GameView {
        let mut others = Vec::new();
        let mut cards = Vec::new();
        let mut bets = Vec::new();

        for player in &self.players {
            if player.player_id == player_id {
                cards = player.cards.clone();
                bets = player.monster_bets.to_vec();
            } else {
                others.push(PlayerView {
                    player_id: player.player_id,
                    card_count: player.card_count(),
                    bet_count: player.monster_bets.len(),
                });
            }
        }

        let monsters = self.monsters.iter().map(MonsterView::from).collect();

        let created_at_unix = self
            .created_at
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        GameView {
            player_id,
            player_count: self.players.len(),
            game_phase: self.phase,
            round: self.round,
            turn: self.turn,
            others,
            cards,
            bets,
            monsters,
            judge: self.judge.clone(),
            spell_count: self.spells.len(),
            discard_count: self.discarded_spells.len(),
            created_at_unix,
            join_key: include_join_key.then(|| self.join_key.clone()),
        }
    }
}
