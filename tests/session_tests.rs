//! Session lifecycle, commands, and the registry.

use sorcerer::catalog::{self, deck};
use sorcerer::core::GameError;
use sorcerer::session::{Command, GameSession, PlayerId, SessionRegistry, Target};

/// Deck + discard + every hand + every attachment. Constant for the whole
/// life of a session once the game begins.
fn total_cards(session: &GameSession) -> usize {
    let in_hands: usize = session.players.iter().map(|p| p.card_count()).sum();
    let attached: usize = session.monsters.iter().map(|m| m.cards.len()).sum();
    let on_judge = session.judge.as_ref().map_or(0, |j| j.cards.len());
    session.spells.len() + session.discarded_spells.len() + in_hands + attached + on_judge
}

fn started_session(seed: u64, players: usize) -> GameSession {
    let mut session = GameSession::with_seed("****", seed);
    for i in 0..players {
        session.create_new_player(i == 0).unwrap();
    }
    session.begin_game().unwrap();
    session
}

#[test]
fn test_full_session_lifecycle() {
    let mut session = GameSession::with_seed("****", 100);
    let leader = session.create_new_player(true).unwrap();
    let other = session.create_new_player(false).unwrap();

    session.handle_command(leader, Command::Begin).unwrap();
    assert!(session.is_betting_phase());

    // Pin a judge with no restrictions so any first card is castable
    let template = sorcerer::catalog::judges::find("judge_aldric").unwrap();
    session.judge = Some(sorcerer::session::entities::JudgeInstance::spawn(template));

    let monster_id = session.monsters[0].monster_id.clone();
    for player_id in [leader, other] {
        session
            .handle_command(
                player_id,
                Command::Bet {
                    monster_ids: vec![monster_id.clone()],
                },
            )
            .unwrap();
    }

    session.handle_command(leader, Command::NextRound).unwrap();
    assert_eq!(session.round, 0);

    let card_id = session.find_player(other).unwrap().cards[0].card_id;
    session
        .handle_command(
            other,
            Command::Action {
                card_id: card_id.0,
                target: Some(Target::monster(monster_id.clone())),
            },
        )
        .unwrap();

    session.handle_command(leader, Command::EndRound).unwrap();
    assert!(session.is_betting_phase());
    assert!(session.players.iter().all(|p| !p.has_bet()));

    // Re-bet, then a second round tops hands back up to 8
    for player_id in [leader, other] {
        session
            .handle_command(
                player_id,
                Command::Bet {
                    monster_ids: vec![monster_id.clone()],
                },
            )
            .unwrap();
    }
    session.handle_command(leader, Command::NextRound).unwrap();
    assert_eq!(session.round, 1);
    assert_eq!(session.find_player(other).unwrap().card_count(), 8);
}

#[test]
fn test_card_conservation() {
    let mut session = started_session(101, 3);
    assert_eq!(total_cards(&session), deck::DECK_SIZE);

    let monster_id = session.monsters[0].monster_id.clone();
    for player in 0..3u32 {
        session
            .place_player_bets(PlayerId(player), &[monster_id.as_str()])
            .unwrap();
    }
    session.begin_round(0).unwrap();

    // Pin a judge with no restrictions so any first card is castable
    let template = sorcerer::catalog::judges::find("judge_aldric").unwrap();
    session.judge = Some(sorcerer::session::entities::JudgeInstance::spawn(template));

    let card_id = session.players[1].cards[0].card_id;
    session
        .cast_card(PlayerId(1), card_id, Some(Target::monster(monster_id)))
        .unwrap();
    assert_eq!(total_cards(&session), deck::DECK_SIZE);

    session.end_round().unwrap();
    assert_eq!(total_cards(&session), deck::DECK_SIZE);
}

#[test]
fn test_bets_validate_monsters_and_arity() {
    let mut session = started_session(102, 2);
    let leader = PlayerId(0);

    let err = session
        .place_player_bets(leader, &["kraken"])
        .unwrap_err();
    assert_eq!(err.message(), "No such monster: kraken");

    let err = session
        .place_player_bets::<&str>(leader, &[])
        .unwrap_err();
    assert_eq!(err.message(), "Bet must name between 1 and 3 monsters");

    let ids: Vec<String> = session
        .monsters
        .iter()
        .map(|m| m.monster_id.clone())
        .collect();
    let err = session
        .place_player_bets(leader, &[&ids[0], &ids[1], &ids[2], &ids[3]])
        .unwrap_err();
    assert_eq!(err.message(), "Bet must name between 1 and 3 monsters");

    // Re-betting replaces, never merges
    session.place_player_bets(leader, &[&ids[0], &ids[1]]).unwrap();
    session.place_player_bets(leader, &[&ids[2]]).unwrap();
    let bets = &session.find_player(leader).unwrap().monster_bets;
    assert_eq!(bets.as_slice(), [ids[2].clone()]);
}

#[test]
fn test_hand_size_shrinks_with_player_count() {
    let session = started_session(103, 5);
    for player in &session.players {
        assert_eq!(player.card_count(), 6);
    }
    assert_eq!(total_cards(&session), deck::DECK_SIZE);

    let session = started_session(104, 6);
    for player in &session.players {
        assert_eq!(player.card_count(), 5);
    }
}

#[test]
fn test_monsters_spawn_from_catalog() {
    let session = started_session(105, 2);
    for monster in &session.monsters {
        let template = catalog::monsters::find(&monster.monster_id).unwrap();
        assert_eq!(monster.health, template.power);
        assert_eq!(monster.prize, template.prize);
        assert!(monster.cards.is_empty());
    }
}

#[test]
fn test_registry_round_trip() {
    let registry = SessionRegistry::new();
    let (join_key, session) = registry.create_session();

    {
        let mut session = session.lock().unwrap();
        assert_eq!(session.join_key(), join_key);
        let leader = session.create_new_player(true).unwrap();
        let view = session.get_view(leader, true);
        assert_eq!(view.join_key.as_deref(), Some(join_key.as_str()));
    }

    let found = registry.find_session(&join_key).unwrap();
    assert_eq!(found.lock().unwrap().players.len(), 1);

    registry.remove_session(&join_key);
    assert!(registry.find_session(&join_key).is_none());
}

#[test]
fn test_rule_violation_wire_shape() {
    let err = GameError::new("Game has already started");
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "kind": "violation",
            "message": "Game has already started",
        })
    );
}

#[test]
fn test_command_errors_leave_state_intact() {
    let mut session = started_session(106, 2);
    let snapshot_phase = session.phase;
    let snapshot_total = total_cards(&session);

    // Not the leader
    let err = session
        .handle_command(PlayerId(1), Command::NextRound)
        .unwrap_err();
    assert!(err.as_rule().is_some());

    // Unknown player
    let err = session
        .handle_command(
            PlayerId(99),
            Command::Bet {
                monster_ids: vec!["goblin".into()],
            },
        )
        .unwrap_err();
    assert!(err.as_rule().is_some());

    assert_eq!(session.phase, snapshot_phase);
    assert_eq!(total_cards(&session), snapshot_total);
}

#[test]
fn test_views_differ_per_seat() {
    let session = started_session(107, 2);
    let view_a = session.get_view(PlayerId(0), false);
    let view_b = session.get_view(PlayerId(1), false);

    assert_ne!(view_a.player_id, view_b.player_id);
    assert_eq!(view_a.others.len(), 1);
    assert_eq!(view_b.others.len(), 1);
    // Both seats see the same public board
    assert_eq!(view_a.spell_count, view_b.spell_count);
    assert_eq!(view_a.monsters.len(), view_b.monsters.len());
}
