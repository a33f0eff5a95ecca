//! The command boundary between transports and the session.
//!
//! A transport (websocket handler, test harness) deserializes client
//! payloads into [`Command`] values and applies them with
//! [`GameSession::handle_command`]. The returned [`CommandOutcome`] tells
//! the transport what to send back: a fresh view broadcast to every player,
//! a private view for the requester, or a scalar reply.
//!
//! Leadership is enforced here, not in the state machine, so embedders
//! driving [`GameSession`] directly are free to ignore seats entirely.

use serde::Deserialize;

use crate::cards::CardId;
use crate::core::{EngineError, GameError};

use super::game_session::GameSession;
use super::player::PlayerId;
use super::target::Target;
use super::view::GameView;

/// A client request against one session.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Command {
    /// Leader only. Start the game and open the first betting phase.
    Begin,
    /// Place or replace the sender's bets for this betting phase.
    Bet { monster_ids: Vec<String> },
    /// Leader only. Start the next fight round.
    NextRound,
    /// Leader only. Resolve the current fight round.
    EndRound,
    /// Cast a card from the sender's hand.
    Action {
        card_id: u32,
        #[serde(default)]
        target: Option<Target>,
    },
    /// Request a private snapshot of the session.
    State,
    /// Diagnostics: bump and return the session counter.
    Incr,
}

/// What the transport should do after a command succeeds.
#[derive(Debug)]
pub enum CommandOutcome {
    /// State changed; send every player their own fresh view.
    Broadcast,
    /// Reply to the requester only.
    View(Box<GameView>),
    /// Scalar reply to the requester only.
    Count(u64),
}

impl GameSession {
    fn require_leader(&self, player_id: PlayerId) -> Result<(), GameError> {
        match self.find_player(player_id) {
            Some(player) if player.is_leader => Ok(()),
            Some(_) => Err(GameError::new("Only the leader may do that")),
            None => Err(GameError::new(format!("{player_id} does not exist"))),
        }
    }

    /// Apply a command on behalf of a player.
    ///
    /// Rule violations come back as [`EngineError::Rule`] and should be
    /// serialized to the offending client; the session itself is unchanged
    /// by a rejected command.
    pub fn handle_command(
        &mut self,
        player_id: PlayerId,
        command: Command,
    ) -> Result<CommandOutcome, EngineError> {
        match command {
            Command::Begin => {
                self.require_leader(player_id)?;
                self.begin_game()?;
                Ok(CommandOutcome::Broadcast)
            }
            Command::Bet { monster_ids } => {
                self.place_player_bets(player_id, &monster_ids)?;
                Ok(CommandOutcome::Broadcast)
            }
            Command::NextRound => {
                self.require_leader(player_id)?;
                self.next_round()?;
                Ok(CommandOutcome::Broadcast)
            }
            Command::EndRound => {
                self.require_leader(player_id)?;
                self.end_round()?;
                Ok(CommandOutcome::Broadcast)
            }
            Command::Action { card_id, target } => {
                self.cast_card(player_id, CardId(card_id), target)?;
                Ok(CommandOutcome::Broadcast)
            }
            Command::State => Ok(CommandOutcome::View(Box::new(
                self.get_view(player_id, false),
            ))),
            Command::Incr => Ok(CommandOutcome::Count(self.incr())),
        }
    }
}
