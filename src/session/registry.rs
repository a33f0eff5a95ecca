//! Process-wide session table.
//!
//! The registry maps join keys to live sessions. Each session sits behind
//! its own mutex, so commands against different sessions never contend;
//! the outer lock guards only the table itself and is held just long
//! enough to clone an `Arc`.

use std::sync::{Arc, Mutex};

use log::info;
use rustc_hash::FxHashMap;

use crate::core::GameRng;

use super::game_session::GameSession;

/// Length of generated join keys.
const JOIN_KEY_LEN: usize = 16;

/// Shared handle to one session.
pub type SharedSession = Arc<Mutex<GameSession>>;

/// All live sessions in this process, keyed by join key.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: Mutex<FxHashMap<String, SharedSession>>,
}

impl SessionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session under a fresh random join key and return both.
    ///
    /// The key doubles as the only credential for the session, so it is
    /// drawn from its own entropy-seeded generator rather than any
    /// session's replayable RNG.
    pub fn create_session(&self) -> (String, SharedSession) {
        let mut keygen = GameRng::from_entropy();
        let mut sessions = match self.sessions.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        let join_key = loop {
            let candidate = keygen.alphanumeric(JOIN_KEY_LEN);
            if !sessions.contains_key(&candidate) {
                break candidate;
            }
        };

        let session = Arc::new(Mutex::new(GameSession::new(join_key.clone())));
        sessions.insert(join_key.clone(), Arc::clone(&session));
        info!("created session {join_key}");
        (join_key, session)
    }

    /// Look up a session by its join key.
    #[must_use]
    pub fn find_session(&self, join_key: &str) -> Option<SharedSession> {
        let sessions = match self.sessions.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        sessions.get(join_key).map(Arc::clone)
    }

    /// Drop a finished session. Outstanding handles stay valid until the
    /// last `Arc` goes away.
    pub fn remove_session(&self, join_key: &str) -> Option<SharedSession> {
        let mut sessions = match self.sessions.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let removed = sessions.remove(join_key);
        if removed.is_some() {
            info!("removed session {join_key}");
        }
        removed
    }

    /// Number of live sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        let sessions = match self.sessions.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
