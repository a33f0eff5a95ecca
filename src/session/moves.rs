//! The append-only move log.
//!
//! Every state-changing action appends one [`Move`], giving each session a
//! replayable audit trail. Records are immutable once appended, and only
//! the session's own append method writes them.

use rustc_hash::FxHashMap;
use serde::Serialize;
use smallvec::SmallVec;

use crate::cards::ArgValue;

/// One immutable audit-log record.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Move {
    /// What happened, e.g. `"power_apply"`.
    pub move_id: String,

    /// Positional payload.
    pub args: SmallVec<[ArgValue; 2]>,

    /// Keyword payload.
    pub kwargs: FxHashMap<String, ArgValue>,
}

impl Move {
    /// Create a record with an empty payload.
    pub fn new(move_id: impl Into<String>) -> Self {
        Self {
            move_id: move_id.into(),
            args: SmallVec::new(),
            kwargs: FxHashMap::default(),
        }
    }

    /// Append a positional payload value.
    #[must_use]
    pub fn with_arg(mut self, value: impl Into<ArgValue>) -> Self {
        self.args.push(value.into());
        self
    }

    /// Set a keyword payload value.
    #[must_use]
    pub fn with_kwarg(mut self, key: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.kwargs.insert(key.into(), value.into());
        self
    }

    /// Look up an integer keyword payload value.
    #[must_use]
    pub fn int_kwarg(&self, key: &str) -> Option<i64> {
        self.kwargs.get(key).and_then(ArgValue::as_int)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Move({}", self.move_id)?;
        for arg in &self.args {
            write!(f, ", {arg:?}")?;
        }
        // Sorted for a stable rendering
        let mut kwargs: Vec<_> = self.kwargs.iter().collect();
        kwargs.sort_by_key(|(k, _)| k.as_str());
        for (key, value) in kwargs {
            write!(f, ", {key}={value:?}")?;
        }
        write!(f, ")")
    }
}
