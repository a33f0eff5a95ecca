//! Inert effect definitions.
//!
//! Cards stay plain data: instead of carrying behavior they carry
//! [`EffectDef`]s — an effect name plus a positional/keyword argument bag —
//! which the effect registry resolves to runnable variants at cast time.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A loosely typed argument value in an effect definition or move record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgValue {
    Int(i64),
    Str(String),
    Bool(bool),
}

impl From<i64> for ArgValue {
    fn from(v: i64) -> Self {
        ArgValue::Int(v)
    }
}

impl From<i32> for ArgValue {
    fn from(v: i32) -> Self {
        ArgValue::Int(v as i64)
    }
}

impl From<u32> for ArgValue {
    fn from(v: u32) -> Self {
        ArgValue::Int(v as i64)
    }
}

impl From<bool> for ArgValue {
    fn from(v: bool) -> Self {
        ArgValue::Bool(v)
    }
}

impl From<&str> for ArgValue {
    fn from(v: &str) -> Self {
        ArgValue::Str(v.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(v: String) -> Self {
        ArgValue::Str(v)
    }
}

impl ArgValue {
    /// The integer value, if this is an integer.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ArgValue::Int(v) => Some(*v),
            _ => None,
        }
    }
}

/// Data-only description of an effect: a name plus its arguments.
///
/// Resolved to executable behavior only at dispatch time, so card content
/// stays declarative while effects remain pluggable code.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EffectDef {
    /// Registry name of the effect (e.g. `"Power"`).
    pub name: String,

    /// Positional arguments.
    #[serde(default)]
    pub args: SmallVec<[ArgValue; 2]>,

    /// Keyword arguments.
    #[serde(default)]
    pub kwargs: FxHashMap<String, ArgValue>,
}

impl EffectDef {
    /// Create a definition with no arguments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: SmallVec::new(),
            kwargs: FxHashMap::default(),
        }
    }

    /// Append a positional argument.
    #[must_use]
    pub fn with_arg(mut self, value: impl Into<ArgValue>) -> Self {
        self.args.push(value.into());
        self
    }

    /// Set a keyword argument.
    #[must_use]
    pub fn with_kwarg(mut self, key: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.kwargs.insert(key.into(), value.into());
        self
    }

    /// Look up an integer argument by keyword, falling back to the
    /// positional slot, then to `default`.
    #[must_use]
    pub fn int_arg(&self, key: &str, position: usize, default: i64) -> i64 {
        self.kwargs
            .get(key)
            .and_then(ArgValue::as_int)
            .or_else(|| self.args.get(position).and_then(ArgValue::as_int))
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_arg_prefers_keyword() {
        let def = EffectDef::new("Power").with_arg(3).with_kwarg("power", -5);
        assert_eq!(def.int_arg("power", 0, 0), -5);
    }

    #[test]
    fn test_int_arg_positional_fallback() {
        let def = EffectDef::new("Power").with_arg(7);
        assert_eq!(def.int_arg("power", 0, 0), 7);
    }

    #[test]
    fn test_int_arg_default() {
        let def = EffectDef::new("Power");
        assert_eq!(def.int_arg("power", 0, -1), -1);
    }

    #[test]
    fn test_serde_roundtrip() {
        let def = EffectDef::new("Power").with_kwarg("power", -4);
        let json = serde_json::to_string(&def).unwrap();
        let back: EffectDef = serde_json::from_str(&json).unwrap();
        assert_eq!(def, back);
    }
}
