//! Judge catalog.

use crate::cards::SpellKind;

/// Static judge template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JudgeTemplate {
    /// Stable string id.
    pub judge_id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Honorific shown to players.
    pub title: &'static str,
    /// Mana budget per round. Data only; no mana economy exists yet.
    pub mana_limit: i64,
    /// Registry name of the judge's judgement effect, if any.
    pub judgement: Option<&'static str>,
    /// Spell kinds this judge refuses to see cast.
    pub disallows: &'static [SpellKind],
    /// Whether forbidden cards are illegal under this judge.
    pub disallow_forbidden: bool,
}

/// All judge templates. One is chosen per session at setup.
pub const JUDGES: &[JudgeTemplate] = &[
    JudgeTemplate {
        judge_id: "judge_moira",
        name: "Moira",
        title: "The Devious",
        mana_limit: 12,
        judgement: Some("Dispel"),
        disallows: &[SpellKind::Direct],
        disallow_forbidden: false,
    },
    JudgeTemplate {
        judge_id: "judge_aldric",
        name: "Aldric",
        title: "The Even-Handed",
        mana_limit: 10,
        judgement: None,
        disallows: &[],
        disallow_forbidden: false,
    },
    JudgeTemplate {
        judge_id: "judge_vexa",
        name: "Vexa",
        title: "The Purist",
        mana_limit: 14,
        judgement: Some("Eject"),
        disallows: &[],
        disallow_forbidden: true,
    },
];

/// Look up a judge template by id.
#[must_use]
pub fn find(judge_id: &str) -> Option<&'static JudgeTemplate> {
    JUDGES.iter().find(|j| j.judge_id == judge_id)
}
