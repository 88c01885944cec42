//! Battle-scoped usage counters for effect restrictions.
//!
//! The orchestrator owns a [`UsageLedger`] per battle. The pipeline only reads
//! it; after a call returns, the orchestrator writes uses back with
//! [`UsageLedger::record_results`] and clears it with
//! [`UsageLedger::reset_battle`] when the battle ends.

use std::collections::HashMap;
use std::fmt;

use super::{Effect, EffectResult, Restrictions};

/// Counters for one effect within the current battle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UsageRecord {
    pub uses: u32,
    pub last_used_turn: Option<u32>,
}

/// Where an effect sits in its per-battle lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestrictionState {
    Unused,
    Used(u32),
    /// No further uses allowed this battle.
    Exhausted,
}

/// Why a restriction blocked an effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestrictionRejection {
    AlreadyUsed,
    LimitReached { max: u32 },
    Cooldown { remaining: u32 },
}

impl fmt::Display for RestrictionRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyUsed => write!(f, "Already used this battle"),
            Self::LimitReached { max } => write!(f, "Usage limit reached ({max} per battle)"),
            Self::Cooldown { remaining: 1 } => write!(f, "Cooldown active (1 turn remaining)"),
            Self::Cooldown { remaining } => {
                write!(f, "Cooldown active ({remaining} turns remaining)")
            }
        }
    }
}

/// Per-effect usage counters for the current battle, keyed by effect id.
///
/// Effect ids must be unique across every item sharing a ledger; catalogs
/// loaded through `item-content` are validated for this.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UsageLedger {
    records: HashMap<String, UsageRecord>,
}

impl UsageLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, effect_id: &str) -> UsageRecord {
        self.records.get(effect_id).copied().unwrap_or_default()
    }

    /// Counts one use of `effect_id` on `turn`.
    pub fn record_use(&mut self, effect_id: &str, turn: u32) {
        let record = self.records.entry(effect_id.to_string()).or_default();
        record.uses = record.uses.saturating_add(1);
        record.last_used_turn = Some(turn);
    }

    /// Records a use for every successful result.
    pub fn record_results(&mut self, results: &[EffectResult], turn: u32) {
        for result in results.iter().filter(|result| result.success) {
            self.record_use(&result.effect_id, turn);
        }
    }

    /// Forgets every counter; call when a battle ends.
    pub fn reset_battle(&mut self) {
        self.records.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn state(&self, effect: &Effect) -> RestrictionState {
        let uses = self.record(&effect.id).uses;
        if uses == 0 {
            return RestrictionState::Unused;
        }
        let exhausted = effect.restrictions.once_per_battle
            || effect
                .restrictions
                .max_uses_per_battle
                .is_some_and(|max| uses >= max);
        if exhausted {
            RestrictionState::Exhausted
        } else {
            RestrictionState::Used(uses)
        }
    }

    /// Checks the effect's restrictions at `current_turn`.
    pub fn check(&self, effect: &Effect, current_turn: u32) -> Result<(), RestrictionRejection> {
        let Restrictions {
            once_per_battle,
            max_uses_per_battle,
            cooldown_turns,
        } = effect.restrictions;
        let record = self.record(&effect.id);

        if once_per_battle && record.uses > 0 {
            return Err(RestrictionRejection::AlreadyUsed);
        }
        if let Some(max) = max_uses_per_battle
            && record.uses >= max
        {
            return Err(RestrictionRejection::LimitReached { max });
        }
        if let (Some(cooldown), Some(last)) = (cooldown_turns, record.last_used_turn) {
            let elapsed = current_turn.saturating_sub(last);
            if elapsed < cooldown {
                return Err(RestrictionRejection::Cooldown {
                    remaining: cooldown - elapsed,
                });
            }
        }
        Ok(())
    }
}
