//! Effects: trigger-bound rules combining conditions, actions and usage
//! restrictions, plus the pipeline that runs them.

mod aggregate;
mod pipeline;
mod usage;

pub use aggregate::{NO_EFFECT_MESSAGE, synthesize_message};
pub use pipeline::{EffectPipeline, process_effect, process_item_effects};
pub use usage::{RestrictionRejection, RestrictionState, UsageLedger, UsageRecord};

use crate::action::Action;
use crate::condition::Condition;

/// Game event that can fire an item's effects.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Trigger {
    /// The trainer uses the item directly.
    OnUse,
    /// The holder is hit by a move.
    OnHit,
    OnFaint,
    OnTurnStart,
    OnTurnEnd,
    OnSwitchIn,
    OnStatusInflicted,
    /// The holder's HP drops below its threshold.
    OnLowHp,
    /// Always-on held item effects, polled by the orchestrator.
    Passive,
}

/// Usage limits for one effect within a battle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Restrictions {
    pub once_per_battle: bool,
    pub max_uses_per_battle: Option<u32>,
    /// Turns that must elapse after a use before the effect may fire again.
    pub cooldown_turns: Option<u32>,
}

impl Restrictions {
    pub fn is_unrestricted(&self) -> bool {
        !self.once_per_battle && self.max_uses_per_battle.is_none() && self.cooldown_turns.is_none()
    }
}

/// One declarative rule attached to an item. Immutable catalog data.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Effect {
    pub id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    pub trigger: Trigger,
    /// Higher runs first.
    #[cfg_attr(feature = "serde", serde(default))]
    pub priority: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub conditions: Vec<Condition>,
    pub actions: Vec<Action>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub restrictions: Restrictions,
}

impl Effect {
    pub fn new(id: impl Into<String>, trigger: Trigger) -> Self {
        Self {
            id: id.into(),
            name: None,
            trigger,
            priority: 0,
            conditions: Vec::new(),
            actions: Vec::new(),
            restrictions: Restrictions::default(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn when(mut self, condition: impl Into<Condition>) -> Self {
        self.conditions.push(condition.into());
        self
    }

    pub fn then(mut self, action: impl Into<Action>) -> Self {
        self.actions.push(action.into());
        self
    }

    pub fn once_per_battle(mut self) -> Self {
        self.restrictions.once_per_battle = true;
        self
    }

    pub fn max_uses_per_battle(mut self, max: u32) -> Self {
        self.restrictions.max_uses_per_battle = Some(max);
        self
    }

    pub fn cooldown(mut self, turns: u32) -> Self {
        self.restrictions.cooldown_turns = Some(turns);
        self
    }

    /// Display name, falling back to the id.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// Outcome of one effect.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectResult {
    pub effect_id: String,
    /// True iff at least one action succeeded.
    pub success: bool,
    /// Player-facing summary.
    pub message: String,
    /// Per-action results in execution order.
    pub effects_applied: Vec<crate::ActionResult>,
    pub consumed_item: bool,
    /// Faults caught at the effect boundary.
    pub errors: Vec<String>,
}

impl EffectResult {
    /// A failed result with no actions run.
    pub fn rejected(effect_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            effect_id: effect_id.into(),
            success: false,
            message: message.into(),
            effects_applied: Vec::new(),
            consumed_item: false,
            errors: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
