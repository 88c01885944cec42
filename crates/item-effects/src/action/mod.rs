//! Declarative actions and their executor.
//!
//! An [`Action`] is one typed mutation of the [`crate::EffectContext`]. Each
//! action may carry its own scoped conditions and a `chance` gate; both are
//! checked before the mutation runs, and neither mutates anything on failure.
//!
//! Kind-specific parameters are typed per kind ([`EvolveParams`],
//! [`TeachMoveParams`]) instead of a loose parameter bag, so an evolve action
//! without a mapping table is a shape the catalog loader can reject up front.

mod execute;
mod kinds;
mod template;

pub use execute::{CHANCE_FAILED_MESSAGE, execute_action, execute_actions};
pub use kinds::stage_multiplier;
pub use template::render;

use crate::condition::Condition;
use crate::context::{StatKind, StatusCondition};

// ============================================================================
// Action definition
// ============================================================================

/// Which creature in the context an action applies to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionTarget {
    /// The creature the item is used on ("self").
    #[default]
    User,
    /// The opposing creature in battle.
    Opponent,
}

/// One typed mutation plus its gates and message templates.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Action {
    pub kind: ActionKind,

    #[cfg_attr(feature = "serde", serde(default))]
    pub target: ActionTarget,

    /// Conditions scoped to this action alone, checked after the parent
    /// effect's conditions already passed.
    #[cfg_attr(feature = "serde", serde(default))]
    pub conditions: Vec<Condition>,

    /// Uniform gate in `0.0..=1.0`, independent of any condition probability.
    #[cfg_attr(feature = "serde", serde(default))]
    pub chance: Option<f64>,

    /// Replaces the default success message. Supports `{placeholders}`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub success_message: Option<String>,

    /// Replaces the default failure message. Supports `{placeholders}`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub failure_message: Option<String>,
}

impl Action {
    /// Creates an action targeting the user with no gates.
    pub fn new(kind: ActionKind) -> Self {
        Self {
            kind,
            target: ActionTarget::User,
            conditions: Vec::new(),
            chance: None,
            success_message: None,
            failure_message: None,
        }
    }

    /// Builder: set target.
    pub fn target(mut self, target: ActionTarget) -> Self {
        self.target = target;
        self
    }

    /// Builder: add a scoped condition.
    pub fn when(mut self, condition: impl Into<Condition>) -> Self {
        self.conditions.push(condition.into());
        self
    }

    /// Builder: set chance gate.
    pub fn chance(mut self, chance: f64) -> Self {
        self.chance = Some(chance);
        self
    }

    /// Builder: set success message template.
    pub fn on_success(mut self, template: impl Into<String>) -> Self {
        self.success_message = Some(template.into());
        self
    }

    /// Builder: set failure message template.
    pub fn on_failure(mut self, template: impl Into<String>) -> Self {
        self.failure_message = Some(template.into());
        self
    }
}

impl From<ActionKind> for Action {
    fn from(kind: ActionKind) -> Self {
        Self::new(kind)
    }
}

/// The mutation to apply.
#[derive(Clone, Debug, PartialEq, strum::EnumDiscriminants)]
#[strum_discriminants(name(ActionTag))]
#[strum_discriminants(derive(Hash, strum::Display))]
#[strum_discriminants(strum(serialize_all = "snake_case"))]
#[cfg_attr(
    feature = "serde",
    strum_discriminants(derive(serde::Serialize, serde::Deserialize))
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    // ========================================================================
    // Recovery
    // ========================================================================
    /// Restore exactly this many HP, clamped to max HP.
    HealFixed(u32),
    /// Restore `floor(max_hp × percent / 100)` HP.
    HealPercentage(f64),
    /// Clear the status; `Some(status)` only clears that one.
    CureStatus(Option<StatusCondition>),

    // ========================================================================
    // Growth
    // ========================================================================
    /// Scale a stat by the stage curve (see [`stage_multiplier`]).
    BoostStat { stat: StatKind, stages: i32 },
    Evolve(EvolveParams),
    TeachMove(TeachMoveParams),

    // ========================================================================
    // Battle / field
    // ========================================================================
    /// Multiply the battle's catch-rate modifier.
    ModifyCatchRate(f64),
    /// Mark the item as spent without any other change.
    ConsumeItem,
    /// Emit a message (supports `{placeholders}`).
    ShowMessage(String),
    /// Suppress wild encounters for this many steps.
    PreventWildEncounters(u32),

    /// Kind produced by a newer catalog that this build does not know.
    /// Always fails closed.
    Unrecognized(String),
}

/// Parameters for [`ActionKind::Evolve`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolveParams {
    /// Requested target species.
    pub into: String,
    /// Allowed `from → to` pairs. Evolution needs an exact match of the
    /// current species and `into`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub mapping: Vec<EvolutionMapping>,
}

impl EvolveParams {
    pub fn new(into: impl Into<String>) -> Self {
        Self {
            into: into.into(),
            mapping: Vec::new(),
        }
    }

    pub fn with_mapping(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.mapping.push(EvolutionMapping {
            from: from.into(),
            to: to.into(),
        });
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionMapping {
    pub from: String,
    pub to: String,
}

/// Parameters for [`ActionKind::TeachMove`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeachMoveParams {
    pub move_id: String,
    /// Species allowed to learn the move. `None` means any species.
    #[cfg_attr(feature = "serde", serde(default))]
    pub compatible_species: Option<Vec<String>>,
    /// Whether a successful use spends the item (TMs vs. HMs).
    #[cfg_attr(feature = "serde", serde(default))]
    pub consumed_on_use: bool,
}

impl TeachMoveParams {
    pub fn new(move_id: impl Into<String>) -> Self {
        Self {
            move_id: move_id.into(),
            compatible_species: None,
            consumed_on_use: false,
        }
    }

    pub fn compatible_with<I, S>(mut self, species: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.compatible_species = Some(species.into_iter().map(Into::into).collect());
        self
    }

    pub fn consumed(mut self) -> Self {
        self.consumed_on_use = true;
        self
    }
}

// ============================================================================
// Action result
// ============================================================================

/// What an action actually changed.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AppliedValue {
    #[default]
    None,
    Healed {
        amount: u32,
    },
    StatusCured(StatusCondition),
    StatChanged {
        stat: StatKind,
        before: u32,
        after: u32,
    },
    Evolved {
        from: String,
        to: String,
    },
    MoveLearned {
        move_id: String,
        newly_learned: bool,
    },
    CatchRate {
        multiplier: f64,
        total: f64,
    },
    EncounterSteps(u32),
    Message(String),
}

/// Outcome of one action.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionResult {
    pub success: bool,
    pub kind: ActionTag,
    pub target: ActionTarget,
    pub value: AppliedValue,
    pub message: String,
    /// True if this action spends the item.
    pub consumed_item: bool,
}

impl ActionResult {
    /// A failed result that changed nothing.
    pub fn failed(kind: ActionTag, target: ActionTarget, message: impl Into<String>) -> Self {
        Self {
            success: false,
            kind,
            target,
            value: AppliedValue::None,
            message: message.into(),
            consumed_item: false,
        }
    }
}
