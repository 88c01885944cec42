//! Declarative conditions and their evaluator.
//!
//! A [`Condition`] is a typed predicate over an [`crate::EffectContext`]. The
//! evaluator ([`check_conditions`] / [`check_condition`]) ANDs a list of them
//! left to right and stops at the first one that fails.
//!
//! Composition order for a single condition is fixed:
//!
//! 1. the kind-specific predicate
//! 2. `negate` inverts it
//! 3. if (and only if) the result is true, the `probability` gate draws once
//!    and may still flip it to false

mod checks;
mod compare;
mod evaluate;

pub use compare::Comparison;
pub use evaluate::{check_condition, check_conditions};

use crate::context::{BattleKind, Gender, StatKind, StatusCondition, Terrain, TimeOfDay, Weather};

/// A single predicate plus its post-processing flags.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Condition {
    pub kind: ConditionKind,

    /// Independent gate applied after `negate`, only when the result is true.
    #[cfg_attr(feature = "serde", serde(default))]
    pub probability: Option<f64>,

    /// Inverts the kind-specific result.
    #[cfg_attr(feature = "serde", serde(default))]
    pub negate: bool,
}

impl Condition {
    pub fn new(kind: ConditionKind) -> Self {
        Self {
            kind,
            probability: None,
            negate: false,
        }
    }

    /// Builder: invert the result.
    pub fn negated(mut self) -> Self {
        self.negate = !self.negate;
        self
    }

    /// Builder: add a probability gate.
    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = Some(probability);
        self
    }
}

impl From<ConditionKind> for Condition {
    fn from(kind: ConditionKind) -> Self {
        Self::new(kind)
    }
}

/// What a condition checks.
///
/// Membership kinds hold the set of accepted values; a single-value check is a
/// one-element set.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConditionKind {
    // ========================================================================
    // Creature attributes
    // ========================================================================
    Species(Vec<String>),
    /// Passes if any of the creature's types is listed.
    CreatureType(Vec<String>),
    Level(Comparison),
    Ability(Vec<String>),
    Gender(Vec<Gender>),
    Nature(Vec<String>),
    Friendship(Comparison),

    // ========================================================================
    // Stats & HP
    // ========================================================================
    /// Absolute stat value. A missing stat never matches.
    Stat {
        stat: StatKind,
        comparison: Comparison,
    },
    /// `hp / max_hp × 100`.
    HpPercentage(Comparison),
    HpAbsolute(Comparison),

    // ========================================================================
    // Status
    // ========================================================================
    /// `Some(status)` requires that status; `None` accepts any status.
    HasStatus(Option<StatusCondition>),
    NoStatus,

    // ========================================================================
    // Battle / combat
    // ========================================================================
    BattleType(Vec<BattleKind>),
    MoveType(Vec<String>),
    SuperEffective(bool),

    // ========================================================================
    // Environment
    // ========================================================================
    /// An empty set accepts any active weather.
    Weather(Vec<Weather>),
    /// An empty set accepts any active terrain.
    Terrain(Vec<Terrain>),
    TimeOfDay(Vec<TimeOfDay>),
    Location(Vec<String>),

    // ========================================================================
    // Utility
    // ========================================================================
    /// Uniform draw against a probability in `0.0..=1.0`.
    RandomChance(f64),
    FirstUse(bool),
    HeldItem(Vec<String>),

    /// Kind produced by a newer catalog that this build does not know.
    /// Always fails closed.
    Unrecognized(String),
}

/// Outcome of evaluating one or more conditions.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditionCheck {
    pub passed: bool,
    /// Diagnostic reason, present on failure.
    pub reason: Option<String>,
}

impl ConditionCheck {
    pub fn pass() -> Self {
        Self {
            passed: true,
            reason: None,
        }
    }

    pub fn fail(reason: impl Into<String>) -> Self {
        Self {
            passed: false,
            reason: Some(reason.into()),
        }
    }

    /// Reason text, or a generic fallback.
    pub fn reason_or_default(&self) -> &str {
        self.reason.as_deref().unwrap_or("Conditions not met")
    }
}
