//! Trigger-driven rule engine for catalog-defined item effects.
//!
//! `item-effects` decides, for any item in a content catalog, which of its
//! declared [`Effect`]s fire on a [`Trigger`], whether their [`Condition`]s
//! hold, and which [`Action`]s mutate the caller's [`EffectContext`]. It
//! performs no I/O and keeps no state between calls: the orchestrator lends
//! the context and the [`UsageLedger`] for one call and owns both afterwards.
//! All randomness flows through an injected [`RngOracle`].
pub mod action;
pub mod condition;
pub mod config;
pub mod context;
pub mod effect;
pub mod error;
pub mod rng;

pub use action::{
    Action, ActionKind, ActionResult, ActionTag, ActionTarget, AppliedValue, CHANCE_FAILED_MESSAGE,
    EvolutionMapping, EvolveParams, TeachMoveParams, execute_action, execute_actions, render,
    stage_multiplier,
};
pub use condition::{
    Comparison, Condition, ConditionCheck, ConditionKind, check_condition, check_conditions,
};
pub use config::EngineConfig;
pub use context::{
    BattleKind, BattleState, CreatureState, EffectContext, FieldState, Gender, ItemUsage,
    StatKind, StatusCondition, Terrain, TimeOfDay, TrainerState, Weather,
};
pub use effect::{
    Effect, EffectPipeline, EffectResult, NO_EFFECT_MESSAGE, RestrictionRejection,
    RestrictionState, Restrictions, Trigger, UsageLedger, UsageRecord, process_effect,
    process_item_effects, synthesize_message,
};
pub use error::{EffectError, ErrorSeverity, GameError};
pub use rng::{PcgRng, RngOracle, compute_seed};
