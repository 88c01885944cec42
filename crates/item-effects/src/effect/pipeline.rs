//! Effect pipeline orchestration.
//!
//! This module coordinates the execution flow for one trigger:
//! 1. Filter the item's effects by trigger
//! 2. Stable-sort by priority (higher first, ties keep catalog order)
//! 3. Per effect: conditions gate, restriction gate, actions
//! 4. Synthesize one `EffectResult` per processed effect
//!
//! ## Failure isolation
//!
//! Faults and panics raised inside an effect are caught at the effect boundary
//! and reported in `EffectResult::errors`. Other effects in the batch still
//! run, unless the failed effect's priority is above the critical threshold.
//! Mutations an effect made before faulting are kept.

use std::panic::{AssertUnwindSafe, catch_unwind};

use tracing::{debug, warn};

use crate::action::execute_actions;
use crate::condition::check_conditions;
use crate::config::EngineConfig;
use crate::context::EffectContext;
use crate::error::{EffectError, GameError};
use crate::rng::RngOracle;

use super::aggregate::synthesize_message;
use super::usage::UsageLedger;
use super::{Effect, EffectResult, Trigger};

// ============================================================================
// Pipeline
// ============================================================================

/// Runs item effects with a fixed [`EngineConfig`].
#[derive(Clone, Debug, Default)]
pub struct EffectPipeline {
    config: EngineConfig,
}

impl EffectPipeline {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Processes every effect bound to `trigger`, highest priority first.
    ///
    /// Returns one result per processed effect. When a critical effect fails,
    /// its result is the last one and the remaining effects are skipped.
    pub fn process(
        &self,
        effects: &[Effect],
        trigger: Trigger,
        ctx: &mut EffectContext,
        usage: &UsageLedger,
        rng: &mut dyn RngOracle,
    ) -> Vec<EffectResult> {
        let mut selected: Vec<&Effect> = effects
            .iter()
            .filter(|effect| effect.trigger == trigger)
            .collect();
        // `sort_by` is stable.
        selected.sort_by(|a, b| b.priority.cmp(&a.priority));

        debug!(
            target: "item_effects::pipeline",
            %trigger,
            candidates = effects.len(),
            selected = selected.len(),
            "processing item effects"
        );

        let mut results = Vec::with_capacity(selected.len());
        for (index, effect) in selected.iter().enumerate() {
            let result = process_effect(effect, ctx, usage, rng);
            let halt = !result.success && self.config.is_critical(effect.priority);
            results.push(result);

            if halt {
                warn!(
                    target: "item_effects::pipeline",
                    effect_id = %effect.id,
                    priority = effect.priority,
                    skipped = selected.len() - index - 1,
                    "critical effect failed, skipping remaining effects"
                );
                break;
            }
        }
        results
    }
}

/// Processes `effects` for `trigger` with the default [`EngineConfig`].
pub fn process_item_effects(
    effects: &[Effect],
    trigger: Trigger,
    ctx: &mut EffectContext,
    usage: &UsageLedger,
    rng: &mut dyn RngOracle,
) -> Vec<EffectResult> {
    EffectPipeline::default().process(effects, trigger, ctx, usage, rng)
}

/// Processes a single effect. Never fails: faults become a failed result.
pub fn process_effect(
    effect: &Effect,
    ctx: &mut EffectContext,
    usage: &UsageLedger,
    rng: &mut dyn RngOracle,
) -> EffectResult {
    let outcome = catch_unwind(AssertUnwindSafe(|| run_effect(effect, ctx, usage, rng)))
        .unwrap_or_else(|payload| Err(EffectError::Panicked(panic_message(payload.as_ref()))));

    match outcome {
        Ok(result) => result,
        Err(error) => {
            warn!(
                target: "item_effects::pipeline",
                effect_id = %effect.id,
                error_code = error.error_code(),
                severity = error.severity().as_str(),
                error = %error,
                "effect faulted"
            );
            EffectResult {
                errors: vec![error.to_string()],
                ..EffectResult::rejected(&effect.id, format!("{} failed", effect.display_name()))
            }
        }
    }
}

// ============================================================================
// Effect steps
// ============================================================================

fn run_effect(
    effect: &Effect,
    ctx: &mut EffectContext,
    usage: &UsageLedger,
    rng: &mut dyn RngOracle,
) -> Result<EffectResult, EffectError> {
    // 1. Conditions
    let check = check_conditions(&effect.conditions, ctx, rng)?;
    if !check.passed {
        debug!(
            target: "item_effects::pipeline",
            effect_id = %effect.id,
            reason = check.reason_or_default(),
            "effect conditions not met"
        );
        return Ok(EffectResult::rejected(&effect.id, check.reason_or_default()));
    }

    // 2. Restrictions
    if let Err(rejection) = usage.check(effect, ctx.current_turn()) {
        debug!(
            target: "item_effects::pipeline",
            effect_id = %effect.id,
            %rejection,
            "effect restricted"
        );
        return Ok(EffectResult::rejected(&effect.id, rejection.to_string()));
    }

    // 3. Actions
    let applied = execute_actions(&effect.actions, ctx, rng)?;

    // 4-5. Outcome and message
    let success = applied.iter().any(|result| result.success);
    let consumed_item = applied.iter().any(|result| result.consumed_item);
    let message = synthesize_message(&applied, success);

    debug!(
        target: "item_effects::pipeline",
        effect_id = %effect.id,
        priority = effect.priority,
        success,
        consumed_item,
        actions = applied.len(),
        "effect processed"
    );

    Ok(EffectResult {
        effect_id: effect.id.clone(),
        success,
        message,
        effects_applied: applied,
        consumed_item,
        errors: Vec::new(),
    })
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}
