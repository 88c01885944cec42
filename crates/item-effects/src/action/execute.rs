//! Action executor.
//!
//! Runs one action through its gates (scoped conditions, then chance), applies
//! the kind, and renders the message against the post-mutation context.

use tracing::debug;

use crate::condition::check_conditions;
use crate::context::EffectContext;
use crate::error::{EffectError, ensure_probability};
use crate::rng::RngOracle;

use super::kinds;
use super::template::{action_vars, render};
use super::{Action, ActionResult, ActionTag};

/// Message used when an action's chance gate fails without a custom message.
pub const CHANCE_FAILED_MESSAGE: &str = "The item's effect did not activate";

/// Executes `actions` in order. A failed action does not stop later ones.
///
/// ## Errors
/// The first fault aborts the list; mutations made by earlier actions stay.
pub fn execute_actions(
    actions: &[Action],
    ctx: &mut EffectContext,
    rng: &mut dyn RngOracle,
) -> Result<Vec<ActionResult>, EffectError> {
    let mut results = Vec::with_capacity(actions.len());
    for action in actions {
        results.push(execute_action(action, ctx, rng)?);
    }
    Ok(results)
}

/// Executes one action.
///
/// ## Errors
/// - `EffectError::MalformedCondition` - scoped condition data is invalid
/// - `EffectError::MalformedAction` - chance or kind parameters are invalid
/// - `EffectError::InvalidContext` - the context breaks its own invariants
pub fn execute_action(
    action: &Action,
    ctx: &mut EffectContext,
    rng: &mut dyn RngOracle,
) -> Result<ActionResult, EffectError> {
    let tag = ActionTag::from(&action.kind);

    let gate = check_conditions(&action.conditions, ctx, rng)?;
    if !gate.passed {
        debug!(
            target: "item_effects::action",
            kind = %tag,
            reason = gate.reason_or_default(),
            "action skipped by scoped condition"
        );
        let message = match &action.failure_message {
            Some(template) => render(template, &action_vars(action, ctx)),
            None => gate.reason_or_default().to_string(),
        };
        return Ok(ActionResult::failed(tag, action.target, message));
    }

    if let Some(chance) = action.chance {
        let chance =
            ensure_probability(chance, "action chance").map_err(EffectError::MalformedAction)?;
        if !rng.chance(chance) {
            debug!(target: "item_effects::action", kind = %tag, chance, "action chance failed");
            let message = match &action.failure_message {
                Some(template) => render(template, &action_vars(action, ctx)),
                None => CHANCE_FAILED_MESSAGE.to_string(),
            };
            return Ok(ActionResult::failed(tag, action.target, message));
        }
    }

    let outcome = kinds::apply(&action.kind, action.target, ctx)?;

    let template = if outcome.success {
        action.success_message.as_deref()
    } else {
        action.failure_message.as_deref()
    };
    let message = render(
        template.unwrap_or(&outcome.message),
        &action_vars(action, ctx),
    );

    debug!(
        target: "item_effects::action",
        kind = %tag,
        target_creature = %action.target,
        success = outcome.success,
        "action executed"
    );

    Ok(ActionResult {
        success: outcome.success,
        kind: tag,
        target: action.target,
        value: outcome.value,
        message,
        consumed_item: outcome.consumed_item,
    })
}
