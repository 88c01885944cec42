//! Condition evaluation: AND with left-to-right short-circuit.

use tracing::warn;

use crate::context::EffectContext;
use crate::error::{EffectError, ensure_probability};
use crate::rng::RngOracle;

use super::checks::{describe, format_percent, holds};
use super::{Condition, ConditionCheck, ConditionKind};

/// Checks every condition in order and stops at the first failure.
///
/// Conditions after the first failing one are never evaluated, so they never
/// consume randomness. An empty list passes.
///
/// ## Errors
/// - `EffectError::MalformedCondition` - probability outside `0.0..=1.0`
/// - `EffectError::InvalidContext` - e.g. HP percentage with `max_hp == 0`
pub fn check_conditions(
    conditions: &[Condition],
    ctx: &EffectContext,
    rng: &mut dyn RngOracle,
) -> Result<ConditionCheck, EffectError> {
    for condition in conditions {
        let check = check_condition(condition, ctx, rng)?;
        if !check.passed {
            return Ok(check);
        }
    }
    Ok(ConditionCheck::pass())
}

/// Checks a single condition: predicate, then `negate`, then `probability`.
///
/// `Unrecognized` kinds fail closed regardless of `negate`.
pub fn check_condition(
    condition: &Condition,
    ctx: &EffectContext,
    rng: &mut dyn RngOracle,
) -> Result<ConditionCheck, EffectError> {
    if let ConditionKind::Unrecognized(kind) = &condition.kind {
        warn!(
            target: "item_effects::condition",
            kind = %kind,
            "unrecognized condition kind, failing closed"
        );
        return Ok(ConditionCheck::fail(format!("Unknown condition kind: {kind}")));
    }

    let probability = condition
        .probability
        .map(|p| ensure_probability(p, "condition probability"))
        .transpose()
        .map_err(EffectError::MalformedCondition)?;

    let raw = holds(&condition.kind, ctx, rng)?;
    let result = raw != condition.negate;

    if !result {
        let requirement = describe(&condition.kind);
        let reason = if condition.negate {
            format!("Excluded: {requirement}")
        } else {
            format!("Requirement not met: {requirement}")
        };
        return Ok(ConditionCheck::fail(reason));
    }

    if let Some(probability) = probability
        && !rng.chance(probability)
    {
        return Ok(ConditionCheck::fail(format!(
            "Chance roll failed ({}% chance)",
            format_percent(probability)
        )));
    }

    Ok(ConditionCheck::pass())
}
