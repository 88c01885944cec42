//! Battle and overworld actions that do not touch a creature.

use crate::action::AppliedValue;
use crate::context::EffectContext;
use crate::error::EffectError;

use super::KindOutcome;

pub(super) fn modify_catch_rate(
    ctx: &mut EffectContext,
    multiplier: f64,
) -> Result<KindOutcome, EffectError> {
    if !multiplier.is_finite() || multiplier < 0.0 {
        return Err(EffectError::MalformedAction(format!(
            "catch rate multiplier must be a non-negative number, got {multiplier}"
        )));
    }
    let Some(battle) = ctx.battle.as_mut() else {
        return Ok(KindOutcome::failed("Can only be used in battle"));
    };

    battle.catch_rate_modifier *= multiplier;
    Ok(KindOutcome::succeeded(
        AppliedValue::CatchRate {
            multiplier,
            total: battle.catch_rate_modifier,
        },
        format!("Catch rate multiplied by {multiplier}"),
    )
    .consuming(true))
}

pub(super) fn consume_item() -> KindOutcome {
    KindOutcome::succeeded(AppliedValue::None, "The item was used up").consuming(true)
}

/// The text is rendered by the executor like any other message.
pub(super) fn show_message(text: &str) -> KindOutcome {
    KindOutcome::succeeded(AppliedValue::Message(text.to_string()), text)
}

/// Overwrites the remaining repel steps; it does not stack.
pub(super) fn prevent_wild_encounters(ctx: &mut EffectContext, steps: u32) -> KindOutcome {
    ctx.field.repel_steps = steps;
    KindOutcome::succeeded(
        AppliedValue::EncounterSteps(steps),
        format!("Wild creatures will stay away for {steps} steps"),
    )
}
