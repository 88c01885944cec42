//! Stat stage boosts.

use crate::action::AppliedValue;
use crate::context::{CreatureState, StatKind};
use crate::error::EffectError;

use super::KindOutcome;

/// Multiplier for a stage change.
///
/// Positive stages scale by `1 + stages × 0.5`; negative stages divide by
/// `1 + |stages| × 0.5`. Zero stages is the identity.
pub fn stage_multiplier(stages: i32) -> f64 {
    let step = 1.0 + f64::from(stages.unsigned_abs()) * 0.5;
    if stages >= 0 { step } else { 1.0 / step }
}

pub(super) fn boost(
    creature: &mut CreatureState,
    stat: StatKind,
    stages: i32,
) -> Result<KindOutcome, EffectError> {
    let species = creature.species.clone();
    let Some(value) = creature.stats.get_mut(&stat) else {
        return Ok(KindOutcome::failed(format!("{species} has no {stat} stat")));
    };

    let before = *value;
    // Floored back to an integer stat; `as` saturates.
    let after = (f64::from(before) * stage_multiplier(stages)).floor() as u32;
    *value = after;

    Ok(KindOutcome::succeeded(
        AppliedValue::StatChanged {
            stat,
            before,
            after,
        },
        format!("{species}'s {stat} {}", stage_phrase(stages)),
    ))
}

fn stage_phrase(stages: i32) -> &'static str {
    match stages {
        i32::MIN..=-3 => "severely fell!",
        -2 => "harshly fell!",
        -1 => "fell!",
        0 => "was unchanged",
        1 => "rose!",
        2 => "rose sharply!",
        _ => "rose drastically!",
    }
}
