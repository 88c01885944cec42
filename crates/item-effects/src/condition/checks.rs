//! Kind-specific condition predicates.
//!
//! Each arm is a pure read of the context, except `RandomChance`, which draws
//! once from the injected RNG.

use core::fmt::Display;

use crate::context::EffectContext;
use crate::error::{EffectError, ensure_probability};
use crate::rng::RngOracle;

use super::ConditionKind;

/// Evaluates the raw predicate for `kind`, before `negate` and `probability`.
pub(super) fn holds(
    kind: &ConditionKind,
    ctx: &EffectContext,
    rng: &mut dyn RngOracle,
) -> Result<bool, EffectError> {
    let creature = &ctx.creature;
    let battle = ctx.battle.as_ref();

    let verdict = match kind {
        // ====================================================================
        // Creature attributes
        // ====================================================================
        ConditionKind::Species(values) => contains(values, &creature.species),
        ConditionKind::CreatureType(values) => {
            creature.types.iter().any(|ty| contains(values, ty))
        }
        ConditionKind::Level(comparison) => comparison.matches(f64::from(creature.level)),
        ConditionKind::Ability(values) => creature
            .ability
            .as_deref()
            .is_some_and(|ability| contains(values, ability)),
        ConditionKind::Gender(values) => values.contains(&creature.gender),
        ConditionKind::Nature(values) => creature
            .nature
            .as_deref()
            .is_some_and(|nature| contains(values, nature)),
        ConditionKind::Friendship(comparison) => {
            comparison.matches(f64::from(creature.friendship))
        }

        // ====================================================================
        // Stats & HP
        // ====================================================================
        ConditionKind::Stat { stat, comparison } => creature
            .stats
            .get(stat)
            .is_some_and(|value| comparison.matches(f64::from(*value))),
        ConditionKind::HpPercentage(comparison) => comparison.matches(hp_percentage(ctx)?),
        ConditionKind::HpAbsolute(comparison) => comparison.matches(f64::from(creature.hp)),

        // ====================================================================
        // Status
        // ====================================================================
        ConditionKind::HasStatus(Some(status)) => creature.status == Some(*status),
        ConditionKind::HasStatus(None) => creature.status.is_some(),
        ConditionKind::NoStatus => creature.status.is_none(),

        // ====================================================================
        // Battle / combat
        // ====================================================================
        ConditionKind::BattleType(values) => battle.is_some_and(|b| values.contains(&b.kind)),
        ConditionKind::MoveType(values) => battle
            .and_then(|b| b.move_type.as_deref())
            .is_some_and(|move_type| contains(values, move_type)),
        ConditionKind::SuperEffective(expected) => {
            battle.is_some_and(|b| b.super_effective) == *expected
        }

        // ====================================================================
        // Environment
        // ====================================================================
        ConditionKind::Weather(values) => active_in(battle.and_then(|b| b.weather), values),
        ConditionKind::Terrain(values) => active_in(battle.and_then(|b| b.terrain), values),
        ConditionKind::TimeOfDay(values) => values.contains(&ctx.field.time_of_day),
        ConditionKind::Location(values) => contains(values, &ctx.field.location),

        // ====================================================================
        // Utility
        // ====================================================================
        ConditionKind::RandomChance(probability) => {
            let probability = ensure_probability(*probability, "random chance")
                .map_err(EffectError::MalformedCondition)?;
            rng.chance(probability)
        }
        ConditionKind::FirstUse(expected) => ctx.usage.first_use == *expected,
        ConditionKind::HeldItem(values) => creature
            .held_item
            .as_deref()
            .is_some_and(|item| contains(values, item)),

        ConditionKind::Unrecognized(_) => false,
    };

    Ok(verdict)
}

/// Human-readable requirement, used to build failure reasons.
pub(super) fn describe(kind: &ConditionKind) -> String {
    match kind {
        ConditionKind::Species(values) => format!("species must be one of {}", list(values)),
        ConditionKind::CreatureType(values) => format!("type must include one of {}", list(values)),
        ConditionKind::Level(comparison) => format!("level must be {comparison}"),
        ConditionKind::Ability(values) => format!("ability must be one of {}", list(values)),
        ConditionKind::Gender(values) => format!("gender must be one of {}", list(values)),
        ConditionKind::Nature(values) => format!("nature must be one of {}", list(values)),
        ConditionKind::Friendship(comparison) => format!("friendship must be {comparison}"),
        ConditionKind::Stat { stat, comparison } => format!("{stat} must be {comparison}"),
        ConditionKind::HpPercentage(comparison) => format!("HP % must be {comparison}"),
        ConditionKind::HpAbsolute(comparison) => format!("HP must be {comparison}"),
        ConditionKind::HasStatus(Some(status)) => format!("must be affected by {status}"),
        ConditionKind::HasStatus(None) => "must have a status condition".to_string(),
        ConditionKind::NoStatus => "must have no status condition".to_string(),
        ConditionKind::BattleType(values) => format!("battle must be one of {}", list(values)),
        ConditionKind::MoveType(values) => format!("move type must be one of {}", list(values)),
        ConditionKind::SuperEffective(true) => "move must be super effective".to_string(),
        ConditionKind::SuperEffective(false) => "move must not be super effective".to_string(),
        ConditionKind::Weather(values) if values.is_empty() => "weather must be active".to_string(),
        ConditionKind::Weather(values) => format!("weather must be one of {}", list(values)),
        ConditionKind::Terrain(values) if values.is_empty() => "terrain must be active".to_string(),
        ConditionKind::Terrain(values) => format!("terrain must be one of {}", list(values)),
        ConditionKind::TimeOfDay(values) => format!("time must be one of {}", list(values)),
        ConditionKind::Location(values) => format!("location must be one of {}", list(values)),
        ConditionKind::RandomChance(probability) => {
            format!("{}% chance", format_percent(*probability))
        }
        ConditionKind::FirstUse(true) => "item must not have been used before".to_string(),
        ConditionKind::FirstUse(false) => "item must have been used before".to_string(),
        ConditionKind::HeldItem(values) => format!("held item must be one of {}", list(values)),
        ConditionKind::Unrecognized(kind) => format!("unknown condition kind {kind}"),
    }
}

pub(super) fn format_percent(probability: f64) -> String {
    let percent = probability * 100.0;
    if percent.fract() == 0.0 {
        format!("{percent:.0}")
    } else {
        format!("{percent:.1}")
    }
}

fn hp_percentage(ctx: &EffectContext) -> Result<f64, EffectError> {
    let creature = &ctx.creature;
    if creature.max_hp == 0 {
        return Err(EffectError::InvalidContext(format!(
            "{} has max_hp 0",
            creature.species
        )));
    }
    Ok(f64::from(creature.hp) / f64::from(creature.max_hp) * 100.0)
}

fn contains(values: &[String], value: &str) -> bool {
    values.iter().any(|candidate| candidate == value)
}

fn active_in<T: PartialEq>(active: Option<T>, values: &[T]) -> bool {
    match active {
        Some(active) => values.is_empty() || values.contains(&active),
        None => false,
    }
}

fn list<T: Display>(values: &[T]) -> String {
    let items: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}
