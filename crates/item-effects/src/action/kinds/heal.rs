//! HP recovery.

use crate::action::AppliedValue;
use crate::context::CreatureState;
use crate::error::EffectError;

use super::KindOutcome;

pub(super) fn fixed(creature: &mut CreatureState, amount: u32) -> Result<KindOutcome, EffectError> {
    restore(creature, amount)
}

pub(super) fn percentage(
    creature: &mut CreatureState,
    percent: f64,
) -> Result<KindOutcome, EffectError> {
    // `as` saturates, and `percent` was checked finite and non-negative.
    let amount = (f64::from(creature.max_hp) * percent / 100.0).floor() as u32;
    restore(creature, amount)
}

pub(super) fn ensure_percent(percent: f64) -> Result<(), EffectError> {
    if percent.is_finite() && percent >= 0.0 {
        Ok(())
    } else {
        Err(EffectError::MalformedAction(format!(
            "heal percentage must be a non-negative number, got {percent}"
        )))
    }
}

/// Adds up to `amount` HP without exceeding max HP.
fn restore(creature: &mut CreatureState, amount: u32) -> Result<KindOutcome, EffectError> {
    if creature.hp > creature.max_hp {
        return Err(EffectError::InvalidContext(format!(
            "{} has hp {} above max_hp {}",
            creature.species, creature.hp, creature.max_hp
        )));
    }
    if creature.is_full_hp() {
        return Ok(KindOutcome::failed("Already at full HP"));
    }

    let healed = amount.min(creature.max_hp - creature.hp);
    creature.hp += healed;

    Ok(KindOutcome::succeeded(
        AppliedValue::Healed { amount: healed },
        format!("{} recovered {} HP", creature.species, healed),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_heal_clamps_to_max() {
        let mut creature = CreatureState::new("eevee", 10, 50).with_hp(45);
        let outcome = fixed(&mut creature, 20).unwrap();
        assert!(outcome.success);
        assert_eq!(creature.hp, 50);
        assert_eq!(outcome.value, AppliedValue::Healed { amount: 5 });
    }

    #[test]
    fn full_hp_fails_without_change() {
        let mut creature = CreatureState::new("eevee", 10, 50);
        let outcome = fixed(&mut creature, 20).unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.message, "Already at full HP");
        assert_eq!(creature.hp, 50);
    }

    #[test]
    fn percentage_floors_the_amount() {
        let mut creature = CreatureState::new("eevee", 10, 45).with_hp(1);
        let outcome = percentage(&mut creature, 50.0).unwrap();
        assert_eq!(outcome.value, AppliedValue::Healed { amount: 22 });
        assert_eq!(creature.hp, 23);
    }

    #[test]
    fn hp_above_max_is_a_fault() {
        let mut creature = CreatureState::new("eevee", 10, 50).with_hp(60);
        assert!(matches!(
            fixed(&mut creature, 5),
            Err(EffectError::InvalidContext(_))
        ));
    }

    #[test]
    fn rejects_bad_percentages() {
        assert!(ensure_percent(25.0).is_ok());
        assert!(ensure_percent(-1.0).is_err());
        assert!(ensure_percent(f64::NAN).is_err());
        assert!(ensure_percent(f64::INFINITY).is_err());
    }
}
