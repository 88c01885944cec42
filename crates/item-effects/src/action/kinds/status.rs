//! Status curing.

use crate::action::AppliedValue;
use crate::context::{CreatureState, StatusCondition};
use crate::error::EffectError;

use super::KindOutcome;

/// Clears the creature's status, or only `wanted` when given.
pub(super) fn cure(
    creature: &mut CreatureState,
    wanted: Option<StatusCondition>,
) -> Result<KindOutcome, EffectError> {
    let outcome = match (creature.status, wanted) {
        (None, _) => KindOutcome::failed(format!("{} has no status condition", creature.species)),
        (Some(current), Some(wanted)) if current != wanted => {
            KindOutcome::failed(format!("{} is not affected by {wanted}", creature.species))
        }
        (Some(current), _) => {
            creature.status = None;
            KindOutcome::succeeded(
                AppliedValue::StatusCured(current),
                format!("{} was cured of {current}", creature.species),
            )
        }
    };
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_heal_clears_any_status() {
        let mut creature = CreatureState::new("eevee", 5, 20).with_status(StatusCondition::Sleep);
        let outcome = cure(&mut creature, None).unwrap();
        assert!(outcome.success);
        assert_eq!(creature.status, None);
        assert_eq!(outcome.message, "eevee was cured of Sleep");
    }

    #[test]
    fn targeted_cure_requires_a_match() {
        let mut creature = CreatureState::new("eevee", 5, 20).with_status(StatusCondition::Burn);
        let outcome = cure(&mut creature, Some(StatusCondition::Poison)).unwrap();
        assert!(!outcome.success);
        assert_eq!(creature.status, Some(StatusCondition::Burn));

        let outcome = cure(&mut creature, Some(StatusCondition::Burn)).unwrap();
        assert!(outcome.success);
        assert_eq!(creature.status, None);
    }

    #[test]
    fn nothing_to_cure() {
        let mut creature = CreatureState::new("eevee", 5, 20);
        let outcome = cure(&mut creature, None).unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.message, "eevee has no status condition");
    }
}
