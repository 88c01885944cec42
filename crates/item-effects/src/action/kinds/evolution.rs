//! Item-triggered evolution.

use crate::action::{AppliedValue, EvolveParams};
use crate::context::CreatureState;
use crate::error::EffectError;

use super::KindOutcome;

/// Evolves the creature when `(species, into)` is a listed mapping pair.
pub(super) fn evolve(
    creature: &mut CreatureState,
    params: &EvolveParams,
) -> Result<KindOutcome, EffectError> {
    if params.mapping.is_empty() {
        return Ok(KindOutcome::failed("No evolution is defined for this item"));
    }

    let allowed = params
        .mapping
        .iter()
        .any(|pair| pair.from == creature.species && pair.to == params.into);
    if !allowed {
        return Ok(KindOutcome::failed(format!(
            "It had no effect on {}",
            creature.species
        )));
    }

    let from = std::mem::replace(&mut creature.species, params.into.clone());
    let message = format!("{from} evolved into {}!", params.into);
    Ok(KindOutcome::succeeded(
        AppliedValue::Evolved {
            from,
            to: params.into.clone(),
        },
        message,
    )
    .consuming(true))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn water_stone() -> EvolveParams {
        EvolveParams::new("vaporeon").with_mapping("eevee", "vaporeon")
    }

    #[test]
    fn evolves_on_exact_pair() {
        let mut creature = CreatureState::new("eevee", 20, 55);
        let outcome = evolve(&mut creature, &water_stone()).unwrap();
        assert!(outcome.success);
        assert!(outcome.consumed_item);
        assert_eq!(creature.species, "vaporeon");
        assert_eq!(outcome.message, "eevee evolved into vaporeon!");
    }

    #[test]
    fn other_species_are_untouched() {
        let mut creature = CreatureState::new("pikachu", 20, 55);
        let outcome = evolve(&mut creature, &water_stone()).unwrap();
        assert!(!outcome.success);
        assert!(!outcome.consumed_item);
        assert_eq!(creature.species, "pikachu");
        assert_eq!(outcome.message, "It had no effect on pikachu");
    }

    #[test]
    fn empty_mapping_never_evolves() {
        let mut creature = CreatureState::new("eevee", 20, 55);
        let outcome = evolve(&mut creature, &EvolveParams::new("vaporeon")).unwrap();
        assert!(!outcome.success);
        assert_eq!(creature.species, "eevee");
    }
}
