//! Move teaching (TMs / HMs).

use crate::action::{AppliedValue, TeachMoveParams};
use crate::context::CreatureState;
use crate::error::EffectError;

use super::KindOutcome;

pub(super) fn teach(
    creature: &mut CreatureState,
    params: &TeachMoveParams,
) -> Result<KindOutcome, EffectError> {
    let move_id = &params.move_id;

    let compatible = params
        .compatible_species
        .as_ref()
        .is_none_or(|list| list.iter().any(|species| *species == creature.species));
    if !compatible {
        return Ok(KindOutcome::failed(format!(
            "{} can't learn {move_id}",
            creature.species
        )));
    }

    // Already known is still a success; the move list is not duplicated.
    let newly_learned = !creature.knows_move(move_id);
    let message = if newly_learned {
        creature.moves.push(move_id.clone());
        format!("{} learned {move_id}!", creature.species)
    } else {
        format!("{} already knows {move_id}", creature.species)
    };

    Ok(KindOutcome::succeeded(
        AppliedValue::MoveLearned {
            move_id: move_id.clone(),
            newly_learned,
        },
        message,
    )
    .consuming(params.consumed_on_use))
}
