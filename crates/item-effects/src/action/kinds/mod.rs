//! Action kind dispatcher.
//!
//! Each kind lives in its own file and returns a [`KindOutcome`]. Expected
//! failures ("Already at full HP") are `Ok` outcomes with `success = false`;
//! only malformed data or a broken context is an `Err`.

mod evolution;
mod field;
mod heal;
mod moves;
mod stat;
mod status;

pub use stat::stage_multiplier;

use tracing::warn;

use crate::context::{CreatureState, EffectContext};
use crate::error::EffectError;

use super::{ActionKind, ActionTarget, AppliedValue};

/// Raw outcome of a kind handler, before message templates are applied.
#[derive(Debug)]
pub(super) struct KindOutcome {
    pub success: bool,
    pub value: AppliedValue,
    pub message: String,
    pub consumed_item: bool,
}

impl KindOutcome {
    fn succeeded(value: AppliedValue, message: impl Into<String>) -> Self {
        Self {
            success: true,
            value,
            message: message.into(),
            consumed_item: false,
        }
    }

    fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            value: AppliedValue::None,
            message: message.into(),
            consumed_item: false,
        }
    }

    fn consuming(mut self, consumed: bool) -> Self {
        self.consumed_item = consumed;
        self
    }
}

/// Applies `kind` to the context.
pub(super) fn apply(
    kind: &ActionKind,
    target: ActionTarget,
    ctx: &mut EffectContext,
) -> Result<KindOutcome, EffectError> {
    match kind {
        ActionKind::HealFixed(amount) => with_creature(ctx, target, |c| heal::fixed(c, *amount)),
        ActionKind::HealPercentage(percent) => {
            heal::ensure_percent(*percent)?;
            with_creature(ctx, target, |c| heal::percentage(c, *percent))
        }
        ActionKind::CureStatus(wanted) => with_creature(ctx, target, |c| status::cure(c, *wanted)),
        ActionKind::BoostStat { stat, stages } => {
            with_creature(ctx, target, |c| stat::boost(c, *stat, *stages))
        }
        ActionKind::Evolve(params) => with_creature(ctx, target, |c| evolution::evolve(c, params)),
        ActionKind::TeachMove(params) => with_creature(ctx, target, |c| moves::teach(c, params)),
        ActionKind::ModifyCatchRate(multiplier) => field::modify_catch_rate(ctx, *multiplier),
        ActionKind::ConsumeItem => Ok(field::consume_item()),
        ActionKind::ShowMessage(text) => Ok(field::show_message(text)),
        ActionKind::PreventWildEncounters(steps) => {
            Ok(field::prevent_wild_encounters(ctx, *steps))
        }
        ActionKind::Unrecognized(kind) => {
            warn!(
                target: "item_effects::action",
                kind = %kind,
                "unrecognized action kind, failing closed"
            );
            Ok(KindOutcome::failed(format!("Unknown action kind: {kind}")))
        }
    }
}

/// Resolves the target creature, failing the action if it is absent.
fn with_creature<F>(
    ctx: &mut EffectContext,
    target: ActionTarget,
    apply: F,
) -> Result<KindOutcome, EffectError>
where
    F: FnOnce(&mut CreatureState) -> Result<KindOutcome, EffectError>,
{
    match ctx.target_mut(target) {
        Some(creature) => apply(creature),
        None => Ok(KindOutcome::failed(format!("No {target} to use this on"))),
    }
}
