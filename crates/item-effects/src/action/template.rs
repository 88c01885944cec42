//! `{placeholder}` substitution for action messages.

use crate::context::EffectContext;

use super::{Action, ActionKind};

/// Replaces every `{key}` in `template` with its value. Unknown placeholders
/// are left as written.
///
/// The template is scanned once; inserted values are never expanded again.
pub fn render(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open + 1..];
        if let Some(close) = tail.find('}')
            && let Some((_, value)) = vars.iter().find(|(key, _)| *key == &tail[..close])
        {
            out.push_str(value);
            rest = &tail[close + 1..];
        } else {
            out.push('{');
            rest = tail;
        }
    }

    out.push_str(rest);
    out
}

/// Placeholders available to action messages, read after the mutation.
pub(super) fn action_vars(action: &Action, ctx: &EffectContext) -> Vec<(&'static str, String)> {
    let target = ctx.target(action.target).unwrap_or(&ctx.creature);
    vec![
        ("value", declared_value(&action.kind)),
        ("species", target.species.clone()),
        ("target", action.target.to_string()),
        ("hp", target.hp.to_string()),
        ("max_hp", target.max_hp.to_string()),
        ("trainer", ctx.trainer.name.clone()),
        ("location", ctx.field.location.clone()),
    ]
}

/// The action's configured value, as catalog authors wrote it.
fn declared_value(kind: &ActionKind) -> String {
    match kind {
        ActionKind::HealFixed(amount) => amount.to_string(),
        ActionKind::HealPercentage(percent) => percent.to_string(),
        ActionKind::CureStatus(Some(status)) => status.to_string(),
        ActionKind::CureStatus(None) => "any".to_string(),
        ActionKind::BoostStat { stages, .. } => stages.to_string(),
        ActionKind::Evolve(params) => params.into.clone(),
        ActionKind::TeachMove(params) => params.move_id.clone(),
        ActionKind::ModifyCatchRate(multiplier) => multiplier.to_string(),
        ActionKind::ConsumeItem => String::new(),
        ActionKind::ShowMessage(text) => text.clone(),
        ActionKind::PreventWildEncounters(steps) => steps.to_string(),
        ActionKind::Unrecognized(kind) => kind.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::CreatureState;

    #[test]
    fn replaces_known_placeholders() {
        let vars = [("species", "eevee".to_string()), ("value", "20".to_string())];
        assert_eq!(
            render("{species} restored {value} HP", &vars),
            "eevee restored 20 HP"
        );
    }

    #[test]
    fn leaves_unknown_placeholders() {
        assert_eq!(render("hello {nobody}", &[]), "hello {nobody}");
        assert_eq!(render("open { brace", &[]), "open { brace");
    }

    #[test]
    fn inserted_values_are_not_expanded() {
        let vars = [
            ("trainer", "{location}".to_string()),
            ("location", "route_1".to_string()),
        ];
        assert_eq!(
            render("{trainer} used a potion", &vars),
            "{location} used a potion"
        );
        // Order of vars does not matter either.
        let reversed = [vars[1].clone(), vars[0].clone()];
        assert_eq!(
            render("{trainer} at {location}", &reversed),
            "{location} at route_1"
        );
    }

    #[test]
    fn nested_braces_resolve_the_inner_key() {
        let vars = [("species", "eevee".to_string())];
        assert_eq!(render("{{species}}", &vars), "{eevee}");
    }

    #[test]
    fn vars_reflect_target_creature() {
        let ctx = EffectContext::new(CreatureState::new("eevee", 5, 30).with_hp(12))
            .with_trainer("t-1", "Red");
        let action = Action::new(ActionKind::HealFixed(20));
        let vars = action_vars(&action, &ctx);
        assert_eq!(
            render("{trainer}'s {species}: {hp}/{max_hp} (+{value})", &vars),
            "Red's eevee: 12/30 (+20)"
        );
    }
}
