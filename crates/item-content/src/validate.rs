//! Load-time catalog checks.
//!
//! The engine fails closed or faults on data it cannot interpret. These checks
//! reject that data when the catalog is loaded instead, so a bad entry is
//! reported once with its location rather than on every use.

use std::collections::{HashMap, HashSet};
use std::fmt;

use item_effects::{Action, ActionKind, Comparison, Condition, ConditionKind, Effect};

use crate::catalog::ItemCatalog;

/// One problem found in a catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationIssue {
    pub item: String,
    pub effect: Option<String>,
    pub problem: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.effect {
            Some(effect) => write!(f, "{}/{}: {}", self.item, effect, self.problem),
            None => write!(f, "{}: {}", self.item, self.problem),
        }
    }
}

/// Returns every issue in the catalog. An empty list means it is valid.
///
/// Effect ids must be unique across the whole catalog: the usage ledger keys
/// restriction counters by effect id alone.
pub fn validate_catalog(catalog: &ItemCatalog) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut seen_items = HashSet::new();
    let mut effect_owners: HashMap<&str, &str> = HashMap::new();

    for entry in &catalog.items {
        if !seen_items.insert(entry.item.as_str()) {
            issues.push(ValidationIssue {
                item: entry.item.clone(),
                effect: None,
                problem: "duplicate item id".to_string(),
            });
        }

        for effect in &entry.effects {
            match effect_owners.get(effect.id.as_str()) {
                Some(&owner) if owner == entry.item => issues.push(ValidationIssue {
                    item: entry.item.clone(),
                    effect: Some(effect.id.clone()),
                    problem: "duplicate effect id".to_string(),
                }),
                Some(&owner) => issues.push(ValidationIssue {
                    item: entry.item.clone(),
                    effect: Some(effect.id.clone()),
                    problem: format!("effect id already declared by item `{owner}`"),
                }),
                None => {
                    effect_owners.insert(effect.id.as_str(), entry.item.as_str());
                }
            }
            for problem in effect_problems(effect) {
                issues.push(ValidationIssue {
                    item: entry.item.clone(),
                    effect: Some(effect.id.clone()),
                    problem,
                });
            }
        }
    }

    issues
}

fn effect_problems(effect: &Effect) -> Vec<String> {
    let mut problems = Vec::new();

    if effect.actions.is_empty() {
        problems.push("effect has no actions".to_string());
    }
    if effect.restrictions.max_uses_per_battle == Some(0) {
        problems.push("max_uses_per_battle of 0 can never fire".to_string());
    }
    for condition in &effect.conditions {
        condition_problems(condition, &mut problems);
    }
    for (index, action) in effect.actions.iter().enumerate() {
        action_problems(index, action, &mut problems);
    }

    problems
}

fn condition_problems(condition: &Condition, problems: &mut Vec<String>) {
    if let Some(probability) = condition.probability
        && !is_probability(probability)
    {
        problems.push(format!(
            "condition probability {probability} outside 0.0..=1.0"
        ));
    }

    match &condition.kind {
        ConditionKind::Unrecognized(kind) => {
            problems.push(format!("unknown condition kind `{kind}`"));
        }
        ConditionKind::RandomChance(chance) if !is_probability(*chance) => {
            problems.push(format!("random_chance {chance} outside 0.0..=1.0"));
        }
        ConditionKind::Level(comparison)
        | ConditionKind::Friendship(comparison)
        | ConditionKind::Stat { comparison, .. }
        | ConditionKind::HpPercentage(comparison)
        | ConditionKind::HpAbsolute(comparison) => {
            if let Comparison::Range {
                min: Some(min),
                max: Some(max),
            } = comparison
                && min > max
            {
                problems.push(format!("inverted range: min {min} > max {max}"));
            }
        }
        _ => {}
    }
}

fn action_problems(index: usize, action: &Action, problems: &mut Vec<String>) {
    let at = format!("action #{index}");

    if let Some(chance) = action.chance
        && !is_probability(chance)
    {
        problems.push(format!("{at}: chance {chance} outside 0.0..=1.0"));
    }
    for condition in &action.conditions {
        let mut scoped = Vec::new();
        condition_problems(condition, &mut scoped);
        problems.extend(scoped.into_iter().map(|problem| format!("{at}: {problem}")));
    }

    let problem = match &action.kind {
        ActionKind::Unrecognized(kind) => Some(format!("unknown action kind `{kind}`")),
        ActionKind::Evolve(params) if params.mapping.is_empty() => {
            Some("evolve action has no mapping".to_string())
        }
        ActionKind::HealPercentage(percent) if !is_non_negative(*percent) => {
            Some(format!("heal percentage {percent} must be non-negative"))
        }
        ActionKind::ModifyCatchRate(multiplier) if !is_non_negative(*multiplier) => {
            Some(format!("catch rate multiplier {multiplier} must be non-negative"))
        }
        _ => None,
    };
    problems.extend(problem.map(|problem| format!("{at}: {problem}")));
}

fn is_probability(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
