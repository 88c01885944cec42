//! End-to-end behavior of the effect pipeline.

mod common;

use common::{CountingRng, PanickingRng, battle_ctx, field_ctx, sentinel};
use item_effects::{
    Action, ActionKind, Comparison, Condition, ConditionKind, Effect, EffectPipeline,
    EngineConfig, EvolveParams, PcgRng, StatKind, StatusCondition, TeachMoveParams, Trigger,
    UsageLedger, check_conditions, process_effect, process_item_effects,
};

// ============================================================================
// Conditions
// ============================================================================

#[test]
fn negation_inverts_species_match() {
    let ctx = field_ctx();
    let mut rng = PcgRng::seeded(7);

    let only_eevee = Condition::new(ConditionKind::Species(vec!["eevee".into()]));
    let not_eevee = only_eevee.clone().negated();

    let passed = check_conditions(&[only_eevee], &ctx, &mut rng).expect("valid condition");
    assert!(passed.passed);

    let excluded = check_conditions(&[not_eevee], &ctx, &mut rng).expect("valid condition");
    assert!(!excluded.passed);
    assert!(excluded.reason_or_default().starts_with("Excluded"));
}

#[test]
fn short_circuit_skips_later_randomness() {
    let ctx = field_ctx();
    let mut rng = CountingRng::seeded(7);

    let conditions = [
        Condition::new(ConditionKind::Level(Comparison::Greater(50.0))),
        Condition::new(ConditionKind::RandomChance(0.5)),
        Condition::new(ConditionKind::NoStatus).with_probability(0.5),
    ];
    let check = check_conditions(&conditions, &ctx, &mut rng).expect("valid conditions");

    assert!(!check.passed);
    assert_eq!(rng.draws, 0);
}

#[test]
fn probability_gate_stays_within_bounds() {
    let ctx = field_ctx();
    let mut rng = PcgRng::seeded(0xC0FFEE);
    let gated = [Condition::new(ConditionKind::NoStatus).with_probability(0.3)];

    let passes = (0..1000)
        .filter(|_| {
            check_conditions(&gated, &ctx, &mut rng)
                .expect("valid probability")
                .passed
        })
        .count();
    assert!((230..=370).contains(&passes), "got {passes} passes");

    let never = [Condition::new(ConditionKind::RandomChance(0.0))];
    let always = [Condition::new(ConditionKind::RandomChance(1.0))];
    for _ in 0..1000 {
        assert!(!check_conditions(&never, &ctx, &mut rng).expect("valid").passed);
        assert!(check_conditions(&always, &ctx, &mut rng).expect("valid").passed);
    }
}

#[test]
fn certain_and_impossible_probability_gates_hold_for_any_seed() {
    let ctx = field_ctx();
    let certain = [Condition::new(ConditionKind::NoStatus).with_probability(1.0)];
    let impossible = [Condition::new(ConditionKind::NoStatus).with_probability(0.0)];

    let mut failures = 0;
    let mut passes = 0;
    for seed in 0..1000u64 {
        let mut rng = PcgRng::seeded(seed.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        if !check_conditions(&certain, &ctx, &mut rng).expect("valid").passed {
            failures += 1;
        }
        if check_conditions(&impossible, &ctx, &mut rng).expect("valid").passed {
            passes += 1;
        }
    }
    assert_eq!(failures, 0, "probability 1.0 gate failed");
    assert_eq!(passes, 0, "probability 0.0 gate passed");
}

// ============================================================================
// Actions
// ============================================================================

#[test]
fn potion_heal_clamps_to_max_hp() {
    let potion = [Effect::new("potion", Trigger::OnUse).then(ActionKind::HealFixed(20))];
    let mut ctx = field_ctx();
    ctx.creature.hp = 50;

    let results = process_item_effects(
        &potion,
        Trigger::OnUse,
        &mut ctx,
        &UsageLedger::new(),
        &mut PcgRng::seeded(1),
    );

    assert_eq!(ctx.creature.hp, 60);
    assert!(results[0].success);
    assert_eq!(results[0].message, "eevee recovered 10 HP");
}

#[test]
fn percentage_heal_floors() {
    let super_potion =
        [Effect::new("super_potion", Trigger::OnUse).then(ActionKind::HealPercentage(25.0))];
    let mut ctx = field_ctx();
    ctx.creature.max_hp = 45;
    ctx.creature.hp = 10;

    process_item_effects(
        &super_potion,
        Trigger::OnUse,
        &mut ctx,
        &UsageLedger::new(),
        &mut PcgRng::seeded(1),
    );

    // floor(45 * 25 / 100) = 11
    assert_eq!(ctx.creature.hp, 21);
}

#[test]
fn evolution_requires_matching_pair() {
    let water_stone = [Effect::new("water_stone", Trigger::OnUse).then(ActionKind::Evolve(
        EvolveParams::new("vaporeon")
            .with_mapping("eevee", "vaporeon")
            .with_mapping("staryu", "starmie"),
    ))];

    let mut ctx = field_ctx();
    let results = process_item_effects(
        &water_stone,
        Trigger::OnUse,
        &mut ctx,
        &UsageLedger::new(),
        &mut PcgRng::seeded(1),
    );
    assert_eq!(ctx.creature.species, "vaporeon");
    assert!(results[0].consumed_item);

    let mut ctx = field_ctx();
    ctx.creature.species = "pikachu".into();
    let results = process_item_effects(
        &water_stone,
        Trigger::OnUse,
        &mut ctx,
        &UsageLedger::new(),
        &mut PcgRng::seeded(1),
    );
    assert_eq!(ctx.creature.species, "pikachu");
    assert!(!results[0].success);
    assert!(!results[0].consumed_item);
}

#[test]
fn repel_overwrites_existing_steps() {
    let repel =
        [Effect::new("repel", Trigger::OnUse).then(ActionKind::PreventWildEncounters(100))];
    let mut ctx = field_ctx();
    ctx.field.repel_steps = 250;

    process_item_effects(
        &repel,
        Trigger::OnUse,
        &mut ctx,
        &UsageLedger::new(),
        &mut PcgRng::seeded(1),
    );
    assert_eq!(ctx.field.repel_steps, 100);
}

#[test]
fn technical_machine_is_idempotent() {
    let tm = [Effect::new("tm_shadow_ball", Trigger::OnUse).then(ActionKind::TeachMove(
        TeachMoveParams::new("shadow_ball")
            .compatible_with(["eevee", "gengar"])
            .consumed(),
    ))];
    let mut ctx = field_ctx();
    let ledger = UsageLedger::new();

    for _ in 0..2 {
        let results =
            process_item_effects(&tm, Trigger::OnUse, &mut ctx, &ledger, &mut PcgRng::seeded(1));
        assert!(results[0].success);
    }
    assert_eq!(ctx.creature.moves, ["tackle", "quick_attack", "shadow_ball"]);
}

// ============================================================================
// Restrictions
// ============================================================================

#[test]
fn once_per_battle_runs_actions_once() {
    let berry = [Effect::new("oran_berry", Trigger::OnLowHp)
        .once_per_battle()
        .then(sentinel())];
    let mut ctx = battle_ctx(3);
    ctx.creature.hp = 10;
    let mut ledger = UsageLedger::new();
    let mut rng = PcgRng::seeded(1);

    let first = process_item_effects(&berry, Trigger::OnLowHp, &mut ctx, &ledger, &mut rng);
    ledger.record_results(&first, ctx.current_turn());
    let second = process_item_effects(&berry, Trigger::OnLowHp, &mut ctx, &ledger, &mut rng);

    assert!(first[0].success);
    assert!(!second[0].success);
    assert_eq!(second[0].message, "Already used this battle");
    assert!(second[0].effects_applied.is_empty());
    // The sentinel heal ran exactly once.
    assert_eq!(ctx.creature.hp, 11);
}

#[test]
fn cooldown_releases_after_enough_turns() {
    let charm = [Effect::new("charm", Trigger::OnTurnEnd)
        .cooldown(2)
        .then(ActionKind::BoostStat {
            stat: StatKind::Speed,
            stages: 1,
        })];
    let mut ledger = UsageLedger::new();
    ledger.record_use("charm", 4);
    let mut rng = PcgRng::seeded(1);

    let mut ctx = battle_ctx(5);
    let blocked = process_item_effects(&charm, Trigger::OnTurnEnd, &mut ctx, &ledger, &mut rng);
    assert_eq!(blocked[0].message, "Cooldown active (1 turn remaining)");

    let mut ctx = battle_ctx(6);
    let released = process_item_effects(&charm, Trigger::OnTurnEnd, &mut ctx, &ledger, &mut rng);
    assert!(released[0].success);
    assert_eq!(ctx.creature.stats[&StatKind::Speed], 82);
}

// ============================================================================
// Ordering and isolation
// ============================================================================

#[test]
fn priority_order_is_stable_and_descending() {
    let effects = [
        Effect::new("low_a", Trigger::OnUse).priority(5).then(sentinel()),
        Effect::new("high", Trigger::OnUse).priority(10).then(sentinel()),
        Effect::new("other_trigger", Trigger::OnHit).priority(50).then(sentinel()),
        Effect::new("low_b", Trigger::OnUse).priority(5).then(sentinel()),
    ];
    let mut ctx = field_ctx();
    ctx.creature.hp = 1;

    let results = process_item_effects(
        &effects,
        Trigger::OnUse,
        &mut ctx,
        &UsageLedger::new(),
        &mut PcgRng::seeded(1),
    );

    let order: Vec<_> = results.iter().map(|r| r.effect_id.as_str()).collect();
    assert_eq!(order, ["high", "low_a", "low_b"]);
}

fn isolation_batch(faulting_priority: i32) -> Vec<Effect> {
    vec![
        Effect::new("before", Trigger::OnUse).priority(150).then(sentinel()),
        Effect::new("faulting", Trigger::OnUse)
            .priority(faulting_priority)
            .then(ActionKind::HealPercentage(f64::NAN)),
        Effect::new("after", Trigger::OnUse).priority(0).then(sentinel()),
    ]
}

#[test]
fn fault_is_isolated_to_its_effect() {
    let mut ctx = field_ctx();
    ctx.creature.hp = 1;

    let results = process_item_effects(
        &isolation_batch(50),
        Trigger::OnUse,
        &mut ctx,
        &UsageLedger::new(),
        &mut PcgRng::seeded(1),
    );

    assert_eq!(results.len(), 3);
    assert!(results[0].success);
    assert!(!results[1].success);
    assert_eq!(results[1].errors.len(), 1);
    assert!(results[2].success);
    assert_eq!(ctx.creature.hp, 3);
}

#[test]
fn critical_failure_stops_the_batch() {
    let mut ctx = field_ctx();
    ctx.creature.hp = 1;

    let results = process_item_effects(
        &isolation_batch(120),
        Trigger::OnUse,
        &mut ctx,
        &UsageLedger::new(),
        &mut PcgRng::seeded(1),
    );

    assert_eq!(results.len(), 2);
    assert_eq!(results[1].effect_id, "faulting");
    assert!(results[1].has_errors());
    assert_eq!(ctx.creature.hp, 2);
}

#[test]
fn critical_threshold_is_configurable() {
    let pipeline = EffectPipeline::new(EngineConfig::with_critical_priority(200));
    let mut ctx = field_ctx();
    ctx.creature.hp = 1;

    let results = pipeline.process(
        &isolation_batch(120),
        Trigger::OnUse,
        &mut ctx,
        &UsageLedger::new(),
        &mut PcgRng::seeded(1),
    );
    assert_eq!(results.len(), 3);
}

#[test]
fn panic_inside_an_effect_is_caught() {
    let gamble = Effect::new("gamble", Trigger::OnUse)
        .when(ConditionKind::RandomChance(0.5))
        .then(sentinel());
    let mut ctx = field_ctx();

    let result = process_effect(&gamble, &mut ctx, &UsageLedger::new(), &mut PanickingRng);

    assert!(!result.success);
    assert_eq!(result.errors, ["Effect panicked: rng exhausted"]);
}

// ============================================================================
// Composition
// ============================================================================

#[test]
fn effect_and_action_conditions_compose() {
    let full_restore = [Effect::new("full_restore", Trigger::OnUse)
        .when(ConditionKind::HpPercentage(Comparison::Less(100.0)))
        .then(ActionKind::HealPercentage(100.0))
        .then(
            Action::new(ActionKind::CureStatus(None))
                .when(ConditionKind::HasStatus(None))
                .on_failure("{species} was already healthy"),
        )];

    let mut ctx = battle_ctx(1);
    ctx.creature.hp = 5;
    ctx.creature.status = Some(StatusCondition::Paralysis);
    let results = process_item_effects(
        &full_restore,
        Trigger::OnUse,
        &mut ctx,
        &UsageLedger::new(),
        &mut PcgRng::seeded(1),
    );
    assert_eq!(results[0].message, "2 effects applied");
    assert_eq!(ctx.creature.status, None);

    let mut ctx = battle_ctx(1);
    ctx.creature.hp = 5;
    let results = process_item_effects(
        &full_restore,
        Trigger::OnUse,
        &mut ctx,
        &UsageLedger::new(),
        &mut PcgRng::seeded(1),
    );
    assert!(results[0].success);
    assert_eq!(results[0].effects_applied[1].message, "eevee was already healthy");
    assert_eq!(results[0].message, "eevee recovered 55 HP");
}

#[test]
fn capture_item_needs_a_battle() {
    let great_ball = [Effect::new("great_ball", Trigger::OnUse)
        .then(ActionKind::ModifyCatchRate(1.5))];

    let mut ctx = battle_ctx(1);
    let results = process_item_effects(
        &great_ball,
        Trigger::OnUse,
        &mut ctx,
        &UsageLedger::new(),
        &mut PcgRng::seeded(1),
    );
    assert!(results[0].consumed_item);
    assert_eq!(ctx.battle.map(|b| b.catch_rate_modifier), Some(1.5));

    let mut ctx = field_ctx();
    let results = process_item_effects(
        &great_ball,
        Trigger::OnUse,
        &mut ctx,
        &UsageLedger::new(),
        &mut PcgRng::seeded(1),
    );
    assert_eq!(results[0].message, "Can only be used in battle");
}
