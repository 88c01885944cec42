//! Shared fixtures for item-effects integration tests.
#![allow(dead_code)]

use item_effects::{
    ActionKind, BattleKind, BattleState, CreatureState, EffectContext, PcgRng, RngOracle,
    StatKind, Terrain, Weather,
};

/// Wraps [`PcgRng`] and counts how many values were drawn.
pub struct CountingRng {
    inner: PcgRng,
    pub draws: usize,
}

impl CountingRng {
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: PcgRng::seeded(seed),
            draws: 0,
        }
    }
}

impl RngOracle for CountingRng {
    fn next_u32(&mut self) -> u32 {
        self.draws += 1;
        self.inner.next_u32()
    }
}

/// Panics on any draw. Used to fault an effect from inside the engine.
pub struct PanickingRng;

impl RngOracle for PanickingRng {
    fn next_u32(&mut self) -> u32 {
        panic!("rng exhausted")
    }
}

pub fn eevee() -> CreatureState {
    CreatureState::new("eevee", 25, 60)
        .with_types(["normal"])
        .with_ability("adaptability")
        .with_stat(StatKind::Attack, 55)
        .with_stat(StatKind::Speed, 55)
        .with_moves(["tackle", "quick_attack"])
}

pub fn field_ctx() -> EffectContext {
    EffectContext::new(eevee()).with_trainer("trainer-1", "Red")
}

pub fn battle_ctx(turn: u32) -> EffectContext {
    field_ctx()
        .with_opponent(CreatureState::new("rattata", 12, 30).with_types(["normal"]))
        .with_battle(
            BattleState::new(BattleKind::Wild)
                .with_turn(turn)
                .with_weather(Weather::Rain)
                .with_terrain(Terrain::Grassy),
        )
}

/// A heal that always succeeds on a damaged creature; used as a sentinel.
pub fn sentinel() -> ActionKind {
    ActionKind::HealFixed(1)
}
