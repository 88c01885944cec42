//! The mutable subject of one pipeline call.
//!
//! An [`EffectContext`] is built by the orchestrator for a single battle turn or
//! field use, lent to the engine as `&mut` for exactly one call, and then
//! persisted or discarded by the orchestrator. Conditions only read it; actions
//! are the only code that writes to it.

mod types;

use std::collections::BTreeMap;

pub use types::{BattleKind, Gender, StatKind, StatusCondition, Terrain, TimeOfDay, Weather};

use crate::action::ActionTarget;

// ============================================================================
// Creature
// ============================================================================

/// State of one creature as seen by item effects.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CreatureState {
    pub species: String,
    /// Elemental types, e.g. `["water"]` or `["grass", "poison"]`.
    pub types: Vec<String>,
    pub level: u32,
    pub ability: Option<String>,
    pub gender: Gender,
    pub nature: Option<String>,
    pub friendship: u32,
    pub hp: u32,
    pub max_hp: u32,
    pub status: Option<StatusCondition>,
    /// Stats present on this creature. A missing stat cannot be boosted.
    pub stats: BTreeMap<StatKind, u32>,
    pub held_item: Option<String>,
    /// Known move ids, in learn order.
    pub moves: Vec<String>,
}

impl CreatureState {
    /// Creates a creature at full HP.
    pub fn new(species: impl Into<String>, level: u32, max_hp: u32) -> Self {
        Self {
            species: species.into(),
            level,
            hp: max_hp,
            max_hp,
            ..Self::default()
        }
    }

    pub fn with_hp(mut self, hp: u32) -> Self {
        self.hp = hp;
        self
    }

    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = types.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_status(mut self, status: StatusCondition) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_stat(mut self, stat: StatKind, value: u32) -> Self {
        self.stats.insert(stat, value);
        self
    }

    pub fn with_ability(mut self, ability: impl Into<String>) -> Self {
        self.ability = Some(ability.into());
        self
    }

    pub fn with_held_item(mut self, item: impl Into<String>) -> Self {
        self.held_item = Some(item.into());
        self
    }

    pub fn with_moves<I, S>(mut self, moves: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.moves = moves.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_fainted(&self) -> bool {
        self.hp == 0
    }

    pub fn is_full_hp(&self) -> bool {
        self.hp >= self.max_hp
    }

    pub fn knows_move(&self, move_id: &str) -> bool {
        self.moves.iter().any(|known| known == move_id)
    }
}

// ============================================================================
// Battle / Field / Trainer
// ============================================================================

/// Battle-scoped state. Absent when the item is used in the field.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleState {
    pub kind: BattleKind,
    /// Current turn, starting at 1. Drives cooldown restrictions.
    pub turn: u32,
    pub weather: Option<Weather>,
    pub terrain: Option<Terrain>,
    /// Type of the move currently being resolved (for on-hit triggers).
    pub move_type: Option<String>,
    /// Whether the move currently being resolved is super effective.
    pub super_effective: bool,
    /// Multiplier accumulated by capture items; starts at 1.0.
    pub catch_rate_modifier: f64,
}

impl BattleState {
    pub fn new(kind: BattleKind) -> Self {
        Self {
            kind,
            turn: 1,
            weather: None,
            terrain: None,
            move_type: None,
            super_effective: false,
            catch_rate_modifier: 1.0,
        }
    }

    pub fn with_turn(mut self, turn: u32) -> Self {
        self.turn = turn;
        self
    }

    pub fn with_weather(mut self, weather: Weather) -> Self {
        self.weather = Some(weather);
        self
    }

    pub fn with_terrain(mut self, terrain: Terrain) -> Self {
        self.terrain = Some(terrain);
        self
    }

    pub fn with_incoming_move(mut self, move_type: impl Into<String>, super_effective: bool) -> Self {
        self.move_type = Some(move_type.into());
        self.super_effective = super_effective;
        self
    }
}

impl Default for BattleState {
    fn default() -> Self {
        Self::new(BattleKind::default())
    }
}

/// Overworld environment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FieldState {
    pub time_of_day: TimeOfDay,
    pub location: String,
    /// Remaining steps during which wild encounters are suppressed.
    pub repel_steps: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrainerState {
    pub id: String,
    pub name: String,
}

/// Per-item usage facts supplied by the orchestrator.
///
/// Battle-scoped counters (uses this battle, cooldowns) live in
/// [`crate::UsageLedger`] instead.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemUsage {
    /// True the first time this trainer ever uses this item.
    pub first_use: bool,
}

impl Default for ItemUsage {
    fn default() -> Self {
        Self { first_use: true }
    }
}

// ============================================================================
// Effect Context
// ============================================================================

/// Everything an effect may read or mutate during one pipeline call.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EffectContext {
    /// The creature the item is used on (or held by).
    pub creature: CreatureState,
    /// The opposing creature, when there is one.
    pub opponent: Option<CreatureState>,
    pub battle: Option<BattleState>,
    pub field: FieldState,
    pub trainer: TrainerState,
    pub usage: ItemUsage,
}

impl EffectContext {
    pub fn new(creature: CreatureState) -> Self {
        Self {
            creature,
            ..Self::default()
        }
    }

    pub fn with_opponent(mut self, opponent: CreatureState) -> Self {
        self.opponent = Some(opponent);
        self
    }

    pub fn with_battle(mut self, battle: BattleState) -> Self {
        self.battle = Some(battle);
        self
    }

    pub fn with_field(mut self, field: FieldState) -> Self {
        self.field = field;
        self
    }

    pub fn with_trainer(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.trainer = TrainerState {
            id: id.into(),
            name: name.into(),
        };
        self
    }

    pub fn with_first_use(mut self, first_use: bool) -> Self {
        self.usage.first_use = first_use;
        self
    }

    /// Current battle turn, or 0 outside battle.
    pub fn current_turn(&self) -> u32 {
        self.battle.as_ref().map_or(0, |battle| battle.turn)
    }

    pub fn target(&self, target: ActionTarget) -> Option<&CreatureState> {
        match target {
            ActionTarget::User => Some(&self.creature),
            ActionTarget::Opponent => self.opponent.as_ref(),
        }
    }

    pub fn target_mut(&mut self, target: ActionTarget) -> Option<&mut CreatureState> {
        match target {
            ActionTarget::User => Some(&mut self.creature),
            ActionTarget::Opponent => self.opponent.as_mut(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creature_starts_at_full_hp() {
        let creature = CreatureState::new("eevee", 12, 40);
        assert_eq!(creature.hp, 40);
        assert!(creature.is_full_hp());
        assert!(!creature.is_fainted());
    }

    #[test]
    fn opponent_target_requires_an_opponent() {
        let mut ctx = EffectContext::new(CreatureState::new("eevee", 5, 20));
        assert!(ctx.target_mut(ActionTarget::Opponent).is_none());

        ctx = ctx.with_opponent(CreatureState::new("rattata", 3, 12));
        let opponent = ctx.target(ActionTarget::Opponent).map(|c| c.species.as_str());
        assert_eq!(opponent, Some("rattata"));
    }

    #[test]
    fn current_turn_is_zero_in_the_field() {
        let ctx = EffectContext::new(CreatureState::new("eevee", 5, 20));
        assert_eq!(ctx.current_turn(), 0);

        let ctx = ctx.with_battle(BattleState::new(BattleKind::Trainer).with_turn(4));
        assert_eq!(ctx.current_turn(), 4);
    }
}
