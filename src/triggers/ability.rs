//! Abilities: conditions plus effects plus a trigger counter.
//!
//! An ability fires when any of its conditions matches the incoming trigger
//! key; every one of its effects then runs through
//! [`EffectResolver`](crate::effects::EffectResolver). The only mutable part
//! is `triggered`, a per-instance counter reset at the end of each play
//! phase.

use serde::{Deserialize, Serialize};

use super::condition::{Condition, EntityKind, EventKind, PlayerRelation, TriggerKey};
use crate::effects::Effect;

/// A declarative trigger rule attached to a card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    /// Fires if any of these matches.
    pub conditions: Vec<Condition>,

    /// Run in order when the ability fires.
    pub effects: Vec<Effect>,

    /// Times this instance's ability has counted a trigger since the last
    /// reset. Only effects with per-phase limits touch it.
    #[serde(default)]
    pub triggered: u32,
}

impl Ability {
    /// Create an ability with a zeroed counter.
    #[must_use]
    pub fn new(conditions: Vec<Condition>, effects: Vec<Effect>) -> Self {
        Self {
            conditions,
            effects,
            triggered: 0,
        }
    }

    /// Single-condition, single-effect ability.
    #[must_use]
    pub fn single(condition: Condition, effect: Effect) -> Self {
        Self::new(vec![condition], vec![effect])
    }

    /// Whether any condition matches.
    #[must_use]
    pub fn matches(&self, key: &TriggerKey) -> bool {
        self.conditions.iter().any(|condition| condition.matches(key))
    }

    /// Zero the trigger counter.
    pub fn reset(&mut self) {
        self.triggered = 0;
    }

    /// Copy of this ability with a zeroed counter.
    #[must_use]
    pub fn respawn(&self) -> Self {
        Self::new(self.conditions.clone(), self.effects.clone())
    }

    // === Catalog abilities ===

    /// Redirect the first undirected attack against its owner's side onto
    /// the owner.
    #[must_use]
    pub fn taunt() -> Self {
        Self::single(
            Condition::on(EventKind::AttackTarget)
                .relation(PlayerRelation::Own)
                .entity(EntityKind::Creature),
            Effect::Taunt,
        )
    }

    /// Reduce creature damage dealt to the owner.
    #[must_use]
    pub fn decrease_incoming_damage(amount: i64) -> Self {
        Self::single(
            Condition::on(EventKind::AttackDamage)
                .relation(PlayerRelation::Own)
                .entity(EntityKind::Creature),
            Effect::DecreaseIncomingDamage { amount },
        )
    }

    /// Survive the first `count` lethal hits each turn.
    #[must_use]
    pub fn prevent_death(count: u32) -> Self {
        Self::single(
            Condition::on(EventKind::PreDeath).relation(PlayerRelation::Own),
            Effect::PreventDeath { count },
        )
    }

    /// Hit back the first `count` attacking creatures each turn.
    #[must_use]
    pub fn return_damage(count: u32, amount: i64) -> Self {
        Self::single(
            Condition::on(EventKind::AttackDamage)
                .relation(PlayerRelation::Own)
                .entity(EntityKind::Creature),
            Effect::ReturnDamage { count, amount },
        )
    }

    /// Damage every hostile board card when the owner's play phase ends.
    #[must_use]
    pub fn damage_all_hostiles(amount: i64) -> Self {
        Self::single(
            Condition::on(EventKind::EndPlay)
                .relation(PlayerRelation::Own)
                .entity(EntityKind::Player),
            Effect::DamageAllHostiles { amount },
        )
    }

    /// Grow the owner after it damages an entity of the given kind.
    #[must_use]
    pub fn buff_on_damage(entity: EntityKind, attack: i64, life: i64) -> Self {
        Self::single(
            Condition::on(EventKind::AttackDamage)
                .relation(PlayerRelation::Opponent)
                .entity(EntityKind::Creature),
            Effect::BuffOnDamage {
                entity,
                attack,
                life,
            },
        )
    }

    /// Buff every other matching card of the turn player, once per pair.
    #[must_use]
    pub fn buff_while_active(
        relation: PlayerRelation,
        entities: impl IntoIterator<Item = EntityKind>,
        attack: i64,
        life: i64,
    ) -> Self {
        Self::single(
            Condition::on(EventKind::TurnStart).relation(relation),
            Effect::BuffWhileActive {
                entities: entities.into_iter().collect(),
                attack,
                life,
            },
        )
    }

    /// When the owner dies, buff every card it previously buffed.
    #[must_use]
    pub fn buff_on_death(entity: EntityKind, attack: i64, life: i64) -> Self {
        Self::single(
            Condition::on(EventKind::SelfDeath)
                .relation(PlayerRelation::Own)
                .entity(entity),
            Effect::BuffOnDeath { attack, life },
        )
    }

    /// Extra resources at the start of the owner's turns.
    #[must_use]
    pub fn resource(amount: i64) -> Self {
        Self::single(
            Condition::on(EventKind::TurnStart).relation(PlayerRelation::Own),
            Effect::Resource { amount },
        )
    }

    /// Modify the cost of matching summons.
    #[must_use]
    pub fn summon_cost(relation: PlayerRelation, entity: EntityKind, delta: i64) -> Self {
        Self::single(
            Condition::on(EventKind::PreSummon)
                .relation(relation)
                .entity(entity),
            Effect::SummonCost { delta },
        )
    }

    /// Capped heal of other friendly entities when the owner's play phase
    /// ends.
    #[must_use]
    pub fn heal_on_turn_end(entities: impl IntoIterator<Item = EntityKind>, amount: i64) -> Self {
        Self::single(
            Condition::on(EventKind::EndPlay).relation(PlayerRelation::Own),
            Effect::HealOnTurnEnd {
                entities: entities.into_iter().collect(),
                amount,
            },
        )
    }
}
