//! Trigger conditions.
//!
//! A condition is a triple of allowed-value sets over
//! (player relation, source entity kind, event kind). An empty set is a
//! wildcard for its slot. Every event resolved by the engine is reduced to
//! one [`TriggerKey`] per candidate ability owner and matched against the
//! owner's conditions.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardKind;

/// Relation between an ability's owner and the player an event is about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerRelation {
    /// The event concerns the owner's own side.
    #[serde(rename = "self")]
    Own,
    /// The event concerns the opponent's side.
    #[serde(rename = "opponent")]
    Opponent,
}

/// What kind of entity an event is sourced from (or aimed at).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityKind {
    Player,
    Resource,
    Creature,
    Spell,
}

impl From<CardKind> for EntityKind {
    fn from(kind: CardKind) -> Self {
        match kind {
            CardKind::Resource => EntityKind::Resource,
            CardKind::Creature => EntityKind::Creature,
            CardKind::Spell => EntityKind::Spell,
        }
    }
}

/// The kind of a game event, as seen by conditions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventKind {
    /// Always sourced from a player.
    TurnStart,
    PreSummon,
    Summon,
    Draw,
    /// Always sourced from a player.
    EndPlay,
    /// Always sourced from a player.
    EndDraw,
    AttackTarget,
    AttackDamage,
    PreDeath,
    Death,
    /// Only the dying card sees this, and it bypasses the dead-card filter.
    SelfDeath,
    Buff,
}

/// The (relation, entity, event) triple a condition is matched against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TriggerKey {
    pub relation: PlayerRelation,
    pub entity: EntityKind,
    pub event: EventKind,
}

impl TriggerKey {
    /// Create a trigger key.
    #[must_use]
    pub const fn new(relation: PlayerRelation, entity: EntityKind, event: EventKind) -> Self {
        Self {
            relation,
            entity,
            event,
        }
    }
}

/// A wildcard-capable matcher over the trigger triple.
///
/// ```
/// use cascade_ccg::triggers::{
///     Condition, EntityKind, EventKind, PlayerRelation, TriggerKey,
/// };
///
/// let taunt = Condition::on(EventKind::AttackTarget)
///     .relation(PlayerRelation::Own)
///     .entity(EntityKind::Creature);
///
/// let attacked =
///     TriggerKey::new(PlayerRelation::Own, EntityKind::Creature, EventKind::AttackTarget);
/// let attacking =
///     TriggerKey::new(PlayerRelation::Opponent, EntityKind::Creature, EventKind::AttackTarget);
///
/// assert!(taunt.matches(&attacked));
/// assert!(!taunt.matches(&attacking));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    /// Allowed player relations; empty matches any.
    #[serde(default)]
    pub players: SmallVec<[PlayerRelation; 2]>,

    /// Allowed source entity kinds; empty matches any.
    #[serde(default)]
    pub entities: SmallVec<[EntityKind; 4]>,

    /// Allowed event kinds; empty matches any.
    #[serde(default)]
    pub events: SmallVec<[EventKind; 2]>,
}

impl Condition {
    /// Create a condition from the three allowed-value sets.
    pub fn new(
        players: impl IntoIterator<Item = PlayerRelation>,
        entities: impl IntoIterator<Item = EntityKind>,
        events: impl IntoIterator<Item = EventKind>,
    ) -> Self {
        Self {
            players: players.into_iter().collect(),
            entities: entities.into_iter().collect(),
            events: events.into_iter().collect(),
        }
    }

    /// A condition matching a single event kind, any relation and source.
    pub fn on(event: EventKind) -> Self {
        Self::default().event(event)
    }

    /// Allow another player relation (builder pattern).
    #[must_use]
    pub fn relation(mut self, relation: PlayerRelation) -> Self {
        if !self.players.contains(&relation) {
            self.players.push(relation);
        }
        self
    }

    /// Allow another source entity kind (builder pattern).
    #[must_use]
    pub fn entity(mut self, entity: EntityKind) -> Self {
        if !self.entities.contains(&entity) {
            self.entities.push(entity);
        }
        self
    }

    /// Allow another event kind (builder pattern).
    #[must_use]
    pub fn event(mut self, event: EventKind) -> Self {
        if !self.events.contains(&event) {
            self.events.push(event);
        }
        self
    }

    /// Check the triple against every non-empty slot.
    #[must_use]
    pub fn matches(&self, key: &TriggerKey) -> bool {
        slot_matches(&self.players, &key.relation)
            && slot_matches(&self.entities, &key.entity)
            && slot_matches(&self.events, &key.event)
    }
}

/// Empty `allowed` is a wildcard; otherwise `value` must be listed.
pub fn slot_matches<T: PartialEq>(allowed: &[T], value: &T) -> bool {
    allowed.is_empty() || allowed.contains(value)
}
