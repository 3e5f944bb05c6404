//! Card instances - runtime card state.
//!
//! `CardInstance` is one card in a match: template identity plus current
//! stats, ability trigger counters and buff bookkeeping. A stack holds one
//! representative instance for all of its copies.
//!
//! Instances are built from a template ([`CardInstance::from_template`]) or
//! from another instance when a card changes pool ([`CardInstance::respawn`]).
//! Both give fresh buff lists, zeroed ability counters and a new entity id.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::definition::{CardId, CardKind, CardTemplate};
use crate::core::entity::EntityId;
use crate::triggers::Ability;

/// A card instance in a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique entity ID for this instance.
    pub entity: EntityId,

    /// Template this instance was built from.
    pub card_id: CardId,

    /// Template name.
    pub name: String,

    /// Template kind.
    pub kind: CardKind,

    pub attack: i64,
    pub max_attack: i64,
    pub life: i64,
    pub max_life: i64,

    /// Summon cost.
    pub cost: i64,

    /// Per-instance copies of the template's abilities.
    pub abilities: Vec<Ability>,

    /// Cards whose sourced buffs have been applied to this one.
    #[serde(default)]
    pub buffed_by: SmallVec<[EntityId; 4]>,

    /// Cards this one has applied a sourced buff to.
    #[serde(default)]
    pub buffed_targets: SmallVec<[EntityId; 4]>,

    /// Set by a resolved Death; the card stays on the board until the
    /// end-of-play purge.
    #[serde(default)]
    pub dead: bool,
}

impl CardInstance {
    /// Build a fresh instance of a template.
    #[must_use]
    pub fn from_template(template: &CardTemplate, entity: EntityId) -> Self {
        Self {
            entity,
            card_id: template.id,
            name: template.name.clone(),
            kind: template.kind,
            attack: template.attack,
            max_attack: template.attack,
            life: template.life,
            max_life: template.life,
            cost: template.cost,
            abilities: template.abilities.iter().map(Ability::respawn).collect(),
            buffed_by: SmallVec::new(),
            buffed_targets: SmallVec::new(),
            dead: false,
        }
    }

    /// Build a fresh copy of this instance under a new entity id.
    ///
    /// Current stats restart from the max stats; buff lists, ability
    /// counters and the dead flag start over.
    #[must_use]
    pub fn respawn(&self, entity: EntityId) -> Self {
        Self {
            entity,
            card_id: self.card_id,
            name: self.name.clone(),
            kind: self.kind,
            attack: self.max_attack,
            max_attack: self.max_attack,
            life: self.max_life,
            max_life: self.max_life,
            cost: self.cost,
            abilities: self.abilities.iter().map(Ability::respawn).collect(),
            buffed_by: SmallVec::new(),
            buffed_targets: SmallVec::new(),
            dead: false,
        }
    }

    /// Check if this is a resource card.
    #[must_use]
    pub fn is_resource(&self) -> bool {
        self.kind == CardKind::Resource
    }

    /// Check if this is a creature.
    #[must_use]
    pub fn is_creature(&self) -> bool {
        self.kind == CardKind::Creature
    }

    /// Zero every ability's triggered count.
    pub fn reset_abilities(&mut self) {
        for ability in &mut self.abilities {
            ability.reset();
        }
    }

    /// Whether `source` has already buffed this card.
    #[must_use]
    pub fn was_buffed_by(&self, source: EntityId) -> bool {
        self.buffed_by.contains(&source)
    }

    /// Whether this card has already buffed `target`.
    #[must_use]
    pub fn has_buffed(&self, target: EntityId) -> bool {
        self.buffed_targets.contains(&target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rarity;

    fn witch() -> CardTemplate {
        CardTemplate::new("witch", CardKind::Creature, Rarity::Common)
            .with_id(CardId::new(5))
            .with_stats(2, 1)
            .with_cost(3)
            .with_ability(Ability::return_damage(1, 1))
    }

    #[test]
    fn test_from_template() {
        let card = CardInstance::from_template(&witch(), EntityId(7));

        assert_eq!(card.entity, EntityId(7));
        assert_eq!(card.card_id, CardId::new(5));
        assert_eq!((card.attack, card.max_attack), (2, 2));
        assert_eq!((card.life, card.max_life), (1, 1));
        assert_eq!(card.cost, 3);
        assert_eq!(card.abilities.len(), 1);
        assert!(card.is_creature());
        assert!(!card.dead);
    }

    #[test]
    fn test_respawn_resets_runtime_state() {
        let mut card = CardInstance::from_template(&witch(), EntityId(7));
        card.max_attack = 3;
        card.attack = 1;
        card.life = -4;
        card.dead = true;
        card.buffed_by.push(EntityId(9));
        card.buffed_targets.push(EntityId(10));
        card.abilities[0].triggered = 1;

        let copy = card.respawn(EntityId(8));

        assert_eq!(copy.entity, EntityId(8));
        assert_eq!(copy.attack, 3);
        assert_eq!(copy.life, 1);
        assert!(!copy.dead);
        assert!(copy.buffed_by.is_empty());
        assert!(copy.buffed_targets.is_empty());
        assert_eq!(copy.abilities[0].triggered, 0);
    }

    #[test]
    fn test_buff_bookkeeping() {
        let mut card = CardInstance::from_template(&witch(), EntityId(7));
        assert!(!card.was_buffed_by(EntityId(3)));

        card.buffed_by.push(EntityId(3));
        card.buffed_targets.push(EntityId(4));

        assert!(card.was_buffed_by(EntityId(3)));
        assert!(card.has_buffed(EntityId(4)));
    }

    #[test]
    fn test_reset_abilities() {
        let mut card = CardInstance::from_template(&witch(), EntityId(7));
        card.abilities[0].triggered = 3;
        card.reset_abilities();
        assert_eq!(card.abilities[0].triggered, 0);
    }
}
