//! The sample card set.

use crate::cards::{CardKind, CardTemplate, Catalog, Rarity};
use crate::triggers::{Ability, EntityKind, PlayerRelation};

fn creature(name: &str, rarity: Rarity, attack: i64, life: i64, cost: i64) -> CardTemplate {
    CardTemplate::new(name, CardKind::Creature, rarity)
        .with_stats(attack, life)
        .with_cost(cost)
}

fn spell(name: &str, rarity: Rarity, cost: i64, description: &str) -> CardTemplate {
    CardTemplate::new(name, CardKind::Spell, rarity)
        .with_cost(cost)
        .with_description(description)
}

/// Every template of the sample set, tier by tier.
#[must_use]
pub fn standard_templates() -> Vec<CardTemplate> {
    vec![
        // Resource
        CardTemplate::new("resource", CardKind::Resource, Rarity::Resource),
        // Common
        creature("goblin", Rarity::Common, 1, 1, 1),
        creature("giant", Rarity::Common, 1, 3, 2),
        creature("wild beast", Rarity::Common, 2, 1, 2),
        spell("empower", Rarity::Common, 3, "+1/+1 to target creature"),
        creature("witch", Rarity::Common, 2, 1, 3)
            .with_description("1 damage the first hostile creature attacking each turn")
            .with_ability(Ability::return_damage(1, 1)),
        // Uncommon
        creature("wall", Rarity::Uncommon, 0, 4, 3)
            .with_description("-1 all incoming damage, taunt")
            .with_ability(Ability::taunt())
            .with_ability(Ability::decrease_incoming_damage(1)),
        creature("vampire", Rarity::Uncommon, 2, 4, 4)
            .with_description("+1/+0 after dealing damage to the player")
            .with_ability(Ability::buff_on_damage(EntityKind::Player, 1, 0)),
        spell("fireball", Rarity::Uncommon, 3, "2 damage to any creature or player"),
        spell("reinforcements", Rarity::Uncommon, 3, "draw 2 cards"),
        spell("sword", Rarity::Uncommon, 4, "1 damage to one attacking creature per turn"),
        // Rare
        creature("supplies", Rarity::Rare, 0, 2, 3)
            .with_description("+1 resource")
            .with_ability(Ability::resource(1)),
        creature("general", Rarity::Rare, 3, 1, 6)
            .with_description("+1/+1 boost to all friendly creatures while active")
            .with_ability(Ability::buff_while_active(
                PlayerRelation::Own,
                [EntityKind::Creature],
                1,
                1,
            ))
            .with_ability(Ability::buff_on_death(EntityKind::Creature, -1, -1)),
        creature("priest", Rarity::Rare, 1, 3, 6)
            .with_description("heal +0/+1 to all other friendly creatures and player at turn end")
            .with_ability(Ability::heal_on_turn_end(
                [EntityKind::Player, EntityKind::Creature],
                1,
            )),
        creature("summoner", Rarity::Rare, 1, 2, 6)
            .with_description("creatures cost 1 less resource to cast")
            .with_ability(Ability::summon_cost(
                PlayerRelation::Own,
                EntityKind::Creature,
                -1,
            )),
        // Legendary
        creature("dragon", Rarity::Legendary, 0, 5, 8)
            .with_description("1 damage to all hostile creatures on attack")
            .with_ability(Ability::damage_all_hostiles(1)),
    ]
}

/// The sample set as a catalog.
#[must_use]
pub fn standard_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    for template in standard_templates() {
        catalog.add(template);
    }
    catalog
}
