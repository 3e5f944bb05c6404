//! Card templates - static card data.
//!
//! `CardTemplate` holds the immutable catalog entry for a card: name, kind,
//! rarity, base stats, cost and ability list. Templates are never mutated
//! once the catalog is loaded; everything that changes during a match
//! lives on `CardInstance`.

use serde::{Deserialize, Serialize};

use crate::triggers::Ability;

/// Unique identifier for a card template.
///
/// This identifies the "type" of card (e.g., "goblin"),
/// not a specific instance in a match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// What a card is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardKind {
    /// Raises the turn resource allotment while on the board.
    Resource,
    /// Attacks at the end of its owner's play phase.
    Creature,
    /// Inert once on the board.
    Spell,
}

/// Catalog tier a template is drawn from when seeding the centre pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Rarity {
    Resource,
    Common,
    Uncommon,
    Rare,
    Legendary,
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use cascade_ccg::cards::{CardKind, CardTemplate, Rarity};
/// use cascade_ccg::triggers::Ability;
///
/// let wall = CardTemplate::new("wall", CardKind::Creature, Rarity::Uncommon)
///     .with_stats(0, 4)
///     .with_cost(3)
///     .with_ability(Ability::taunt());
///
/// assert_eq!(wall.life, 4);
/// assert_eq!(wall.abilities.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardTemplate {
    /// Assigned by the catalog; ignored in catalog JSON.
    #[serde(default)]
    pub id: CardId,

    /// Card name.
    pub name: String,

    /// Card kind.
    pub kind: CardKind,

    /// Catalog tier.
    pub rarity: Rarity,

    /// Rules text shown to players.
    #[serde(default)]
    pub description: String,

    /// Base attack.
    #[serde(default)]
    pub attack: i64,

    /// Base life.
    #[serde(default)]
    pub life: i64,

    /// Resource cost to summon.
    #[serde(default)]
    pub cost: i64,

    /// Trigger rules carried by every instance.
    #[serde(default)]
    pub abilities: Vec<Ability>,
}

impl CardTemplate {
    /// Create a 0/0, zero-cost template with no abilities.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: CardKind, rarity: Rarity) -> Self {
        Self {
            id: CardId::default(),
            name: name.into(),
            kind,
            rarity,
            description: String::new(),
            attack: 0,
            life: 0,
            cost: 0,
            abilities: Vec::new(),
        }
    }

    /// Set the id (builder pattern). Catalogs assign ids themselves.
    #[must_use]
    pub fn with_id(mut self, id: CardId) -> Self {
        self.id = id;
        self
    }

    /// Set base attack and life (builder pattern).
    #[must_use]
    pub fn with_stats(mut self, attack: i64, life: i64) -> Self {
        self.attack = attack;
        self.life = life;
        self
    }

    /// Set the summon cost (builder pattern).
    #[must_use]
    pub fn with_cost(mut self, cost: i64) -> Self {
        self.cost = cost;
        self
    }

    /// Set the rules text (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add an ability (builder pattern).
    #[must_use]
    pub fn with_ability(mut self, ability: Ability) -> Self {
        self.abilities.push(ability);
        self
    }

    /// Check if this is a resource card.
    #[must_use]
    pub fn is_resource(&self) -> bool {
        self.kind == CardKind::Resource
    }
}
