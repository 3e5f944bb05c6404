//! Card catalog for template lookup.
//!
//! The `Catalog` stores every card template available to a match, grouped
//! by rarity tier. It provides fast lookup by `CardId` and the randomized
//! per-tier selection used to seed the centre pool.

use rustc_hash::FxHashMap;
use tracing::debug;

use super::definition::{CardId, CardTemplate, Rarity};
use crate::core::config::RarityTier;
use crate::core::error::CatalogError;
use crate::core::rng::{sample_indices, RandomSource};

/// Catalog of card templates.
///
/// ## Example
///
/// ```
/// use cascade_ccg::cards::{Catalog, CardKind, CardTemplate, Rarity};
///
/// let mut catalog = Catalog::new();
/// let goblin = catalog.add(
///     CardTemplate::new("goblin", CardKind::Creature, Rarity::Common).with_stats(1, 1),
/// );
///
/// assert_eq!(catalog.get(goblin).unwrap().name, "goblin");
/// assert_eq!(catalog.tier(Rarity::Common).count(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    cards: FxHashMap<CardId, CardTemplate>,
    tiers: FxHashMap<Rarity, Vec<CardId>>,
    next_id: u32,
}

impl Catalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog from a JSON array of templates.
    ///
    /// Ids in the JSON are ignored; templates are numbered in file order.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let templates: Vec<CardTemplate> = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        for template in templates {
            catalog.add(template);
        }
        debug!(templates = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Add a template with an auto-assigned ID.
    ///
    /// Returns the assigned ID. Within a tier, templates keep insertion
    /// order.
    pub fn add(&mut self, template: CardTemplate) -> CardId {
        let id = CardId::new(self.next_id);
        self.next_id += 1;

        self.tiers.entry(template.rarity).or_default().push(id);
        self.cards.insert(id, template.with_id(id));
        id
    }

    /// Get a template by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardTemplate> {
        self.cards.get(&id)
    }

    /// Find a template by name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&CardTemplate> {
        self.iter().find(|card| card.name == name)
    }

    /// Templates of one rarity, in insertion order.
    pub fn tier(&self, rarity: Rarity) -> impl Iterator<Item = &CardTemplate> {
        self.tiers
            .get(&rarity)
            .into_iter()
            .flatten()
            .filter_map(move |id| self.cards.get(id))
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all templates in id order.
    pub fn iter(&self) -> impl Iterator<Item = &CardTemplate> {
        (0..self.next_id).filter_map(move |id| self.cards.get(&CardId::new(id)))
    }

    /// Pick the templates that seed a match's centre pool.
    ///
    /// Each tier contributes `count` distinct templates chosen uniformly
    /// without replacement, paired with the tier's stack size. The result
    /// is stable-sorted by cost, so ties keep tier order.
    pub fn select<R: RandomSource + ?Sized>(
        &self,
        tiers: &[RarityTier],
        rng: &mut R,
    ) -> Result<Vec<(&CardTemplate, u32)>, CatalogError> {
        let mut selected = Vec::new();

        for tier in tiers {
            let pool: Vec<&CardTemplate> = self.tier(tier.rarity).collect();
            if tier.count > pool.len() {
                return Err(CatalogError::TierTooSmall {
                    rarity: tier.rarity,
                    requested: tier.count,
                    available: pool.len(),
                });
            }
            for index in sample_indices(rng, pool.len(), tier.count) {
                selected.push((pool[index], tier.stack_size));
            }
        }

        selected.sort_by_key(|(template, _)| template.cost);
        Ok(selected)
    }
}
