//! Match configuration.
//!
//! A match is configured once at creation:
//! - `RarityTier`: how many distinct templates of a rarity seed the shared
//!   pool, and how many copies of each
//! - `MatchConfig`: life totals, per-turn allotments, opening hands, tiers
//!
//! Every value has a default matching the sample card set, so
//! `MatchConfig::default()` is a playable configuration.

use serde::{Deserialize, Serialize};

use crate::cards::Rarity;

/// Shared-pool contribution of one rarity tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RarityTier {
    /// Which catalog tier to draw templates from.
    pub rarity: Rarity,

    /// Number of distinct templates picked from the tier.
    pub count: usize,

    /// Starting stack size for each picked template.
    pub stack_size: u32,
}

impl RarityTier {
    /// Create a tier entry.
    #[must_use]
    pub const fn new(rarity: Rarity, count: usize, stack_size: u32) -> Self {
        Self {
            rarity,
            count,
            stack_size,
        }
    }
}

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Life (and max life) each player starts with.
    pub starting_life: i64,

    /// Free draws granted when a play phase ends.
    pub draws_per_turn: u32,

    /// Flat resource allotment added at every turn change.
    pub base_resources: i64,

    /// Resources granted immediately when a resource card is summoned.
    pub resource_play_bonus: i64,

    /// Cards the starting player takes from shared stack 0.
    pub opening_hand_first: usize,

    /// Cards the other player takes from shared stack 0.
    pub opening_hand_second: usize,

    /// Shared pool composition, in order.
    pub tiers: Vec<RarityTier>,

    /// Deepest event cascade resolved before further events are dropped.
    pub max_cascade_depth: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            starting_life: 20,
            draws_per_turn: 2,
            base_resources: 100,
            resource_play_bonus: 1,
            opening_hand_first: 1,
            opening_hand_second: 2,
            tiers: vec![
                RarityTier::new(Rarity::Resource, 1, 20),
                RarityTier::new(Rarity::Common, 3, 15),
                RarityTier::new(Rarity::Uncommon, 3, 10),
                RarityTier::new(Rarity::Rare, 2, 6),
                RarityTier::new(Rarity::Legendary, 1, 4),
            ],
            max_cascade_depth: 256,
        }
    }
}

impl MatchConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set starting life (builder pattern).
    #[must_use]
    pub fn with_starting_life(mut self, life: i64) -> Self {
        self.starting_life = life;
        self
    }

    /// Set draws per turn (builder pattern).
    #[must_use]
    pub fn with_draws_per_turn(mut self, draws: u32) -> Self {
        self.draws_per_turn = draws;
        self
    }

    /// Set the per-turn base resource allotment (builder pattern).
    #[must_use]
    pub fn with_base_resources(mut self, resources: i64) -> Self {
        self.base_resources = resources;
        self
    }

    /// Set the opening hand sizes (builder pattern).
    #[must_use]
    pub fn with_opening_hands(mut self, first: usize, second: usize) -> Self {
        self.opening_hand_first = first;
        self.opening_hand_second = second;
        self
    }

    /// Replace the shared pool composition (builder pattern).
    #[must_use]
    pub fn with_tiers(mut self, tiers: impl IntoIterator<Item = RarityTier>) -> Self {
        self.tiers = tiers.into_iter().collect();
        self
    }

    /// Set the cascade depth guard (builder pattern).
    #[must_use]
    pub fn with_max_cascade_depth(mut self, depth: usize) -> Self {
        self.max_cascade_depth = depth;
        self
    }

    /// Total stacks the shared pool starts with.
    #[must_use]
    pub fn shared_stack_count(&self) -> usize {
        self.tiers.iter().map(|tier| tier.count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MatchConfig::default();

        assert_eq!(config.starting_life, 20);
        assert_eq!(config.draws_per_turn, 2);
        assert_eq!(config.base_resources, 100);
        assert_eq!(config.opening_hand_first, 1);
        assert_eq!(config.opening_hand_second, 2);
        assert_eq!(config.shared_stack_count(), 10);
        assert_eq!(config.tiers[0], RarityTier::new(Rarity::Resource, 1, 20));
    }

    #[test]
    fn test_builder() {
        let config = MatchConfig::new()
            .with_starting_life(30)
            .with_draws_per_turn(3)
            .with_base_resources(5)
            .with_opening_hands(2, 3)
            .with_tiers([RarityTier::new(Rarity::Common, 2, 4)])
            .with_max_cascade_depth(16);

        assert_eq!(config.starting_life, 30);
        assert_eq!(config.draws_per_turn, 3);
        assert_eq!(config.base_resources, 5);
        assert_eq!((config.opening_hand_first, config.opening_hand_second), (2, 3));
        assert_eq!(config.shared_stack_count(), 2);
        assert_eq!(config.max_cascade_depth, 16);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: MatchConfig = serde_json::from_str(r#"{"starting_life": 12}"#).unwrap();

        assert_eq!(config.starting_life, 12);
        assert_eq!(config.draws_per_turn, 2);
        assert_eq!(config.tiers.len(), 5);
    }

    #[test]
    fn test_config_serialization() {
        let config = MatchConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
