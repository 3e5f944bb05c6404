//! Builder for matches played with the sample set.

use crate::cards::Catalog;
use crate::core::{CatalogError, GameRng, MatchConfig};
use crate::rules::Match;

use super::catalog::standard_catalog;

/// Builder for a [`Match`] over the sample catalog.
#[derive(Clone, Debug)]
pub struct StandardMatchBuilder {
    config: MatchConfig,
    catalog: Catalog,
    names: Option<(String, String)>,
}

impl Default for StandardMatchBuilder {
    fn default() -> Self {
        Self {
            config: MatchConfig::default(),
            catalog: standard_catalog(),
            names: None,
        }
    }
}

impl StandardMatchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: MatchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn starting_life(mut self, life: i64) -> Self {
        self.config.starting_life = life;
        self
    }

    pub fn base_resources(mut self, resources: i64) -> Self {
        self.config.base_resources = resources;
        self
    }

    /// Play with a different card set.
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.names = Some((first.into(), second.into()));
        self
    }

    /// Build the match. The same seed always deals the same table.
    pub fn build(self, seed: u64) -> Result<Match, CatalogError> {
        let mut rng = GameRng::new(seed);
        let game = Match::new(self.config, &self.catalog, &mut rng)?;
        Ok(match self.names {
            Some((first, second)) => game.with_names(first, second),
            None => game,
        })
    }
}
