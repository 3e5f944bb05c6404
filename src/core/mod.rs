//! Core engine types: entities, players, state, intents, RNG, configuration.
//!
//! Everything here is plain data. Rules live in `stack` (event resolution)
//! and `rules` (intent validation and the phase machine).

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;
pub mod state;

pub use entity::EntityId;
pub use player::{Player, PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::{sample_indices, GameRng, RandomSource};
pub use config::{MatchConfig, RarityTier};
pub use action::{Intent, IntentRecord};
pub use error::{CatalogError, MatchError, Result};
pub use state::{MatchState, Phase};
