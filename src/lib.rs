//! # cascade-ccg
//!
//! A rules engine for a two-player collectible card game built around
//! event cascades.
//!
//! ## Design Principles
//!
//! 1. **Events are data**: every game occurrence is a variant of one sum
//!    type. Applying an event mutates the match and yields follow-up events.
//!
//! 2. **Depth-first resolution**: an event, the abilities it triggers and
//!    everything they cause resolve completely before a sibling event.
//!
//! 3. **Explicit state**: the match is passed to every event and effect.
//!    There is no global game, so matches clone cheaply for lookahead.
//!
//! ## Modules
//!
//! - `core`: entity ids, players, state, intents, RNG, configuration, errors
//! - `zones`: stacks and pools (centre, hand, active board)
//! - `cards`: card templates, instances and the catalog
//! - `triggers`: conditions, abilities and the event type
//! - `effects`: effect data and its interpreter
//! - `stack`: the immediate resolution engine and trigger scan
//! - `rules`: the match controller, views and `RulesEngine`
//! - `games`: the sample card set

pub mod core;
pub mod zones;
pub mod cards;
pub mod triggers;
pub mod effects;
pub mod stack;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    EntityId, PlayerId, PlayerMap, Player,
    GameRng, RandomSource,
    MatchConfig, RarityTier,
    Intent, IntentRecord,
    MatchState, Phase,
    MatchError, CatalogError,
};

pub use crate::zones::{Pool, PoolKind, PoolRef, Stack};

pub use crate::cards::{CardId, CardKind, CardTemplate, CardInstance, Catalog, Rarity};

pub use crate::triggers::{
    Ability, Condition, EntityKind, EventKind, PlayerRelation,
    Event, Cascade,
};

pub use crate::effects::{Effect, EffectContext, EffectResolver};

pub use crate::stack::ImmediateResolution;

pub use crate::rules::{
    GameResult, Match, MatchObserver, MatchSnapshot, PlayerView, RulesEngine,
};

pub use crate::games::standard::{standard_catalog, StandardMatchBuilder};
