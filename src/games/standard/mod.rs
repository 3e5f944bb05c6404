//! The standard sample set.
//!
//! Five rarity tiers: one resource card, five commons, five uncommons,
//! four rares and a single legendary. Spells carry a description only and
//! sit on the board as inert cards.

mod builder;
mod catalog;

pub use builder::StandardMatchBuilder;
pub use catalog::{standard_catalog, standard_templates};
