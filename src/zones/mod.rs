//! Zone system for card locations.
//!
//! ## Key Types
//!
//! - `Stack`: a count plus one representative card instance
//! - `Pool`: ordered stacks belonging to one zone
//! - `PoolKind`: centre pool, hand or active board
//! - `PoolRef`: address of a concrete pool within a match
//!
//! Relocation goes through `MatchState::move_card`, built on
//! [`Pool::take_one`] and [`Pool::merge_resource`].

pub mod pool;
pub mod stack;

pub use pool::{Pool, PoolKind, PoolRef};
pub use stack::Stack;
