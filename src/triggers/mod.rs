//! Trigger system: events, conditions and abilities.
//!
//! Cards react to game events through abilities. Each event is reduced to
//! a (player relation, entity kind, event kind) triple per ability owner
//! and matched against the owner's conditions.
//!
//! ## Key Components
//!
//! - [`Event`]: the closed set of game occurrences, with their mutations
//! - [`Condition`]: wildcard matcher over the trigger triple
//! - [`Ability`]: conditions, effects and a trigger counter
//!
//! ## Example Usage
//!
//! ```
//! use cascade_ccg::triggers::{Ability, EntityKind, EventKind, PlayerRelation, TriggerKey};
//!
//! let wall = Ability::taunt();
//! let attacked =
//!     TriggerKey::new(PlayerRelation::Own, EntityKind::Creature, EventKind::AttackTarget);
//! assert!(wall.matches(&attacked));
//! ```

mod ability;
mod condition;
mod event;

pub use ability::Ability;
pub use condition::{slot_matches, Condition, EntityKind, EventKind, PlayerRelation, TriggerKey};
pub use event::{shift_stat, Cascade, Event};
