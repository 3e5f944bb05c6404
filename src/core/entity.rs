//! Entity identification.
//!
//! Every game object that an event can point at (a player or a card
//! instance) has a unique `EntityId`.
//!
//! ## ID Layout
//!
//! - `0` and `1`: the two players
//! - `2..`: card instances, allocated by `MatchState::alloc_entity`
//!
//! Attack and buff targets are plain `EntityId`s, so an attack aimed at a
//! player and an attack redirected onto a taunting creature travel through
//! the same event fields.
//!
//! ```
//! use cascade_ccg::core::{EntityId, PlayerId};
//!
//! let player = EntityId::player(PlayerId::new(1));
//! assert!(player.is_player());
//! assert_eq!(player.as_player(), Some(PlayerId::new(1)));
//!
//! let card = EntityId(10);
//! assert!(!card.is_player());
//! assert_eq!(card.as_player(), None);
//! ```

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PLAYER_COUNT};

/// Unique identifier for a player or a card instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// First id handed out to card instances.
    pub const FIRST_CARD: EntityId = EntityId(PLAYER_COUNT as u32);

    /// Entity id of a player.
    #[must_use]
    pub const fn player(id: PlayerId) -> Self {
        Self(id.index() as u32)
    }

    /// Check if this entity id refers to a player.
    #[must_use]
    pub const fn is_player(self) -> bool {
        self.0 < PLAYER_COUNT as u32
    }

    /// Convert to a `PlayerId` if this is a player entity.
    #[must_use]
    pub const fn as_player(self) -> Option<PlayerId> {
        if self.is_player() {
            Some(PlayerId::ALL[self.0 as usize])
        } else {
            None
        }
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<PlayerId> for EntityId {
    fn from(id: PlayerId) -> Self {
        Self::player(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.as_player() {
            Some(player) => write!(f, "Entity({})", player),
            None => write!(f, "Entity({})", self.0),
        }
    }
}
