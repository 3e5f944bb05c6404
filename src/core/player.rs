//! Players and per-player data storage.
//!
//! ## PlayerId
//!
//! Index of one of the two opponents. Turn-relative roles ("current",
//! "other") are never stored; they are derived from `MatchState::turn_owner`
//! at query time with [`PlayerId::other`].
//!
//! ## PlayerMap
//!
//! One value per player, indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::MatchError;
use crate::zones::{Pool, PoolKind};

/// Number of players in a match.
pub const PLAYER_COUNT: usize = 2;

/// Player identifier (0 or 1).
///
/// Serialized as its bare index; deserializing any other index fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// Both players, in index order.
    pub const ALL: [PlayerId; PLAYER_COUNT] = [PlayerId(0), PlayerId(1)];

    /// Create a new player ID.
    ///
    /// Panics if `id` is not 0 or 1.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!((id as usize) < PLAYER_COUNT, "Player id must be 0 or 1");
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The opponent of this player.
    #[must_use]
    pub const fn other(self) -> Self {
        Self(1 - self.0)
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = MatchError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        if (id as usize) < PLAYER_COUNT {
            Ok(Self(id))
        } else {
            Err(MatchError::InvalidPlayer(id))
        }
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> Self {
        player.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use cascade_ccg::core::{PlayerId, PlayerMap};
///
/// let mut life: PlayerMap<i64> = PlayerMap::new(|_| 20);
/// life[PlayerId::new(1)] -= 3;
///
/// assert_eq!(life[PlayerId::new(0)], 20);
/// assert_eq!(life[PlayerId::new(1)], 17);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: PlayerId::ALL.map(factory),
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// One opponent: life totals plus the hand and active board pools.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    pub name: String,

    /// Current life. Negative values are meaningful and never clamped.
    pub life: i64,

    /// Life ceiling used by capped (healing) buffs.
    pub max_life: i64,

    /// Set once a Death event resolves for this player.
    pub defeated: bool,

    /// Cards held, not yet summoned.
    pub hand: Pool,

    /// Cards in play.
    pub active: Pool,
}

impl Player {
    /// Create a player with full life and empty pools.
    #[must_use]
    pub fn new(name: impl Into<String>, life: i64) -> Self {
        Self {
            name: name.into(),
            life,
            max_life: life,
            defeated: false,
            hand: Pool::new(PoolKind::Hand),
            active: Pool::new(PoolKind::Active),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(p0.other(), p1);
        assert_eq!(p1.other(), p0);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    #[should_panic(expected = "Player id must be 0 or 1")]
    fn test_player_id_out_of_range() {
        let _ = PlayerId::new(2);
    }

    #[test]
    fn test_player_id_try_from() {
        assert_eq!(PlayerId::try_from(1), Ok(PlayerId::new(1)));
        assert_eq!(PlayerId::try_from(5), Err(MatchError::InvalidPlayer(5)));
        assert_eq!(u8::from(PlayerId::new(1)), 1);
    }

    #[test]
    fn test_player_id_deserialize_rejects_bad_index() {
        assert_eq!(serde_json::to_string(&PlayerId::new(1)).unwrap(), "1");
        assert_eq!(serde_json::from_str::<PlayerId>("0").unwrap(), PlayerId::new(0));

        let err = serde_json::from_str::<PlayerId>("5").unwrap_err();
        assert!(err.to_string().contains("no player with index 5"));
        assert!(serde_json::from_str::<PlayerMap<PlayerId>>(r#"{"data":[0,2]}"#).is_err());
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<i64> = PlayerMap::new(|p| p.index() as i64 * 10);

        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(1)], 10);
    }

    #[test]
    fn test_player_map_mutation_and_iter() {
        let mut map: PlayerMap<i64> = PlayerMap::with_value(0);
        map[PlayerId::new(1)] = 7;

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::new(0), &0), (PlayerId::new(1), &7)]);

        for (_, value) in map.iter_mut() {
            *value += 1;
        }
        assert_eq!(map[PlayerId::new(0)], 1);
        assert_eq!(map[PlayerId::new(1)], 8);
    }

    #[test]
    fn test_new_player() {
        let player = Player::new("Computer", 20);

        assert_eq!(player.life, 20);
        assert_eq!(player.max_life, 20);
        assert!(!player.defeated);
        assert!(player.hand.is_empty());
        assert_eq!(player.active.kind(), PoolKind::Active);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<i64> = PlayerMap::new(|p| p.index() as i64 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<i64> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
