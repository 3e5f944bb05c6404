//! Pools: ordered stacks belonging to one zone.
//!
//! A match has five pools: the shared centre pool and, per player, a hand
//! and an active board. Cards move by taking one copy out of a source stack
//! (the stack disappears at zero) and adding it to the destination, where a
//! resource card joins the existing resource stack if there is one.
//!
//! ```
//! use cascade_ccg::cards::{CardInstance, CardKind, CardTemplate, Rarity};
//! use cascade_ccg::core::EntityId;
//! use cascade_ccg::zones::{Pool, PoolKind};
//!
//! let goblin = CardTemplate::new("goblin", CardKind::Creature, Rarity::Common);
//! let mut center = Pool::new(PoolKind::Center);
//! center.add_stack(CardInstance::from_template(&goblin, EntityId(2)), 2);
//!
//! let taken = center.take_one(0).unwrap();
//! assert_eq!(taken.name, "goblin");
//! assert_eq!(center.card_count(), 1);
//! ```

use serde::{Deserialize, Serialize};

use super::stack::Stack;
use crate::cards::CardInstance;
use crate::core::entity::EntityId;
use crate::core::player::PlayerId;

/// Which zone a pool represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PoolKind {
    /// Shared acquisition source.
    Center,
    /// A player's unsummoned cards.
    Hand,
    /// A player's board.
    Active,
}

/// Address of one of the five pools in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoolRef {
    Center,
    Hand(PlayerId),
    Active(PlayerId),
}

impl PoolRef {
    /// The player owning the pool; `None` for the centre pool.
    #[must_use]
    pub const fn owner(self) -> Option<PlayerId> {
        match self {
            PoolRef::Center => None,
            PoolRef::Hand(p) | PoolRef::Active(p) => Some(p),
        }
    }

    /// Zone kind of the referenced pool.
    #[must_use]
    pub const fn kind(self) -> PoolKind {
        match self {
            PoolRef::Center => PoolKind::Center,
            PoolRef::Hand(_) => PoolKind::Hand,
            PoolRef::Active(_) => PoolKind::Active,
        }
    }
}

/// An ordered sequence of stacks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    kind: PoolKind,
    stacks: Vec<Stack>,
}

impl Pool {
    /// Create an empty pool.
    #[must_use]
    pub fn new(kind: PoolKind) -> Self {
        Self {
            kind,
            stacks: Vec::new(),
        }
    }

    /// Zone kind of this pool.
    #[must_use]
    pub fn kind(&self) -> PoolKind {
        self.kind
    }

    /// All stacks, in order.
    #[must_use]
    pub fn stacks(&self) -> &[Stack] {
        &self.stacks
    }

    /// Stack at `index`.
    #[must_use]
    pub fn stack(&self, index: usize) -> Option<&Stack> {
        self.stacks.get(index)
    }

    /// Mutable stack at `index`.
    pub fn stack_mut(&mut self, index: usize) -> Option<&mut Stack> {
        self.stacks.get_mut(index)
    }

    /// Number of stacks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    /// Check if the pool holds no stacks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    /// Total copies across all stacks.
    #[must_use]
    pub fn card_count(&self) -> u32 {
        self.stacks.iter().map(|stack| stack.count).sum()
    }

    /// Whether stack `index` exists and has copies left.
    #[must_use]
    pub fn has_card(&self, index: usize) -> bool {
        self.stack(index).map_or(false, |stack| !stack.is_empty())
    }

    /// Index of the stack whose representative is `entity`.
    #[must_use]
    pub fn position(&self, entity: EntityId) -> Option<usize> {
        self.stacks.iter().position(|stack| stack.card.entity == entity)
    }

    /// Representative entity ids, in order.
    pub fn entities(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.stacks.iter().map(|stack| stack.card.entity)
    }

    /// Append a stack.
    pub fn add_stack(&mut self, card: CardInstance, count: u32) {
        self.stacks.push(Stack::new(card, count));
    }

    /// Take one copy out of stack `index`.
    ///
    /// Returns a copy of the representative; the stack is removed when its
    /// count reaches zero. `None` if the stack does not exist or is empty.
    pub fn take_one(&mut self, index: usize) -> Option<CardInstance> {
        let stack = self.stacks.get_mut(index)?;
        if stack.is_empty() {
            return None;
        }
        stack.count -= 1;
        if stack.is_empty() {
            Some(self.stacks.remove(index).card)
        } else {
            Some(stack.card.clone())
        }
    }

    /// Add one copy to the existing resource stack, if any.
    ///
    /// Returns the resource stack's representative entity.
    pub fn merge_resource(&mut self) -> Option<EntityId> {
        let stack = self.stacks.iter_mut().find(|stack| stack.card.is_resource())?;
        stack.count += 1;
        Some(stack.card.entity)
    }

    /// Zero every ability's triggered count.
    pub fn reset_abilities(&mut self) {
        for stack in &mut self.stacks {
            stack.card.reset_abilities();
        }
    }

    /// Remove dead creature stacks. Returns how many were removed.
    pub fn purge_dead(&mut self) -> usize {
        let before = self.stacks.len();
        self.stacks
            .retain(|stack| !(stack.card.dead && stack.card.is_creature()));
        before - self.stacks.len()
    }
}
