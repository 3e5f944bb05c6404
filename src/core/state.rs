//! Match state: the root of all mutable game data.
//!
//! ## MatchState
//!
//! - Turn owner, phase, shared resource counter, remaining draws
//! - Both players (life, hand, active board)
//! - The shared centre pool
//! - Intent history and the match outcome
//!
//! Every event and effect receives `&mut MatchState` explicitly; there is
//! no global match. Cloning a state is cheap enough for lookahead: pools
//! are small and the history is an `im::Vector`.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Intent, IntentRecord};
use super::config::MatchConfig;
use super::entity::EntityId;
use super::player::{Player, PlayerId, PlayerMap};
use crate::cards::{CardInstance, CardKind, CardTemplate};
use crate::rules::GameResult;
use crate::triggers::EntityKind;
use crate::zones::{Pool, PoolKind, PoolRef};

/// Turn phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Summoning allowed; the turn's resource card is still available.
    #[serde(rename = "play")]
    Play,
    /// Summoning allowed; a resource card was already played this turn.
    #[serde(rename = "play-resource-played")]
    PlayResourcePlayed,
    /// Free draws from the centre pool.
    #[serde(rename = "draw")]
    Draw,
    /// A player died; no further intents are accepted.
    #[serde(rename = "finished")]
    Finished,
}

impl Phase {
    /// Either of the two play phases.
    #[must_use]
    pub const fn is_play(self) -> bool {
        matches!(self, Phase::Play | Phase::PlayResourcePlayed)
    }

    /// Wire name of the phase.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Phase::Play => "play",
            Phase::PlayResourcePlayed => "play-resource-played",
            Phase::Draw => "draw",
            Phase::Finished => "finished",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Complete match state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchState {
    /// Rules constants for this match.
    pub config: MatchConfig,

    /// Whose turn it is.
    pub turn_owner: PlayerId,

    /// Current phase.
    pub phase: Phase,

    /// Spendable resources for the current turn.
    ///
    /// Never clamped; negative cost modifiers can push it up and abilities
    /// may observe values below zero.
    pub resources: i64,

    /// Free draws left in the draw phase.
    pub draws: u32,

    /// Both opponents.
    pub players: PlayerMap<Player>,

    /// Shared acquisition pool.
    pub center: Pool,

    /// Turn number (starts at 1).
    pub turn_number: u32,

    /// Intent sequence within the turn.
    pub sequence: u32,

    /// Every applied intent, in order.
    pub history: Vector<IntentRecord>,

    /// Set once a player dies.
    pub outcome: Option<GameResult>,

    next_entity: u32,
}

impl MatchState {
    /// Create an empty match: phase `play`, zero resources and draws,
    /// empty pools, players at starting life.
    #[must_use]
    pub fn new(config: MatchConfig, turn_owner: PlayerId) -> Self {
        let life = config.starting_life;
        Self {
            config,
            turn_owner,
            phase: Phase::Play,
            resources: 0,
            draws: 0,
            players: PlayerMap::new(|p| Player::new(p.to_string(), life)),
            center: Pool::new(PoolKind::Center),
            turn_number: 1,
            sequence: 0,
            history: Vector::new(),
            outcome: None,
            next_entity: EntityId::FIRST_CARD.raw(),
        }
    }

    /// Rename both players (builder pattern).
    #[must_use]
    pub fn with_names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.players[PlayerId::new(0)].name = first.into();
        self.players[PlayerId::new(1)].name = second.into();
        self
    }

    /// Whether the match has ended.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Allocate a fresh card entity id.
    pub fn alloc_entity(&mut self) -> EntityId {
        let id = EntityId(self.next_entity);
        self.next_entity += 1;
        id
    }

    // === Pools ===

    /// Borrow a pool.
    #[must_use]
    pub fn pool(&self, pool: PoolRef) -> &Pool {
        match pool {
            PoolRef::Center => &self.center,
            PoolRef::Hand(p) => &self.players[p].hand,
            PoolRef::Active(p) => &self.players[p].active,
        }
    }

    /// Mutably borrow a pool.
    pub fn pool_mut(&mut self, pool: PoolRef) -> &mut Pool {
        match pool {
            PoolRef::Center => &mut self.center,
            PoolRef::Hand(p) => &mut self.players[p].hand,
            PoolRef::Active(p) => &mut self.players[p].active,
        }
    }

    /// Every pool, boards first so in-play lookups hit early.
    fn pool_refs() -> [PoolRef; 5] {
        [
            PoolRef::Active(PlayerId::new(0)),
            PoolRef::Active(PlayerId::new(1)),
            PoolRef::Hand(PlayerId::new(0)),
            PoolRef::Hand(PlayerId::new(1)),
            PoolRef::Center,
        ]
    }

    /// Find the pool and stack index holding a card.
    #[must_use]
    pub fn locate(&self, entity: EntityId) -> Option<(PoolRef, usize)> {
        if entity.is_player() {
            return None;
        }
        Self::pool_refs()
            .into_iter()
            .find_map(|pool| self.pool(pool).position(entity).map(|index| (pool, index)))
    }

    /// Look up a card instance anywhere in the match.
    #[must_use]
    pub fn card(&self, entity: EntityId) -> Option<&CardInstance> {
        let (pool, index) = self.locate(entity)?;
        self.pool(pool).stack(index).map(|stack| &stack.card)
    }

    /// Mutable card lookup.
    pub fn card_mut(&mut self, entity: EntityId) -> Option<&mut CardInstance> {
        let (pool, index) = self.locate(entity)?;
        self.pool_mut(pool).stack_mut(index).map(|stack| &mut stack.card)
    }

    /// Whether the entity is a player or a card still present somewhere.
    #[must_use]
    pub fn exists(&self, entity: EntityId) -> bool {
        entity.is_player() || self.locate(entity).is_some()
    }

    /// Player who owns an entity: the player itself, or the owner of the
    /// hand or board holding the card. Centre-pool cards have no owner.
    #[must_use]
    pub fn owner_of(&self, entity: EntityId) -> Option<PlayerId> {
        if let Some(player) = entity.as_player() {
            return Some(player);
        }
        self.locate(entity).and_then(|(pool, _)| pool.owner())
    }

    /// Condition-level kind of an entity.
    #[must_use]
    pub fn entity_kind(&self, entity: EntityId) -> Option<EntityKind> {
        if entity.is_player() {
            return Some(EntityKind::Player);
        }
        self.card(entity).map(|card| card.kind.into())
    }

    /// Whether a player or card has died.
    #[must_use]
    pub fn is_dead(&self, entity: EntityId) -> bool {
        match entity.as_player() {
            Some(player) => self.players[player].defeated,
            None => self.card(entity).map_or(false, |card| card.dead),
        }
    }

    /// Current attack of a card (players have none).
    #[must_use]
    pub fn attack_of(&self, entity: EntityId) -> Option<i64> {
        self.card(entity).map(|card| card.attack)
    }

    /// Current life of a player or card.
    #[must_use]
    pub fn life_of(&self, entity: EntityId) -> Option<i64> {
        match entity.as_player() {
            Some(player) => Some(self.players[player].life),
            None => self.card(entity).map(|card| card.life),
        }
    }

    /// Mutable life of a player or card.
    pub fn life_mut(&mut self, entity: EntityId) -> Option<&mut i64> {
        match entity.as_player() {
            Some(player) => Some(&mut self.players[player].life),
            None => self.card_mut(entity).map(|card| &mut card.life),
        }
    }

    // === Card movement ===

    /// Seed a pool with a fresh instance of `template`.
    pub fn add_stack(&mut self, pool: PoolRef, template: &CardTemplate, count: u32) -> EntityId {
        let entity = self.alloc_entity();
        let card = CardInstance::from_template(template, entity);
        self.pool_mut(pool).add_stack(card, count);
        entity
    }

    /// Move one card from stack `index` of `from` into `to`.
    ///
    /// The source stack shrinks (and disappears at zero). A resource card
    /// merges into an existing resource stack in the destination; anything
    /// else lands in a new one-count stack as a fresh instance. Returns the
    /// entity now representing the card, or `None` if the source stack
    /// does not exist.
    pub fn move_card(&mut self, from: PoolRef, index: usize, to: PoolRef) -> Option<EntityId> {
        let card = self.pool_mut(from).take_one(index)?;
        if card.kind == CardKind::Resource {
            if let Some(entity) = self.pool_mut(to).merge_resource() {
                return Some(entity);
            }
        }
        let entity = self.alloc_entity();
        self.pool_mut(to).add_stack(card.respawn(entity), 1);
        Some(entity)
    }

    // === Boards ===

    /// Entity ids of a player's board cards, in board order.
    #[must_use]
    pub fn active_cards(&self, player: PlayerId) -> Vec<EntityId> {
        self.players[player].active.entities().collect()
    }

    /// Total count of resource cards on a player's board.
    #[must_use]
    pub fn resource_count(&self, player: PlayerId) -> i64 {
        self.players[player]
            .active
            .stacks()
            .iter()
            .filter(|stack| stack.card.kind == CardKind::Resource)
            .map(|stack| i64::from(stack.count))
            .sum()
    }

    /// Zero every ability's triggered count on both boards.
    pub fn reset_abilities(&mut self) {
        for (_, player) in self.players.iter_mut() {
            player.active.reset_abilities();
        }
    }

    /// Remove dead creatures from both boards.
    pub fn purge_dead(&mut self) -> usize {
        self.players
            .iter_mut()
            .map(|(_, player)| player.active.purge_dead())
            .sum()
    }

    // === History ===

    /// Record an applied intent.
    pub fn record(&mut self, player: PlayerId, intent: Intent) {
        let record = IntentRecord::new(player, intent, self.turn_number, self.sequence);
        self.history.push_back(record);
        self.sequence += 1;
    }
}
