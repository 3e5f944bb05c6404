//! Game events.
//!
//! Every game occurrence is one `Event` variant carrying the context it
//! needs. Resolution (see [`ImmediateResolution`](crate::stack::ImmediateResolution))
//! is the same for every variant:
//!
//! 1. [`Event::is_effective`]: ineffective events do nothing at all
//! 2. abilities matching [`Event::subject`] fire and may rewrite the event
//! 3. [`Event::apply`] mutates the match and returns the follow-up cascade
//!
//! Fields that abilities rewrite (attack target, damage, cost, resource
//! bonus, die flag) are plain fields on the variant.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::info;

use super::condition::{EntityKind, EventKind};
use crate::cards::{CardId, CardKind};
use crate::core::entity::EntityId;
use crate::core::player::PlayerId;
use crate::core::state::{MatchState, Phase};
use crate::rules::GameResult;
use crate::zones::PoolRef;

/// Follow-up events, resolved in order.
pub type Cascade = SmallVec<[Event; 2]>;

/// One atomic game occurrence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum Event {
    /// A turn began; `resource` is added to the pool.
    TurnStart { player: PlayerId, resource: i64 },

    /// A summon was requested; abilities may change `cost`.
    PreSummon {
        player: PlayerId,
        stack: usize,
        card: CardId,
        kind: CardKind,
        cost: i64,
    },

    /// A summon was paid for.
    Summon {
        player: PlayerId,
        stack: usize,
        card: CardId,
        kind: CardKind,
        cost: i64,
    },

    /// A card is drawn from centre stack `stack`.
    Draw {
        player: PlayerId,
        stack: usize,
        card: CardId,
        kind: CardKind,
    },

    /// The turn owner ended their play phase.
    EndPlay { player: PlayerId },

    /// The turn owner ended their draw phase.
    EndDraw { player: PlayerId },

    /// A creature declares an attack; taunt may redirect `target`.
    AttackTarget {
        source: EntityId,
        source_player: PlayerId,
        target_player: PlayerId,
        target: EntityId,
        taunted: bool,
    },

    /// Damage about to land on `target`.
    AttackDamage {
        source: EntityId,
        source_player: PlayerId,
        target_player: PlayerId,
        target: EntityId,
        amount: i64,
    },

    /// `target` dropped to zero life; clearing `die` cancels the death.
    PreDeath {
        source_player: PlayerId,
        target_player: PlayerId,
        target: EntityId,
        die: bool,
    },

    /// `target` dies.
    Death {
        source_player: PlayerId,
        target_player: PlayerId,
        target: EntityId,
    },

    /// Seen only by the dying card itself.
    SelfDeath {
        source_player: PlayerId,
        target_player: PlayerId,
        target: EntityId,
    },

    /// Stat change. A sourced buff applies at most once per
    /// (source, target) pair.
    Buff {
        target_player: PlayerId,
        target: EntityId,
        attack: i64,
        life: i64,
        capped: bool,
        source: Option<EntityId>,
    },
}

impl Event {
    /// Attack from `source` against the opposing player.
    #[must_use]
    pub fn attack(source: EntityId, source_player: PlayerId) -> Self {
        let target_player = source_player.other();
        Event::AttackTarget {
            source,
            source_player,
            target_player,
            target: EntityId::player(target_player),
            taunted: false,
        }
    }

    /// Damage `target` directly, bypassing target selection.
    #[must_use]
    pub fn damage(
        source: EntityId,
        source_player: PlayerId,
        target_player: PlayerId,
        target: EntityId,
        amount: i64,
    ) -> Self {
        Event::AttackDamage {
            source,
            source_player,
            target_player,
            target,
            amount,
        }
    }

    /// Unsourced, uncapped buff.
    #[must_use]
    pub fn buff(target_player: PlayerId, target: EntityId, attack: i64, life: i64) -> Self {
        Event::Buff {
            target_player,
            target,
            attack,
            life,
            capped: false,
            source: None,
        }
    }

    /// Buff sourced from `source`; applies once per pair.
    #[must_use]
    pub fn sourced_buff(
        target_player: PlayerId,
        target: EntityId,
        attack: i64,
        life: i64,
        source: EntityId,
    ) -> Self {
        Event::Buff {
            target_player,
            target,
            attack,
            life,
            capped: false,
            source: Some(source),
        }
    }

    /// Unsourced buff whose positive deltas stop at the max stats.
    #[must_use]
    pub fn heal(target_player: PlayerId, target: EntityId, life: i64) -> Self {
        Event::Buff {
            target_player,
            target,
            attack: 0,
            life,
            capped: true,
            source: None,
        }
    }

    /// Condition-level kind.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Event::TurnStart { .. } => EventKind::TurnStart,
            Event::PreSummon { .. } => EventKind::PreSummon,
            Event::Summon { .. } => EventKind::Summon,
            Event::Draw { .. } => EventKind::Draw,
            Event::EndPlay { .. } => EventKind::EndPlay,
            Event::EndDraw { .. } => EventKind::EndDraw,
            Event::AttackTarget { .. } => EventKind::AttackTarget,
            Event::AttackDamage { .. } => EventKind::AttackDamage,
            Event::PreDeath { .. } => EventKind::PreDeath,
            Event::Death { .. } => EventKind::Death,
            Event::SelfDeath { .. } => EventKind::SelfDeath,
            Event::Buff { .. } => EventKind::Buff,
        }
    }

    /// The entity the event lands on, if it has one.
    #[must_use]
    pub fn target(&self) -> Option<EntityId> {
        match self {
            Event::AttackTarget { target, .. }
            | Event::AttackDamage { target, .. }
            | Event::PreDeath { target, .. }
            | Event::Death { target, .. }
            | Event::SelfDeath { target, .. }
            | Event::Buff { target, .. } => Some(*target),
            _ => None,
        }
    }

    /// The player abilities treat as "self" and the entity kind they match
    /// on.
    ///
    /// - turn, summon and draw events: the acting player; the player or the
    ///   card kind involved
    /// - attacks: the defending player; the attacker's kind
    /// - deaths and buffs: the target's player; the target's kind
    ///
    /// `None` when the entity involved no longer exists.
    #[must_use]
    pub fn subject(&self, state: &MatchState) -> Option<(PlayerId, EntityKind)> {
        match *self {
            Event::TurnStart { player, .. }
            | Event::EndPlay { player }
            | Event::EndDraw { player } => Some((player, EntityKind::Player)),
            Event::PreSummon { player, kind, .. }
            | Event::Summon { player, kind, .. }
            | Event::Draw { player, kind, .. } => Some((player, kind.into())),
            Event::AttackTarget {
                source,
                target_player,
                ..
            }
            | Event::AttackDamage {
                source,
                target_player,
                ..
            } => state.entity_kind(source).map(|kind| (target_player, kind)),
            Event::PreDeath {
                target,
                target_player,
                ..
            }
            | Event::Death {
                target,
                target_player,
                ..
            }
            | Event::SelfDeath {
                target,
                target_player,
                ..
            }
            | Event::Buff {
                target,
                target_player,
                ..
            } => state.entity_kind(target).map(|kind| (target_player, kind)),
        }
    }

    /// Whether the event does anything in the current state.
    ///
    /// Ineffective events neither trigger abilities nor mutate state.
    #[must_use]
    pub fn is_effective(&self, state: &MatchState) -> bool {
        match *self {
            Event::PreSummon { player, stack, .. } | Event::Summon { player, stack, .. } => {
                state.players[player].hand.has_card(stack)
            }
            Event::Draw { stack, .. } => state.draws > 0 && state.center.has_card(stack),
            Event::AttackTarget { source, .. } => state.card(source).map_or(false, |card| {
                !card.dead && card.attack != 0 && card.life > 0
            }),
            Event::AttackDamage { target, .. } | Event::SelfDeath { target, .. } => {
                state.exists(target)
            }
            Event::PreDeath { target, .. } | Event::Death { target, .. } => {
                state.exists(target) && !state.is_dead(target)
            }
            Event::Buff { target, source, .. } => {
                state.exists(target)
                    && source.map_or(true, |source| !buff_recorded(state, source, target))
            }
            Event::TurnStart { .. } | Event::EndPlay { .. } | Event::EndDraw { .. } => true,
        }
    }

    /// Mutate the match and return the follow-up events.
    pub fn apply(&self, state: &mut MatchState) -> Cascade {
        let mut cascade = Cascade::new();

        match *self {
            Event::TurnStart { resource, .. } => {
                state.resources += resource;
            }

            Event::PreSummon {
                player,
                stack,
                card,
                kind,
                cost,
            } => {
                if state.resources >= cost {
                    cascade.push(Event::Summon {
                        player,
                        stack,
                        card,
                        kind,
                        cost,
                    });
                }
            }

            Event::Summon {
                player,
                stack,
                kind,
                cost,
                ..
            } => {
                state.resources -= cost;
                state.move_card(PoolRef::Hand(player), stack, PoolRef::Active(player));
                if kind == CardKind::Resource {
                    state.resources += state.config.resource_play_bonus;
                    state.phase = Phase::PlayResourcePlayed;
                }
            }

            Event::Draw { player, stack, .. } => {
                state.draws = state.draws.saturating_sub(1);
                state.move_card(PoolRef::Center, stack, PoolRef::Hand(player));
            }

            Event::EndPlay { .. } => {}

            Event::EndDraw { player } => {
                let next = player.other();
                state.turn_owner = next;
                state.phase = Phase::Play;
                state.resources = state.resource_count(next) + state.config.base_resources;
                state.turn_number += 1;
                state.sequence = 0;
                info!(
                    turn = state.turn_number,
                    player = %next,
                    resources = state.resources,
                    "turn start"
                );
                cascade.push(Event::TurnStart {
                    player: next,
                    resource: 0,
                });
            }

            Event::AttackTarget {
                source,
                source_player,
                target_player,
                target,
                ..
            } => {
                if let Some(amount) = state.attack_of(source) {
                    let damage =
                        Event::damage(source, source_player, target_player, target, amount);
                    cascade.push(damage);
                }
            }

            Event::AttackDamage {
                source_player,
                target_player,
                target,
                amount,
                ..
            } => {
                if let Some(life) = state.life_mut(target) {
                    *life -= amount;
                    if *life <= 0 {
                        cascade.push(Event::PreDeath {
                            source_player,
                            target_player,
                            target,
                            die: true,
                        });
                    }
                }
            }

            Event::PreDeath {
                source_player,
                target_player,
                target,
                die,
            } => {
                if die {
                    cascade.push(Event::Death {
                        source_player,
                        target_player,
                        target,
                    });
                }
            }

            Event::Death {
                source_player,
                target_player,
                target,
            } => match target.as_player() {
                Some(player) => defeat(state, player),
                None => {
                    if let Some(card) = state.card_mut(target) {
                        card.dead = true;
                    }
                    cascade.push(Event::SelfDeath {
                        source_player,
                        target_player,
                        target,
                    });
                }
            },

            Event::SelfDeath { .. } => {}

            Event::Buff {
                target,
                attack,
                life,
                capped,
                source,
                ..
            } => {
                if let Some(source) = source {
                    record_buff(state, source, target);
                }
                apply_buff(state, target, attack, life, capped);
            }
        }

        cascade
    }
}

/// Whether a (source, target) buff pair was already applied.
fn buff_recorded(state: &MatchState, source: EntityId, target: EntityId) -> bool {
    state.card(target).map_or(false, |card| card.was_buffed_by(source))
        || state.card(source).map_or(false, |card| card.has_buffed(target))
}

fn record_buff(state: &mut MatchState, source: EntityId, target: EntityId) {
    if let Some(card) = state.card_mut(target) {
        card.buffed_by.push(source);
    }
    if let Some(card) = state.card_mut(source) {
        card.buffed_targets.push(target);
    }
}

fn apply_buff(state: &mut MatchState, target: EntityId, attack: i64, life: i64, capped: bool) {
    match target.as_player() {
        Some(player) => {
            let player = &mut state.players[player];
            shift_stat(&mut player.life, &mut player.max_life, life, capped);
        }
        None => {
            if let Some(card) = state.card_mut(target) {
                shift_stat(&mut card.attack, &mut card.max_attack, attack, capped);
                shift_stat(&mut card.life, &mut card.max_life, life, capped);
            }
        }
    }
}

/// Uncapped: current and max move together. Capped: only current moves,
/// and a positive delta never lifts it past `max`.
pub fn shift_stat(current: &mut i64, max: &mut i64, delta: i64, capped: bool) {
    if !capped {
        *current += delta;
        *max += delta;
    } else if delta > 0 {
        *current = (*current + delta).min((*max).max(*current));
    } else {
        *current += delta;
    }
}

fn defeat(state: &mut MatchState, player: PlayerId) {
    state.players[player].defeated = true;
    let result = if state.players[player.other()].defeated {
        GameResult::Draw
    } else {
        GameResult::Winner(player.other())
    };
    info!(loser = %player, ?result, "match finished");
    state.outcome = Some(result);
    state.phase = Phase::Finished;
}
