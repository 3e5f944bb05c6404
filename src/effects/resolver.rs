//! Effect resolution - interpreting effects against an event.
//!
//! The `EffectResolver` runs one effect of a firing ability. It may rewrite
//! the triggering event in place and returns the events the effect causes;
//! the caller resolves those depth-first before moving on.

use tracing::trace;

use super::Effect;
use crate::core::{EntityId, MatchState, PlayerId};
use crate::triggers::{slot_matches, Ability, Cascade, EntityKind, Event};

/// Who is running an effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EffectContext {
    /// The card carrying the ability.
    pub owner: EntityId,

    /// The player whose board holds the card.
    pub owner_player: PlayerId,

    /// Index of the ability on the card.
    pub ability: usize,
}

impl EffectContext {
    /// Create a context.
    #[must_use]
    pub fn new(owner: EntityId, owner_player: PlayerId, ability: usize) -> Self {
        Self {
            owner,
            owner_player,
            ability,
        }
    }

    fn ability_mut<'s>(&self, state: &'s mut MatchState) -> Option<&'s mut Ability> {
        state
            .card_mut(self.owner)
            .and_then(|card| card.abilities.get_mut(self.ability))
    }
}

/// Interprets effects.
pub struct EffectResolver;

impl EffectResolver {
    /// Run one effect. Effects that do not apply to the event kind they are
    /// handed do nothing.
    pub fn resolve(
        effect: &Effect,
        ctx: &EffectContext,
        event: &mut Event,
        state: &mut MatchState,
    ) -> Cascade {
        let mut cascade = Cascade::new();

        match effect {
            Effect::Taunt => {
                if let Event::AttackTarget {
                    target, taunted, ..
                } = event
                {
                    if !*taunted {
                        *taunted = true;
                        *target = ctx.owner;
                        trace!(taunt = %ctx.owner, "attack redirected");
                    }
                }
            }

            Effect::DecreaseIncomingDamage { amount } => {
                if let Event::AttackDamage {
                    target,
                    amount: damage,
                    ..
                } = event
                {
                    if *target == ctx.owner {
                        *damage -= amount;
                    }
                }
            }

            Effect::Resource { amount } => {
                if let Event::TurnStart { resource, .. } = event {
                    *resource += amount;
                }
            }

            Effect::SummonCost { delta } => {
                if let Event::PreSummon { cost, .. } = event {
                    *cost += delta;
                }
            }

            Effect::PreventDeath { count } => {
                if let Event::PreDeath { target, die, .. } = event {
                    if *die && *target == ctx.owner {
                        if let Some(ability) = ctx.ability_mut(state) {
                            if ability.triggered < *count {
                                ability.triggered += 1;
                                *die = false;
                                trace!(owner = %ctx.owner, "death prevented");
                            }
                        }
                    }
                }
            }

            Effect::ReturnDamage { count, amount } => {
                if let Event::AttackDamage { source, .. } = *event {
                    let living = state.life_of(source).map_or(false, |life| life > 0);
                    if let Some(ability) = ctx.ability_mut(state) {
                        if living && ability.triggered < *count {
                            ability.triggered += 1;
                            cascade.push(Event::damage(
                                ctx.owner,
                                ctx.owner_player,
                                ctx.owner_player.other(),
                                source,
                                *amount,
                            ));
                        }
                    }
                }
            }

            Effect::DamageAllHostiles { amount } => {
                if let Event::EndPlay { .. } = event {
                    let hostile = ctx.owner_player.other();
                    for target in state.active_cards(hostile) {
                        let owner = ctx.owner_player;
                        cascade.push(Event::damage(ctx.owner, owner, hostile, target, *amount));
                    }
                }
            }

            Effect::BuffOnDamage {
                entity,
                attack,
                life,
            } => {
                if let Event::AttackDamage { source, target, .. } = *event {
                    if source == ctx.owner && state.entity_kind(target) == Some(*entity) {
                        cascade.push(Event::buff(ctx.owner_player, ctx.owner, *attack, *life));
                    }
                }
            }

            Effect::BuffWhileActive {
                entities,
                attack,
                life,
            } => {
                if let Event::TurnStart { player, .. } = *event {
                    for target in Self::matching_cards(state, player, ctx.owner, entities) {
                        let buff = Event::sourced_buff(player, target, *attack, *life, ctx.owner);
                        cascade.push(buff);
                    }
                }
            }

            Effect::BuffOnDeath { attack, life } => {
                if let Event::SelfDeath { target, .. } = *event {
                    if target == ctx.owner {
                        let buffed = state
                            .card(ctx.owner)
                            .map(|card| card.buffed_targets.clone())
                            .unwrap_or_default();
                        for target in buffed {
                            let player = state.owner_of(target).unwrap_or(ctx.owner_player);
                            cascade.push(Event::buff(player, target, *attack, *life));
                        }
                    }
                }
            }

            Effect::HealOnTurnEnd { entities, amount } => {
                if let Event::EndPlay { player } = *event {
                    for target in Self::matching_cards(state, player, ctx.owner, entities) {
                        cascade.push(Event::heal(player, target, *amount));
                    }
                    if slot_matches(entities, &EntityKind::Player) {
                        cascade.push(Event::heal(player, EntityId::player(player), *amount));
                    }
                }
            }
        }

        if !cascade.is_empty() {
            trace!(owner = %ctx.owner, ?effect, produced = cascade.len(), "effect cascades");
        }
        cascade
    }

    /// Board cards of `player` other than `owner` whose kind passes the
    /// filter, in board order.
    fn matching_cards(
        state: &MatchState,
        player: PlayerId,
        owner: EntityId,
        entities: &[EntityKind],
    ) -> Vec<EntityId> {
        state.players[player]
            .active
            .stacks()
            .iter()
            .filter(|stack| stack.card.entity != owner)
            .filter(|stack| slot_matches(entities, &EntityKind::from(stack.card.kind)))
            .map(|stack| stack.card.entity)
            .collect()
    }
}
