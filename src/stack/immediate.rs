//! Immediate, depth-first event resolution.
//!
//! Events resolve as soon as they are issued. An event and everything it
//! causes (ability cascades first, then its own follow-ups) finish before
//! the caller sees control again, so sibling events never interleave.

use tracing::{debug, trace, warn};

use crate::core::{EntityId, MatchState, PlayerId};
use crate::effects::{EffectContext, EffectResolver};
use crate::triggers::{Cascade, Event, EventKind, PlayerRelation, TriggerKey};

/// Immediate resolution system.
///
/// ## Behavior
///
/// For each event, [`resolve`](Self::resolve):
/// 1. drops it if the cascade is already `max_depth` deep
/// 2. skips it if [`Event::is_effective`] is false
/// 3. runs the board-wide trigger scan ([`trigger_abilities`](Self::trigger_abilities))
/// 4. applies the (possibly rewritten) event
/// 5. resolves each follow-up event, recursively, in order
#[derive(Clone, Debug)]
pub struct ImmediateResolution {
    depth: usize,
    max_depth: usize,
    resolved: usize,
}

impl ImmediateResolution {
    /// Create a resolver with a recursion guard.
    #[must_use]
    pub fn new(max_depth: usize) -> Self {
        Self {
            depth: 0,
            max_depth,
            resolved: 0,
        }
    }

    /// Events applied so far.
    #[must_use]
    pub fn resolved_count(&self) -> usize {
        self.resolved
    }

    /// Resolve an event and its whole cascade.
    ///
    /// Returns the event as abilities left it, so callers can read
    /// rewritten fields (a modified summon cost, a redirected target).
    pub fn resolve(&mut self, mut event: Event, state: &mut MatchState) -> Event {
        if self.depth >= self.max_depth {
            warn!(
                kind = ?event.kind(),
                depth = self.depth,
                "cascade depth limit reached, event dropped"
            );
            return event;
        }
        if !event.is_effective(state) {
            trace!(kind = ?event.kind(), "ineffective event skipped");
            return event;
        }

        self.depth += 1;
        self.trigger_abilities(&mut event, state);
        let cascade = event.apply(state);
        self.resolved += 1;
        debug!(
            kind = ?event.kind(),
            depth = self.depth,
            follow_ups = cascade.len(),
            "event resolved"
        );
        self.resolve_all(cascade, state);
        self.depth -= 1;

        event
    }

    /// Resolve events in order, each fully before the next.
    pub fn resolve_all(&mut self, events: Cascade, state: &mut MatchState) {
        for event in events {
            self.resolve(event, state);
        }
    }

    /// Board-wide trigger scan.
    ///
    /// Visits the subject player's board (relation `self`), then the other
    /// board (relation `opponent`), each in board order. Dead cards are
    /// skipped; a `SelfDeath` event is offered only to its own target,
    /// dead or not. Every matching ability runs all its effects, and the
    /// events they return resolve before the scan moves on.
    pub fn trigger_abilities(&mut self, event: &mut Event, state: &mut MatchState) {
        let Some((subject, entity)) = event.subject(state) else {
            return;
        };
        let kind = event.kind();
        let dead_target = if reaches_dead_cards(kind) {
            event.target()
        } else {
            None
        };

        for (relation, player) in [
            (PlayerRelation::Own, subject),
            (PlayerRelation::Opponent, subject.other()),
        ] {
            let key = TriggerKey::new(relation, entity, kind);

            for owner in state.active_cards(player) {
                let eligible = match dead_target {
                    Some(target) => owner == target,
                    None => !state.is_dead(owner),
                };
                if eligible {
                    self.fire_card(owner, player, &key, event, state);
                }
            }
        }
    }

    /// Run every matching ability on one card.
    fn fire_card(
        &mut self,
        owner: EntityId,
        player: PlayerId,
        key: &TriggerKey,
        event: &mut Event,
        state: &mut MatchState,
    ) {
        let ability_count = state.card(owner).map_or(0, |card| card.abilities.len());

        for index in 0..ability_count {
            let effects = match state.card(owner).and_then(|card| card.abilities.get(index)) {
                Some(ability) if ability.matches(key) => ability.effects.clone(),
                _ => continue,
            };
            trace!(%owner, ability = index, kind = ?key.event, "ability triggered");

            let ctx = EffectContext::new(owner, player, index);
            let mut cascade = Cascade::new();
            for effect in &effects {
                cascade.extend(EffectResolver::resolve(effect, &ctx, event, state));
            }
            self.resolve_all(cascade, state);
        }
    }
}

impl Default for ImmediateResolution {
    fn default() -> Self {
        Self::new(256)
    }
}

/// Whether abilities on dead cards can see events of this kind.
#[must_use]
pub fn reaches_dead_cards(kind: EventKind) -> bool {
    kind == EventKind::SelfDeath
}
