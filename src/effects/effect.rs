//! Effect definitions.
//!
//! Effects are pure data. They carry only their parameters; the
//! [`EffectResolver`](super::EffectResolver) interprets them against the
//! triggering event and the match state.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::triggers::EntityKind;

/// Entity kinds an effect selects on; empty matches any.
pub type EntityFilter = SmallVec<[EntityKind; 4]>;

/// What an ability does when it fires.
///
/// ## Event Mutation
///
/// Rewrite fields of the triggering event before it applies:
/// - `Taunt`: redirect an attack onto the owner
/// - `DecreaseIncomingDamage`: shrink damage aimed at the owner
/// - `Resource`: raise a turn-start resource bonus
/// - `SummonCost`: change a pending summon's cost
/// - `PreventDeath`: clear the die flag of the owner's pending death
///
/// ## Cascades
///
/// Return new events resolved right after the ability fires:
/// - `ReturnDamage`, `DamageAllHostiles`: attack damage
/// - `BuffOnDamage`, `BuffWhileActive`, `BuffOnDeath`, `HealOnTurnEnd`: buffs
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "camelCase")]
pub enum Effect {
    // === Event mutation ===

    /// If the attack is not yet taunted, mark it and retarget the owner.
    Taunt,

    /// Subtract `amount` from damage whose target is the owner.
    DecreaseIncomingDamage { amount: i64 },

    /// Add `amount` to a turn-start resource bonus.
    Resource { amount: i64 },

    /// Add `delta` to a pending summon's cost.
    SummonCost { delta: i64 },

    /// Cancel the owner's pending death, at most `count` times per play
    /// phase.
    PreventDeath { count: u32 },

    // === Cascades ===

    /// Deal `amount` back to a living attacker, at most `count` times per
    /// play phase.
    ReturnDamage { count: u32, amount: i64 },

    /// Deal `amount` to every card on the opponent's board, in board order.
    DamageAllHostiles { amount: i64 },

    /// Uncapped, unsourced buff on the owner after it damages an entity of
    /// kind `entity`.
    BuffOnDamage {
        entity: EntityKind,
        attack: i64,
        life: i64,
    },

    /// Uncapped buff sourced from the owner on every other matching card of
    /// the turn player. Each (owner, target) pair applies once.
    BuffWhileActive {
        #[serde(default)]
        entities: EntityFilter,
        attack: i64,
        life: i64,
    },

    /// Uncapped, unsourced buff on every card the dying owner had buffed.
    BuffOnDeath { attack: i64, life: i64 },

    /// Capped +0/+`amount` on every other matching friendly card, and on the
    /// owning player if `player` is in `entities`.
    HealOnTurnEnd {
        #[serde(default)]
        entities: EntityFilter,
        amount: i64,
    },
}

impl Effect {
    /// Whether the effect only rewrites the triggering event.
    #[must_use]
    pub fn is_event_mutation(&self) -> bool {
        matches!(
            self,
            Effect::Taunt
                | Effect::DecreaseIncomingDamage { .. }
                | Effect::Resource { .. }
                | Effect::SummonCost { .. }
                | Effect::PreventDeath { .. }
        )
    }
}
