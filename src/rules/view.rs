//! Observable state pushed to the presentation layer.
//!
//! After every applied intent the match pushes one [`PlayerView`] per player
//! to each registered [`MatchObserver`], together with a [`MatchSnapshot`]
//! of the table: every pool with its stacks and card stats.

use serde::{Deserialize, Serialize};

use crate::cards::{CardInstance, CardKind};
use crate::core::{EntityId, MatchState, Phase, PlayerId, PlayerMap};
use crate::rules::GameResult;
use crate::zones::{Pool, Stack};

/// Per-player numeric state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub is_current_turn: bool,
    pub phase: Phase,
    pub resources_remaining: i64,
    pub draws_remaining: u32,
    pub life: i64,
    pub max_life: i64,
}

impl PlayerView {
    /// Capture the view for one player.
    #[must_use]
    pub fn of(state: &MatchState, player: PlayerId) -> Self {
        let side = &state.players[player];
        Self {
            is_current_turn: state.turn_owner == player,
            phase: state.phase,
            resources_remaining: state.resources,
            draws_remaining: state.draws,
            life: side.life,
            max_life: side.max_life,
        }
    }
}

/// Receives state updates.
pub trait MatchObserver {
    /// Called once per player after every applied intent. `table` is the
    /// same snapshot for both calls.
    fn on_change(&mut self, player: PlayerId, view: &PlayerView, table: &MatchSnapshot);
}

impl<F> MatchObserver for F
where
    F: FnMut(PlayerId, &PlayerView, &MatchSnapshot),
{
    fn on_change(&mut self, player: PlayerId, view: &PlayerView, table: &MatchSnapshot) {
        self(player, view, table);
    }
}

/// Displayable card stats.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub entity: EntityId,
    pub name: String,
    pub kind: CardKind,
    pub attack: i64,
    pub max_attack: i64,
    pub life: i64,
    pub max_life: i64,
    pub cost: i64,
}

impl From<&CardInstance> for CardView {
    fn from(card: &CardInstance) -> Self {
        Self {
            entity: card.entity,
            name: card.name.clone(),
            kind: card.kind,
            attack: card.attack,
            max_attack: card.max_attack,
            life: card.life,
            max_life: card.max_life,
            cost: card.cost,
        }
    }
}

/// One stack: its card and how many copies remain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackView {
    pub card: CardView,
    pub count: u32,
}

impl From<&Stack> for StackView {
    fn from(stack: &Stack) -> Self {
        Self {
            card: CardView::from(&stack.card),
            count: stack.count,
        }
    }
}

fn pool_view(pool: &Pool) -> Vec<StackView> {
    pool.stacks().iter().map(StackView::from).collect()
}

/// One player's side of the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideView {
    pub name: String,
    pub life: i64,
    pub max_life: i64,
    pub hand: Vec<StackView>,
    pub active: Vec<StackView>,
}

/// Everything the presentation layer can show.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub turn_owner: PlayerId,
    pub turn_number: u32,
    pub phase: Phase,
    pub resources: i64,
    pub draws: u32,
    pub center: Vec<StackView>,
    pub players: PlayerMap<SideView>,
    pub outcome: Option<GameResult>,
}

impl MatchSnapshot {
    /// Capture the whole table.
    #[must_use]
    pub fn capture(state: &MatchState) -> Self {
        Self {
            turn_owner: state.turn_owner,
            turn_number: state.turn_number,
            phase: state.phase,
            resources: state.resources,
            draws: state.draws,
            center: pool_view(&state.center),
            players: PlayerMap::new(|p| {
                let side = &state.players[p];
                SideView {
                    name: side.name.clone(),
                    life: side.life,
                    max_life: side.max_life,
                    hand: pool_view(&side.hand),
                    active: pool_view(&side.active),
                }
            }),
            outcome: state.outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardTemplate, Rarity};
    use crate::core::MatchConfig;
    use crate::zones::PoolRef;

    #[test]
    fn test_player_view() {
        let mut state = MatchState::new(MatchConfig::default(), PlayerId::new(1));
        state.resources = 4;
        state.players[PlayerId::new(0)].life = 12;

        let first = PlayerView::of(&state, PlayerId::new(0));
        let second = PlayerView::of(&state, PlayerId::new(1));

        assert!(!first.is_current_turn);
        assert!(second.is_current_turn);
        assert_eq!(first.life, 12);
        assert_eq!(second.resources_remaining, 4);
        assert_eq!(second.phase, Phase::Play);
    }

    #[test]
    fn test_closure_observer() {
        let state = MatchState::new(MatchConfig::default(), PlayerId::new(0));
        let view = PlayerView::of(&state, PlayerId::new(0));
        let table = MatchSnapshot::capture(&state);
        let mut seen = Vec::new();
        {
            let mut observer = |player: PlayerId, view: &PlayerView, table: &MatchSnapshot| {
                seen.push((player, view.life, table.center.len()));
            };
            observer.on_change(PlayerId::new(0), &view, &table);
        }
        assert_eq!(seen, vec![(PlayerId::new(0), 20, 0)]);
    }

    #[test]
    fn test_snapshot_lists_stacks() {
        let mut state = MatchState::new(MatchConfig::default(), PlayerId::new(0));
        let giant = CardTemplate::new("giant", CardKind::Creature, Rarity::Common)
            .with_stats(1, 3)
            .with_cost(2);
        state.add_stack(PoolRef::Center, &giant, 15);
        state.add_stack(PoolRef::Active(PlayerId::new(1)), &giant, 1);

        let snapshot = MatchSnapshot::capture(&state);

        assert_eq!(snapshot.center.len(), 1);
        assert_eq!(snapshot.center[0].count, 15);
        assert_eq!(snapshot.center[0].card.name, "giant");
        assert_eq!(snapshot.center[0].card.max_life, 3);
        assert_eq!(snapshot.players[PlayerId::new(1)].active.len(), 1);
        assert!(snapshot.players[PlayerId::new(0)].hand.is_empty());

        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: MatchSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, restored);
    }
}
