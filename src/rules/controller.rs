//! The match controller.
//!
//! [`Match`] owns a [`MatchState`], validates player intents against the
//! turn and phase, and feeds accepted intents into the event engine as root
//! events. After every applied intent it pushes fresh views to its
//! observers.

use tracing::{debug, info};

use crate::cards::Catalog;
use crate::core::{
    CatalogError, Intent, MatchConfig, MatchError, MatchState, Phase, PlayerId, RandomSource,
    Result, PLAYER_COUNT,
};
use crate::rules::view::{MatchObserver, MatchSnapshot, PlayerView};
use crate::rules::{GameResult, RulesEngine};
use crate::stack::ImmediateResolution;
use crate::triggers::Event;
use crate::zones::PoolRef;

/// A two-player match.
///
/// ## Intents
///
/// - [`draw_card`](Self::draw_card): draw phase, draws remaining, non-empty stack
/// - [`play_card`](Self::play_card): play phase, affordable, one resource card per turn
/// - [`end_phase`](Self::end_phase): always allowed for the turn owner
///
/// The plain entry points return whether the intent was applied. The
/// `try_*` variants return the rejection reason. Either way a rejected
/// intent leaves the match exactly as it was.
pub struct Match {
    state: MatchState,
    observers: Vec<Box<dyn MatchObserver>>,
}

impl Match {
    /// Start a match from a catalog.
    ///
    /// Picks the starting player, seeds the centre pool from the
    /// configured rarity tiers, then deals opening hands from centre stack
    /// 0: the starting player first.
    pub fn new<R: RandomSource + ?Sized>(
        config: MatchConfig,
        catalog: &Catalog,
        rng: &mut R,
    ) -> std::result::Result<Self, CatalogError> {
        let turn_owner = PlayerId::ALL[rng.gen_index(PLAYER_COUNT)];
        let selected = catalog.select(&config.tiers, rng)?;

        let hands = [
            (turn_owner, config.opening_hand_first),
            (turn_owner.other(), config.opening_hand_second),
        ];
        let mut state = MatchState::new(config, turn_owner);
        for (template, count) in selected {
            state.add_stack(PoolRef::Center, template, count);
        }
        for (player, count) in hands {
            for _ in 0..count {
                state
                    .move_card(PoolRef::Center, 0, PoolRef::Hand(player))
                    .ok_or(CatalogError::EmptyPool)?;
            }
        }

        info!(
            turn_owner = %turn_owner,
            stacks = state.center.len(),
            "match created"
        );
        Ok(Self::from_state(state))
    }

    /// Wrap an existing state.
    #[must_use]
    pub fn from_state(state: MatchState) -> Self {
        Self {
            state,
            observers: Vec::new(),
        }
    }

    /// Rename both players (builder pattern).
    #[must_use]
    pub fn with_names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.state = self.state.with_names(first, second);
        self
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Full table snapshot.
    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot::capture(&self.state)
    }

    /// Register an observer. It immediately receives the current views.
    pub fn subscribe(&mut self, mut observer: impl MatchObserver + 'static) {
        let table = self.snapshot();
        for player in PlayerId::ALL {
            observer.on_change(player, &PlayerView::of(&self.state, player), &table);
        }
        self.observers.push(Box::new(observer));
    }

    // === Intents ===

    /// Draw one card from a centre stack. Returns whether it happened.
    pub fn draw_card(&mut self, player: PlayerId, stack: usize) -> bool {
        self.apply_intent(player, Intent::DrawCard { stack }).is_ok()
    }

    /// Summon one card from a hand stack. Returns whether it happened.
    pub fn play_card(&mut self, player: PlayerId, stack: usize) -> bool {
        self.apply_intent(player, Intent::PlayCard { stack }).is_ok()
    }

    /// End the current phase. Returns whether it happened.
    pub fn end_phase(&mut self, player: PlayerId) -> bool {
        self.apply_intent(player, Intent::EndPhase).is_ok()
    }

    /// Draw one card from a centre stack.
    pub fn try_draw_card(&mut self, player: PlayerId, stack: usize) -> Result<()> {
        self.apply_intent(player, Intent::DrawCard { stack })
    }

    /// Summon one card from a hand stack.
    pub fn try_play_card(&mut self, player: PlayerId, stack: usize) -> Result<()> {
        self.apply_intent(player, Intent::PlayCard { stack })
    }

    /// End the current phase.
    pub fn try_end_phase(&mut self, player: PlayerId) -> Result<()> {
        self.apply_intent(player, Intent::EndPhase)
    }

    fn dispatch(&mut self, player: PlayerId, intent: Intent) -> Result<()> {
        check_turn(&self.state, player)?;

        match (intent, self.state.phase) {
            (Intent::DrawCard { stack }, Phase::Draw) => self.draw(player, stack),
            (Intent::PlayCard { stack }, phase) if phase.is_play() => {
                // Resolve against a copy: an unaffordable summon is only
                // known after PreSummon abilities have adjusted the cost.
                let mut next = self.state.clone();
                summon(&mut next, player, stack)?;
                self.state = next;
                self.state.record(player, intent);
                Ok(())
            }
            (Intent::EndPhase, phase) if phase.is_play() => {
                self.state.record(player, intent);
                self.end_play(player);
                Ok(())
            }
            (Intent::EndPhase, Phase::Draw) => {
                self.state.record(player, intent);
                self.engine().resolve(Event::EndDraw { player }, &mut self.state);
                Ok(())
            }
            (_, phase) => Err(MatchError::WrongPhase(phase.name())),
        }
    }

    fn draw(&mut self, player: PlayerId, stack: usize) -> Result<()> {
        if self.state.draws == 0 {
            return Err(MatchError::NoDrawsRemaining);
        }
        let card = self
            .state
            .center
            .stack(stack)
            .filter(|s| !s.is_empty())
            .map(|s| &s.card)
            .ok_or(MatchError::EmptyStack(stack))?;
        let event = Event::Draw {
            player,
            stack,
            card: card.card_id,
            kind: card.kind,
        };

        self.state.record(player, Intent::DrawCard { stack });
        self.engine().resolve(event, &mut self.state);
        Ok(())
    }

    /// Play phase to draw phase.
    ///
    /// Abilities reset, every board card attacks in board order, EndPlay
    /// fires, dead creatures are purged, and the draw allotment is granted.
    fn end_play(&mut self, player: PlayerId) {
        let mut engine = self.engine();
        self.state.reset_abilities();

        for attacker in self.state.active_cards(player) {
            if self.state.is_finished() {
                break;
            }
            engine.resolve(Event::attack(attacker, player), &mut self.state);
        }
        if !self.state.is_finished() {
            engine.resolve(Event::EndPlay { player }, &mut self.state);
        }

        let purged = self.state.purge_dead();
        debug!(%player, purged, events = engine.resolved_count(), "play phase ended");

        if !self.state.is_finished() {
            self.state.phase = Phase::Draw;
            self.state.draws = self.state.config.draws_per_turn;
        }
    }

    fn engine(&self) -> ImmediateResolution {
        ImmediateResolution::new(self.state.config.max_cascade_depth)
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let table = self.snapshot();
        for player in PlayerId::ALL {
            let view = PlayerView::of(&self.state, player);
            for observer in &mut self.observers {
                observer.on_change(player, &view, &table);
            }
        }
    }
}

impl RulesEngine for Match {
    fn legal_intents(&self, player: PlayerId) -> Vec<Intent> {
        if check_turn(&self.state, player).is_err() {
            return Vec::new();
        }

        let mut intents = Vec::new();
        match self.state.phase {
            Phase::Play | Phase::PlayResourcePlayed => {
                for stack in 0..self.state.players[player].hand.len() {
                    let mut probe = self.state.clone();
                    if summon(&mut probe, player, stack).is_ok() {
                        intents.push(Intent::PlayCard { stack });
                    }
                }
            }
            Phase::Draw if self.state.draws > 0 => {
                intents.extend(
                    (0..self.state.center.len())
                        .filter(|&stack| self.state.center.has_card(stack))
                        .map(|stack| Intent::DrawCard { stack }),
                );
            }
            Phase::Draw | Phase::Finished => {}
        }
        intents.push(Intent::EndPhase);
        intents
    }

    fn apply_intent(&mut self, player: PlayerId, intent: Intent) -> Result<()> {
        match self.dispatch(player, intent) {
            Ok(()) => {
                debug!(%player, %intent, phase = %self.state.phase, "intent applied");
                self.notify();
                Ok(())
            }
            Err(err) => {
                debug!(%player, %intent, reason = %err, "intent rejected");
                Err(err)
            }
        }
    }

    fn outcome(&self) -> Option<GameResult> {
        self.state.outcome
    }
}

impl std::fmt::Debug for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Match")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}

fn check_turn(state: &MatchState, player: PlayerId) -> Result<()> {
    if state.is_finished() {
        return Err(MatchError::MatchFinished);
    }
    if state.turn_owner != player {
        return Err(MatchError::NotYourTurn(player));
    }
    Ok(())
}

/// Summon one card from `player`'s hand stack `index` through the
/// PreSummon/Summon pipeline.
fn summon(state: &mut MatchState, player: PlayerId, index: usize) -> Result<()> {
    let hand = &state.players[player].hand;
    let card = hand
        .stack(index)
        .filter(|s| !s.is_empty())
        .map(|s| &s.card)
        .ok_or(MatchError::EmptyStack(index))?;
    if card.is_resource() && state.phase == Phase::PlayResourcePlayed {
        return Err(MatchError::ResourceAlreadyPlayed);
    }

    let before = hand.card_count();
    let base_cost = card.cost;
    let event = Event::PreSummon {
        player,
        stack: index,
        card: card.card_id,
        kind: card.kind,
        cost: card.cost,
    };

    let mut engine = ImmediateResolution::new(state.config.max_cascade_depth);
    let resolved = engine.resolve(event, state);
    if state.players[player].hand.card_count() < before {
        return Ok(());
    }

    let cost = match resolved {
        Event::PreSummon { cost, .. } => cost,
        _ => base_cost,
    };
    Err(MatchError::InsufficientResources {
        cost,
        available: state.resources,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardKind, CardTemplate, Rarity};
    use crate::core::GameRng;
    use crate::triggers::Ability;

    fn p0() -> PlayerId {
        PlayerId::new(0)
    }

    fn p1() -> PlayerId {
        PlayerId::new(1)
    }

    fn goblin() -> CardTemplate {
        CardTemplate::new("goblin", CardKind::Creature, Rarity::Common)
            .with_stats(1, 1)
            .with_cost(1)
    }

    fn resource() -> CardTemplate {
        CardTemplate::new("resource", CardKind::Resource, Rarity::Resource)
    }

    fn setup() -> Match {
        let mut state = MatchState::new(MatchConfig::default(), p0());
        state.add_stack(PoolRef::Hand(p0()), &goblin(), 2);
        state.add_stack(PoolRef::Hand(p0()), &resource(), 2);
        state.add_stack(PoolRef::Center, &goblin(), 5);
        Match::from_state(state)
    }

    #[test]
    fn test_new_match_deals_opening_hands() {
        let mut catalog = Catalog::new();
        catalog.add(resource());
        catalog.add(goblin());
        let config = MatchConfig::default().with_tiers([
            crate::core::RarityTier::new(Rarity::Resource, 1, 20),
            crate::core::RarityTier::new(Rarity::Common, 1, 15),
        ]);

        let game = Match::new(config, &catalog, &mut GameRng::new(7)).unwrap();
        let state = game.state();
        let first = state.turn_owner;

        assert_eq!(state.phase, Phase::Play);
        assert_eq!(state.resources, 0);
        assert_eq!(state.draws, 0);
        assert_eq!(state.center.stack(0).unwrap().count, 17);
        assert_eq!(state.players[first].hand.card_count(), 1);
        assert_eq!(state.players[first.other()].hand.card_count(), 2);
        // Resource cards merge into one hand stack.
        assert_eq!(state.players[first.other()].hand.len(), 1);
    }

    #[test]
    fn test_new_match_rejects_small_tier() {
        let catalog = Catalog::new();
        let result = Match::new(MatchConfig::default(), &catalog, &mut GameRng::new(1));
        assert!(matches!(result, Err(CatalogError::TierTooSmall { .. })));
    }

    #[test]
    fn test_empty_pool_cannot_deal() {
        let mut catalog = Catalog::new();
        catalog.add(resource());
        let tier = crate::core::RarityTier::new(Rarity::Resource, 1, 2);
        let config = MatchConfig::default().with_tiers([tier]);

        let result = Match::new(config, &catalog, &mut GameRng::new(1));
        assert!(matches!(result, Err(CatalogError::EmptyPool)));
    }

    #[test]
    fn test_wrong_player_rejected() {
        let mut game = setup();
        assert_eq!(game.try_end_phase(p1()), Err(MatchError::NotYourTurn(p1())));
        assert_eq!(game.state().phase, Phase::Play);
        assert!(game.legal_intents(p1()).is_empty());
    }

    #[test]
    fn test_draw_in_play_phase_rejected() {
        let mut game = setup();
        assert_eq!(game.try_draw_card(p0(), 0), Err(MatchError::WrongPhase("play")));
    }

    #[test]
    fn test_unaffordable_summon_leaves_state() {
        let mut game = setup();
        let before = game.snapshot();

        assert_eq!(
            game.try_play_card(p0(), 0),
            Err(MatchError::InsufficientResources { cost: 1, available: 0 })
        );
        assert_eq!(game.snapshot(), before);
        assert!(game.state().history.is_empty());
    }

    #[test]
    fn test_resource_once_per_turn() {
        let mut game = setup();

        assert!(game.play_card(p0(), 1));
        assert_eq!(game.state().phase, Phase::PlayResourcePlayed);
        assert_eq!(game.state().resources, 1);
        assert_eq!(game.try_play_card(p0(), 1), Err(MatchError::ResourceAlreadyPlayed));

        // The bonus pays for a goblin.
        assert!(game.play_card(p0(), 0));
        assert_eq!(game.state().resources, 0);
        assert_eq!(game.state().players[p0()].active.card_count(), 2);
    }

    #[test]
    fn test_legal_intents_follow_phase() {
        let mut game = setup();
        assert_eq!(
            game.legal_intents(p0()),
            vec![Intent::PlayCard { stack: 1 }, Intent::EndPhase]
        );

        assert!(game.end_phase(p0()));
        assert_eq!(
            game.legal_intents(p0()),
            vec![Intent::DrawCard { stack: 0 }, Intent::EndPhase]
        );
    }

    #[test]
    fn test_draws_are_limited() {
        let mut game = setup();
        game.end_phase(p0());

        assert!(game.draw_card(p0(), 0));
        assert!(game.draw_card(p0(), 0));
        assert_eq!(game.try_draw_card(p0(), 0), Err(MatchError::NoDrawsRemaining));
        assert_eq!(game.state().center.stack(0).unwrap().count, 3);
        assert_eq!(game.state().players[p0()].hand.stack(2).unwrap().card.name, "goblin");
    }

    #[test]
    fn test_draw_from_missing_stack() {
        let mut game = setup();
        game.end_phase(p0());
        assert_eq!(game.try_draw_card(p0(), 4), Err(MatchError::EmptyStack(4)));
    }

    #[test]
    fn test_summon_cost_modifier_enables_play() {
        let mut state = MatchState::new(MatchConfig::default(), p0());
        let summoner = CardTemplate::new("summoner", CardKind::Creature, Rarity::Rare)
            .with_stats(1, 2)
            .with_ability(Ability::summon_cost(
                crate::triggers::PlayerRelation::Own,
                crate::triggers::EntityKind::Creature,
                -1,
            ));
        state.add_stack(PoolRef::Active(p0()), &summoner, 1);
        state.add_stack(PoolRef::Hand(p0()), &goblin(), 1);
        let mut game = Match::from_state(state);

        assert!(game.play_card(p0(), 0));
        // Cost 1 - 1 = 0 was paid.
        assert_eq!(game.state().resources, 0);
        assert_eq!(game.state().players[p0()].active.len(), 2);
    }

    #[test]
    fn test_history_records_applied_intents() {
        let mut game = setup();
        game.play_card(p0(), 1);
        game.play_card(p0(), 1);
        game.end_phase(p0());
        game.end_phase(p0());

        let history: Vec<_> = game.state().history.iter().cloned().collect();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].intent, Intent::PlayCard { stack: 1 });
        assert_eq!((history[1].turn, history[1].sequence), (1, 1));
        assert_eq!((history[2].turn, history[2].sequence), (1, 2));
        assert_eq!(game.state().turn_number, 2);
        assert_eq!(game.state().sequence, 0);
    }
}
