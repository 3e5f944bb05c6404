//! Event cascade integration tests.
//!
//! Each test lays out boards with cards from the sample set, then drives
//! the match through its public intents (or the resolution engine
//! directly) and checks the resulting stats.

use cascade_ccg::cards::{CardKind, CardTemplate, Rarity};
use cascade_ccg::core::{EntityId, MatchConfig, MatchState, Phase, PlayerId};
use cascade_ccg::games::standard::standard_catalog;
use cascade_ccg::rules::Match;
use cascade_ccg::stack::ImmediateResolution;
use cascade_ccg::triggers::{Ability, Event};
use cascade_ccg::zones::PoolRef;

fn p0() -> PlayerId {
    PlayerId::new(0)
}

fn p1() -> PlayerId {
    PlayerId::new(1)
}

fn card(name: &str) -> CardTemplate {
    standard_catalog()
        .find_by_name(name)
        .unwrap_or_else(|| panic!("no card named {name}"))
        .clone()
}

fn setup() -> MatchState {
    MatchState::new(MatchConfig::default(), p0())
}

fn stats(state: &MatchState, entity: EntityId) -> (i64, i64) {
    let card = state.card(entity).unwrap();
    (card.attack, card.life)
}

#[test]
fn test_unblocked_attack_hits_player() {
    let mut state = setup();
    state.add_stack(PoolRef::Active(p0()), &card("goblin"), 1);
    let mut game = Match::from_state(state);

    assert!(game.end_phase(p0()));

    assert_eq!(game.state().players[p1()].life, 19);
    assert_eq!(game.state().phase, Phase::Draw);
    assert_eq!(game.state().draws, 2);
}

#[test]
fn test_taunt_redirects_every_attack() {
    let mut state = setup();
    state.add_stack(PoolRef::Active(p0()), &card("goblin"), 1);
    state.add_stack(PoolRef::Active(p0()), &card("wild beast"), 1);
    let wall = state.add_stack(PoolRef::Active(p1()), &card("wall"), 1);
    let mut game = Match::from_state(state);

    game.end_phase(p0());

    // Both attacks land on the wall; each loses 1 to its damage reduction.
    assert_eq!(game.state().players[p1()].life, 20);
    assert_eq!(stats(game.state(), wall), (0, 3));
}

#[test]
fn test_witch_returns_first_attack_only() {
    let mut state = setup();
    let beast = state.add_stack(PoolRef::Active(p0()), &card("wild beast"), 1);
    let goblin = state.add_stack(PoolRef::Active(p0()), &card("goblin"), 1);
    let witch = state.add_stack(PoolRef::Active(p1()), &card("witch"), 1);
    let mut game = Match::from_state(state);

    game.end_phase(p0());
    let state = game.state();

    assert_eq!(state.players[p1()].life, 17);
    // The beast died to the witch and was purged; the goblin was untouched.
    assert!(!state.exists(beast));
    assert_eq!(stats(state, goblin), (1, 1));
    assert_eq!(stats(state, witch), (2, 1));
}

#[test]
fn test_witch_resets_each_turn() {
    let mut state = setup();
    state.add_stack(PoolRef::Active(p0()), &card("giant"), 1);
    let witch = state.add_stack(PoolRef::Active(p1()), &card("witch"), 1);
    state.card_mut(witch).unwrap().abilities[0].triggered = 1;
    let mut game = Match::from_state(state);

    game.end_phase(p0());

    // Counters reset before attacks, so the giant is hit back.
    let giant = game.state().active_cards(p0())[0];
    assert_eq!(stats(game.state(), giant), (1, 2));
}

#[test]
fn test_vampire_grows_after_hitting_player() {
    let mut state = setup();
    let vampire = state.add_stack(PoolRef::Active(p0()), &card("vampire"), 1);
    let mut game = Match::from_state(state);

    game.end_phase(p0());

    let card = game.state().card(vampire).unwrap();
    assert_eq!((card.attack, card.max_attack), (3, 3));
    assert_eq!(game.state().players[p1()].life, 18);
}

#[test]
fn test_vampire_blocked_by_wall_does_not_grow() {
    let mut state = setup();
    let vampire = state.add_stack(PoolRef::Active(p0()), &card("vampire"), 1);
    state.add_stack(PoolRef::Active(p1()), &card("wall"), 1);
    let mut game = Match::from_state(state);

    game.end_phase(p0());

    assert_eq!(stats(game.state(), vampire), (2, 4));
}

#[test]
fn test_general_buffs_once_and_takes_it_back_on_death() {
    let mut state = setup();
    let general = state.add_stack(PoolRef::Active(p0()), &card("general"), 1);
    let goblin = state.add_stack(PoolRef::Active(p0()), &card("goblin"), 1);
    let mut engine = ImmediateResolution::default();

    engine.resolve(Event::TurnStart { player: p0(), resource: 0 }, &mut state);
    engine.resolve(Event::TurnStart { player: p0(), resource: 0 }, &mut state);
    assert_eq!(stats(&state, goblin), (2, 2));
    assert_eq!(state.card(goblin).unwrap().max_life, 2);

    engine.resolve(
        Event::damage(EntityId::player(p1()), p1(), p0(), general, 5),
        &mut state,
    );

    assert!(state.is_dead(general));
    assert!(state.exists(general));
    assert_eq!(stats(&state, goblin), (1, 1));
    assert_eq!(state.card(goblin).unwrap().max_life, 1);
}

#[test]
fn test_general_ignores_opponent_turn() {
    let mut state = setup();
    state.add_stack(PoolRef::Active(p0()), &card("general"), 1);
    let goblin = state.add_stack(PoolRef::Active(p0()), &card("goblin"), 1);
    let mut engine = ImmediateResolution::default();

    engine.resolve(Event::TurnStart { player: p1(), resource: 0 }, &mut state);

    assert_eq!(stats(&state, goblin), (1, 1));
}

#[test]
fn test_priest_heals_friends_and_player() {
    let mut state = setup();
    let priest = state.add_stack(PoolRef::Active(p0()), &card("priest"), 1);
    let giant = state.add_stack(PoolRef::Active(p0()), &card("giant"), 1);
    state.card_mut(giant).unwrap().life = 1;
    state.card_mut(priest).unwrap().life = 2;
    state.players[p0()].life = 15;
    let mut game = Match::from_state(state);

    game.end_phase(p0());
    let state = game.state();

    assert_eq!(state.card(giant).unwrap().life, 2);
    assert_eq!(state.card(giant).unwrap().max_life, 3);
    assert_eq!(state.players[p0()].life, 16);
    assert_eq!(state.players[p0()].max_life, 20);
    // The priest never heals itself.
    assert_eq!(state.card(priest).unwrap().life, 2);
    assert_eq!(state.players[p1()].life, 18);
}

#[test]
fn test_priest_heal_is_capped() {
    let mut state = setup();
    state.add_stack(PoolRef::Active(p0()), &card("priest"), 1);
    let giant = state.add_stack(PoolRef::Active(p0()), &card("giant"), 1);
    let mut game = Match::from_state(state);

    game.end_phase(p0());

    assert_eq!(game.state().card(giant).unwrap().life, 3);
    assert_eq!(game.state().players[p0()].life, 20);
}

#[test]
fn test_dragon_burns_hostile_board() {
    let mut state = setup();
    state.add_stack(PoolRef::Active(p0()), &card("dragon"), 1);
    let goblin = state.add_stack(PoolRef::Active(p1()), &card("goblin"), 1);
    let giant = state.add_stack(PoolRef::Active(p1()), &card("giant"), 1);
    let mut game = Match::from_state(state);

    game.end_phase(p0());
    let state = game.state();

    // The dragon has no attack of its own.
    assert_eq!(state.players[p1()].life, 20);
    assert!(!state.exists(goblin));
    assert_eq!(stats(state, giant), (1, 2));
    assert_eq!(state.players[p1()].active.len(), 1);
}

#[test]
fn test_death_prevention_survives_dragon_burn() {
    let mut state = setup();
    state.add_stack(PoolRef::Active(p0()), &card("dragon"), 1);
    let angel = CardTemplate::new("angel", CardKind::Creature, Rarity::Rare)
        .with_stats(0, 1)
        .with_ability(Ability::prevent_death(1));
    let angel = state.add_stack(PoolRef::Active(p1()), &angel, 1);
    let mut game = Match::from_state(state);

    game.end_phase(p0());
    let state = game.state();

    assert!(state.exists(angel));
    assert!(!state.is_dead(angel));
    assert_eq!(stats(state, angel), (0, 0));
    assert_eq!(state.players[p1()].active.len(), 1);
}

#[test]
fn test_dead_creature_stays_until_purge() {
    let mut state = setup();
    let attacker = state.add_stack(PoolRef::Active(p0()), &card("giant"), 1);
    let goblin = state.add_stack(PoolRef::Active(p1()), &card("goblin"), 1);
    let mut engine = ImmediateResolution::default();

    engine.resolve(Event::damage(attacker, p0(), p1(), goblin, 1), &mut state);

    assert!(state.is_dead(goblin));
    assert_eq!(state.players[p1()].active.len(), 1);

    assert_eq!(state.purge_dead(), 1);
    assert!(state.players[p1()].active.is_empty());
}

#[test]
fn test_summoner_discounts_creatures() {
    let mut state = setup();
    state.add_stack(PoolRef::Active(p0()), &card("summoner"), 1);
    state.add_stack(PoolRef::Hand(p0()), &card("general"), 1);
    state.resources = 5;
    let mut game = Match::from_state(state);

    assert!(game.play_card(p0(), 0));

    assert_eq!(game.state().resources, 0);
    assert_eq!(game.state().players[p0()].active.len(), 2);
    assert!(game.state().players[p0()].hand.is_empty());
}

#[test]
fn test_summoner_does_not_discount_spells() {
    let mut state = setup();
    state.add_stack(PoolRef::Active(p0()), &card("summoner"), 1);
    state.add_stack(PoolRef::Hand(p0()), &card("fireball"), 1);
    state.resources = 2;
    let mut game = Match::from_state(state);

    assert!(!game.play_card(p0(), 0));
    assert_eq!(game.state().resources, 2);
}

#[test]
fn test_supplies_adds_to_recomputed_resources() {
    let mut state = setup();
    state.add_stack(PoolRef::Active(p1()), &card("supplies"), 1);
    state.add_stack(PoolRef::Active(p1()), &card("resource"), 2);
    state.resources = 50;
    let mut game = Match::from_state(state);

    game.end_phase(p0());
    game.end_phase(p0());

    assert_eq!(game.state().turn_owner, p1());
    assert_eq!(game.state().resources, 103);
}

#[test]
fn test_lethal_attack_ends_match() {
    let mut state = setup();
    state.add_stack(PoolRef::Active(p0()), &card("goblin"), 1);
    let giant = state.add_stack(PoolRef::Active(p0()), &card("giant"), 1);
    state.players[p1()].life = 1;
    let mut game = Match::from_state(state);

    assert!(game.end_phase(p0()));

    let state = game.state();
    assert_eq!(state.phase, Phase::Finished);
    assert_eq!(state.players[p1()].life, 0);
    assert!(state.players[p1()].defeated);
    assert!(state.outcome.unwrap().is_winner(p0()));
    // The second attacker never swung.
    assert_eq!(stats(state, giant), (1, 3));
    assert!(!game.end_phase(p0()));
}
