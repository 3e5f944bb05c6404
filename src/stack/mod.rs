//! Event resolution.
//!
//! Events resolve immediately and depth-first: there is no priority window
//! and no queue. Each event's abilities fire first, then the event applies,
//! then its follow-ups resolve, before anything issued after it.
//!
//! ## Example Usage
//!
//! ```
//! use cascade_ccg::cards::{CardKind, CardTemplate, Rarity};
//! use cascade_ccg::core::{MatchConfig, MatchState, PlayerId};
//! use cascade_ccg::stack::ImmediateResolution;
//! use cascade_ccg::triggers::Event;
//! use cascade_ccg::zones::PoolRef;
//!
//! let mut state = MatchState::new(MatchConfig::default(), PlayerId::new(0));
//! let goblin = CardTemplate::new("goblin", CardKind::Creature, Rarity::Common).with_stats(1, 1);
//! let attacker = state.add_stack(PoolRef::Active(PlayerId::new(0)), &goblin, 1);
//!
//! let mut engine = ImmediateResolution::new(state.config.max_cascade_depth);
//! engine.resolve(Event::attack(attacker, PlayerId::new(0)), &mut state);
//!
//! assert_eq!(state.players[PlayerId::new(1)].life, 19);
//! ```

mod immediate;

pub use immediate::{reaches_dead_cards, ImmediateResolution};
