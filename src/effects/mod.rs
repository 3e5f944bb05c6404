//! Effect system for card abilities.
//!
//! Effects are data ([`Effect`]); one central interpreter
//! ([`EffectResolver`]) gives them meaning. Abilities never capture state,
//! so cards clone and serialize by value.
//!
//! ## Example
//!
//! ```
//! use cascade_ccg::core::{EntityId, MatchConfig, MatchState, PlayerId};
//! use cascade_ccg::effects::{Effect, EffectContext, EffectResolver};
//! use cascade_ccg::triggers::Event;
//!
//! let mut state = MatchState::new(MatchConfig::default(), PlayerId::new(0));
//! let mut turn_start = Event::TurnStart { player: PlayerId::new(0), resource: 0 };
//! let ctx = EffectContext::new(EntityId(2), PlayerId::new(0), 0);
//!
//! EffectResolver::resolve(&Effect::Resource { amount: 1 }, &ctx, &mut turn_start, &mut state);
//! assert_eq!(turn_start, Event::TurnStart { player: PlayerId::new(0), resource: 1 });
//! ```

mod effect;
mod resolver;

pub use effect::{Effect, EntityFilter};
pub use resolver::{EffectContext, EffectResolver};
