//! Match rules: the turn controller and what it exposes.
//!
//! [`Match`] implements [`RulesEngine`]:
//! - Legal intents for the current turn and phase
//! - How intents turn into root events
//! - Win/loss once a player dies
//!
//! Observers receive a [`PlayerView`] per player after every applied
//! intent; [`MatchSnapshot`] captures the whole table on demand.

mod controller;
pub mod engine;
pub mod view;

pub use crate::core::Phase;
pub use controller::Match;
pub use engine::{GameResult, RulesEngine};
pub use view::{CardView, MatchObserver, MatchSnapshot, PlayerView, SideView, StackView};
