//! Rules engine trait.
//!
//! A rules engine answers three questions about a match:
//! - What intents are legal for a player right now
//! - What an intent does (or why it is rejected)
//! - Whether, and how, the match has ended

use serde::{Deserialize, Serialize};

use crate::core::action::Intent;
use crate::core::error::Result;
use crate::core::player::PlayerId;

/// Result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Both players died in the same cascade.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_intents`: empty when the player cannot act
/// - `apply_intent`: all-or-nothing; a rejected intent leaves observable
///   state untouched
/// - `outcome`: `None` while the match continues
pub trait RulesEngine {
    /// Intents the player could submit right now.
    fn legal_intents(&self, player: PlayerId) -> Vec<Intent>;

    /// Validate and apply an intent.
    fn apply_intent(&mut self, player: PlayerId, intent: Intent) -> Result<()>;

    /// How the match ended, if it has.
    fn outcome(&self) -> Option<GameResult>;

    /// Check if the match is over.
    fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::new(1));
        assert!(!result.is_winner(PlayerId::new(0)));
        assert!(result.is_winner(PlayerId::new(1)));

        let draw = GameResult::Draw;
        assert!(!draw.is_winner(PlayerId::new(0)));
        assert!(!draw.is_winner(PlayerId::new(1)));
    }
}
