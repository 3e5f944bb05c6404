//! Player intents.
//!
//! An intent is what a human or computer actor asks for. The engine
//! validates it against the current turn and phase and either applies it
//! in full or rejects it with no state change.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// A request from one of the players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Take one card from the given shared-pool stack into the hand.
    DrawCard { stack: usize },

    /// Summon one card from the given hand stack onto the active board.
    PlayCard { stack: usize },

    /// End the current play or draw phase.
    EndPhase,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::DrawCard { stack } => write!(f, "draw from stack {}", stack),
            Intent::PlayCard { stack } => write!(f, "play hand stack {}", stack),
            Intent::EndPhase => write!(f, "end phase"),
        }
    }
}

/// An applied intent with its position in the match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentRecord {
    /// The player who acted.
    pub player: PlayerId,

    /// What they did.
    pub intent: Intent,

    /// Turn number when it was applied.
    pub turn: u32,

    /// Sequence number within the turn.
    pub sequence: u32,
}

impl IntentRecord {
    /// Create a new record.
    #[must_use]
    pub fn new(player: PlayerId, intent: Intent, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            intent,
            turn,
            sequence,
        }
    }
}
