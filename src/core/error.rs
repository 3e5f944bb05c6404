//! Error types.
//!
//! Intents that fail validation are rejected without touching match state.
//! The `try_*` entry points on `Match` surface the reason as a
//! [`MatchError`]; the plain entry points swallow it.

use thiserror::Error;

use crate::cards::Rarity;

use super::player::PlayerId;

/// Why an intent was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("the match has finished")]
    MatchFinished,

    #[error("it is not {0}'s turn")]
    NotYourTurn(PlayerId),

    #[error("action not allowed in the {0} phase")]
    WrongPhase(&'static str),

    #[error("no card available at stack index {0}")]
    EmptyStack(usize),

    #[error("a resource card was already played this turn")]
    ResourceAlreadyPlayed,

    #[error("not enough resources: costs {cost}, {available} available")]
    InsufficientResources { cost: i64, available: i64 },

    #[error("no draws remaining")]
    NoDrawsRemaining,

    #[error("no player with index {0}")]
    InvalidPlayer(u8),
}

/// Catalog loading and shared-pool seeding failures.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("tier {rarity:?} holds {available} templates, {requested} requested")]
    TierTooSmall {
        rarity: Rarity,
        requested: usize,
        available: usize,
    },

    #[error("shared pool is empty; cannot deal opening hands")]
    EmptyPool,
}

pub type Result<T> = std::result::Result<T, MatchError>;
