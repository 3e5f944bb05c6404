//! Counted groups of identical cards.

use serde::{Deserialize, Serialize};

use crate::cards::CardInstance;

/// A count paired with one representative card instance.
///
/// All copies in a stack are fungible; only the representative carries
/// runtime state. A stack with count zero is removed by its pool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack {
    /// The representative instance.
    pub card: CardInstance,

    /// Copies remaining.
    pub count: u32,
}

impl Stack {
    /// Create a stack.
    #[must_use]
    pub fn new(card: CardInstance, count: u32) -> Self {
        Self { card, count }
    }

    /// Check if no copies remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
