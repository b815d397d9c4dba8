//! A concrete collected-item store for embedders and tests.
//!
//! A real multiworld host brings its own state tracking and only needs the
//! `LogicState` trait; `Inventory` is the reference implementation used by
//! the event-sweep helper and the test suite. Mutation is add-only, which
//! keeps every rule evaluation monotonic across a search.

use std::collections::HashMap;

use ccs_rules::{LogicState, PlayerId, Token};

/// A multiset of collected tokens per player.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    counts: HashMap<(PlayerId, Token), u32>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect one copy of a token.
    pub fn collect(&mut self, player: PlayerId, token: Token) {
        self.collect_copies(player, token, 1);
    }

    /// Collect several copies of a token.
    pub fn collect_copies(&mut self, player: PlayerId, token: Token, copies: u32) {
        *self.counts.entry((player, token)).or_insert(0) += copies;
    }

    /// Collect every token in the iterator, one copy each.
    pub fn collect_many(&mut self, player: PlayerId, tokens: impl IntoIterator<Item = Token>) {
        for token in tokens {
            self.collect(player, token);
        }
    }

    /// Total copies collected across all tokens for a player.
    pub fn total(&self, player: PlayerId) -> u32 {
        self.counts
            .iter()
            .filter(|((owner, _), _)| *owner == player)
            .map(|(_, copies)| copies)
            .sum()
    }
}

impl LogicState for Inventory {
    fn count(&self, player: PlayerId, token: Token) -> u32 {
        self.counts.get(&(player, token)).copied().unwrap_or(0)
    }
}
