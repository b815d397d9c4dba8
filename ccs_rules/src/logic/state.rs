//! The read-only view of host-owned player state.

use serde::{Deserialize, Serialize};

/// A player slot in the multiworld.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u16);

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player {}", self.0)
    }
}

/// What a collected count is keyed by.
///
/// Completion markers are a distinct variant rather than string-suffixed
/// pseudo-items, so an item named "X completed" can never collide with the
/// marker for quest "X".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Token {
    /// An ordinary catalogue item.
    Item(&'static str),
    /// The completion marker for a `Quest`-kind location.
    Completed(&'static str),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Item(name) => write!(f, "{name}"),
            Token::Completed(quest) => write!(f, "{quest} completed"),
        }
    }
}

/// Read-only queries over a player's collected multiset.
///
/// The host owns and mutates the state; this subsystem only reads it. The
/// multiset only ever grows during a search, so any predicate built from
/// these queries with `>=` thresholds is monotonic.
pub trait LogicState {
    /// How many copies of `token` the player has collected.
    fn count(&self, player: PlayerId, token: Token) -> u32;

    /// Whether the player has collected at least `copies` of `token`.
    fn has(&self, player: PlayerId, token: Token, copies: u32) -> bool {
        self.count(player, token) >= copies
    }
}
