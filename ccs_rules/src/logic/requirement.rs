//! The requirement tree - a declarative replacement for nested closures.
//!
//! A `Requirement` is built once, validated against the catalogues at load,
//! and then evaluated any number of times against host-owned state. All
//! leaves are `>=` threshold tests and the only combinators are AND/OR, so
//! every tree is monotonic by construction.

use serde::Serialize;

use crate::catalog::{ItemCatalog, LocationCatalog, REPUTATION};
use crate::error::ConfigError;
use crate::logic::{Capability, LogicState, PlayerId, TierTable, Token};

/// A boolean access requirement over player state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Requirement {
    /// Reputation rank at least `n` (`n >= 1`).
    ///
    /// The host counts the baseline rank as zero collected copies, so this
    /// tests `count(Reputation) >= n - 1`. Rank 1 is open from the empty
    /// state.
    Reputation(u32),

    /// The named quest's completion marker has been produced.
    Completed(&'static str),

    /// At least `copies` of an ordinary item.
    Has {
        item: &'static str,
        copies: u32,
    },

    /// Reputation rank at least `tiers[count(item)]`, with the index clamped
    /// to the table. Each collected copy of `item` lowers the bar.
    Tiered {
        item: &'static str,
        tiers: TierTable,
    },

    /// A named composite capability, expanded at load time.
    Capability(Capability),

    /// All of the inner requirements.
    All(Vec<Requirement>),

    /// Any of the inner requirements.
    Any(Vec<Requirement>),
}

impl Requirement {
    /// Evaluate against a state snapshot. Total: absent items and quests
    /// read as zero, never as an error.
    pub fn satisfied<S: LogicState + ?Sized>(&self, state: &S, player: PlayerId) -> bool {
        match self {
            Requirement::Reputation(rank) => {
                state.has(player, Token::Item(REPUTATION), rank.saturating_sub(1))
            }
            Requirement::Completed(quest) => state.has(player, Token::Completed(quest), 1),
            Requirement::Has { item, copies } => state.has(player, Token::Item(item), *copies),
            Requirement::Tiered { item, tiers } => {
                let upgrades = state.count(player, Token::Item(item));
                let rank = tiers.threshold_for(upgrades);
                state.has(player, Token::Item(REPUTATION), rank.saturating_sub(1))
            }
            Requirement::Capability(capability) => {
                capability.requirement().satisfied(state, player)
            }
            Requirement::All(inner) => inner.iter().all(|req| req.satisfied(state, player)),
            Requirement::Any(inner) => inner.iter().any(|req| req.satisfied(state, player)),
        }
    }

    /// Replace every `Capability` node with its definition, recursively.
    /// The result contains only leaf tests and AND/OR combinators.
    pub fn expand(self) -> Requirement {
        match self {
            Requirement::Capability(capability) => capability.requirement().expand(),
            Requirement::All(inner) => {
                Requirement::All(inner.into_iter().map(Requirement::expand).collect())
            }
            Requirement::Any(inner) => {
                Requirement::Any(inner.into_iter().map(Requirement::expand).collect())
            }
            leaf => leaf,
        }
    }

    /// Load-time check against the catalogues: every referenced item must be
    /// catalogued, every referenced quest must be a `Quest`-kind location,
    /// tier tables must be well formed, and reputation ranks start at 1.
    pub fn validate(
        &self,
        items: &ItemCatalog,
        locations: &LocationCatalog,
    ) -> Result<(), ConfigError> {
        match self {
            Requirement::Reputation(rank) => {
                if *rank == 0 {
                    return Err(ConfigError::ZeroReputationThreshold);
                }
                require_item(items, REPUTATION)
            }
            Requirement::Completed(quest) => {
                if !locations.contains(quest) {
                    return Err(ConfigError::UnknownQuest {
                        name: quest.to_string(),
                    });
                }
                if !locations.is_quest(quest) {
                    return Err(ConfigError::NotAQuest {
                        name: quest.to_string(),
                    });
                }
                Ok(())
            }
            Requirement::Has { item, .. } => require_item(items, item),
            Requirement::Tiered { item, tiers } => {
                require_item(items, item)?;
                require_item(items, REPUTATION)?;
                tiers.validate(item)
            }
            Requirement::Capability(capability) => {
                capability.requirement().validate(items, locations)
            }
            Requirement::All(inner) | Requirement::Any(inner) => {
                for req in inner {
                    req.validate(items, locations)?;
                }
                Ok(())
            }
        }
    }

    /// AND combinator over a fixed set of requirements.
    pub fn all<const N: usize>(inner: [Requirement; N]) -> Requirement {
        Requirement::All(inner.into_iter().collect())
    }

    /// OR combinator over a fixed set of requirements.
    pub fn any<const N: usize>(inner: [Requirement; N]) -> Requirement {
        Requirement::Any(inner.into_iter().collect())
    }
}

fn require_item(items: &ItemCatalog, name: &str) -> Result<(), ConfigError> {
    if items.contains(name) {
        Ok(())
    } else {
        Err(ConfigError::UnknownItem {
            name: name.to_string(),
        })
    }
}
