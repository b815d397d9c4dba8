//! Configuration errors raised while loading the catalogues and rule table.
//!
//! Every variant names the offending entry. A world that fails any of these
//! checks must abort generation; there is no silent fallback to "unreachable".

use thiserror::Error;

/// Errors detected while validating the catalogues and the rule table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Two item catalogue entries share a name.
    #[error("duplicate item in catalogue: {name}")]
    DuplicateItem { name: String },

    /// An item catalogue entry declares zero copies.
    #[error("item {name} declares zero copies in the pool")]
    ZeroCopies { name: String },

    /// Two location catalogue entries share a name.
    #[error("duplicate location in catalogue: {name}")]
    DuplicateLocation { name: String },

    /// Two rule-table rows target the same location.
    #[error("duplicate rule for location: {name}")]
    DuplicateRule { name: String },

    /// A catalogued location has no rule-table entry.
    #[error("no access rule for catalogued location: {name}")]
    MissingRule { name: String },

    /// A rule-table row targets a location that is not in the catalogue.
    #[error("access rule for unknown location: {name}")]
    RuleForUnknownLocation { name: String },

    /// A requirement references an item that is not in the catalogue.
    #[error("requirement references unknown item: {name}")]
    UnknownItem { name: String },

    /// A requirement references a quest that is not in the catalogue.
    #[error("requirement references unknown quest: {name}")]
    UnknownQuest { name: String },

    /// A requirement references a location that never produces a
    /// completion marker.
    #[error("requirement treats non-quest location as a quest: {name}")]
    NotAQuest { name: String },

    /// A tier table has no entries.
    #[error("empty tier table on requirement for item: {item}")]
    EmptyTierTable { item: String },

    /// A tier table's thresholds rise as upgrade copies accumulate.
    #[error("tier table for item {item} is not non-increasing: {thresholds:?}")]
    TierTableNotMonotonic { item: String, thresholds: Vec<u32> },

    /// A reputation requirement of zero; the lowest meaningful rank is 1.
    #[error("reputation requirement of zero is not a valid rank")]
    ZeroReputationThreshold,
}
