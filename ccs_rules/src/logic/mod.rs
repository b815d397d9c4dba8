//! Requirement logic - the declarative predicate algebra.
//!
//! Access rules are trees of threshold tests (`Reputation`, `Has`, `Tiered`,
//! `Completed`) combined with `All`/`Any`. Trees are pure, total over any
//! player state, and monotonic: collecting more can only open locations,
//! never close them. That monotonicity is what lets the host's fixpoint
//! search terminate.

mod capability;
mod requirement;
mod state;
mod tiers;

pub use capability::*;
pub use requirement::*;
pub use state::*;
pub use tiers::*;
