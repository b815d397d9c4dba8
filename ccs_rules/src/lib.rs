//! # CCS Rules
//!
//! The "Rulebook" crate for the Cash Cleaner Simulator randomizer world.
//! This crate is the single source of truth for what exists in the world and
//! what gates it: the item and location catalogues, the tier tables, the
//! declarative requirement algebra, and the access-rule table.
//!
//! Everything here is immutable after load and validated at load. The host's
//! reachability solver owns player state and search; this crate only answers
//! "given this state, is this location open?" through pure, monotonic
//! predicates.

pub mod catalog;
pub mod error;
pub mod logic;
pub mod rules;

pub use catalog::*;
pub use error::*;
pub use logic::*;
pub use rules::*;
