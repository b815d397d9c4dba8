//! # CCS World
//!
//! The host-facing adapter for the Cash Cleaner Simulator randomizer world.
//! This crate consumes the `ccs_rules` catalogues and rule table and turns
//! them into what a multiworld host needs: the shared item pool, the
//! tangible and event locations with their unlock rules, the victory
//! condition, the name-to-id data package, and the client config archive.
//!
//! The host's reachability search itself stays external; this crate only
//! hands it data and predicates.

pub mod error;
pub mod output;
pub mod state;
pub mod world;

pub use error::*;
pub use output::*;
pub use state::*;
pub use world::*;
