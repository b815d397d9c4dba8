//! Static catalogues - the fixed tables of items and locations.
//!
//! Both catalogues are append-only authored tables with stable numeric
//! identifiers assigned from fixed base offsets in table order. They are
//! validated once at load and immutable afterwards.

mod items;
mod locations;

pub use items::*;
pub use locations::*;
