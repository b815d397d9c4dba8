//! Tier tables - diminishing reputation requirements for shop upgrades.

use serde::Serialize;

use crate::error::ConfigError;

/// Ordered reputation thresholds indexed by how many copies of a "Reduced
/// ... requirement" item have been collected. Each copy walks the bar down
/// one entry; collecting more copies than entries stays at the floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierTable(pub &'static [u32]);

/// The default upgrade track.
pub const BASE_REP_NEED: TierTable = TierTable(&[32, 24, 16, 8]);
/// The expensive upgrade track.
pub const HIGH_REP_NEED: TierTable = TierTable(&[40, 32, 24, 16]);
/// The cheap upgrade track; fully upgraded it is always open.
pub const LOW_REP_NEED: TierTable = TierTable(&[24, 16, 8, 1]);

impl TierTable {
    /// The reputation rank required after collecting `copies` upgrades.
    ///
    /// Indexing is clamped to the last entry; an empty table (rejected at
    /// load) reads as unreachable rather than panicking.
    pub fn threshold_for(&self, copies: u32) -> u32 {
        let index = (copies as usize).min(self.0.len().saturating_sub(1));
        self.0.get(index).copied().unwrap_or(u32::MAX)
    }

    /// Load-time check: non-empty and non-increasing.
    pub fn validate(&self, item: &str) -> Result<(), ConfigError> {
        if self.0.is_empty() {
            return Err(ConfigError::EmptyTierTable {
                item: item.to_string(),
            });
        }
        if self.0.windows(2).any(|pair| pair[0] < pair[1]) {
            return Err(ConfigError::TierTableNotMonotonic {
                item: item.to_string(),
                thresholds: self.0.to_vec(),
            });
        }
        Ok(())
    }
}
