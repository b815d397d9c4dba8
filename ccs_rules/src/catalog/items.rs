//! Item catalogue - every item in the shared pool, with multiplicities.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::ConfigError;

/// Base offset for item identifiers. Identifiers are assigned sequentially
/// in catalogue order; the catalogue is append-only so ids stay stable.
pub const ITEM_ID_BASE: i64 = 0xCC5_0000;

/// The accumulating reputation resource. Most access rules gate on it.
///
/// The host counts the baseline rank as zero collected copies, so "rank n"
/// means n - 1 copies collected.
pub const REPUTATION: &str = "Reputation";

/// Stable numeric identifier for an item, unique per name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub i64);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How the host's fill algorithm treats an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemClassification {
    /// Can gate progression; the solver must consider it.
    Progression,
    /// Nice to have, never required.
    Useful,
    /// Pure padding.
    Filler,
    /// Actively unhelpful.
    Trap,
}

/// One authored catalogue row: an item name, its classification, and how
/// many identical copies exist in the shared pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItemDef {
    pub name: &'static str,
    pub classification: ItemClassification,
    pub copies: u32,
}

const fn progression(name: &'static str, copies: u32) -> ItemDef {
    ItemDef {
        name,
        classification: ItemClassification::Progression,
        copies,
    }
}

const fn useful(name: &'static str, copies: u32) -> ItemDef {
    ItemDef {
        name,
        classification: ItemClassification::Useful,
        copies,
    }
}

const fn filler(name: &'static str, copies: u32) -> ItemDef {
    ItemDef {
        name,
        classification: ItemClassification::Filler,
        copies,
    }
}

const fn trap(name: &'static str, copies: u32) -> ItemDef {
    ItemDef {
        name,
        classification: ItemClassification::Trap,
        copies,
    }
}

/// The authored item table.
///
/// The "Reduced ... requirement" items each lower the reputation bar of one
/// shop upgrade; three copies walk the four-entry tier tables down to their
/// floor. Pool padding is sized so the pool matches the tangible location
/// count exactly.
pub fn item_table() -> &'static [ItemDef] {
    const TABLE: &[ItemDef] = &[
        progression(REPUTATION, 40),
        progression("Reduced Washer requirement", 3),
        progression("Reduced Big Washer requirement", 3),
        progression("Reduced Sponge requirement", 3),
        progression("Reduced Dryer requirement", 3),
        progression("Reduced Money counter requirement", 3),
        progression("Reduced Money counter tier 2 requirement", 3),
        progression("Reduced Euro Money counter tier 2 requirement", 3),
        progression("Reduced Yen Money counter tier 2 requirement", 3),
        progression("Reduced Money counter tier 3 requirement", 3),
        progression("Reduced UV Lamp requirement", 3),
        progression("Reduced Marked money Counter requirement", 3),
        progression("Reduced Goo detergent requirement", 3),
        progression("Reduced Ink detergent requirement", 3),
        progression("Reduced Workbench Ink Foam requirement", 3),
        progression("Reduced Sticker gun requirement", 3),
        progression("Reduced Money gun requirement", 3),
        progression("Reduced Ladder requirement", 3),
        progression("More quest money", 1),
        useful("Luxury Air Freshener", 6),
        useful("Premium Detergent", 3),
        filler("Money Bundle", 25),
        filler("Supply Crate", 8),
        trap("Marked Bills Trap", 3),
    ];
    TABLE
}

/// A validated catalogue row with its assigned identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItemEntry {
    pub def: ItemDef,
    pub id: ItemId,
}

/// The validated, immutable item catalogue.
#[derive(Debug, Clone)]
pub struct ItemCatalog {
    entries: Vec<ItemEntry>,
    by_name: HashMap<&'static str, usize>,
}

impl ItemCatalog {
    /// Load and validate the authored table.
    ///
    /// Fails on duplicate names and zero-copy entries, naming the offender.
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_table(item_table())
    }

    fn from_table(table: &[ItemDef]) -> Result<Self, ConfigError> {
        let mut entries = Vec::with_capacity(table.len());
        let mut by_name = HashMap::with_capacity(table.len());

        for (index, def) in table.iter().enumerate() {
            if def.copies == 0 {
                return Err(ConfigError::ZeroCopies {
                    name: def.name.to_string(),
                });
            }
            if by_name.insert(def.name, index).is_some() {
                return Err(ConfigError::DuplicateItem {
                    name: def.name.to_string(),
                });
            }
            entries.push(ItemEntry {
                def: *def,
                id: ItemId(ITEM_ID_BASE + index as i64),
            });
        }

        Ok(Self { entries, by_name })
    }

    /// Look up a catalogue entry by item name.
    pub fn get(&self, name: &str) -> Option<&ItemEntry> {
        self.by_name.get(name).map(|&index| &self.entries[index])
    }

    /// Whether the catalogue contains an item with this name.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Stable identifier for an item name.
    pub fn id_of(&self, name: &str) -> Option<ItemId> {
        self.get(name).map(|entry| entry.id)
    }

    /// Iterate over all entries in catalogue order.
    pub fn iter(&self) -> impl Iterator<Item = &ItemEntry> {
        self.entries.iter()
    }

    /// Number of distinct item names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalogue is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total pool size: the sum of all multiplicities.
    pub fn pool_size(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| entry.def.copies as usize)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_loads() {
        let catalog = ItemCatalog::new().unwrap();
        assert!(catalog.contains(REPUTATION));
        assert_eq!(catalog.get(REPUTATION).unwrap().def.copies, 40);
    }

    #[test]
    fn test_table_is_a_promoted_constant() {
        // The authored table must live in static memory, not be rebuilt
        // per call.
        assert!(std::ptr::eq(item_table(), item_table()));
    }

    #[test]
    fn test_ids_are_stable_and_unique() {
        let catalog = ItemCatalog::new().unwrap();
        let ids: Vec<_> = catalog.iter().map(|entry| entry.id).collect();
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(ids.len(), deduped.len());
        assert_eq!(catalog.iter().next().unwrap().id, ItemId(ITEM_ID_BASE));
    }

    #[test]
    fn test_duplicate_item_rejected() {
        let table = [progression("Reputation", 1), progression("Reputation", 2)];
        let err = ItemCatalog::from_table(&table).unwrap_err();
        assert_eq!(
            err,
            ConfigError::DuplicateItem {
                name: "Reputation".to_string()
            }
        );
    }

    #[test]
    fn test_zero_copies_rejected() {
        let table = [filler("Money Bundle", 0)];
        let err = ItemCatalog::from_table(&table).unwrap_err();
        assert_eq!(
            err,
            ConfigError::ZeroCopies {
                name: "Money Bundle".to_string()
            }
        );
    }

    #[test]
    fn test_pool_size_is_sum_of_multiplicities() {
        let table = [
            progression("A", 2),
            progression("B", 1),
            filler("C", 4),
        ];
        let catalog = ItemCatalog::from_table(&table).unwrap();
        assert_eq!(catalog.pool_size(), 7);
    }
}
