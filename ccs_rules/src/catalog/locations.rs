//! Location catalogue - every tangible location holding a randomized item.
//!
//! Event locations (the synthetic "quest completed" markers) are not
//! catalogued here: they carry no identifier and are synthesized by the
//! world adapter from the `Quest`-kind entries below.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::ConfigError;

/// Base offset for location identifiers, assigned sequentially in catalogue
/// order. The catalogue is append-only so ids stay stable.
pub const LOCATION_ID_BASE: i64 = 0xCC5_4000;

/// Stable numeric identifier for a tangible location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LocationId(pub i64);

impl std::fmt::Display for LocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What completing a location means for downstream logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationKind {
    /// Completing it also produces a completion marker that later rules can
    /// query. Covers the quest chains and the two area unlocks.
    Quest,
    /// A plain check with no downstream effect.
    Check,
}

/// One authored catalogue row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocationDef {
    pub name: &'static str,
    pub kind: LocationKind,
}

const fn quest(name: &'static str) -> LocationDef {
    LocationDef {
        name,
        kind: LocationKind::Quest,
    }
}

const fn check(name: &'static str) -> LocationDef {
    LocationDef {
        name,
        kind: LocationKind::Check,
    }
}

/// The authored location table: the main-quest chain, the numbered side
/// quests, quest bonuses, world interactions and collections, and the
/// side-quest difficulty checks.
pub fn location_table() -> &'static [LocationDef] {
    const TABLE: &[LocationDef] = &[
        // Main quests
        quest("Main Quest Tutorial: Controls Movement"),
        quest("Main Quest Tutorial: Controls Interactions"),
        quest("Main Quest Tutorial: Smartphone"),
        quest("Main Quest Tutorial: Manipulation"),
        quest("Main Quest Tutorial: Conveyor"),
        quest("Main Quest Side: The Call Of Cash"),
        quest("Main Quest Tutorial: Take Quest"),
        quest("Main Quest Tutorial: Task Tracker"),
        quest("Main Quest Tutorial: Finish Quest"),
        quest("Main Quest Main: Clean It Or Skip It"),
        quest("Main Quest Main: Shop Till It Drops"),
        quest("Main Quest Side: The Wet Case"),
        quest("Main Quest Side: Fifty Shades Of Cash"),
        quest("Main Quest Side: Hot Dry"),
        quest("Main Quest Side: Clean Cut"),
        quest("Main Quest Side: Two Cases"),
        quest("Main Quest Side: From Chaos To Cash"),
        quest("Main Quest Side: Silent Deal"),
        quest("Main Quest Side: Fake Fluff"),
        quest("Main Quest Side: No Stains"),
        quest("Main Quest Main: Cleansing Fire"),
        quest("Main Quest Main: The Light Test"),
        quest("Main Quest Side: Light It Up"),
        quest("Main Quest Main: Feed The Pig"),
        quest("Main Quest Side: Different Values"),
        quest("Main Quest Main: Europhoria"),
        quest("Main Quest Main: Blacklight Evidence"),
        quest("Main Quest Main: Pre Launch Protocol"),
        quest("Main Quest Main: Saving Piglet"),
        quest("Main Quest Side: Luxury Wrapping"),
        quest("Main Quest Main: Golden Cage Breakout"),
        quest("Main Quest Side: Fragile Treasure"),
        quest("Main Quest Side: Financial Exorcism"),
        quest("Main Quest Side: What They Left Behind"),
        quest("Main Quest Side: Financial Zoo"),
        quest("Main Quest Side: Tracing The Bullet"),
        quest("Main Quest Side: Collectors Edition"),
        quest("Main Quest Side: The Money Flow"),
        quest("Main Quest Side: The Magician Choice"),
        quest("Main Quest Side: Ocean Of Emojis"),
        quest("Main Quest Side: Lawful Goo"),
        quest("Main Quest Side: Mind Your Business"),
        quest("Main Quest Main: The Vault Of Truth"),
        quest("Main Quest Main: Operation Black File"),
        quest("Main Quest Side: Combo Heist"),
        quest("Main Quest Main: Launch Code OINK"),
        quest("Main Quest Main: Inflation Sequence"),
        quest("Main Quest Main: Priming The Shot"),
        quest("Main Quest Main: Loaded But Undecided"),
        quest("Main Quest Side: Acid Conspiracy"),
        quest("Main Quest Main: Final Ascent"),
        quest("Main Quest Main: Point Of No Return"),
        // Side quests
        quest("SideQuest 1"),
        quest("SideQuest 2"),
        quest("SideQuest 3"),
        quest("SideQuest 4"),
        quest("SideQuest 5"),
        quest("SideQuest 6"),
        quest("SideQuest 7"),
        quest("SideQuest 8"),
        quest("SideQuest 9"),
        quest("SideQuest 10"),
        quest("SideQuest 11"),
        quest("SideQuest 12"),
        quest("SideQuest 13"),
        quest("SideQuest 14"),
        quest("SideQuest 15"),
        quest("SideQuest 16"),
        quest("SideQuest 17"),
        quest("SideQuest 18"),
        quest("SideQuest 19"),
        quest("SideQuest 20"),
        quest("SideQuest 21"),
        quest("SideQuest 22"),
        quest("SideQuest 23"),
        quest("SideQuest 24"),
        quest("SideQuest 25"),
        quest("SideQuest 26"),
        quest("SideQuest 27"),
        quest("SideQuest 28"),
        quest("SideQuest 29"),
        quest("SideQuest 30"),
        // Quest bonuses
        check("Quest Bonus: Exact money value"),
        check("Quest Bonus: More money value"),
        check("Quest Bonus: Much more money value"),
        check("Quest Bonus: Single delivery"),
        check("Quest Bonus: Nothing else"),
        check("Quest Bonus: No marked money"),
        check("Quest Bonus: No marked money specific quest"),
        check("Quest Bonus: No fake money"),
        check("Quest Bonus: No fake money specific quest"),
        check("Quest Bonus: Perfect packs"),
        check("Quest Bonus: Perfect packs specific quest"),
        check("Quest Bonus: Perfect blocks"),
        check("Quest Bonus: Perfect blocks specific quest"),
        check("Quest Bonus: Marked with Labels!"),
        check("Quest Bonus: Perfect rolls"),
        check("Quest Bonus: Perfect roll-blocks"),
        // World interactions
        quest("Unlock relax area"),
        quest("Unlock upper area"),
        check("Dunk!"),
        check("Rest out of bound"),
        check("Buy a money gun"),
        check("Marked bill collection: FBI"),
        check("Marked bill collection: Police"),
        check("Marked bill collection: Yakuza"),
        check("Marked bill collection: Mafia"),
        check("Marked bill collection: Cartel"),
        check("Marked bill collection: Unknown"),
        check("Coin collection: Pitcoin"),
        check("Coin collection: Legionnare"),
        check("Coin collection: Liberty"),
        check("Coin collection: Pirate"),
        check("Coin collection: Ashoka Lion"),
        check("Coin collection: Fugio"),
        check("Coin collection: Edokoban"),
        check("Coin collection: Retro Pixel"),
        check("Art Bill collection: EUR 100"),
        check("Art Bill collection: EUR 50"),
        check("Art Bill collection: EUR 20"),
        check("Art Bill collection: JPY 10000"),
        check("Art Bill collection: JPY 5000"),
        check("Art Bill collection: JPY 1000"),
        check("Art Bill collection: USD 100"),
        check("Art Bill collection: USD 50"),
        check("Art Bill collection: USD 20"),
        check("Art Bill collection: USD 10"),
        // Side quest difficulty checks
        check("Side quest Difficulty 0"),
        check("Side quest Difficulty 1"),
        check("Side quest Difficulty 2"),
        check("Side quest Difficulty 3"),
        check("Side quest Difficulty 4"),
        check("Side quest Difficulty 5"),
        check("Side quest Difficulty 6"),
        check("Side quest Difficulty 7"),
        check("Side quest Difficulty 8"),
        check("Side quest Difficulty 9"),
    ];
    TABLE
}

/// A validated catalogue row with its assigned identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocationEntry {
    pub def: LocationDef,
    pub id: LocationId,
}

/// The validated, immutable location catalogue.
#[derive(Debug, Clone)]
pub struct LocationCatalog {
    entries: Vec<LocationEntry>,
    by_name: HashMap<&'static str, usize>,
}

impl LocationCatalog {
    /// Load and validate the authored table. Fails on duplicate names.
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_table(location_table())
    }

    fn from_table(table: &[LocationDef]) -> Result<Self, ConfigError> {
        let mut entries = Vec::with_capacity(table.len());
        let mut by_name = HashMap::with_capacity(table.len());

        for (index, def) in table.iter().enumerate() {
            if by_name.insert(def.name, index).is_some() {
                return Err(ConfigError::DuplicateLocation {
                    name: def.name.to_string(),
                });
            }
            entries.push(LocationEntry {
                def: *def,
                id: LocationId(LOCATION_ID_BASE + index as i64),
            });
        }

        Ok(Self { entries, by_name })
    }

    /// Look up a catalogue entry by location name.
    pub fn get(&self, name: &str) -> Option<&LocationEntry> {
        self.by_name.get(name).map(|&index| &self.entries[index])
    }

    /// Whether the catalogue contains a location with this name.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Stable identifier for a location name.
    pub fn id_of(&self, name: &str) -> Option<LocationId> {
        self.get(name).map(|entry| entry.id)
    }

    /// Whether this name is a `Quest`-kind location producing a
    /// completion marker.
    pub fn is_quest(&self, name: &str) -> bool {
        self.get(name)
            .map(|entry| entry.def.kind == LocationKind::Quest)
            .unwrap_or(false)
    }

    /// Iterate over all entries in catalogue order.
    pub fn iter(&self) -> impl Iterator<Item = &LocationEntry> {
        self.entries.iter()
    }

    /// Iterate over the `Quest`-kind entries only.
    pub fn quests(&self) -> impl Iterator<Item = &LocationEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.def.kind == LocationKind::Quest)
    }

    /// Number of tangible locations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalogue is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
