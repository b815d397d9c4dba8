//! The world adapter - catalogues and rules bound into host-shaped data.

use serde::Serialize;
use std::collections::BTreeMap;

use ccs_rules::{
    ItemCatalog, ItemClassification, ItemId, LocationCatalog, LocationId, LogicState, PlayerId,
    Requirement, RuleSet, Token,
};

use crate::error::WorldError;
use crate::state::Inventory;

/// The game name as registered with the host.
pub const GAME_NAME: &str = "Cash cleaner simulator";

/// One concrete item instance handed to the host's fill algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Item {
    pub name: &'static str,
    pub id: ItemId,
    pub classification: ItemClassification,
}

/// A tangible location node for the host's graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorldLocation {
    pub name: &'static str,
    pub id: LocationId,
}

/// A synthetic event location: no identifier, always holds the quest's
/// completion marker, unlocked by the quest's own access rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventLocation {
    /// Display name shown by the host ("<quest> completed").
    pub name: String,
    /// The quest this event belongs to.
    pub quest: &'static str,
    /// The marker granted when the event is reached.
    pub marker: Token,
}

/// The `name -> id` tables the host's data package consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataPackage {
    pub game: String,
    pub item_name_to_id: BTreeMap<String, i64>,
    pub location_name_to_id: BTreeMap<String, i64>,
}

/// A fully loaded, validated world for one player slot.
#[derive(Debug, Clone)]
pub struct World {
    player: PlayerId,
    items: ItemCatalog,
    locations: LocationCatalog,
    rules: RuleSet,
}

impl World {
    /// Load the catalogues, build the rule set, and validate everything.
    /// Any configuration error aborts generation here, before the host
    /// starts searching.
    pub fn new(player: PlayerId) -> Result<Self, WorldError> {
        let items = ItemCatalog::new()?;
        let locations = LocationCatalog::new()?;
        let rules = RuleSet::new(&items, &locations)?;
        Ok(Self {
            player,
            items,
            locations,
            rules,
        })
    }

    /// The player slot this world belongs to.
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// The item catalogue.
    pub fn items(&self) -> &ItemCatalog {
        &self.items
    }

    /// The location catalogue.
    pub fn locations(&self) -> &LocationCatalog {
        &self.locations
    }

    /// The validated rule set.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// The shared item pool: one `Item` per catalogue copy.
    pub fn item_pool(&self) -> Vec<Item> {
        let mut pool = Vec::with_capacity(self.items.pool_size());
        for entry in self.items.iter() {
            for _ in 0..entry.def.copies {
                pool.push(Item {
                    name: entry.def.name,
                    id: entry.id,
                    classification: entry.def.classification,
                });
            }
        }
        pool
    }

    /// Build a single item instance for the host.
    pub fn create_item(&self, name: &str) -> Result<Item, WorldError> {
        let entry = self.items.get(name).ok_or_else(|| WorldError::UnknownItem {
            name: name.to_string(),
        })?;
        Ok(Item {
            name: entry.def.name,
            id: entry.id,
            classification: entry.def.classification,
        })
    }

    /// Tangible locations, in catalogue order.
    pub fn tangible_locations(&self) -> Vec<WorldLocation> {
        self.locations
            .iter()
            .map(|entry| WorldLocation {
                name: entry.def.name,
                id: entry.id,
            })
            .collect()
    }

    /// Event locations synthesized from the `Quest`-kind catalogue entries.
    pub fn event_locations(&self) -> Vec<EventLocation> {
        self.locations
            .quests()
            .map(|entry| EventLocation {
                name: format!("{} completed", entry.def.name),
                quest: entry.def.name,
                marker: Token::Completed(entry.def.name),
            })
            .collect()
    }

    /// The access rule for a location name, if catalogued.
    pub fn rule_for(&self, location: &str) -> Option<&Requirement> {
        self.rules.rule_for(location)
    }

    /// The completion condition for this player.
    pub fn victory(&self) -> &Requirement {
        self.rules.victory()
    }

    /// Whether the player has reached an ending under the given state.
    pub fn victory_satisfied<S: LogicState + ?Sized>(&self, state: &S) -> bool {
        self.rules.victory().satisfied(state, self.player)
    }

    /// Grant every completion marker whose quest rule is satisfied, to
    /// fixpoint. This mirrors what the host's sweep does with event
    /// locations; it is marker closure only, not a general search.
    pub fn grant_reachable_events(&self, inventory: &mut Inventory) {
        loop {
            let mut granted = false;
            for entry in self.locations.quests() {
                let name = entry.def.name;
                let marker = Token::Completed(name);
                if inventory.count(self.player, marker) > 0 {
                    continue;
                }
                let open = self
                    .rules
                    .rule_for(name)
                    .map(|rule| rule.satisfied(inventory, self.player))
                    .unwrap_or(false);
                if open {
                    inventory.collect(self.player, marker);
                    granted = true;
                }
            }
            if !granted {
                break;
            }
        }
    }

    /// The `name -> id` data package for the host.
    pub fn data_package(&self) -> DataPackage {
        DataPackage {
            game: GAME_NAME.to_string(),
            item_name_to_id: self
                .items
                .iter()
                .map(|entry| (entry.def.name.to_string(), entry.id.0))
                .collect(),
            location_name_to_id: self
                .locations
                .iter()
                .map(|entry| (entry.def.name.to_string(), entry.id.0))
                .collect(),
        }
    }

    /// The data package serialized as JSON.
    pub fn data_package_json(&self) -> Result<String, WorldError> {
        Ok(serde_json::to_string_pretty(&self.data_package())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAYER: PlayerId = PlayerId(1);

    fn world() -> World {
        World::new(PLAYER).unwrap()
    }

    #[test]
    fn test_world_loads_and_validates() {
        let world = world();
        assert_eq!(world.rules().len(), world.locations().len());
    }

    #[test]
    fn test_pool_matches_catalogue_multiplicities() {
        let world = world();
        let pool = world.item_pool();
        assert_eq!(pool.len(), world.items().pool_size());
        // The pool is sized to fill every tangible location exactly.
        assert_eq!(pool.len(), world.locations().len());

        let reputation_copies = pool
            .iter()
            .filter(|item| item.name == ccs_rules::REPUTATION)
            .count();
        assert_eq!(reputation_copies, 40);
    }

    #[test]
    fn test_create_item() {
        let world = world();
        let item = world.create_item("Reduced Dryer requirement").unwrap();
        assert_eq!(item.classification, ItemClassification::Progression);

        let err = world.create_item("Imaginary Mop").unwrap_err();
        assert!(matches!(err, WorldError::UnknownItem { .. }));
    }

    #[test]
    fn test_event_locations_cover_every_quest() {
        let world = world();
        let events = world.event_locations();
        assert_eq!(events.len(), world.locations().quests().count());

        let upper = events
            .iter()
            .find(|event| event.quest == "Unlock upper area")
            .unwrap();
        assert_eq!(upper.name, "Unlock upper area completed");
        assert_eq!(upper.marker, Token::Completed("Unlock upper area"));
    }

    #[test]
    fn test_full_completion_reaches_victory() {
        let world = world();
        let mut inventory = Inventory::new();
        for item in world.item_pool() {
            inventory.collect(PLAYER, Token::Item(item.name));
        }

        assert!(!world.victory_satisfied(&inventory));
        world.grant_reachable_events(&mut inventory);
        assert!(world.victory_satisfied(&inventory));

        // With the whole pool collected, every location is open too.
        for (name, rule) in world.rules().iter() {
            assert!(rule.satisfied(&inventory, PLAYER), "{name} stayed closed");
        }
    }

    #[test]
    fn test_event_sweep_respects_quest_chains() {
        let world = world();
        let mut inventory = Inventory::new();
        // Rank 2: the early chain completes quest by quest through the
        // sweep, stopping where equipment gates begin.
        inventory.collect_copies(PLAYER, Token::Item(ccs_rules::REPUTATION), 1);
        world.grant_reachable_events(&mut inventory);

        assert!(inventory.has(
            PLAYER,
            Token::Completed("Main Quest Main: Clean It Or Skip It"),
            1
        ));
        assert!(inventory.has(PLAYER, Token::Completed("Main Quest Side: The Wet Case"), 1));
        assert!(inventory.has(
            PLAYER,
            Token::Completed("Main Quest Side: Fifty Shades Of Cash"),
            1
        ));
        // "Clean Cut" additionally needs washer access, which rank 2 and no
        // upgrades cannot provide.
        assert!(!inventory.has(PLAYER, Token::Completed("Main Quest Side: Clean Cut"), 1));
    }

    #[test]
    fn test_data_package_is_complete() {
        let world = world();
        let package = world.data_package();

        assert_eq!(package.game, GAME_NAME);
        assert_eq!(package.item_name_to_id.len(), world.items().len());
        assert_eq!(package.location_name_to_id.len(), world.locations().len());

        let json = world.data_package_json().unwrap();
        assert!(json.contains("\"Main Quest Main: Final Ascent\""));
        assert!(json.contains("\"Reputation\""));
    }
}
