//! The validated rule set - access rules matched 1:1 against the catalogue.
//!
//! The authored table lives in `table.rs`; `RuleSet::new` turns it into an
//! immutable mapping, checked for total coverage and dangling references
//! before the host ever evaluates a rule. Stored rules are capability-free:
//! every `Capability` node is expanded at load.

mod table;

use std::collections::HashMap;

use crate::catalog::{ItemCatalog, LocationCatalog};
use crate::error::ConfigError;
use crate::logic::Requirement;

/// The immutable mapping from location name to its access requirement,
/// plus the victory requirement.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: HashMap<&'static str, Requirement>,
    victory: Requirement,
}

impl RuleSet {
    /// Build and validate the authored rule table against the catalogues.
    ///
    /// Fails fast, naming the offender, if a rule targets an uncatalogued
    /// location, a catalogued location has no rule, a row is duplicated, or
    /// any requirement references an unknown item or quest.
    pub fn new(items: &ItemCatalog, locations: &LocationCatalog) -> Result<Self, ConfigError> {
        Self::build(
            table::access_rules(),
            table::victory_requirement(),
            items,
            locations,
        )
    }

    fn build(
        rows: Vec<(&'static str, Requirement)>,
        victory: Requirement,
        items: &ItemCatalog,
        locations: &LocationCatalog,
    ) -> Result<Self, ConfigError> {
        let mut rules = HashMap::with_capacity(rows.len());

        for (name, requirement) in rows {
            if !locations.contains(name) {
                return Err(ConfigError::RuleForUnknownLocation {
                    name: name.to_string(),
                });
            }
            let expanded = requirement.expand();
            expanded.validate(items, locations)?;
            if rules.insert(name, expanded).is_some() {
                return Err(ConfigError::DuplicateRule {
                    name: name.to_string(),
                });
            }
        }

        for entry in locations.iter() {
            if !rules.contains_key(entry.def.name) {
                return Err(ConfigError::MissingRule {
                    name: entry.def.name.to_string(),
                });
            }
        }

        let victory = victory.expand();
        victory.validate(items, locations)?;

        Ok(Self { rules, victory })
    }

    /// The access requirement for a location. `None` only for names outside
    /// the catalogue; every catalogued location is guaranteed a rule.
    pub fn rule_for(&self, location: &str) -> Option<&Requirement> {
        self.rules.get(location)
    }

    /// The completion condition for the player.
    pub fn victory(&self) -> &Requirement {
        &self.victory
    }

    /// Iterate over all `(location, requirement)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Requirement)> {
        self.rules.iter().map(|(name, req)| (*name, req))
    }

    /// Number of rules; equals the location catalogue size by construction.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the rule set is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::REPUTATION;
    use crate::logic::{LogicState, PlayerId, Token};
    use std::collections::{BTreeSet, HashMap};

    struct MapState(HashMap<Token, u32>);

    impl LogicState for MapState {
        fn count(&self, _player: PlayerId, token: Token) -> u32 {
            self.0.get(&token).copied().unwrap_or(0)
        }
    }

    const PLAYER: PlayerId = PlayerId(1);

    fn load() -> (ItemCatalog, LocationCatalog, RuleSet) {
        let items = ItemCatalog::new().unwrap();
        let locations = LocationCatalog::new().unwrap();
        let rules = RuleSet::new(&items, &locations).unwrap();
        (items, locations, rules)
    }

    #[test]
    fn test_coverage_is_bijective() {
        let (_, locations, rules) = load();

        let rule_names: BTreeSet<_> = rules.iter().map(|(name, _)| name).collect();
        let location_names: BTreeSet<_> =
            locations.iter().map(|entry| entry.def.name).collect();
        assert_eq!(rule_names, location_names);
    }

    #[test]
    fn test_stored_rules_are_capability_free() {
        fn capability_free(req: &Requirement) -> bool {
            match req {
                Requirement::Capability(_) => false,
                Requirement::All(inner) | Requirement::Any(inner) => {
                    inner.iter().all(capability_free)
                }
                _ => true,
            }
        }

        let (_, _, rules) = load();
        for (name, req) in rules.iter() {
            assert!(capability_free(req), "{name} kept a capability node");
        }
        assert!(capability_free(rules.victory()));
    }

    #[test]
    fn test_tutorials_open_from_empty_state() {
        let (_, _, rules) = load();
        let empty = MapState(HashMap::new());

        let rule = rules
            .rule_for("Main Quest Tutorial: Controls Movement")
            .unwrap();
        assert!(rule.satisfied(&empty, PLAYER));

        let gated = rules.rule_for("Main Quest Side: The Wet Case").unwrap();
        assert!(!gated.satisfied(&empty, PLAYER));
    }

    #[test]
    fn test_victory_requires_an_ending() {
        let (_, _, rules) = load();
        let empty = MapState(HashMap::new());
        assert!(!rules.victory().satisfied(&empty, PLAYER));

        let ascent = MapState(HashMap::from([(
            Token::Completed("Main Quest Main: Final Ascent"),
            1,
        )]));
        assert!(rules.victory().satisfied(&ascent, PLAYER));

        let no_return = MapState(HashMap::from([(
            Token::Completed("Main Quest Main: Point Of No Return"),
            1,
        )]));
        assert!(rules.victory().satisfied(&no_return, PLAYER));
    }

    #[test]
    fn test_monotonic_over_growing_state() {
        // Collect the pool one copy at a time; once a rule opens it must
        // stay open. Completion markers are granted as soon as their quest
        // rule holds, which also only adds to the state.
        let (items, locations, rules) = load();
        let mut state = MapState(HashMap::new());
        let mut open: BTreeSet<&'static str> = BTreeSet::new();

        let mut pool: Vec<&'static str> = Vec::new();
        for entry in items.iter() {
            for _ in 0..entry.def.copies {
                pool.push(entry.def.name);
            }
        }

        for item in pool {
            *state.0.entry(Token::Item(item)).or_insert(0) += 1;

            loop {
                let mut granted = false;
                for entry in locations.quests() {
                    let name = entry.def.name;
                    let marker = Token::Completed(name);
                    if state.0.contains_key(&marker) {
                        continue;
                    }
                    if rules.rule_for(name).unwrap().satisfied(&state, PLAYER) {
                        state.0.insert(marker, 1);
                        granted = true;
                    }
                }
                if !granted {
                    break;
                }
            }

            for (name, req) in rules.iter() {
                let satisfied = req.satisfied(&state, PLAYER);
                if open.contains(name) {
                    assert!(satisfied, "{name} closed after collecting {item}");
                } else if satisfied {
                    open.insert(name);
                }
            }
        }

        // The full pool opens everything.
        assert_eq!(open.len(), rules.len());
    }

    #[test]
    fn test_missing_rule_fails_loudly() {
        let items = ItemCatalog::new().unwrap();
        let locations = LocationCatalog::new().unwrap();

        let mut rows = table::access_rules();
        rows.retain(|(name, _)| *name != "Dunk!");
        let err =
            RuleSet::build(rows, table::victory_requirement(), &items, &locations).unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingRule {
                name: "Dunk!".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_location_rule_fails_loudly() {
        let items = ItemCatalog::new().unwrap();
        let locations = LocationCatalog::new().unwrap();

        let mut rows = table::access_rules();
        rows.push(("Secret Backroom", Requirement::Reputation(1)));
        let err =
            RuleSet::build(rows, table::victory_requirement(), &items, &locations).unwrap_err();
        assert_eq!(
            err,
            ConfigError::RuleForUnknownLocation {
                name: "Secret Backroom".to_string()
            }
        );
    }

    #[test]
    fn test_duplicate_rule_fails_loudly() {
        let items = ItemCatalog::new().unwrap();
        let locations = LocationCatalog::new().unwrap();

        let mut rows = table::access_rules();
        rows.push(("Dunk!", Requirement::Reputation(1)));
        let err =
            RuleSet::build(rows, table::victory_requirement(), &items, &locations).unwrap_err();
        assert_eq!(
            err,
            ConfigError::DuplicateRule {
                name: "Dunk!".to_string()
            }
        );
    }

    #[test]
    fn test_dangling_item_reference_fails_loudly() {
        let items = ItemCatalog::new().unwrap();
        let locations = LocationCatalog::new().unwrap();

        let mut rows = table::access_rules();
        for (name, req) in rows.iter_mut() {
            if *name == "Dunk!" {
                *req = Requirement::Has {
                    item: "Solid Gold Washer",
                    copies: 1,
                };
            }
        }
        let err =
            RuleSet::build(rows, table::victory_requirement(), &items, &locations).unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownItem {
                name: "Solid Gold Washer".to_string()
            }
        );
    }

    #[test]
    fn test_max_reputation_is_within_the_pool() {
        // The deepest rank gate is 38; the pool carries 40 copies, so the
        // full pool clears every reputation gate.
        let (items, _, rules) = load();
        let rep_copies = items.get(REPUTATION).unwrap().def.copies;

        fn max_rank(req: &Requirement) -> u32 {
            match req {
                Requirement::Reputation(rank) => *rank,
                Requirement::All(inner) | Requirement::Any(inner) => {
                    inner.iter().map(max_rank).max().unwrap_or(0)
                }
                _ => 0,
            }
        }

        let deepest = rules.iter().map(|(_, req)| max_rank(req)).max().unwrap();
        assert_eq!(deepest, 38);
        assert!(rep_copies >= deepest - 1);
    }
}
