//! Capabilities - named composite predicates for shop equipment access.
//!
//! Each capability models "the player can use this equipment" through every
//! alternative unlock path the shop offers: buying the upgrade outright at a
//! (tier-reduced) reputation rank, crafting it at the workbench, or reaching
//! an area that has it pre-installed.

use serde::Serialize;

use crate::logic::{Requirement, BASE_REP_NEED, HIGH_REP_NEED, LOW_REP_NEED};

/// The composite equipment predicates referenced by the access rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Capability {
    /// The workbench, unlocked by finishing "Hot Dry".
    WorkbenchAccess,
    /// The upper area has been opened.
    UpperArea,
    /// The relax area has been opened.
    RelaxArea,
    Washer,
    Dryer,
    FakeMoneyDetector,
    MarkedDetector,
    Degoo,
    Deink,
    StickerGun,
    MoneyGun,
    Ladder,
    Counter,
    EuroCounter,
    AllDenominationCounter,
}

impl Capability {
    /// Every capability, for exhaustive validation and tests.
    pub const ALL: [Capability; 15] = [
        Capability::WorkbenchAccess,
        Capability::UpperArea,
        Capability::RelaxArea,
        Capability::Washer,
        Capability::Dryer,
        Capability::FakeMoneyDetector,
        Capability::MarkedDetector,
        Capability::Degoo,
        Capability::Deink,
        Capability::StickerGun,
        Capability::MoneyGun,
        Capability::Ladder,
        Capability::Counter,
        Capability::EuroCounter,
        Capability::AllDenominationCounter,
    ];

    /// The requirement tree this capability stands for. Capabilities may
    /// reference each other but only ever "downwards", so expansion always
    /// terminates.
    pub fn requirement(self) -> Requirement {
        use Capability as Cap;
        use Requirement as Req;

        let tier = |item, tiers| Req::Tiered { item, tiers };
        let cap = Req::Capability;

        match self {
            Cap::WorkbenchAccess => Req::Completed("Main Quest Side: Hot Dry"),
            Cap::UpperArea => Req::Completed("Unlock upper area"),
            Cap::RelaxArea => Req::Completed("Unlock relax area"),
            Cap::Washer => Req::any([
                tier("Reduced Washer requirement", BASE_REP_NEED),
                tier("Reduced Big Washer requirement", HIGH_REP_NEED),
                Req::all([
                    cap(Cap::WorkbenchAccess),
                    tier("Reduced Sponge requirement", BASE_REP_NEED),
                ]),
                cap(Cap::UpperArea),
            ]),
            Cap::Dryer => tier("Reduced Dryer requirement", BASE_REP_NEED),
            Cap::FakeMoneyDetector => Req::any([
                cap(Cap::WorkbenchAccess),
                tier("Reduced Money counter tier 2 requirement", BASE_REP_NEED),
                tier(
                    "Reduced Euro Money counter tier 2 requirement",
                    BASE_REP_NEED,
                ),
                tier(
                    "Reduced Yen Money counter tier 2 requirement",
                    BASE_REP_NEED,
                ),
                tier("Reduced Money counter tier 3 requirement", HIGH_REP_NEED),
                tier("Reduced UV Lamp requirement", BASE_REP_NEED),
            ]),
            Cap::MarkedDetector => Req::any([
                cap(Cap::WorkbenchAccess),
                tier("Reduced Marked money Counter requirement", BASE_REP_NEED),
                tier("Reduced UV Lamp requirement", BASE_REP_NEED),
            ]),
            Cap::Degoo => Req::any([
                Req::all([
                    cap(Cap::WorkbenchAccess),
                    tier("Reduced Goo detergent requirement", HIGH_REP_NEED),
                ]),
                Req::all([
                    Req::any([
                        tier("Reduced Big Washer requirement", HIGH_REP_NEED),
                        cap(Cap::UpperArea),
                    ]),
                    tier("Reduced Goo detergent requirement", HIGH_REP_NEED),
                ]),
            ]),
            Cap::Deink => Req::any([
                Req::all([
                    cap(Cap::WorkbenchAccess),
                    tier("Reduced Workbench Ink Foam requirement", LOW_REP_NEED),
                ]),
                Req::all([
                    Req::any([
                        tier("Reduced Big Washer requirement", HIGH_REP_NEED),
                        cap(Cap::UpperArea),
                    ]),
                    tier("Reduced Ink detergent requirement", LOW_REP_NEED),
                ]),
            ]),
            Cap::StickerGun => tier("Reduced Sticker gun requirement", BASE_REP_NEED),
            Cap::MoneyGun => tier("Reduced Money gun requirement", BASE_REP_NEED),
            Cap::Ladder => tier("Reduced Ladder requirement", LOW_REP_NEED),
            Cap::Counter => Req::any([
                tier("Reduced Money counter requirement", LOW_REP_NEED),
                tier("Reduced Money counter tier 2 requirement", BASE_REP_NEED),
                tier(
                    "Reduced Euro Money counter tier 2 requirement",
                    BASE_REP_NEED,
                ),
                tier(
                    "Reduced Yen Money counter tier 2 requirement",
                    BASE_REP_NEED,
                ),
                tier("Reduced Money counter tier 3 requirement", HIGH_REP_NEED),
                tier("Reduced UV Lamp requirement", BASE_REP_NEED),
            ]),
            Cap::EuroCounter => Req::any([
                tier(
                    "Reduced Euro Money counter tier 2 requirement",
                    BASE_REP_NEED,
                ),
                tier("Reduced Money counter tier 3 requirement", HIGH_REP_NEED),
            ]),
            Cap::AllDenominationCounter => Req::any([
                Req::all([
                    tier("Reduced Money counter tier 2 requirement", BASE_REP_NEED),
                    tier(
                        "Reduced Euro Money counter tier 2 requirement",
                        BASE_REP_NEED,
                    ),
                    tier(
                        "Reduced Yen Money counter tier 2 requirement",
                        BASE_REP_NEED,
                    ),
                ]),
                tier("Reduced Money counter tier 3 requirement", HIGH_REP_NEED),
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ItemCatalog, LocationCatalog, REPUTATION};
    use crate::logic::{LogicState, PlayerId, Token};
    use std::collections::HashMap;

    struct MapState(HashMap<Token, u32>);

    impl LogicState for MapState {
        fn count(&self, _player: PlayerId, token: Token) -> u32 {
            self.0.get(&token).copied().unwrap_or(0)
        }
    }

    const PLAYER: PlayerId = PlayerId(1);

    #[test]
    fn test_every_capability_validates_against_catalogues() {
        let items = ItemCatalog::new().unwrap();
        let locations = LocationCatalog::new().unwrap();

        for capability in Capability::ALL {
            capability
                .requirement()
                .validate(&items, &locations)
                .unwrap_or_else(|err| panic!("{capability:?}: {err}"));
        }
    }

    #[test]
    fn test_upper_area_alone_grants_washer() {
        let state = MapState(HashMap::from([(Token::Completed("Unlock upper area"), 1)]));
        assert!(Capability::Washer
            .requirement()
            .satisfied(&state, PLAYER));
    }

    #[test]
    fn test_workbench_alone_grants_detectors_but_not_dryer() {
        let state = MapState(HashMap::from([(
            Token::Completed("Main Quest Side: Hot Dry"),
            1,
        )]));
        assert!(Capability::FakeMoneyDetector
            .requirement()
            .satisfied(&state, PLAYER));
        assert!(Capability::MarkedDetector
            .requirement()
            .satisfied(&state, PLAYER));
        assert!(!Capability::Dryer.requirement().satisfied(&state, PLAYER));
    }

    #[test]
    fn test_fully_upgraded_ladder_is_free() {
        // LOW track floor is rank 1, open from the empty baseline.
        let state = MapState(HashMap::from([(
            Token::Item("Reduced Ladder requirement"),
            3,
        )]));
        assert!(Capability::Ladder.requirement().satisfied(&state, PLAYER));
    }

    #[test]
    fn test_all_denomination_needs_all_three_or_tier_three() {
        // Rank 31 is one short of the un-upgraded BASE bar of 32.
        let below = MapState(HashMap::from([(Token::Item(REPUTATION), 30)]));
        assert!(!Capability::AllDenominationCounter
            .requirement()
            .satisfied(&below, PLAYER));

        // Rank 32 clears all three tier-2 counters at once.
        let at_bar = MapState(HashMap::from([(Token::Item(REPUTATION), 31)]));
        assert!(Capability::AllDenominationCounter
            .requirement()
            .satisfied(&at_bar, PLAYER));

        // A fully upgraded tier 3 counter covers everything at rank 16.
        let tier3 = MapState(HashMap::from([
            (Token::Item(REPUTATION), 15),
            (Token::Item("Reduced Money counter tier 3 requirement"), 3),
        ]));
        assert!(Capability::AllDenominationCounter
            .requirement()
            .satisfied(&tier3, PLAYER));
    }
}
