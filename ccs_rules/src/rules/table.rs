//! The authored access-rule table: one row per catalogued location.
//!
//! Most quest rows follow the same shape: a minimum reputation rank, the
//! previous quest in the chain, and zero or more equipment capabilities.
//! Coverage against the location catalogue is enforced by `RuleSet::new`.

use crate::logic::{Capability, Requirement, TierTable, LOW_REP_NEED};

fn rep(rank: u32) -> Requirement {
    Requirement::Reputation(rank)
}

fn done(quest: &'static str) -> Requirement {
    Requirement::Completed(quest)
}

fn has(item: &'static str, copies: u32) -> Requirement {
    Requirement::Has { item, copies }
}

fn tier(item: &'static str, tiers: TierTable) -> Requirement {
    Requirement::Tiered { item, tiers }
}

fn cap(capability: Capability) -> Requirement {
    Requirement::Capability(capability)
}

fn all<const N: usize>(inner: [Requirement; N]) -> Requirement {
    Requirement::all(inner)
}

/// Every location's access rule, in catalogue order.
pub(crate) fn access_rules() -> Vec<(&'static str, Requirement)> {
    use Capability::*;

    vec![
        // Main quests
        ("Main Quest Tutorial: Controls Movement", rep(1)),
        ("Main Quest Tutorial: Controls Interactions", rep(1)),
        ("Main Quest Tutorial: Smartphone", rep(1)),
        ("Main Quest Tutorial: Manipulation", rep(1)),
        ("Main Quest Tutorial: Conveyor", rep(1)),
        ("Main Quest Side: The Call Of Cash", rep(1)),
        ("Main Quest Tutorial: Take Quest", rep(1)),
        ("Main Quest Tutorial: Task Tracker", rep(1)),
        ("Main Quest Tutorial: Finish Quest", rep(1)),
        ("Main Quest Main: Clean It Or Skip It", rep(1)),
        (
            "Main Quest Main: Shop Till It Drops",
            all([rep(1), tier("Reduced Money counter requirement", LOW_REP_NEED)]),
        ),
        (
            "Main Quest Side: The Wet Case",
            all([rep(1), done("Main Quest Main: Clean It Or Skip It")]),
        ),
        (
            "Main Quest Side: Fifty Shades Of Cash",
            all([rep(2), done("Main Quest Side: The Wet Case")]),
        ),
        (
            "Main Quest Side: Hot Dry",
            all([rep(1), done("Main Quest Side: Fifty Shades Of Cash")]),
        ),
        (
            "Main Quest Side: Clean Cut",
            all([rep(2), done("Main Quest Side: Hot Dry"), cap(Washer)]),
        ),
        (
            "Main Quest Side: Two Cases",
            all([rep(1), done("Main Quest Side: Clean Cut"), cap(Washer)]),
        ),
        (
            "Main Quest Side: From Chaos To Cash",
            all([rep(3), done("Main Quest Side: Two Cases")]),
        ),
        (
            "Main Quest Side: Silent Deal",
            all([rep(2), done("Main Quest Side: Two Cases")]),
        ),
        (
            "Main Quest Side: Fake Fluff",
            all([
                rep(4),
                done("Main Quest Side: Silent Deal"),
                cap(FakeMoneyDetector),
            ]),
        ),
        (
            "Main Quest Side: No Stains",
            all([
                rep(2),
                done("Main Quest Side: From Chaos To Cash"),
                cap(MarkedDetector),
            ]),
        ),
        (
            "Main Quest Main: Cleansing Fire",
            all([rep(1), done("Main Quest Side: Hot Dry")]),
        ),
        (
            "Main Quest Main: The Light Test",
            all([
                rep(1),
                done("Main Quest Side: Clean Cut"),
                cap(FakeMoneyDetector),
            ]),
        ),
        (
            "Main Quest Side: Light It Up",
            all([rep(1), done("Main Quest Main: The Light Test"), cap(Ladder)]),
        ),
        (
            "Main Quest Main: Feed The Pig",
            all([rep(1), done("Main Quest Side: Light It Up")]),
        ),
        (
            "Main Quest Side: Different Values",
            all([rep(10), done("Main Quest Side: Light It Up")]),
        ),
        (
            "Main Quest Main: Europhoria",
            all([
                rep(8),
                done("Main Quest Main: Feed The Pig"),
                cap(EuroCounter),
            ]),
        ),
        (
            "Main Quest Main: Blacklight Evidence",
            all([
                rep(9),
                done("Main Quest Main: Europhoria"),
                cap(MarkedDetector),
            ]),
        ),
        (
            "Main Quest Main: Pre Launch Protocol",
            all([rep(10), cap(UpperArea)]),
        ),
        (
            "Main Quest Main: Saving Piglet",
            all([rep(10), done("Main Quest Main: Blacklight Evidence")]),
        ),
        (
            "Main Quest Side: Luxury Wrapping",
            all([rep(9), done("Main Quest Side: Different Values")]),
        ),
        (
            "Main Quest Main: Golden Cage Breakout",
            all([
                rep(11),
                done("Main Quest Main: Saving Piglet"),
                cap(EuroCounter),
            ]),
        ),
        (
            "Main Quest Side: Fragile Treasure",
            all([
                rep(8),
                done("Main Quest Side: Luxury Wrapping"),
                cap(Washer),
                cap(Dryer),
            ]),
        ),
        (
            "Main Quest Side: Financial Exorcism",
            all([
                rep(9),
                done("Main Quest Side: Fragile Treasure"),
                cap(Washer),
                cap(Dryer),
                cap(MarkedDetector),
            ]),
        ),
        (
            "Main Quest Side: What They Left Behind",
            all([rep(8), done("Main Quest Side: Financial Exorcism")]),
        ),
        (
            "Main Quest Side: Financial Zoo",
            all([rep(11), done("Main Quest Side: What They Left Behind")]),
        ),
        (
            "Main Quest Side: Tracing The Bullet",
            all([rep(8), done("Main Quest Side: Financial Zoo")]),
        ),
        (
            "Main Quest Side: Collectors Edition",
            all([rep(10), done("Main Quest Side: Tracing The Bullet")]),
        ),
        (
            "Main Quest Side: The Money Flow",
            all([
                rep(1),
                done("Main Quest Side: Collectors Edition"),
                cap(AllDenominationCounter),
                cap(Washer),
                cap(Deink),
            ]),
        ),
        (
            "Main Quest Side: The Magician Choice",
            all([
                rep(1),
                done("Main Quest Side: The Money Flow"),
                cap(AllDenominationCounter),
                cap(Washer),
                cap(Dryer),
            ]),
        ),
        (
            "Main Quest Side: Ocean Of Emojis",
            all([
                rep(1),
                done("Main Quest Side: The Magician Choice"),
                cap(Washer),
                cap(Dryer),
            ]),
        ),
        ("Main Quest Side: Lawful Goo", all([rep(16), cap(Degoo)])),
        ("Main Quest Side: Mind Your Business", rep(21)),
        (
            "Main Quest Main: The Vault Of Truth",
            all([rep(11), done("Main Quest Main: Golden Cage Breakout")]),
        ),
        (
            "Main Quest Main: Operation Black File",
            all([rep(10), done("Main Quest Main: Golden Cage Breakout")]),
        ),
        (
            "Main Quest Side: Combo Heist",
            all([
                rep(8),
                done("Main Quest Main: Golden Cage Breakout"),
                cap(Washer),
                cap(Dryer),
            ]),
        ),
        (
            "Main Quest Main: Launch Code OINK",
            all([
                rep(10),
                done("Main Quest Main: The Vault Of Truth"),
                cap(UpperArea),
            ]),
        ),
        (
            "Main Quest Main: Inflation Sequence",
            all([
                rep(10),
                done("Main Quest Main: Launch Code OINK"),
                cap(UpperArea),
            ]),
        ),
        (
            "Main Quest Main: Priming The Shot",
            all([
                rep(10),
                done("Main Quest Main: Operation Black File"),
                cap(RelaxArea),
            ]),
        ),
        (
            "Main Quest Main: Loaded But Undecided",
            all([
                rep(10),
                done("Main Quest Main: Priming The Shot"),
                cap(RelaxArea),
            ]),
        ),
        (
            "Main Quest Side: Acid Conspiracy",
            all([rep(16), cap(Degoo), done("Main Quest Side: Lawful Goo")]),
        ),
        (
            "Main Quest Main: Final Ascent",
            all([
                rep(10),
                done("Main Quest Main: Inflation Sequence"),
                cap(UpperArea),
            ]),
        ),
        (
            "Main Quest Main: Point Of No Return",
            all([
                rep(10),
                done("Main Quest Main: Loaded But Undecided"),
                cap(RelaxArea),
            ]),
        ),
        // Side quests: a single chain with reputation steps at 11, 16 and 21,
        // and a counter requirement from 16 on.
        ("SideQuest 1", rep(1)),
        ("SideQuest 2", all([rep(1), done("SideQuest 1")])),
        ("SideQuest 3", all([rep(1), done("SideQuest 2")])),
        ("SideQuest 4", all([rep(1), done("SideQuest 3")])),
        ("SideQuest 5", all([rep(1), done("SideQuest 4")])),
        ("SideQuest 6", all([rep(1), done("SideQuest 5")])),
        ("SideQuest 7", all([rep(1), done("SideQuest 6")])),
        ("SideQuest 8", all([rep(1), done("SideQuest 7")])),
        ("SideQuest 9", all([rep(1), done("SideQuest 8")])),
        ("SideQuest 10", all([rep(1), done("SideQuest 9")])),
        ("SideQuest 11", all([rep(5), done("SideQuest 10")])),
        ("SideQuest 12", all([rep(5), done("SideQuest 11")])),
        ("SideQuest 13", all([rep(5), done("SideQuest 12")])),
        ("SideQuest 14", all([rep(5), done("SideQuest 13")])),
        ("SideQuest 15", all([rep(5), done("SideQuest 14")])),
        ("SideQuest 16", all([rep(10), done("SideQuest 15"), cap(Counter)])),
        ("SideQuest 17", all([rep(10), done("SideQuest 16"), cap(Counter)])),
        ("SideQuest 18", all([rep(10), done("SideQuest 17"), cap(Counter)])),
        ("SideQuest 19", all([rep(10), done("SideQuest 18"), cap(Counter)])),
        ("SideQuest 20", all([rep(10), done("SideQuest 19"), cap(Counter)])),
        ("SideQuest 21", all([rep(15), done("SideQuest 20"), cap(Counter)])),
        ("SideQuest 22", all([rep(15), done("SideQuest 21"), cap(Counter)])),
        ("SideQuest 23", all([rep(15), done("SideQuest 22"), cap(Counter)])),
        ("SideQuest 24", all([rep(15), done("SideQuest 23"), cap(Counter)])),
        ("SideQuest 25", all([rep(15), done("SideQuest 24"), cap(Counter)])),
        ("SideQuest 26", all([rep(15), done("SideQuest 25"), cap(Counter)])),
        ("SideQuest 27", all([rep(15), done("SideQuest 26"), cap(Counter)])),
        ("SideQuest 28", all([rep(15), done("SideQuest 27"), cap(Counter)])),
        ("SideQuest 29", all([rep(15), done("SideQuest 28"), cap(Counter)])),
        ("SideQuest 30", all([rep(15), done("SideQuest 29"), cap(Counter)])),
        // Quest bonuses
        ("Quest Bonus: Exact money value", rep(1)),
        ("Quest Bonus: More money value", rep(1)),
        (
            "Quest Bonus: Much more money value",
            has("More quest money", 1),
        ),
        ("Quest Bonus: Single delivery", rep(1)),
        ("Quest Bonus: Nothing else", rep(1)),
        ("Quest Bonus: No marked money", cap(MarkedDetector)),
        (
            "Quest Bonus: No marked money specific quest",
            all([cap(MarkedDetector), rep(6)]),
        ),
        ("Quest Bonus: No fake money", cap(FakeMoneyDetector)),
        (
            "Quest Bonus: No fake money specific quest",
            all([cap(FakeMoneyDetector), rep(6)]),
        ),
        ("Quest Bonus: Perfect packs", rep(1)),
        ("Quest Bonus: Perfect packs specific quest", rep(1)),
        ("Quest Bonus: Perfect blocks", rep(1)),
        ("Quest Bonus: Perfect blocks specific quest", rep(1)),
        ("Quest Bonus: Marked with Labels!", cap(StickerGun)),
        ("Quest Bonus: Perfect rolls", rep(1)),
        ("Quest Bonus: Perfect roll-blocks", rep(1)),
        // World interactions
        (
            "Unlock relax area",
            all([done("Main Quest Side: Light It Up"), rep(9)]),
        ),
        (
            "Unlock upper area",
            all([done("Main Quest Side: Light It Up"), rep(9)]),
        ),
        ("Dunk!", done("Main Quest Side: Light It Up")),
        ("Rest out of bound", cap(Ladder)),
        ("Buy a money gun", cap(MoneyGun)),
        (
            "Marked bill collection: FBI",
            all([rep(6), cap(MarkedDetector)]),
        ),
        (
            "Marked bill collection: Police",
            all([rep(6), cap(MarkedDetector)]),
        ),
        (
            "Marked bill collection: Yakuza",
            all([rep(6), cap(MarkedDetector)]),
        ),
        (
            "Marked bill collection: Mafia",
            all([rep(6), cap(MarkedDetector)]),
        ),
        (
            "Marked bill collection: Cartel",
            all([rep(6), cap(MarkedDetector)]),
        ),
        (
            "Marked bill collection: Unknown",
            all([rep(6), cap(MarkedDetector)]),
        ),
        ("Coin collection: Pitcoin", rep(1)),
        ("Coin collection: Legionnare", rep(1)),
        ("Coin collection: Liberty", rep(1)),
        ("Coin collection: Pirate", rep(1)),
        ("Coin collection: Ashoka Lion", rep(1)),
        ("Coin collection: Fugio", rep(1)),
        ("Coin collection: Edokoban", rep(1)),
        ("Coin collection: Retro Pixel", rep(1)),
        (
            "Art Bill collection: EUR 100",
            done("Main Quest Side: Light It Up"),
        ),
        (
            "Art Bill collection: EUR 50",
            done("Main Quest Side: Light It Up"),
        ),
        (
            "Art Bill collection: EUR 20",
            done("Main Quest Side: Light It Up"),
        ),
        (
            "Art Bill collection: JPY 10000",
            done("Main Quest Side: Light It Up"),
        ),
        (
            "Art Bill collection: JPY 5000",
            done("Main Quest Side: Light It Up"),
        ),
        (
            "Art Bill collection: JPY 1000",
            done("Main Quest Side: Light It Up"),
        ),
        (
            "Art Bill collection: USD 100",
            done("Main Quest Side: Light It Up"),
        ),
        (
            "Art Bill collection: USD 50",
            done("Main Quest Side: Light It Up"),
        ),
        (
            "Art Bill collection: USD 20",
            done("Main Quest Side: Light It Up"),
        ),
        (
            "Art Bill collection: USD 10",
            done("Main Quest Side: Light It Up"),
        ),
        // Side quest difficulty checks
        ("Side quest Difficulty 0", rep(1)),
        ("Side quest Difficulty 1", rep(1)),
        ("Side quest Difficulty 2", rep(1)),
        ("Side quest Difficulty 3", all([rep(4), cap(Counter)])),
        ("Side quest Difficulty 4", all([rep(8), cap(Counter)])),
        ("Side quest Difficulty 5", all([rep(14), cap(Counter)])),
        ("Side quest Difficulty 6", all([rep(22), cap(Counter)])),
        ("Side quest Difficulty 7", all([rep(24), cap(Counter)])),
        ("Side quest Difficulty 8", all([rep(34), cap(Counter)])),
        ("Side quest Difficulty 9", all([rep(38), cap(Counter)])),
    ]
}

/// The completion condition: either of the two endings.
pub(crate) fn victory_requirement() -> Requirement {
    Requirement::any([
        Requirement::Completed("Main Quest Main: Final Ascent"),
        Requirement::Completed("Main Quest Main: Point Of No Return"),
    ])
}
