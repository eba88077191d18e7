//! Shared fixtures for unit tests.

use crate::loadout::{RatedLoadout, TalentRanks};
use crate::tree::{TalentId, TalentTree};

/// Slot order of the fixture talents: 100, 110, 120, 121, 130, 140.
/// PvP slot order: 500, 501, 502.
pub const FIXTURE_TREE: &str = r#"{
    "class_name": "Druid",
    "spec_name": "Balance",
    "class_id": 11,
    "spec_id": 102,
    "class_nodes": [
        {"id": 1, "row": 1, "col": 1, "x": 1200, "y": 1200, "unlocks": [2, 3],
         "max_rank": 1, "node_type": "ACTIVE",
         "talents": [{"id": 100, "name": "Moonfire", "icon": "spell_nature_starfall",
                      "spell": {"id": 8921, "name": "Moonfire", "ranks": [{"description": "Burns the enemy."}]}}]},
        {"id": 2, "row": 2, "col": 1, "x": 1200, "y": 1800, "locked_by": [1],
         "max_rank": 2, "node_type": "PASSIVE",
         "talents": [{"id": 110, "name": "Thick Hide", "icon": "inv_misc_pelt_bear_03",
                      "spell": {"id": 16931, "name": "Thick Hide", "ranks": [
                          {"description": "Reduces damage taken by 3%."},
                          {"description": "Reduces damage taken by 6%."}]}}]},
        {"id": 3, "row": 2, "col": 2, "x": 1800, "y": 1800, "locked_by": [1],
         "max_rank": 1, "node_type": "CHOICE",
         "talents": [
            {"id": 120, "name": "Mighty Bash", "spell": {"id": 5211, "name": "Mighty Bash"}},
            {"id": 121, "name": "Incapacitating Roar", "spell": {"id": 99, "name": "Incapacitating Roar"}}]}
    ],
    "spec_nodes": [
        {"id": 4, "row": 1, "col": 1, "x": 7200, "y": 1200, "unlocks": [5],
         "max_rank": 3, "node_type": "PASSIVE",
         "talents": [{"id": 130, "name": "Astral Influence", "spell": {"id": 197524, "name": "Astral Influence"}}]},
        {"id": 5, "row": 2, "col": 1, "x": 7200, "y": 1800, "locked_by": [4, 999],
         "max_rank": 1, "node_type": "ACTIVE",
         "talents": [{"id": 140, "name": "Starfall", "spell": {"id": 191034, "name": "Starfall"}}]}
    ],
    "pvp_talents": [
        {"id": 502, "name": "Thorns", "spell": {"id": 305497, "name": "Thorns"}},
        {"id": 500, "name": "Faerie Swarm", "spell": {"id": 209749, "name": "Faerie Swarm"}},
        {"id": 501, "name": "Malorne's Swiftness", "spell": {"id": 236147, "name": "Malorne's Swiftness"}}
    ]
}"#;

pub fn fixture_tree() -> TalentTree {
    TalentTree::from_json(FIXTURE_TREE).expect("fixture tree parses")
}

pub fn loadout(talents: &[(TalentId, u8)], pvp_talents: &[TalentId], rating: u32) -> RatedLoadout {
    RatedLoadout::new(
        talents.iter().copied().collect::<TalentRanks>(),
        pvp_talents.to_vec(),
        rating,
    )
}
