//! Shared test helpers.

use pvp_loadouts::loadout::{RatedLoadout, TalentRanks};
use pvp_loadouts::tree::{TalentId, TalentTree};

/// A small Hunter tree.
///
/// Class nodes: 10 (talent 1000, 1 rank), 11 (1010, 2 ranks),
/// 12 (choice 1020 / 1021). Spec nodes: 20 (2000, 3 ranks), 21 (2010, 1 rank).
/// PvP talents: 3000, 3001, 3002, 3003.
pub const HUNTER_TREE: &str = r#"{
    "class_name": "Hunter",
    "spec_name": "Marksmanship",
    "class_nodes": [
        {"id": 10, "row": 1, "col": 4, "x": 3000, "y": 1200, "unlocks": [11, 12], "max_rank": 1,
         "node_type": "ACTIVE",
         "talents": [{"id": 1000, "name": "Kill Shot", "icon": "ability_hunter_assassinate2",
                      "spell": {"id": 53351, "name": "Kill Shot"}}]},
        {"id": 11, "row": 2, "col": 3, "x": 2400, "y": 1800, "locked_by": [10], "max_rank": 2,
         "node_type": "PASSIVE",
         "talents": [{"id": 1010, "name": "Natural Mending",
                      "spell": {"id": 270581, "name": "Natural Mending", "ranks": [
                          {"description": "Every 20 Focus reduces Exhilaration's cooldown by 1 sec."},
                          {"description": "Every 10 Focus reduces Exhilaration's cooldown by 1 sec."}]}}]},
        {"id": 12, "row": 2, "col": 5, "x": 3600, "y": 1800, "locked_by": [10], "max_rank": 1,
         "node_type": "CHOICE",
         "talents": [
            {"id": 1020, "name": "Binding Shot", "spell": {"id": 109248, "name": "Binding Shot",
             "ranks": [{"description": "Tethers enemies.", "cast_time": "Instant", "range": "30 yd range", "cooldown": "45 sec cooldown"}]}},
            {"id": 1021, "name": "Scatter Shot", "spell": {"id": 213691, "name": "Scatter Shot",
             "ranks": [{"description": "Disorients the target.", "cast_time": "", "cooldown": "30 sec cooldown"}]}}]}
    ],
    "spec_nodes": [
        {"id": 20, "row": 1, "col": 4, "x": 9000, "y": 1200, "unlocks": [21], "max_rank": 3,
         "node_type": "PASSIVE",
         "talents": [{"id": 2000, "name": "Careful Aim", "spell": {"id": 260228, "name": "Careful Aim"}}]},
        {"id": 21, "row": 2, "col": 4, "x": 9000, "y": 1800, "locked_by": [20], "max_rank": 1,
         "node_type": "ACTIVE",
         "talents": [{"id": 2010, "name": "Trueshot", "spell": {"id": 288613, "name": "Trueshot"}}]}
    ],
    "pvp_talents": [
        {"id": 3003, "name": "Chimaeral Sting", "spell": {"id": 356719, "name": "Chimaeral Sting"}},
        {"id": 3000, "name": "Sniper Shot", "spell": {"id": 203155, "name": "Sniper Shot"}},
        {"id": 3002, "name": "Ranger's Finesse", "spell": {"id": 248443, "name": "Ranger's Finesse"}},
        {"id": 3001, "name": "Hunting Pack", "spell": {"id": 203235, "name": "Hunting Pack"}}
    ]
}"#;

/// `(talent id, max rank)` of every tree talent.
#[allow(dead_code)]
pub const TALENTS: [(TalentId, u8); 6] = [(1000, 1), (1010, 2), (1020, 1), (1021, 1), (2000, 3), (2010, 1)];
#[allow(dead_code)]
pub const PVP_TALENTS: [TalentId; 4] = [3000, 3001, 3002, 3003];

#[allow(dead_code)]
pub fn hunter_tree() -> TalentTree {
    TalentTree::from_json(HUNTER_TREE).expect("hunter tree parses")
}

#[allow(dead_code)]
pub fn loadout(talents: &[(TalentId, u8)], pvp_talents: &[TalentId], rating: u32) -> RatedLoadout {
    RatedLoadout::new(
        talents.iter().copied().collect::<TalentRanks>(),
        pvp_talents.to_vec(),
        rating,
    )
}
