//! Talent usage statistics over a (filtered) loadout list.
//!
//! Everything here is pure and infallible: an empty loadout list yields zero
//! counts and a percent of 0.

use serde::Serialize;
use std::borrow::Borrow;
use std::collections::BTreeMap;

use crate::loadout::{PlayerInfo, RatedLoadout, Region};
use crate::tree::{NodeId, Talent, TalentId, TalentNode};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TalentUsage {
    pub selected: usize,
    pub total: usize,
    pub percent: f64,
    /// Index `r` counts loadouts with rank `r`; index 0 is "not selected".
    /// Length is the node's max rank + 1.
    pub usage_by_rank: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeUsage {
    /// Sum of the talents' `selected`.
    pub selected: usize,
    pub total: usize,
    pub percent: f64,
    pub talents: BTreeMap<TalentId, TalentUsage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PvpTalentUsage {
    pub selected: usize,
    pub total: usize,
    pub percent: f64,
}

pub type NodeUsageMap = BTreeMap<NodeId, NodeUsage>;
pub type PvpTalentUsageMap = BTreeMap<TalentId, PvpTalentUsage>;

/// `selected / total`, or 0 when `total` is 0.
pub fn compute_percent(selected: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    selected as f64 / total as f64
}

pub fn talent_usage<L: Borrow<RatedLoadout>>(talent_id: TalentId, max_rank: u8, loadouts: &[L]) -> TalentUsage {
    let mut usage_by_rank = vec![0; max_rank as usize + 1];
    let last = usage_by_rank.len() - 1;
    for loadout in loadouts {
        let loadout: &RatedLoadout = loadout.borrow();
        let rank = loadout.talents.rank(talent_id) as usize;
        usage_by_rank[rank.min(last)] += 1;
    }

    let selected = usage_by_rank[1..].iter().sum();
    TalentUsage {
        selected,
        total: loadouts.len(),
        percent: compute_percent(selected, loadouts.len()),
        usage_by_rank,
    }
}

pub fn node_usage<L: Borrow<RatedLoadout>>(nodes: &[TalentNode], loadouts: &[L]) -> NodeUsageMap {
    nodes
        .iter()
        .map(|node| {
            let talents: BTreeMap<TalentId, TalentUsage> = node
                .talents
                .iter()
                .map(|talent| (talent.id, talent_usage(talent.id, node.max_rank, loadouts)))
                .collect();
            let selected = talents.values().map(|t| t.selected).sum();
            let usage = NodeUsage {
                selected,
                total: loadouts.len(),
                percent: compute_percent(selected, loadouts.len()),
                talents,
            };
            (node.id, usage)
        })
        .collect()
}

pub fn pvp_talent_usage<L: Borrow<RatedLoadout>>(talents: &[Talent], loadouts: &[L]) -> PvpTalentUsageMap {
    talents
        .iter()
        .map(|talent| {
            let selected = loadouts
                .iter()
                .map(Borrow::<RatedLoadout>::borrow)
                .filter(|l| l.has_pvp_talent(talent.id))
                .count();
            let usage = PvpTalentUsage {
                selected,
                total: loadouts.len(),
                percent: compute_percent(selected, loadouts.len()),
            };
            (talent.id, usage)
        })
        .collect()
}

/// A leading loadout of the stats panel. `player` is only known for V1
/// entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopPlayer<'a> {
    /// 1-based position in the filtered list.
    pub position: usize,
    pub rating: u32,
    pub region: Option<Region>,
    pub player: Option<&'a PlayerInfo>,
}

/// The first `n` loadouts. Filtering keeps leaderboard order, so these are
/// the highest rated players matching the filters.
pub fn top_players<'a, L: Borrow<RatedLoadout>>(loadouts: &'a [L], n: usize) -> Vec<TopPlayer<'a>> {
    loadouts
        .iter()
        .take(n)
        .enumerate()
        .map(|(i, loadout)| {
            let loadout: &RatedLoadout = loadout.borrow();
            TopPlayer {
                position: i + 1,
                rating: loadout.rating,
                region: loadout.region,
                player: loadout.player.as_ref(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loadout::{Faction, Realm};
    use crate::test_support::{fixture_tree, loadout};

    #[test]
    fn test_top_players() {
        let mut leader = loadout(&[(100, 1)], &[500], 2650);
        leader.region = Some(Region::Eu);
        leader.player = Some(PlayerInfo {
            name: "Moonkin".into(),
            realm: Realm { name: "Kazzak".into(), slug: "kazzak".into() },
            faction: Faction::Horde,
            share_code: "CkGAAAAAAAAAAAAAAAAAAAAAAA".into(),
        });
        let loadouts: Vec<RatedLoadout> = std::iter::once(leader)
            .chain((0..6).map(|i| loadout(&[], &[], 2600 - i * 10)))
            .collect();
        let refs: Vec<&RatedLoadout> = loadouts.iter().collect();

        let top = top_players(&refs, 5);
        assert_eq!(top.len(), 5);
        assert_eq!(top[0].position, 1);
        assert_eq!(top[0].region, Some(Region::Eu));
        assert_eq!(top[0].player.map(|p| p.name.as_str()), Some("Moonkin"));
        assert_eq!(top[4].position, 5);
        assert_eq!(top[4].rating, 2570);
        assert!(top[1].player.is_none());

        assert_eq!(top_players(&loadouts[..2], 5).len(), 2);
        assert!(top_players::<RatedLoadout>(&[], 5).is_empty());
    }

    #[test]
    fn test_usage_by_rank_counts() {
        let tree = fixture_tree();
        let node = tree.node(2).unwrap().clone();
        let mut loadouts = Vec::new();
        for _ in 0..4 {
            loadouts.push(loadout(&[(110, 1)], &[], 1800));
        }
        for _ in 0..3 {
            loadouts.push(loadout(&[(110, 2)], &[], 1800));
        }
        for _ in 0..3 {
            loadouts.push(loadout(&[], &[], 1800));
        }

        let usage = node_usage(&[node], &loadouts);
        let talent = &usage[&2].talents[&110];
        assert_eq!(talent.usage_by_rank, vec![3, 4, 3]);
        assert_eq!(talent.selected, 7);
        assert_eq!(talent.total, 10);
        assert!((talent.percent - 0.7).abs() < 1e-12);
        assert_eq!(usage[&2].selected, 7);
    }

    #[test]
    fn test_choice_node_sums_talents() {
        let tree = fixture_tree();
        let loadouts = vec![
            loadout(&[(120, 1)], &[], 2000),
            loadout(&[(121, 1)], &[], 2000),
            loadout(&[(121, 1)], &[], 2000),
            loadout(&[], &[], 2000),
        ];
        let usage = node_usage(&tree.class_nodes, &loadouts);
        let choice = &usage[&3];
        assert_eq!(choice.talents[&120].selected, 1);
        assert_eq!(choice.talents[&121].selected, 2);
        assert_eq!(choice.selected, 3);
        assert!((choice.percent - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_empty_input() {
        let tree = fixture_tree();
        let none: Vec<RatedLoadout> = Vec::new();

        assert!(node_usage(&[], &none).is_empty());

        let usage = node_usage(&tree.spec_nodes, &none);
        for node in usage.values() {
            assert_eq!(node.percent, 0.0);
            for talent in node.talents.values() {
                assert_eq!(talent.percent, 0.0);
                assert!(talent.usage_by_rank.iter().all(|&c| c == 0));
            }
        }
        assert_eq!(usage[&4].talents[&130].usage_by_rank.len(), 4);

        for talent in pvp_talent_usage(&tree.pvp_talents, &none).values() {
            assert_eq!(talent.percent, 0.0);
        }
    }

    #[test]
    fn test_pvp_usage() {
        let tree = fixture_tree();
        let loadouts = vec![
            loadout(&[], &[500, 501], 2000),
            loadout(&[], &[500], 2000),
            loadout(&[], &[], 2000),
            loadout(&[], &[502], 2000),
        ];
        let refs: Vec<&RatedLoadout> = loadouts.iter().collect();
        let usage = pvp_talent_usage(&tree.pvp_talents, &refs);
        assert_eq!(usage[&500].selected, 2);
        assert_eq!(usage[&500].percent, 0.5);
        assert_eq!(usage[&501].selected, 1);
        assert_eq!(usage[&502].total, 4);
    }

    #[test]
    fn test_rank_above_max_lands_in_last_bucket() {
        let loadouts = vec![loadout(&[(7, 5)], &[], 2000), loadout(&[], &[], 2000)];
        let usage = talent_usage(7, 2, &loadouts);
        assert_eq!(usage.usage_by_rank, vec![1, 0, 1]);
        assert_eq!(usage.usage_by_rank.iter().sum::<usize>(), usage.total);
    }

    #[test]
    fn test_compute_percent() {
        assert_eq!(compute_percent(0, 0), 0.0);
        assert_eq!(compute_percent(5, 0), 0.0);
        assert_eq!(compute_percent(1, 4), 0.25);
    }
}
