//! Decoded leaderboard records.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::tree::TalentId;

/// Sparse talent id → rank map.
///
/// A missing key means rank 0. Rank 0 is never stored: [`TalentRanks::set`]
/// with a zero rank removes the key instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TalentRanks(BTreeMap<TalentId, u8>);

impl TalentRanks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rank of a talent, 0 when absent.
    pub fn rank(&self, talent_id: TalentId) -> u8 {
        self.0.get(&talent_id).copied().unwrap_or(0)
    }

    pub fn is_selected(&self, talent_id: TalentId) -> bool {
        self.0.contains_key(&talent_id)
    }

    pub fn set(&mut self, talent_id: TalentId, rank: u8) {
        if rank == 0 {
            self.0.remove(&talent_id);
        } else {
            self.0.insert(talent_id, rank);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (TalentId, u8)> + '_ {
        self.0.iter().map(|(&id, &rank)| (id, rank))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(TalentId, u8)> for TalentRanks {
    fn from_iter<I: IntoIterator<Item = (TalentId, u8)>>(iter: I) -> Self {
        let mut ranks = TalentRanks::new();
        for (id, rank) in iter {
            ranks.set(id, rank);
        }
        ranks
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Us,
    Eu,
}

impl Region {
    pub const ALL: [Region; 2] = [Region::Us, Region::Eu];

    pub fn as_str(self) -> &'static str {
        match self {
            Region::Us => "us",
            Region::Eu => "eu",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Faction {
    Alliance,
    Horde,
}

impl Faction {
    /// Wire flag: 1 is Horde, anything else Alliance.
    pub fn from_flag(flag: u8) -> Self {
        if flag == 1 { Faction::Horde } else { Faction::Alliance }
    }

    pub fn flag(self) -> u8 {
        match self {
            Faction::Horde => 1,
            Faction::Alliance => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Realm {
    pub name: String,
    pub slug: String,
}

/// Player metadata carried by V1 entries only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerInfo {
    pub name: String,
    pub realm: Realm,
    pub faction: Faction,
    /// In-game loadout export string.
    pub share_code: String,
}

/// One player's build on one leaderboard snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatedLoadout {
    pub talents: TalentRanks,
    /// Selected PvP talent ids, order irrelevant.
    pub pvp_talents: Vec<TalentId>,
    pub rating: u32,
    pub player: Option<PlayerInfo>,
    pub region: Option<Region>,
}

impl RatedLoadout {
    pub fn new(talents: TalentRanks, pvp_talents: Vec<TalentId>, rating: u32) -> Self {
        Self {
            talents,
            pvp_talents,
            rating,
            player: None,
            region: None,
        }
    }

    pub fn has_pvp_talent(&self, talent_id: TalentId) -> bool {
        self.pvp_talents.contains(&talent_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_rank_is_zero() {
        let ranks: TalentRanks = [(1, 2)].into_iter().collect();
        assert_eq!(ranks.rank(1), 2);
        assert_eq!(ranks.rank(2), 0);
        assert!(!ranks.is_selected(2));
    }

    #[test]
    fn test_zero_rank_removes_key() {
        let mut ranks: TalentRanks = [(1, 2), (3, 0)].into_iter().collect();
        assert_eq!(ranks.len(), 1);
        ranks.set(1, 0);
        assert!(ranks.is_empty());
    }

    #[test]
    fn test_faction_flag() {
        assert_eq!(Faction::from_flag(1), Faction::Horde);
        assert_eq!(Faction::from_flag(0), Faction::Alliance);
        assert_eq!(Faction::from_flag(7), Faction::Alliance);
        assert_eq!(Faction::Horde.flag(), 1);
    }
}
