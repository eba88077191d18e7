//! Leaderboard codec.
//!
//! Entries reference talents by slot: their index in a table of the tree's
//! talent ids sorted ascending. [`SlotTables`] holds those tables; the
//! [`v0`] and [`v1`] modules implement the two entry formats.

pub mod cursor;
pub mod v0;
pub mod v1;
pub mod wire;

use serde::Serialize;
use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::loadout::{RatedLoadout, Region};
use crate::tree::{NodeId, TalentId, TalentTree};

pub use cursor::ByteCursor;
pub use wire::{EncodingInfo, LeaderboardPayload, RegionalPayloads};

/// A talent table slot and the node metadata decoding needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotTalent {
    pub talent_id: TalentId,
    pub node_id: NodeId,
    pub max_rank: u8,
}

/// Slot index lookup tables built from a tree.
#[derive(Debug, Clone)]
pub struct SlotTables {
    talents: Vec<SlotTalent>,
    pvp_talents: Vec<TalentId>,
}

impl SlotTables {
    /// Class then spec talents, deduplicated by id (first node wins) and
    /// sorted ascending; PvP talents sorted ascending.
    pub fn new(tree: &TalentTree) -> Self {
        let mut seen = HashSet::new();
        let mut talents = Vec::new();
        for node in tree.all_nodes() {
            for talent in &node.talents {
                if seen.insert(talent.id) {
                    talents.push(SlotTalent {
                        talent_id: talent.id,
                        node_id: node.id,
                        max_rank: node.max_rank,
                    });
                }
            }
        }
        talents.sort_by_key(|t| t.talent_id);

        let mut pvp_talents: Vec<TalentId> = tree.pvp_talents.iter().map(|t| t.id).collect();
        pvp_talents.sort_unstable();
        pvp_talents.dedup();

        Self { talents, pvp_talents }
    }

    pub fn talent_count(&self) -> usize {
        self.talents.len()
    }

    pub fn pvp_talent_count(&self) -> usize {
        self.pvp_talents.len()
    }

    pub fn talent_at(&self, slot: usize) -> Result<SlotTalent> {
        self.talents.get(slot).copied().ok_or(Error::UnknownSlot {
            table: "talent",
            index: slot,
            len: self.talents.len(),
        })
    }

    pub fn pvp_talent_at(&self, slot: usize) -> Result<TalentId> {
        self.pvp_talents.get(slot).copied().ok_or(Error::UnknownSlot {
            table: "pvp talent",
            index: slot,
            len: self.pvp_talents.len(),
        })
    }

    pub fn talent_slot(&self, talent_id: TalentId) -> Option<usize> {
        self.talents
            .binary_search_by_key(&talent_id, |t| t.talent_id)
            .ok()
    }

    pub fn pvp_slot(&self, talent_id: TalentId) -> Option<usize> {
        self.pvp_talents.binary_search(&talent_id).ok()
    }

    pub fn max_rank(&self, talent_id: TalentId) -> Option<u8> {
        self.talent_slot(talent_id).map(|slot| self.talents[slot].max_rank)
    }
}

/// Reject ranks the node cannot hold.
pub(crate) fn check_rank(slot: SlotTalent, rank: u8) -> Result<()> {
    if rank > slot.max_rank {
        return Err(Error::RankOutOfRange {
            talent_id: slot.talent_id,
            node_id: slot.node_id,
            rank,
            max_rank: slot.max_rank,
        });
    }
    Ok(())
}

/// Slot indices are written as single bytes.
pub(crate) fn slot_byte(slot: usize) -> Result<u8> {
    u8::try_from(slot).map_err(|_| {
        Error::MalformedEntry(format!("slot {} does not fit in one byte", slot))
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RegionTimestamps {
    pub us: Option<u64>,
    pub eu: Option<u64>,
}

/// Decoded entries of both regions, sorted by rating descending.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Leaderboard {
    pub entries: Vec<RatedLoadout>,
    pub timestamps: RegionTimestamps,
}

impl Leaderboard {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ratings in entry order (descending).
    pub fn ratings(&self) -> Vec<u32> {
        self.entries.iter().map(|e| e.rating).collect()
    }

    pub fn region_count(&self, region: Region) -> usize {
        self.entries.iter().filter(|e| e.region == Some(region)).count()
    }
}

/// Decode every entry of one region's payload.
///
/// Any entry error aborts the decode; there are no partial results.
pub fn decode_payload(payload: &LeaderboardPayload, tables: &SlotTables) -> Result<Vec<RatedLoadout>> {
    match payload.encoding.version {
        0 => payload
            .entries
            .iter()
            .map(|entry| v0::decode_entry(entry, tables))
            .collect(),
        1 => payload
            .entries
            .iter()
            .map(|entry| v1::decode_entry(entry, &payload.encoding.realms, tables))
            .collect(),
        version => Err(Error::UnsupportedVersion(version)),
    }
}

/// Decode the US and EU payloads against the same tree and merge them.
///
/// A missing region decodes as empty. Entries are stamped with their region
/// and stably sorted by rating, highest first.
pub fn decode_leaderboard(payloads: &RegionalPayloads, tree: &TalentTree) -> Result<Leaderboard> {
    let tables = SlotTables::new(tree);
    let mut leaderboard = Leaderboard::default();

    for region in Region::ALL {
        let payload = match region {
            Region::Us => payloads.us.as_ref(),
            Region::Eu => payloads.eu.as_ref(),
        };
        let Some(payload) = payload else {
            tracing::debug!("No {} payload for {} {}", region, tree.class_name, tree.spec_name);
            continue;
        };

        let mut entries = decode_payload(payload, &tables)?;
        for entry in &mut entries {
            entry.region = Some(region);
            let conflicts = tree.choice_conflicts(entry);
            if !conflicts.is_empty() {
                tracing::warn!(
                    "{} entry rated {} selects both talents of choice node(s) {:?}",
                    region,
                    entry.rating,
                    conflicts
                );
            }
        }
        tracing::debug!(
            "Decoded {} {} entries (encoding v{}) for {} {}",
            entries.len(),
            region,
            payload.encoding.version,
            tree.class_name,
            tree.spec_name
        );

        match region {
            Region::Us => leaderboard.timestamps.us = payload.timestamp,
            Region::Eu => leaderboard.timestamps.eu = payload.timestamp,
        }
        leaderboard.entries.extend(entries);
    }

    leaderboard.entries.sort_by(|a, b| b.rating.cmp(&a.rating));
    Ok(leaderboard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{fixture_tree, loadout};

    #[test]
    fn test_slot_tables_are_sorted() {
        let tables = SlotTables::new(&fixture_tree());
        assert_eq!(tables.talent_count(), 6);
        assert_eq!(tables.pvp_talent_count(), 3);

        assert_eq!(tables.talent_at(0).unwrap().talent_id, 100);
        assert_eq!(tables.talent_at(3).unwrap().talent_id, 121);
        assert_eq!(tables.talent_at(3).unwrap().node_id, 3);
        assert_eq!(tables.pvp_talent_at(0).unwrap(), 500);
        assert_eq!(tables.pvp_talent_at(2).unwrap(), 502);

        assert_eq!(tables.talent_slot(130), Some(4));
        assert_eq!(tables.talent_slot(999), None);
        assert_eq!(tables.pvp_slot(501), Some(1));
        assert_eq!(tables.max_rank(130), Some(3));
    }

    #[test]
    fn test_slot_out_of_range() {
        let tables = SlotTables::new(&fixture_tree());
        assert!(matches!(
            tables.talent_at(6),
            Err(Error::UnknownSlot { table: "talent", index: 6, len: 6 })
        ));
        assert!(matches!(
            tables.pvp_talent_at(3),
            Err(Error::UnknownSlot { table: "pvp talent", index: 3, len: 3 })
        ));
    }

    #[test]
    fn test_check_rank() {
        let tables = SlotTables::new(&fixture_tree());
        let slot = tables.talent_at(1).unwrap();
        assert!(check_rank(slot, 2).is_ok());
        assert!(matches!(
            check_rank(slot, 3),
            Err(Error::RankOutOfRange { talent_id: 110, node_id: 2, rank: 3, max_rank: 2 })
        ));
    }

    #[test]
    fn test_decode_leaderboard_keeps_choice_conflicts() {
        let tree = fixture_tree();
        let tables = SlotTables::new(&tree);
        let entries = v0::encode_loadouts(&[loadout(&[(120, 1), (121, 1)], &[], 2000)], &tables).unwrap();
        let payloads = RegionalPayloads {
            us: None,
            eu: Some(LeaderboardPayload { entries, ..LeaderboardPayload::default() }),
        };

        let leaderboard = decode_leaderboard(&payloads, &tree).unwrap();
        assert_eq!(leaderboard.len(), 1);
        assert_eq!(leaderboard.entries[0].region, Some(Region::Eu));
        assert_eq!(tree.choice_conflicts(&leaderboard.entries[0]), vec![3]);
    }
}
