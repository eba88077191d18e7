//! Version 0 entries: `<talents b64>|<pvp talents b64>|<rating>`.
//!
//! The talent bytes are `(slot, rank)` pairs; the PvP bytes are one slot per
//! selected PvP talent. There is no player metadata.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::{SlotTables, check_rank, slot_byte};
use crate::error::{Error, Result};
use crate::loadout::{RatedLoadout, TalentRanks};

pub fn decode_entry(entry: &str, tables: &SlotTables) -> Result<RatedLoadout> {
    let parts: Vec<&str> = entry.split('|').collect();
    let [talents_b64, pvp_b64, rating] = parts.as_slice() else {
        return Err(Error::MalformedEntry(format!(
            "expected 3 '|' separated fields, got {}",
            parts.len()
        )));
    };

    let talent_bytes = STANDARD.decode(talents_b64)?;
    if talent_bytes.len() % 2 != 0 {
        return Err(Error::MalformedEntry(format!(
            "talent payload has odd length {}",
            talent_bytes.len()
        )));
    }

    let mut talents = TalentRanks::new();
    for pair in talent_bytes.chunks_exact(2) {
        let slot = tables.talent_at(pair[0] as usize)?;
        let rank = pair[1];
        check_rank(slot, rank)?;
        talents.set(slot.talent_id, rank);
    }

    let pvp_talents = STANDARD
        .decode(pvp_b64)?
        .into_iter()
        .map(|slot| tables.pvp_talent_at(slot as usize))
        .collect::<Result<Vec<_>>>()?;

    let rating = rating
        .trim()
        .parse()
        .map_err(|_| Error::InvalidRating(rating.to_string()))?;

    Ok(RatedLoadout::new(talents, pvp_talents, rating))
}

pub fn encode_entry(loadout: &RatedLoadout, tables: &SlotTables) -> Result<String> {
    let mut talent_bytes = Vec::with_capacity(loadout.talents.len() * 2);
    for (talent_id, rank) in loadout.talents.iter() {
        let slot = tables
            .talent_slot(talent_id)
            .ok_or(Error::UnknownTalent(talent_id))?;
        talent_bytes.push(slot_byte(slot)?);
        talent_bytes.push(rank);
    }

    let mut pvp_bytes = Vec::with_capacity(loadout.pvp_talents.len());
    for &talent_id in &loadout.pvp_talents {
        let slot = tables
            .pvp_slot(talent_id)
            .ok_or(Error::UnknownPvpTalent(talent_id))?;
        pvp_bytes.push(slot_byte(slot)?);
    }

    Ok(format!(
        "{}|{}|{}",
        STANDARD.encode(talent_bytes),
        STANDARD.encode(pvp_bytes),
        loadout.rating
    ))
}

pub fn encode_loadouts(loadouts: &[RatedLoadout], tables: &SlotTables) -> Result<Vec<String>> {
    loadouts.iter().map(|l| encode_entry(l, tables)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{fixture_tree, loadout};

    fn tables() -> SlotTables {
        SlotTables::new(&fixture_tree())
    }

    #[test]
    fn test_decode_entry() {
        let decoded = decode_entry("AAEBAgQD|AAI=|2150", &tables()).unwrap();

        assert_eq!(decoded.talents.rank(100), 1);
        assert_eq!(decoded.talents.rank(110), 2);
        assert_eq!(decoded.talents.rank(130), 3);
        assert_eq!(decoded.talents.len(), 3);
        assert_eq!(decoded.pvp_talents, vec![500, 502]);
        assert_eq!(decoded.rating, 2150);
        assert_eq!(decoded.player, None);
    }

    #[test]
    fn test_encode_entry() {
        let l = loadout(&[(100, 1), (110, 2), (130, 3)], &[500, 502], 2150);
        assert_eq!(encode_entry(&l, &tables()).unwrap(), "AAEBAgQD|AAI=|2150");
    }

    #[test]
    fn test_zero_rank_pair_is_dropped() {
        // (slot 0, rank 1), (slot 1, rank 2), (slot 2, rank 0)
        let decoded = decode_entry("AAEBAgIA||1500", &tables()).unwrap();
        assert!(!decoded.talents.is_selected(120));
        assert_eq!(decoded.talents.len(), 2);
    }

    #[test]
    fn test_empty_fields() {
        let decoded = decode_entry("||1400", &tables()).unwrap();
        assert!(decoded.talents.is_empty());
        assert!(decoded.pvp_talents.is_empty());
    }

    #[test]
    fn test_out_of_range_slot_is_error() {
        // (slot 9, rank 1)
        let result = decode_entry("CQE=||1800", &tables());
        assert!(matches!(result, Err(Error::UnknownSlot { index: 9, len: 6, .. })));

        // PvP slot 7 of 3
        let result = decode_entry("|Bw==|1800", &tables());
        assert!(matches!(result, Err(Error::UnknownSlot { index: 7, len: 3, .. })));
    }

    #[test]
    fn test_rank_above_max_is_error() {
        // (slot 1, rank 3) but node 2 has max rank 2
        let result = decode_entry("AQM=||1800", &tables());
        assert!(matches!(
            result,
            Err(Error::RankOutOfRange { talent_id: 110, rank: 3, max_rank: 2, .. })
        ));
    }

    #[test]
    fn test_malformed_entries() {
        let t = tables();
        assert!(matches!(decode_entry("AAEB|1800", &t), Err(Error::MalformedEntry(_))));
        assert!(matches!(decode_entry("AAEC||1800", &t), Err(Error::MalformedEntry(_))));
        assert!(matches!(decode_entry("AAE=||high", &t), Err(Error::InvalidRating(_))));
        assert!(matches!(decode_entry("!!!!||1800", &t), Err(Error::Base64(_))));
    }

    #[test]
    fn test_encode_unknown_talent() {
        let l = loadout(&[(4242, 1)], &[], 1800);
        assert!(matches!(encode_entry(&l, &tables()), Err(Error::UnknownTalent(4242))));

        let l = loadout(&[], &[4242], 1800);
        assert!(matches!(encode_entry(&l, &tables()), Err(Error::UnknownPvpTalent(4242))));
    }
}
