//! Version 1 entries: `<payload b64>|<player name>|<share code>`.
//!
//! Payload layout, read front to back:
//!
//! | field | width |
//! |---|---|
//! | talent count `N` | 1 |
//! | per talent: slot, then rank only if the node has more than one rank | 1 or 2 |
//! | PvP talent count `M` | 1 |
//! | PvP slots | `M` |
//! | rating (LE) | 2 |
//! | realm index (LE) into `encoding.realms` | 2 |
//! | faction flag (1 = Horde) | 1 |
//!
//! Single-rank talents are implicitly rank 1, so the record width depends on
//! the tree and has to be walked with a cursor.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::cursor::ByteCursor;
use super::{SlotTables, check_rank, slot_byte};
use crate::error::{Error, Result};
use crate::loadout::{Faction, PlayerInfo, RatedLoadout, Realm, TalentRanks};

pub fn decode_entry(entry: &str, realms: &[Realm], tables: &SlotTables) -> Result<RatedLoadout> {
    // Share codes never contain '|', names are taken as everything in between.
    let (data, rest) = entry
        .split_once('|')
        .ok_or_else(|| Error::MalformedEntry("missing player name field".into()))?;
    let (name, share_code) = rest
        .rsplit_once('|')
        .ok_or_else(|| Error::MalformedEntry("missing share code field".into()))?;

    let bytes = STANDARD.decode(data)?;
    let mut cursor = ByteCursor::new(&bytes);

    let talent_count = cursor.read_u8()?;
    let mut talents = TalentRanks::new();
    for _ in 0..talent_count {
        let slot = tables.talent_at(cursor.read_u8()? as usize)?;
        let rank = if slot.max_rank > 1 { cursor.read_u8()? } else { 1 };
        check_rank(slot, rank)?;
        talents.set(slot.talent_id, rank);
    }

    let pvp_count = cursor.read_u8()?;
    let mut pvp_talents = Vec::with_capacity(pvp_count as usize);
    for _ in 0..pvp_count {
        pvp_talents.push(tables.pvp_talent_at(cursor.read_u8()? as usize)?);
    }

    let rating = cursor.read_u16_le()? as u32;
    let realm_index = cursor.read_u16_le()? as usize;
    let faction = Faction::from_flag(cursor.read_u8()?);
    cursor.finish()?;

    let realm = realms.get(realm_index).cloned().ok_or(Error::UnknownRealm {
        index: realm_index,
        len: realms.len(),
    })?;

    Ok(RatedLoadout {
        talents,
        pvp_talents,
        rating,
        player: Some(PlayerInfo {
            name: name.to_string(),
            realm,
            faction,
            share_code: share_code.to_string(),
        }),
        region: None,
    })
}

/// Encode a loadout with player metadata. The player's realm must be listed
/// in `realms` (matched by slug).
pub fn encode_entry(loadout: &RatedLoadout, realms: &[Realm], tables: &SlotTables) -> Result<String> {
    let player = loadout
        .player
        .as_ref()
        .ok_or_else(|| Error::MalformedEntry("v1 entries need player metadata".into()))?;

    let mut data = Vec::with_capacity(8 + loadout.talents.len() * 2 + loadout.pvp_talents.len());

    data.push(count_byte(loadout.talents.len(), "talents")?);
    for (talent_id, rank) in loadout.talents.iter() {
        let slot = tables
            .talent_slot(talent_id)
            .ok_or(Error::UnknownTalent(talent_id))?;
        let slot_talent = tables.talent_at(slot)?;
        check_rank(slot_talent, rank)?;
        data.push(slot_byte(slot)?);
        if slot_talent.max_rank > 1 {
            data.push(rank);
        }
    }

    data.push(count_byte(loadout.pvp_talents.len(), "pvp talents")?);
    for &talent_id in &loadout.pvp_talents {
        let slot = tables
            .pvp_slot(talent_id)
            .ok_or(Error::UnknownPvpTalent(talent_id))?;
        data.push(slot_byte(slot)?);
    }

    let rating = u16::try_from(loadout.rating)
        .map_err(|_| Error::InvalidRating(loadout.rating.to_string()))?;
    data.extend_from_slice(&rating.to_le_bytes());

    let realm_index = realms
        .iter()
        .position(|r| r.slug == player.realm.slug)
        .ok_or_else(|| Error::MalformedEntry(format!("realm {} not in realm table", player.realm.slug)))?;
    let realm_index = u16::try_from(realm_index)
        .map_err(|_| Error::MalformedEntry(format!("realm index {} does not fit in two bytes", realm_index)))?;
    data.extend_from_slice(&realm_index.to_le_bytes());
    data.push(player.faction.flag());

    Ok(format!("{}|{}|{}", STANDARD.encode(data), player.name, player.share_code))
}

fn count_byte(count: usize, what: &str) -> Result<u8> {
    u8::try_from(count).map_err(|_| Error::MalformedEntry(format!("{} {} do not fit in one byte", count, what)))
}
