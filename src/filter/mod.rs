//! Loadout filters.
//!
//! A [`LoadoutFilter`] is a pure predicate over a [`RatedLoadout`]. Lists of
//! filters are combined with logical AND by [`filter_rated_loadouts`].

pub mod mode;
pub mod selection;

use serde::Serialize;
use std::borrow::Borrow;

use crate::loadout::RatedLoadout;
use crate::tree::TalentId;

pub use mode::{TalentFilterMode, next_mode, pvp_talent_filter, talent_filter};
pub use selection::{ExplorerFilters, FilterSelection, FilteredLoadouts, SelectionEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LoadoutFilter {
    /// Rank of the talent (0 when absent) is at least `rank`.
    MinRank { talent_id: TalentId, rank: u8 },
    /// Talent is not selected at all.
    RankZero { talent_id: TalentId },
    HasPvpTalent { talent_id: TalentId },
    MissingPvpTalent { talent_id: TalentId },
    /// Rating within `min..=max`.
    RatingRange { min: u32, max: u32 },
}

impl LoadoutFilter {
    pub fn matches(&self, loadout: &RatedLoadout) -> bool {
        match *self {
            LoadoutFilter::MinRank { talent_id, rank } => loadout.talents.rank(talent_id) >= rank,
            LoadoutFilter::RankZero { talent_id } => !loadout.talents.is_selected(talent_id),
            LoadoutFilter::HasPvpTalent { talent_id } => loadout.has_pvp_talent(talent_id),
            LoadoutFilter::MissingPvpTalent { talent_id } => !loadout.has_pvp_talent(talent_id),
            LoadoutFilter::RatingRange { min, max } => (min..=max).contains(&loadout.rating),
        }
    }
}

pub fn min_rank_filter(talent_id: TalentId, rank: u8) -> LoadoutFilter {
    LoadoutFilter::MinRank { talent_id, rank }
}

pub fn rank_zero_filter(talent_id: TalentId) -> LoadoutFilter {
    LoadoutFilter::RankZero { talent_id }
}

pub fn has_pvp_talent(talent_id: TalentId) -> LoadoutFilter {
    LoadoutFilter::HasPvpTalent { talent_id }
}

pub fn missing_pvp_talent(talent_id: TalentId) -> LoadoutFilter {
    LoadoutFilter::MissingPvpTalent { talent_id }
}

pub fn rating_range_filter(min: u32, max: u32) -> LoadoutFilter {
    LoadoutFilter::RatingRange { min, max }
}

/// True when every filter accepts the loadout. Stops at the first rejection.
pub fn matches_all(loadout: &RatedLoadout, filters: &[LoadoutFilter]) -> bool {
    filters.iter().all(|f| f.matches(loadout))
}

/// Loadouts accepted by every filter, in input order.
pub fn filter_rated_loadouts<'a, L: Borrow<RatedLoadout>>(
    loadouts: &'a [L],
    filters: &[LoadoutFilter],
) -> Vec<&'a RatedLoadout> {
    loadouts
        .iter()
        .map(Borrow::<RatedLoadout>::borrow)
        .filter(|loadout| matches_all(loadout, filters))
        .collect()
}
