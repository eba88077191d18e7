//! Click-to-filter cycle for a talent.
//!
//! Each click advances a talent's mode:
//! `None -> RankOneAndUp -> [RankTwoAndUp -> [RankThreeAndUp ->]] RankZero -> None`,
//! where the bracketed steps only exist when the node has that many ranks.

use serde::Serialize;

use super::{LoadoutFilter, has_pvp_talent, min_rank_filter, missing_pvp_talent, rank_zero_filter};
use crate::tree::TalentId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum TalentFilterMode {
    #[default]
    None,
    RankOneAndUp,
    RankTwoAndUp,
    RankThreeAndUp,
    RankZero,
}

impl TalentFilterMode {
    pub fn next(self, max_rank: u8) -> Self {
        next_mode(self, max_rank)
    }

    /// The "and up" mode requiring at least `rank`; ranks 1 to 3 only.
    pub fn and_up(rank: u8) -> Option<Self> {
        match rank {
            1 => Some(TalentFilterMode::RankOneAndUp),
            2 => Some(TalentFilterMode::RankTwoAndUp),
            3 => Some(TalentFilterMode::RankThreeAndUp),
            _ => None,
        }
    }

    /// Minimum rank required by the "and up" modes.
    pub fn min_rank(self) -> Option<u8> {
        match self {
            TalentFilterMode::RankOneAndUp => Some(1),
            TalentFilterMode::RankTwoAndUp => Some(2),
            TalentFilterMode::RankThreeAndUp => Some(3),
            TalentFilterMode::None | TalentFilterMode::RankZero => None,
        }
    }
}

pub fn next_mode(mode: TalentFilterMode, max_rank: u8) -> TalentFilterMode {
    use TalentFilterMode::*;
    match mode {
        None => RankOneAndUp,
        RankOneAndUp if max_rank > 1 => RankTwoAndUp,
        RankOneAndUp => RankZero,
        RankTwoAndUp if max_rank > 2 => RankThreeAndUp,
        RankTwoAndUp => RankZero,
        RankThreeAndUp => RankZero,
        RankZero => None,
    }
}

/// Filter for a tree talent in the given mode; `None` mode has no filter.
pub fn talent_filter(talent_id: TalentId, mode: TalentFilterMode) -> Option<LoadoutFilter> {
    match mode {
        TalentFilterMode::None => None,
        TalentFilterMode::RankZero => Some(rank_zero_filter(talent_id)),
        and_up => and_up.min_rank().map(|rank| min_rank_filter(talent_id, rank)),
    }
}

/// PvP talents have no ranks: every "and up" mode means selected.
pub fn pvp_talent_filter(talent_id: TalentId, mode: TalentFilterMode) -> Option<LoadoutFilter> {
    match mode {
        TalentFilterMode::None => None,
        TalentFilterMode::RankZero => Some(missing_pvp_talent(talent_id)),
        TalentFilterMode::RankOneAndUp
        | TalentFilterMode::RankTwoAndUp
        | TalentFilterMode::RankThreeAndUp => Some(has_pvp_talent(talent_id)),
    }
}
