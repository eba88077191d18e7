//! Filter flag parsing.

use pvp_loadouts::filter::{ExplorerFilters, TalentFilterMode};
use pvp_loadouts::tree::{TalentId, TalentTree};

/// `ID:RANK`, e.g. `112855:2`.
pub fn parse_min_rank(s: &str) -> Result<(TalentId, u8), String> {
    let (id, rank) = s
        .split_once(':')
        .ok_or_else(|| format!("expected ID:RANK, got {:?}", s))?;
    let id = id.trim().parse().map_err(|_| format!("invalid talent id {:?}", id))?;
    let rank = rank.trim().parse().map_err(|_| format!("invalid rank {:?}", rank))?;
    Ok((id, rank))
}

/// `MIN:MAX`, either side may be empty for an open bound.
pub fn parse_rating_range(s: &str) -> Result<(u32, u32), String> {
    let (min, max) = s
        .split_once(':')
        .ok_or_else(|| format!("expected MIN:MAX, got {:?}", s))?;
    let bound = |v: &str, open: u32| -> Result<u32, String> {
        let v = v.trim();
        if v.is_empty() {
            return Ok(open);
        }
        v.parse().map_err(|_| format!("invalid rating {:?}", v))
    };
    let (min, max) = (bound(min, 0)?, bound(max, u32::MAX)?);
    if min > max {
        return Err(format!("rating range {}:{} is empty", min, max));
    }
    Ok((min, max))
}

/// Filter flags of the `usage` command.
#[derive(clap::Args, Debug, Default)]
pub struct FilterArgs {
    /// Require a talent at rank or higher (ID:RANK, repeatable)
    #[arg(long, value_name = "ID:RANK", value_parser = parse_min_rank)]
    pub min_rank: Vec<(TalentId, u8)>,

    /// Require a talent to be unselected (repeatable)
    #[arg(long, value_name = "ID")]
    pub without: Vec<TalentId>,

    /// Require a PvP talent (repeatable)
    #[arg(long, value_name = "ID")]
    pub pvp: Vec<TalentId>,

    /// Require a PvP talent to be absent (repeatable)
    #[arg(long, value_name = "ID")]
    pub no_pvp: Vec<TalentId>,

    /// Inclusive rating range, either bound may be empty (e.g. 2100:)
    #[arg(long, value_name = "MIN:MAX", value_parser = parse_rating_range)]
    pub rating: Option<(u32, u32)>,
}

impl FilterArgs {
    /// The explorer state these flags describe. Later flags for the same node
    /// or PvP talent win.
    pub fn explorer_filters(&self, tree: &TalentTree) -> Result<ExplorerFilters, String> {
        let mut filters = ExplorerFilters::new();
        for &(talent_id, rank) in &self.min_rank {
            let mode = TalentFilterMode::and_up(rank)
                .ok_or_else(|| format!("rank {} of talent {} must be 1, 2 or 3", rank, talent_id))?;
            set_tree_mode(&mut filters, tree, talent_id, mode)?;
        }
        for &talent_id in &self.without {
            set_tree_mode(&mut filters, tree, talent_id, TalentFilterMode::RankZero)?;
        }
        for &talent_id in &self.pvp {
            set_pvp_mode(&mut filters, tree, talent_id, TalentFilterMode::RankOneAndUp)?;
        }
        for &talent_id in &self.no_pvp {
            set_pvp_mode(&mut filters, tree, talent_id, TalentFilterMode::RankZero)?;
        }
        if let Some((min, max)) = self.rating {
            filters.set_rating_range(min, max);
        }
        Ok(filters)
    }
}

fn set_tree_mode(
    filters: &mut ExplorerFilters,
    tree: &TalentTree,
    talent_id: TalentId,
    mode: TalentFilterMode,
) -> Result<(), String> {
    let node = tree
        .node_for_talent(talent_id)
        .ok_or_else(|| format!("talent {} is not in the {} {} tree", talent_id, tree.class_name, tree.spec_name))?;
    let selection = if tree.class_nodes.iter().any(|n| n.id == node.id) {
        &mut filters.class
    } else {
        &mut filters.spec
    };
    selection.set_talent_mode(node, talent_id, mode);
    Ok(())
}

fn set_pvp_mode(
    filters: &mut ExplorerFilters,
    tree: &TalentTree,
    talent_id: TalentId,
    mode: TalentFilterMode,
) -> Result<(), String> {
    if tree.pvp_talent(talent_id).is_none() {
        return Err(format!("{} is not a {} {} PvP talent", talent_id, tree.class_name, tree.spec_name));
    }
    filters.pvp.set_pvp_talent_mode(talent_id, mode);
    Ok(())
}
