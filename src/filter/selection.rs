//! Filter state behind the talent explorer.
//!
//! A [`FilterSelection`] holds one entry per clicked node (keyed by node id)
//! or per clicked PvP talent (keyed by talent id). Clicking advances the
//! entry's mode; an entry whose mode returns to `None` is removed, so the
//! active filter list never contains no-op filters.

use serde::Serialize;
use std::borrow::Borrow;
use std::collections::BTreeMap;

use super::mode::{TalentFilterMode, next_mode, pvp_talent_filter, talent_filter};
use super::{LoadoutFilter, filter_rated_loadouts, matches_all, rating_range_filter};
use crate::loadout::RatedLoadout;
use crate::tree::{TalentId, TalentNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectionEntry {
    pub mode: TalentFilterMode,
    /// For choice nodes, the talent the filter applies to.
    pub selected_talent: TalentId,
    pub filter: LoadoutFilter,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterSelection {
    entries: BTreeMap<u32, SelectionEntry>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the node's mode and point its filter at `talent_id`.
    ///
    /// The mode is tracked per node, so clicking the other talent of a choice
    /// node continues the cycle with the new talent. Talent ids not on the
    /// node are ignored.
    pub fn cycle_talent(&mut self, node: &TalentNode, talent_id: TalentId) -> TalentFilterMode {
        if !node.has_talent(talent_id) {
            tracing::debug!("Talent {} is not on node {}", talent_id, node.id);
            return self.mode(node.id);
        }
        let mode = next_mode(self.mode(node.id), node.max_rank);
        self.store(node.id, mode, talent_id, talent_filter(talent_id, mode));
        mode
    }

    /// PvP talents cycle as single-rank talents.
    pub fn cycle_pvp_talent(&mut self, talent_id: TalentId) -> TalentFilterMode {
        let mode = next_mode(self.mode(talent_id), 1);
        self.store(talent_id, mode, talent_id, pvp_talent_filter(talent_id, mode));
        mode
    }

    /// Put the node straight into `mode` without cycling. Talent ids not on
    /// the node are ignored.
    pub fn set_talent_mode(&mut self, node: &TalentNode, talent_id: TalentId, mode: TalentFilterMode) {
        if !node.has_talent(talent_id) {
            tracing::debug!("Talent {} is not on node {}", talent_id, node.id);
            return;
        }
        self.store(node.id, mode, talent_id, talent_filter(talent_id, mode));
    }

    pub fn set_pvp_talent_mode(&mut self, talent_id: TalentId, mode: TalentFilterMode) {
        self.store(talent_id, mode, talent_id, pvp_talent_filter(talent_id, mode));
    }

    fn store(&mut self, key: u32, mode: TalentFilterMode, talent_id: TalentId, filter: Option<LoadoutFilter>) {
        match filter {
            Some(filter) => {
                self.entries.insert(
                    key,
                    SelectionEntry {
                        mode,
                        selected_talent: talent_id,
                        filter,
                    },
                );
            }
            None => {
                self.entries.remove(&key);
            }
        }
    }

    /// Jump straight back to `None`.
    pub fn deselect(&mut self, key: u32) {
        self.entries.remove(&key);
    }

    pub fn mode(&self, key: u32) -> TalentFilterMode {
        self.entries.get(&key).map(|e| e.mode).unwrap_or_default()
    }

    pub fn selected_talent(&self, key: u32) -> Option<TalentId> {
        self.entries.get(&key).map(|e| e.selected_talent)
    }

    pub fn entry(&self, key: u32) -> Option<&SelectionEntry> {
        self.entries.get(&key)
    }

    /// Active filters, ordered by key.
    pub fn filters(&self) -> Vec<LoadoutFilter> {
        self.entries.values().map(|e| e.filter).collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Result of [`ExplorerFilters::apply`].
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredLoadouts<'a> {
    /// Loadouts inside the rating range, before talent filters.
    pub in_rating_range: usize,
    pub loadouts: Vec<&'a RatedLoadout>,
}

/// All filters of the explorer page: the class tree, spec tree and PvP
/// talent selections plus the rating slider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExplorerFilters {
    pub class: FilterSelection,
    pub spec: FilterSelection,
    pub pvp: FilterSelection,
    /// Inclusive `(min, max)`.
    pub rating: Option<(u32, u32)>,
}

impl ExplorerFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_rating_range(&mut self, min: u32, max: u32) {
        self.rating = Some((min.min(max), min.max(max)));
    }

    /// Talent filters of all three selections, class first.
    pub fn talent_filters(&self) -> Vec<LoadoutFilter> {
        let mut filters = self.class.filters();
        filters.extend(self.spec.filters());
        filters.extend(self.pvp.filters());
        filters
    }

    pub fn is_empty(&self) -> bool {
        self.rating.is_none() && self.class.is_empty() && self.spec.is_empty() && self.pvp.is_empty()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Narrow by rating, then by the talent filters.
    pub fn apply<'a, L: Borrow<RatedLoadout>>(&self, loadouts: &'a [L]) -> FilteredLoadouts<'a> {
        let in_range = match self.rating {
            Some((min, max)) => filter_rated_loadouts(loadouts, &[rating_range_filter(min, max)]),
            None => loadouts.iter().map(Borrow::<RatedLoadout>::borrow).collect(),
        };
        let talent_filters = self.talent_filters();
        let loadouts = in_range
            .iter()
            .copied()
            .filter(|loadout| matches_all(loadout, &talent_filters))
            .collect();
        FilteredLoadouts {
            in_rating_range: in_range.len(),
            loadouts,
        }
    }
}
