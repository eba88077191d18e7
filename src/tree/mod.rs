//! Talent tree model.
//!
//! A [`TalentTree`] describes one class/spec pair: the class and spec node
//! graphs plus the flat pool of PvP talents. Trees are built once from the
//! exported JSON (see [`source`]) and never mutated afterwards.

pub mod layout;
pub mod source;

use serde::Serialize;
use std::collections::HashSet;

use crate::loadout::RatedLoadout;

pub use layout::TreeSize;

pub type TalentId = u32;
pub type NodeId = u32;
pub type SpellId = u32;

/// Per-rank tooltip text and combat metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rank {
    pub description: String,
    pub cast_time: Option<String>,
    pub power_cost: Option<String>,
    pub range: Option<String>,
    pub cooldown: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Talent {
    pub id: TalentId,
    pub name: String,
    pub spell_id: SpellId,
    pub spell_name: String,
    /// Icon asset name.
    pub icon: String,
    pub ranks: Vec<Rank>,
}

/// A slot in the class or spec tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TalentNode {
    pub id: NodeId,
    pub row: u32,
    pub column: u32,
    /// Layout coordinates after [`layout::normalize_nodes`].
    pub x: f64,
    pub y: f64,
    /// Prerequisite edges. Ids may point outside the node set.
    pub unlocks: Vec<NodeId>,
    pub locked_by: Vec<NodeId>,
    pub max_rank: u8,
    /// One talent for normal nodes, two for choice nodes.
    pub talents: Vec<Talent>,
    pub node_type: String,
}

impl TalentNode {
    /// Choice nodes offer two mutually exclusive talents.
    pub fn is_choice(&self) -> bool {
        self.talents.len() == 2
    }

    pub fn has_talent(&self, talent_id: TalentId) -> bool {
        self.talents.iter().any(|t| t.id == talent_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TalentTree {
    pub class_name: String,
    pub spec_name: String,
    pub class_id: Option<u32>,
    pub spec_id: Option<u32>,
    pub class_nodes: Vec<TalentNode>,
    pub spec_nodes: Vec<TalentNode>,
    /// PvP talents have no node and no rank.
    pub pvp_talents: Vec<Talent>,
    pub class_size: TreeSize,
    pub spec_size: TreeSize,
}

impl TalentTree {
    /// Class nodes followed by spec nodes.
    pub fn all_nodes(&self) -> impl Iterator<Item = &TalentNode> {
        self.class_nodes.iter().chain(self.spec_nodes.iter())
    }

    /// Find the node holding a talent. Class nodes win over spec nodes when
    /// an id appears in both.
    pub fn node_for_talent(&self, talent_id: TalentId) -> Option<&TalentNode> {
        self.all_nodes().find(|node| node.has_talent(talent_id))
    }

    pub fn node(&self, node_id: NodeId) -> Option<&TalentNode> {
        self.all_nodes().find(|node| node.id == node_id)
    }

    pub fn talent(&self, talent_id: TalentId) -> Option<&Talent> {
        self.all_nodes()
            .flat_map(|node| node.talents.iter())
            .find(|talent| talent.id == talent_id)
    }

    pub fn pvp_talent(&self, talent_id: TalentId) -> Option<&Talent> {
        self.pvp_talents.iter().find(|talent| talent.id == talent_id)
    }

    /// `(node, missing id)` pairs for `locked_by` references that point outside
    /// the tree. These are treated as unlocked.
    pub fn dangling_locks(&self) -> Vec<(NodeId, NodeId)> {
        let known: HashSet<NodeId> = self.all_nodes().map(|node| node.id).collect();
        self.all_nodes()
            .flat_map(|node| {
                node.locked_by
                    .iter()
                    .filter(|id| !known.contains(id))
                    .map(move |&id| (node.id, id))
            })
            .collect()
    }

    /// Choice nodes for which the loadout selects both talents.
    pub fn choice_conflicts(&self, loadout: &RatedLoadout) -> Vec<NodeId> {
        self.all_nodes()
            .filter(|node| node.is_choice())
            .filter(|node| {
                node.talents
                    .iter()
                    .filter(|t| loadout.talents.is_selected(t.id))
                    .count()
                    > 1
            })
            .map(|node| node.id)
            .collect()
    }
}
