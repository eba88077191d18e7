//! Serde model of the exported talent tree JSON.
//!
//! Layout of the file (`talents/<class>-<spec>.json`):
//! `{ class_name, spec_name, class_id?, spec_id?, class_nodes: [...],
//! spec_nodes: [...], pvp_talents: [...] }`. Missing required fields are a
//! fatal parse error; there is no partial-tree mode.

use serde::{Deserialize, Serialize};

use super::layout::normalize_nodes;
use super::{NodeId, Rank, SpellId, Talent, TalentId, TalentNode, TalentTree};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeSource {
    pub class_name: String,
    pub spec_name: String,
    #[serde(default)]
    pub class_id: Option<u32>,
    #[serde(default)]
    pub spec_id: Option<u32>,
    pub class_nodes: Vec<NodeSource>,
    pub spec_nodes: Vec<NodeSource>,
    pub pvp_talents: Vec<TalentSource>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSource {
    pub id: NodeId,
    pub row: u32,
    pub col: u32,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub unlocks: Vec<NodeId>,
    #[serde(default)]
    pub locked_by: Vec<NodeId>,
    pub max_rank: u8,
    pub talents: Vec<TalentSource>,
    #[serde(default)]
    pub node_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TalentSource {
    pub id: TalentId,
    pub name: String,
    pub spell: SpellSource,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpellSource {
    pub id: SpellId,
    pub name: String,
    #[serde(default)]
    pub ranks: Vec<RankSource>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankSource {
    pub description: String,
    #[serde(default)]
    pub cast_time: Option<String>,
    #[serde(default)]
    pub power_cost: Option<String>,
    #[serde(default)]
    pub range: Option<String>,
    #[serde(default)]
    pub cooldown: Option<String>,
}

impl From<RankSource> for Rank {
    fn from(r: RankSource) -> Self {
        Rank {
            description: r.description,
            cast_time: non_empty(r.cast_time),
            power_cost: non_empty(r.power_cost),
            range: non_empty(r.range),
            cooldown: non_empty(r.cooldown),
        }
    }
}

impl From<TalentSource> for Talent {
    fn from(t: TalentSource) -> Self {
        Talent {
            id: t.id,
            name: t.name,
            spell_id: t.spell.id,
            spell_name: t.spell.name,
            icon: t.icon,
            ranks: t.spell.ranks.into_iter().map(Rank::from).collect(),
        }
    }
}

/// The Go exporter writes absent tooltip fields as empty strings.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn convert_node(node: NodeSource) -> Result<TalentNode> {
    if node.talents.is_empty() || node.talents.len() > 2 {
        return Err(Error::InvalidTree(format!(
            "node {} has {} talents (expected 1 or 2)",
            node.id,
            node.talents.len()
        )));
    }
    if node.max_rank == 0 {
        return Err(Error::InvalidTree(format!("node {} has max_rank 0", node.id)));
    }

    Ok(TalentNode {
        id: node.id,
        row: node.row,
        column: node.col,
        x: node.x,
        y: node.y,
        unlocks: node.unlocks,
        locked_by: node.locked_by,
        max_rank: node.max_rank,
        talents: node.talents.into_iter().map(Talent::from).collect(),
        node_type: node.node_type,
    })
}

fn convert_nodes(nodes: Vec<NodeSource>) -> Result<Vec<TalentNode>> {
    nodes.into_iter().map(convert_node).collect()
}

impl TalentTree {
    /// Parse and normalize a tree from its exported JSON.
    pub fn from_json(contents: &str) -> Result<Self> {
        let source: TreeSource = serde_json::from_str(contents)?;
        Self::from_source(source)
    }

    /// Build a tree from an already parsed source. Class and spec node
    /// positions are normalized independently.
    pub fn from_source(source: TreeSource) -> Result<Self> {
        let mut class_nodes = convert_nodes(source.class_nodes)?;
        let mut spec_nodes = convert_nodes(source.spec_nodes)?;
        let class_size = normalize_nodes(&mut class_nodes);
        let spec_size = normalize_nodes(&mut spec_nodes);

        let tree = TalentTree {
            class_name: source.class_name,
            spec_name: source.spec_name,
            class_id: source.class_id,
            spec_id: source.spec_id,
            class_nodes,
            spec_nodes,
            pvp_talents: source.pvp_talents.into_iter().map(Talent::from).collect(),
            class_size,
            spec_size,
        };

        for (node_id, missing) in tree.dangling_locks() {
            tracing::warn!(
                "{} {}: node {} locked by unknown node {} (treated as unlocked)",
                tree.class_name,
                tree.spec_name,
                node_id,
                missing
            );
        }

        Ok(tree)
    }
}
