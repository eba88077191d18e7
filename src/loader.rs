//! Reads the exported tree and leaderboard files.
//!
//! This is the only part of the crate that touches the filesystem; everything
//! it returns is decoded once and immutable afterwards.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::codec::{Leaderboard, LeaderboardPayload, RegionalPayloads, decode_leaderboard};
use crate::config::StatsConfig;
use crate::error::Result;
use crate::loadout::Region;
use crate::tree::TalentTree;

pub fn load_tree(path: &Path) -> Result<TalentTree> {
    let contents = std::fs::read_to_string(path)?;
    let tree = TalentTree::from_json(&contents)?;
    tracing::debug!(
        "Loaded {} {} tree from {}: {} class nodes, {} spec nodes, {} PvP talents",
        tree.class_name,
        tree.spec_name,
        path.display(),
        tree.class_nodes.len(),
        tree.spec_nodes.len(),
        tree.pvp_talents.len()
    );
    Ok(tree)
}

/// Read one region's payload. A missing file is `None`; a file that exists
/// but does not parse is an error.
pub fn load_payload(path: &Path) -> Result<Option<LeaderboardPayload>> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No leaderboard at {}", path.display());
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };
    Ok(Some(serde_json::from_str(&contents)?))
}

pub fn load_regional_payloads(
    config: &StatsConfig,
    bracket: &str,
    class_name: &str,
    spec_name: &str,
) -> Result<RegionalPayloads> {
    Ok(RegionalPayloads {
        us: load_payload(&config.leaderboard_path(Region::Us, bracket, class_name, spec_name))?,
        eu: load_payload(&config.leaderboard_path(Region::Eu, bracket, class_name, spec_name))?,
    })
}

/// Load and decode both regions of a bracket against `tree`.
pub fn load_leaderboard(config: &StatsConfig, bracket: &str, tree: &TalentTree) -> Result<Leaderboard> {
    let payloads = load_regional_payloads(config, bracket, &tree.class_name, &tree.spec_name)?;
    let leaderboard = decode_leaderboard(&payloads, tree)?;
    tracing::debug!(
        "{} {} {}: {} entries ({} us, {} eu)",
        bracket,
        tree.class_name,
        tree.spec_name,
        leaderboard.len(),
        leaderboard.region_count(Region::Us),
        leaderboard.region_count(Region::Eu)
    );
    Ok(leaderboard)
}

/// Tree files under `<data_dir>/talents`, sorted by path.
pub fn discover_trees(config: &StatsConfig) -> Vec<PathBuf> {
    let pattern = config.talents_dir().join("*.json");
    let mut paths = Vec::new();
    if let Ok(entries) = glob::glob(&pattern.to_string_lossy()) {
        paths.extend(entries.flatten());
    }
    paths.sort();
    paths
}

/// A leaderboard file found under `<data_dir>/pvp`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardFile {
    pub region: Region,
    pub bracket: String,
    /// `class-spec` file stem.
    pub slug: String,
    pub path: PathBuf,
}

/// Every `<region>/<bracket>/<slug>.json` below `<data_dir>/pvp`. Files in
/// unknown region directories are skipped.
pub fn discover_leaderboards(config: &StatsConfig) -> Vec<LeaderboardFile> {
    let base = config.data_dir.join("pvp");
    let mut files: Vec<LeaderboardFile> = WalkDir::new(&base)
        .min_depth(3)
        .max_depth(3)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| {
            let rel = e.path().strip_prefix(&base).ok()?;
            let mut parts = rel.iter().map(|p| p.to_string_lossy());
            let region = match &*parts.next()? {
                "us" => Region::Us,
                "eu" => Region::Eu,
                other => {
                    tracing::debug!("Skipping unknown region directory {}", other);
                    return None;
                }
            };
            let bracket = parts.next()?.into_owned();
            let file_name = parts.next()?;
            let slug = file_name.strip_suffix(".json")?.to_string();
            Some(LeaderboardFile {
                region,
                bracket,
                slug,
                path: e.path().to_path_buf(),
            })
        })
        .collect();
    files.sort_by(|a, b| a.path.cmp(&b.path));
    files
}
