//! Stats tool configuration.
//!
//! Where the exported tree and leaderboard files live and which brackets to
//! look at, stored as JSON at `~/.config/pvp-loadouts/config.json`. A missing
//! or unreadable file means defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::catalog;
use crate::error::Result;
use crate::loadout::Region;

/// Default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pvp-loadouts")
        .join("config.json")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Root of the exported data: `talents/` and `pvp/` live below it.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_brackets")]
    pub brackets: Vec<String>,
    /// Rating slider granularity.
    #[serde(default = "default_rating_step")]
    pub rating_step: u32,
}

fn default_data_dir() -> PathBuf { PathBuf::from("wow") }
fn default_brackets() -> Vec<String> { vec!["2v2".into(), "3v3".into(), "shuffle".into()] }
fn default_rating_step() -> u32 { 25 }

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            brackets: default_brackets(),
            rating_step: default_rating_step(),
        }
    }
}

impl StatsConfig {
    /// Load from the default path, falling back to defaults on any error.
    pub fn load() -> Self {
        let path = default_path();
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::debug!("Using default config ({}: {})", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn talents_dir(&self) -> PathBuf {
        self.data_dir.join("talents")
    }

    /// `<data_dir>/talents/<class-spec>.json`
    pub fn tree_path(&self, class_name: &str, spec_name: &str) -> PathBuf {
        self.talents_dir()
            .join(format!("{}.json", catalog::slug(class_name, spec_name)))
    }

    /// `<data_dir>/pvp/<region>/<bracket>/<class-spec>.json`
    pub fn leaderboard_path(&self, region: Region, bracket: &str, class_name: &str, spec_name: &str) -> PathBuf {
        self.data_dir
            .join("pvp")
            .join(region.as_str())
            .join(bracket)
            .join(format!("{}.json", catalog::slug(class_name, spec_name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: StatsConfig = serde_json::from_str(r#"{"rating_step": 50}"#).unwrap();
        assert_eq!(config.rating_step, 50);
        assert_eq!(config.data_dir, PathBuf::from("wow"));
        assert_eq!(config.brackets, vec!["2v2", "3v3", "shuffle"]);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = StatsConfig {
            data_dir: PathBuf::from("/srv/wow"),
            brackets: vec!["3v3".into()],
            rating_step: 10,
        };
        config.save_to(&path).unwrap();
        assert_eq!(StatsConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_load_from_errors() {
        let dir = tempdir().unwrap();
        assert!(StatsConfig::load_from(&dir.path().join("missing.json")).is_err());

        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(StatsConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_paths() {
        let config = StatsConfig::default();
        assert_eq!(
            config.tree_path("Hunter", "Beast Mastery"),
            PathBuf::from("wow/talents/hunter-beast-mastery.json")
        );
        assert_eq!(
            config.leaderboard_path(Region::Eu, "3v3", "Death Knight", "Unholy"),
            PathBuf::from("wow/pvp/eu/3v3/death-knight-unholy.json")
        );
    }
}
