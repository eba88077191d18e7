//! Serde model of the leaderboard JSON files.

use serde::{Deserialize, Serialize};

use crate::loadout::Realm;

/// One region's leaderboard file.
///
/// V0: `{ "entries": ["<talents b64>|<pvp b64>|<rating>", ...] }`.
/// V1: `{ "encoding": { "version": 1, "realms": [...] }, "entries":
/// ["<payload b64>|<name>|<share code>", ...], "timestamp": <epoch ms> }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardPayload {
    #[serde(default)]
    pub encoding: EncodingInfo,
    #[serde(default)]
    pub entries: Vec<String>,
    #[serde(default)]
    pub timestamp: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EncodingInfo {
    /// Absent means version 0.
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub realms: Vec<Realm>,
}

/// The US and EU halves of one bracket's leaderboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionalPayloads {
    #[serde(default)]
    pub us: Option<LeaderboardPayload>,
    #[serde(default)]
    pub eu: Option<LeaderboardPayload>,
}
