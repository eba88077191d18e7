use thiserror::Error;

use crate::tree::{NodeId, TalentId};

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Invalid talent tree: {0}")]
    InvalidTree(String),

    #[error("Unsupported leaderboard encoding version {0}")]
    UnsupportedVersion(u32),

    #[error("Malformed leaderboard entry: {0}")]
    MalformedEntry(String),

    #[error("Slot index {index} out of range for {table} table of {len} entries")]
    UnknownSlot {
        table: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Talent {0} is not part of the tree")]
    UnknownTalent(TalentId),

    #[error("PvP talent {0} is not part of the tree")]
    UnknownPvpTalent(TalentId),

    #[error("Rank {rank} exceeds max rank {max_rank} of node {node_id} (talent {talent_id})")]
    RankOutOfRange {
        talent_id: TalentId,
        node_id: NodeId,
        rank: u8,
        max_rank: u8,
    },

    #[error("Payload truncated at byte {position}: needed {needed} more byte(s)")]
    Truncated { position: usize, needed: usize },

    #[error("Payload has {0} trailing byte(s)")]
    TrailingBytes(usize),

    #[error("Realm index {index} out of range ({len} realms)")]
    UnknownRealm { index: usize, len: usize },

    #[error("Invalid rating: {0:?}")]
    InvalidRating(String),
}

pub type Result<T> = std::result::Result<T, Error>;
