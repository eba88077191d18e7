//! PvP talent loadout statistics
//!
//! Decodes scraped PvP leaderboard payloads against a talent tree, filters the
//! resulting loadouts and aggregates per-talent usage.

pub mod catalog;
pub mod codec;
pub mod color;
pub mod config;
pub mod error;
pub mod filter;
pub mod loader;
pub mod loadout;
pub mod ratings;
pub mod tree;
pub mod usage;

#[cfg(test)]
mod test_support;

pub use codec::{Leaderboard, SlotTables, decode_leaderboard};
pub use error::{Error, Result};
pub use filter::{LoadoutFilter, TalentFilterMode, filter_rated_loadouts, next_mode};
pub use loadout::{RatedLoadout, Region, TalentRanks};
pub use tree::TalentTree;
pub use usage::{node_usage, pvp_talent_usage};
