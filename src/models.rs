use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-mode clear stats inside an activity summary. The generator only emits a
/// single "All Modes" key mirroring the activity's top-level clears/fastest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModeStats {
    pub clears: u32,
    pub fastest: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentStats {
    pub past_day_clears: u32,
    pub past_week_clears: u32,
    pub fastest_today: String,
    pub fastest_this_week: String,
}

/// Aggregate stats for one raid or dungeon, as shown on an activity card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySummary {
    pub activity_name: String,
    pub full_clears_count: u32,
    /// "M:SS", minutes unpadded.
    pub fastest_time: String,
    pub average_time: String,
    pub sherpas_count: u32,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    /// "H:MM:00".
    pub total_time: String,
    pub full_clears_rank: u32,
    pub speed_rank: u32,
    pub mode_breakdown: BTreeMap<String, ModeStats>,
    pub recent_stats: RecentStats,
    pub total_clears_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityGroups {
    pub raids: Vec<ActivitySummary>,
    pub dungeons: Vec<ActivitySummary>,
}

/// Root record of `player-data.json`. The per-category full-clear counts are
/// sums over the contained summaries; the rank and speed fields are sampled
/// independently of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    pub player_id: String,
    pub name: String,
    pub clan: String,
    pub emblem_url: String,
    pub clears_rank: u32,
    pub speed_rank: u32,
    pub raids_clears_rank: u32,
    pub raids_speed_rank: u32,
    /// "Hh Mm".
    pub raids_speed_time: String,
    pub raids_full_clears_count: u32,
    pub dungeons_clears_rank: u32,
    pub dungeons_speed_rank: u32,
    pub dungeons_speed_time: String,
    pub dungeons_full_clears_count: u32,
    pub activities: ActivityGroups,
}

/// One attempt in an activity's clear history. `time` is present exactly when
/// the attempt completed; an incomplete attempt serializes `"time": null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearEntry {
    /// 1-based index of the entry, as a string.
    pub clear_id: String,
    pub completed: bool,
    /// ISO calendar date, "YYYY-MM-DD".
    pub date: String,
    pub time: Option<String>,
}

/// Clear histories keyed by activity name. Key domains are the fixed lists in
/// [`crate::catalog`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearGroups {
    pub raids: BTreeMap<String, Vec<ClearEntry>>,
    pub dungeons: BTreeMap<String, Vec<ClearEntry>>,
}

/// Root record of `player-clears-data.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearsIndex {
    pub player_id: String,
    pub activities: ClearGroups,
}
