use std::collections::BTreeMap;

use chrono::{Duration, Utc};
use rand::Rng;

use crate::catalog;
use crate::models::{
    ActivityGroups, ActivitySummary, ClearEntry, ClearGroups, ClearsIndex, ModeStats,
    PlayerProfile, RecentStats,
};

/// Identity fields are fixed demo values; only the stats are randomized.
const PLAYER_ID: &str = "123456789";
const PLAYER_NAME: &str = "PlayerName";
const CLAN_NAME: &str = "Clan Name";
const EMBLEM_URL: &str =
    "https://www.bungie.net/common/destiny2_content/icons/3f8a0920aad0c2fbad18938497635f23.jpg";

/// How far back generated clear dates may fall, in days.
const HISTORY_WINDOW_DAYS: i64 = 120;

/// Samples a duration as "M:SS": minutes uniform in the inclusive range and
/// left unpadded, seconds uniform in [0,59] and zero-padded to two digits.
pub fn random_duration(rng: &mut impl Rng, min_minutes: u32, max_minutes: u32) -> String {
    let minutes = rng.gen_range(min_minutes..=max_minutes);
    let seconds: u32 = rng.gen_range(0..60);
    format!("{minutes}:{seconds:02}")
}

/// Samples an ISO calendar date uniformly from the last `max_days_back` days,
/// today included.
pub fn random_past_date(rng: &mut impl Rng, max_days_back: i64) -> String {
    let days_back = rng.gen_range(0..=max_days_back);
    (Utc::now().date_naive() - Duration::days(days_back))
        .format("%Y-%m-%d")
        .to_string()
}

/// Builds the aggregate card for one activity. Every field is drawn from a
/// bounded range, so construction cannot fail.
pub fn activity_summary(rng: &mut impl Rng, name: &str) -> ActivitySummary {
    let full_clears = rng.gen_range(10..=200);
    let fastest = random_duration(rng, 20, 120);
    let average = random_duration(rng, 30, 150);

    let mut mode_breakdown = BTreeMap::new();
    mode_breakdown.insert(
        "All Modes".to_string(),
        ModeStats {
            clears: full_clears,
            fastest: fastest.clone(),
        },
    );

    ActivitySummary {
        activity_name: name.to_string(),
        full_clears_count: full_clears,
        fastest_time: fastest.clone(),
        average_time: average,
        sherpas_count: rng.gen_range(0..=50),
        kills: rng.gen_range(2_000..=20_000),
        deaths: rng.gen_range(100..=800),
        assists: rng.gen_range(1_000..=15_000),
        total_time: format!("{}:{:02}:00", rng.gen_range(10..=300u32), rng.gen_range(0..60u32)),
        full_clears_rank: rng.gen_range(1..=500),
        speed_rank: rng.gen_range(1..=200),
        mode_breakdown,
        recent_stats: RecentStats {
            past_day_clears: rng.gen_range(0..=5),
            past_week_clears: rng.gen_range(0..=20),
            fastest_today: random_duration(rng, 20, 120),
            fastest_this_week: fastest.clone(),
        },
        total_clears_count: full_clears + rng.gen_range(0..=5),
    }
}

/// Builds one activity's clear history: 5 to 30 entries in generation order,
/// each completed with probability 3/4. Incomplete attempts carry no time.
pub fn clear_history(rng: &mut impl Rng) -> Vec<ClearEntry> {
    let count = rng.gen_range(5..=30);
    (1..=count)
        .map(|index| {
            let completed = rng.gen_ratio(3, 4);
            ClearEntry {
                clear_id: index.to_string(),
                completed,
                date: random_past_date(rng, HISTORY_WINDOW_DAYS),
                time: completed.then(|| random_duration(rng, 20, 150)),
            }
        })
        .collect()
}

/// Assembles the player summary document. The per-category full-clear counts
/// are exact sums over the generated summaries; the remaining rank and speed
/// fields are sampled on their own since the data is illustrative, not derived.
pub fn player_profile(rng: &mut impl Rng) -> PlayerProfile {
    let raids: Vec<ActivitySummary> = catalog::RAIDS
        .iter()
        .map(|name| activity_summary(rng, name))
        .collect();
    let dungeons: Vec<ActivitySummary> = catalog::DUNGEONS
        .iter()
        .map(|name| activity_summary(rng, name))
        .collect();

    let raids_full_clears = raids.iter().map(|a| a.full_clears_count).sum();
    let dungeons_full_clears = dungeons.iter().map(|a| a.full_clears_count).sum();

    PlayerProfile {
        player_id: PLAYER_ID.to_string(),
        name: PLAYER_NAME.to_string(),
        clan: CLAN_NAME.to_string(),
        emblem_url: EMBLEM_URL.to_string(),
        clears_rank: rng.gen_range(1..=500),
        speed_rank: rng.gen_range(1..=100),
        raids_clears_rank: rng.gen_range(1..=500),
        raids_speed_rank: rng.gen_range(1..=200),
        raids_speed_time: format!("{}h {}m", rng.gen_range(1..=3u32), rng.gen_range(0..60u32)),
        raids_full_clears_count: raids_full_clears,
        dungeons_clears_rank: rng.gen_range(1..=500),
        dungeons_speed_rank: rng.gen_range(1..=200),
        dungeons_speed_time: format!("{}h {}m", rng.gen_range(0..=1u32), rng.gen_range(0..60u32)),
        dungeons_full_clears_count: dungeons_full_clears,
        activities: ActivityGroups { raids, dungeons },
    }
}

/// Assembles the clear-history document: one history per catalog name. The
/// entry counts here are deliberately uncorrelated with the full-clear counts
/// in the profile.
pub fn clears_index(rng: &mut impl Rng) -> ClearsIndex {
    let raids = catalog::RAIDS
        .iter()
        .map(|name| (name.to_string(), clear_history(rng)))
        .collect();
    let dungeons = catalog::DUNGEONS
        .iter()
        .map(|name| (name.to_string(), clear_history(rng)))
        .collect();

    ClearsIndex {
        player_id: PLAYER_ID.to_string(),
        activities: ClearGroups { raids, dungeons },
    }
}
