// ABOUTME: Level progression lookup over the fixed five-tier XP table
// ABOUTME: Maps a lifetime XP total to tier, title, and progress-bar values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glucoscore Contributors

use glucoscore_core::constants::{LevelTier, LEVEL_TIERS, OPEN_TIER_WIDTH_XP};
use glucoscore_core::models::LevelInfo;

const TOP_TIER: LevelTier = LEVEL_TIERS[LEVEL_TIERS.len() - 1];

/// Tier containing `total_xp`: the first, in ascending order, whose maximum
/// is at least `total_xp`. The open top tier catches everything above.
#[must_use]
pub fn tier_for(total_xp: u64) -> LevelTier {
    LEVEL_TIERS
        .iter()
        .find(|tier| tier.max_xp.is_none_or(|max| total_xp <= max))
        .copied()
        .unwrap_or(TOP_TIER)
}

/// Level readout for a lifetime XP total.
///
/// A bounded tier's progress bar runs from its minimum to its maximum, so it
/// reads 100% at the tier's last XP value. The open top tier spans
/// `OPEN_TIER_WIDTH_XP` from its minimum and never fills past 100%.
#[must_use]
pub fn calculate_level_info(total_xp: u64) -> LevelInfo {
    let tier = tier_for(total_xp);
    let level_start = tier.min_xp;
    let level_end = tier
        .max_xp
        .unwrap_or_else(|| tier.min_xp.saturating_add(OPEN_TIER_WIDTH_XP));

    let current_level_xp = total_xp.saturating_sub(level_start);
    let next_level_threshold = level_end.saturating_sub(level_start);
    let progress_percent = if next_level_threshold == 0 {
        100.0
    } else {
        (current_level_xp as f64 * 100.0 / next_level_threshold as f64).clamp(0.0, 100.0)
    };

    LevelInfo {
        level: tier.level,
        title: tier.title.to_owned(),
        current_level_xp,
        next_level_threshold,
        progress_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(tier_for(0).level, 1);
        assert_eq!(tier_for(299).level, 1);
        assert_eq!(tier_for(300).level, 2);
        assert_eq!(tier_for(1199).level, 4);
        assert_eq!(tier_for(1200).level, 5);
        assert_eq!(tier_for(u64::MAX).level, 5);
    }

    #[test]
    fn test_progress_within_bounded_tier() {
        let info = calculate_level_info(450);
        assert_eq!(info.level, 2);
        assert_eq!(info.current_level_xp, 150);
        assert_eq!(info.next_level_threshold, 299);
        assert!((info.progress_percent - 15000.0 / 299.0).abs() < 1e-9);
    }
}
