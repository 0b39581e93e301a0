// ABOUTME: Level tier table for XP progression
// ABOUTME: Five fixed XP bands with display titles, the top band open-ended
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glucoscore Contributors

/// One progression tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelTier {
    /// Tier number, 1-based
    pub level: u8,
    /// Display title
    pub title: &'static str,
    /// Lowest total XP in this tier (inclusive)
    pub min_xp: u64,
    /// Highest total XP in this tier (inclusive); `None` for the open top tier
    pub max_xp: Option<u64>,
}

/// Width used for the open top tier's progress bar. It never completes.
pub const OPEN_TIER_WIDTH_XP: u64 = 300;

/// Tiers in ascending order
pub const LEVEL_TIERS: [LevelTier; 5] = [
    LevelTier {
        level: 1,
        title: "Principiante",
        min_xp: 0,
        max_xp: Some(299),
    },
    LevelTier {
        level: 2,
        title: "En Progreso",
        min_xp: 300,
        max_xp: Some(599),
    },
    LevelTier {
        level: 3,
        title: "Constante",
        min_xp: 600,
        max_xp: Some(899),
    },
    LevelTier {
        level: 4,
        title: "Experto",
        min_xp: 900,
        max_xp: Some(1199),
    },
    LevelTier {
        level: 5,
        title: "Maestro del Control",
        min_xp: 1200,
        max_xp: None,
    },
];
